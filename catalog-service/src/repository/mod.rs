//! Generic list-query engine shared by the racing and sports catalogs
//!
//! Both catalogs are built from the same parts:
//!
//! - **Query building**: [`ListQuery`] composes a base `SELECT` with optional
//!   `WHERE` clauses and an `ORDER BY` term parsed from a sort directive
//! - **Column resolution**: [`ColumnMap`] maps external field names to columns
//! - **Row mapping**: [`FromCatalogRow`] scans rows into domain entities
//! - **Entity kinds**: [`CatalogEntity`] and [`ListFilter`] describe one
//!   catalog to the generic [`list_entities`] path
//! - **Initialization**: [`InitGuard`] seeds the store exactly once
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_service::repository::{list_entities, CatalogEntity, ListFilter};
//!
//! impl CatalogEntity for Race {
//!     const KIND: &'static str = "Race";
//!     const LIST_QUERY: &'static str = "SELECT id, name FROM races";
//!     const COLUMNS: ColumnMap = ColumnMap::new(&[("name", "name")]);
//! }
//!
//! impl ListFilter for RaceFilter {
//!     fn apply(&self, query: ListQuery, _now: DateTime<Utc>) -> ListQuery {
//!         query.member_of("meeting_id", &self.meeting_ids)
//!     }
//! }
//!
//! let races: Vec<Race> = list_entities(&pool, &filter, "name desc").await?;
//! ```

mod columns;
mod entity;
mod error;
mod init;
mod query;
mod row;

pub use columns::ColumnMap;
pub use entity::{build_list_query, list_entities, CatalogEntity, ListFilter};
pub use error::{RepositoryError, RepositoryErrorKind, RepositoryOperation, RepositoryResult};
pub use init::InitGuard;
pub use query::{format_instant, Comparison, ListQuery, OrderDirection, SortDirective, SqlParam};
pub use row::{fetch_all, fetch_optional, parse_instant, FromCatalogRow};
