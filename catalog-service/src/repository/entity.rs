//! Entity-kind descriptions driving the generic list path

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqlitePool;

use super::columns::ColumnMap;
use super::error::{RepositoryOperation, RepositoryResult};
use super::query::{ListQuery, SqlParam};
use super::row::{fetch_all, FromCatalogRow};

/// Static description of one catalog entity kind
pub trait CatalogEntity: FromCatalogRow + Send {
    /// Entity name used in errors and logs
    const KIND: &'static str;

    /// Base `SELECT` listing every row, with no `WHERE` or `ORDER BY`
    const LIST_QUERY: &'static str;

    /// Sortable fields
    const COLUMNS: ColumnMap;

    /// Fields clients may name in a sort directive that have no column
    const DERIVED_FIELDS: &'static [&'static str] = &[];
}

/// A request filter that contributes `WHERE` clauses
pub trait ListFilter {
    /// Add this filter's clauses; `now` is the instant the query is built at
    fn apply(&self, query: ListQuery, now: DateTime<Utc>) -> ListQuery;
}

/// Build the SQL and parameters for listing `E`
pub fn build_list_query<E: CatalogEntity>(
    filter: &impl ListFilter,
    order_by: &str,
    now: DateTime<Utc>,
) -> RepositoryResult<(String, Vec<SqlParam>)> {
    let query = filter.apply(ListQuery::new(E::LIST_QUERY), now);
    let query = query.order_by(order_by, &E::COLUMNS, E::DERIVED_FIELDS)?;
    Ok(query.build())
}

/// Build, run and map a listing query for `E`
pub async fn list_entities<E: CatalogEntity>(
    pool: &SqlitePool,
    filter: &impl ListFilter,
    order_by: &str,
) -> RepositoryResult<Vec<E>> {
    let (sql, params) = build_list_query::<E>(filter, order_by, Utc::now())
        .map_err(|e| e.with_operation(RepositoryOperation::List))?;

    tracing::debug!(kind = E::KIND, %sql, params = params.len(), "Listing entities");

    fetch_all(pool, &sql, &params)
        .await
        .map_err(|e| e.with_operation(RepositoryOperation::List))
}
