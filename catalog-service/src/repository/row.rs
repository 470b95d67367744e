//! Row mapping and query execution
//!
//! [`FromCatalogRow`] turns one `SqliteRow` into one entity. A row that cannot
//! be scanned aborts the whole operation; rows are never skipped.

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteArguments, SqlitePool, SqliteRow};
use sqlx::query::Query;
use sqlx::Sqlite;

use super::error::{RepositoryError, RepositoryOperation, RepositoryResult};
use super::query::SqlParam;

/// Scan a single result row into an entity
pub trait FromCatalogRow: Sized {
    /// Map the row, failing if any column is missing or malformed
    fn from_row(row: &SqliteRow) -> RepositoryResult<Self>;
}

/// Parse a stored RFC 3339 timestamp
pub fn parse_instant(column: &str, raw: &str) -> RepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|e| {
            RepositoryError::serialization_error(
                RepositoryOperation::List,
                format!("invalid timestamp in column {}: {:?} ({})", column, raw, e),
            )
        })
}

fn bind_all<'q>(
    mut query: Query<'q, Sqlite, SqliteArguments<'q>>,
    params: &'q [SqlParam],
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    for param in params {
        query = match param {
            SqlParam::Integer(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_str()),
        };
    }
    query
}

/// Run a listing query and map every row
pub async fn fetch_all<T: FromCatalogRow>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlParam],
) -> RepositoryResult<Vec<T>> {
    let rows = bind_all(sqlx::query(sql), params).fetch_all(pool).await?;

    rows.iter().map(T::from_row).collect()
}

/// Run a query expected to match at most one row
pub async fn fetch_optional<T: FromCatalogRow>(
    pool: &SqlitePool,
    sql: &str,
    params: &[SqlParam],
) -> RepositoryResult<Option<T>> {
    let row = bind_all(sqlx::query(sql), params)
        .fetch_optional(pool)
        .await?;

    row.as_ref().map(T::from_row).transpose()
}
