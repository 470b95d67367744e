//! Dynamic list-query construction
//!
//! [`ListQuery`] starts from a base `SELECT` and accumulates `WHERE` clauses
//! with their bound parameters plus an optional `ORDER BY` term. Nothing here
//! touches the store; [`ListQuery::build`] returns the SQL text and the
//! parameters in binding order.
//!
//! # Example
//!
//! ```rust
//! use catalog_service::repository::{ColumnMap, ListQuery, SqlParam};
//!
//! const COLUMNS: ColumnMap = ColumnMap::new(&[("name", "name")]);
//!
//! let (sql, params) = ListQuery::new("SELECT id, name FROM races")
//!     .member_of("meeting_id", &[1, 2])
//!     .flag("visible", Some(true))
//!     .order_by("name desc", &COLUMNS, &[])
//!     .unwrap()
//!     .build();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT id, name FROM races WHERE meeting_id IN (?,?) AND visible ORDER BY name DESC"
//! );
//! assert_eq!(params, vec![SqlParam::Integer(1), SqlParam::Integer(2)]);
//! ```

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use super::columns::ColumnMap;
use super::error::{RepositoryError, RepositoryResult};

/// A value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlParam {
    /// 64-bit integer value
    Integer(i64),
    /// Text value
    Text(String),
}

/// Comparison operators used by filter clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Equal to (=)
    Equal,
    /// Strictly less than (<)
    LessThan,
    /// Strictly greater than (>)
    GreaterThan,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "="),
            Self::LessThan => write!(f, "<"),
            Self::GreaterThan => write!(f, ">"),
        }
    }
}

/// Direction for ordering results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderDirection {
    /// Sort in ascending order
    Ascending,
    /// Sort in descending order
    Descending,
}

impl OrderDirection {
    /// Parse an `asc`/`desc` token, ignoring case
    pub fn parse(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ASC"),
            Self::Descending => write!(f, "DESC"),
        }
    }
}

/// A parsed sort directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortDirective<'a> {
    /// External field name, not yet resolved to a column
    pub field: &'a str,
    /// Explicit direction; `None` leaves the store default (ascending)
    pub direction: Option<OrderDirection>,
}

impl<'a> SortDirective<'a> {
    /// Parse `"<field>"` or `"<field> <asc|desc>"`
    ///
    /// Returns `Ok(None)` for an empty or all-whitespace directive.
    pub fn parse(directive: &'a str) -> RepositoryResult<Option<Self>> {
        let tokens: Vec<&str> = directive.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Ok(None),
            [field] => Ok(Some(Self {
                field: *field,
                direction: None,
            })),
            [field, order] => {
                let direction = OrderDirection::parse(order).ok_or_else(|| {
                    RepositoryError::validation_failed(format!(
                        "invalid sort order: {}. Choose either `asc` or `desc`",
                        order
                    ))
                })?;
                Ok(Some(Self {
                    field: *field,
                    direction: Some(direction),
                }))
            }
            _ => Err(RepositoryError::validation_failed(format!(
                "invalid orderBy value: {}. Format is `fieldName desc`",
                directive.trim()
            ))),
        }
    }
}

/// Builder for a filtered, ordered listing query
#[derive(Debug, Clone)]
pub struct ListQuery {
    base: String,
    clauses: Vec<String>,
    params: Vec<SqlParam>,
    order: Option<String>,
}

impl ListQuery {
    /// Start from a base `SELECT` with no clauses
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            clauses: Vec::new(),
            params: Vec::new(),
            order: None,
        }
    }

    /// `column IN (?,..)` over the given ids, skipped when `ids` is empty
    #[must_use]
    pub fn member_of(mut self, column: &str, ids: &[i64]) -> Self {
        if ids.is_empty() {
            return self;
        }

        let placeholders = vec!["?"; ids.len()].join(",");
        self.clauses.push(format!("{} IN ({})", column, placeholders));
        self.params
            .extend(ids.iter().copied().map(SqlParam::Integer));
        self
    }

    /// `column` or `NOT column` for a tri-state flag, skipped when `None`
    ///
    /// SQLite stores booleans as integers, so the polarity is written into the
    /// clause instead of binding a value.
    #[must_use]
    pub fn flag(mut self, column: &str, value: Option<bool>) -> Self {
        match value {
            Some(true) => self.clauses.push(column.to_string()),
            Some(false) => self.clauses.push(format!("NOT {}", column)),
            None => {}
        }
        self
    }

    /// `column <op> ?` with one bound parameter
    #[must_use]
    pub fn compare(mut self, column: &str, op: Comparison, value: SqlParam) -> Self {
        self.clauses.push(format!("{} {} ?", column, op));
        self.params.push(value);
        self
    }

    /// Compare a timestamp column against an instant
    #[must_use]
    pub fn compare_instant(self, column: &str, op: Comparison, at: DateTime<Utc>) -> Self {
        self.compare(column, op, SqlParam::Text(format_instant(at)))
    }

    /// Apply a sort directive, resolving the field through `columns`
    ///
    /// Fields listed in `derived` are known but have no column; sorting by
    /// them is dropped without error.
    pub fn order_by(
        mut self,
        directive: &str,
        columns: &ColumnMap,
        derived: &[&str],
    ) -> RepositoryResult<Self> {
        let Some(sort) = SortDirective::parse(directive)? else {
            return Ok(self);
        };

        if derived.contains(&sort.field) {
            tracing::debug!(field = sort.field, "Ignoring sort on derived field");
            return Ok(self);
        }

        let column = columns.resolve(sort.field).ok_or_else(|| {
            RepositoryError::validation_failed(format!(
                "unable to find the field name: {} (expected one of: {})",
                sort.field,
                columns.fields().collect::<Vec<_>>().join(", ")
            ))
        })?;

        self.order = Some(match sort.direction {
            Some(direction) => format!("{} {}", column, direction),
            None => column.to_string(),
        });
        Ok(self)
    }

    /// Render the SQL text and parameters in binding order
    pub fn build(self) -> (String, Vec<SqlParam>) {
        let mut sql = self.base.trim_end().to_string();

        if !self.clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.clauses.join(" AND "));
        }

        if let Some(order) = self.order {
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }

        (sql, self.params)
    }
}

/// Format an instant the way timestamps are stored
///
/// Second precision with a `Z` suffix keeps the text lexicographically
/// ordered, so SQL string comparison matches instant comparison.
pub fn format_instant(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}
