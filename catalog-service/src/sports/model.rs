//! Event entity, its filter and its wire conversions

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::status::EventStatus;
use crate::proto::sports as pb;
use crate::repository::{
    parse_instant, CatalogEntity, ColumnMap, Comparison, FromCatalogRow, ListFilter, ListQuery,
    RepositoryResult, SqlParam,
};
use crate::timestamp::to_timestamp;

/// Sortable event fields, by proto and JSON spelling
pub const EVENT_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("id", "id"),
    ("name", "name"),
    ("venue_id", "venue_id"),
    ("venueId", "venue_id"),
    ("sport_id", "sport_id"),
    ("sportId", "sport_id"),
    ("participants_id", "participants_id"),
    ("participantsId", "participants_id"),
    ("advertised_start_time", "advertised_start_time"),
    ("advertisedStartTime", "advertised_start_time"),
    ("advertised_end_time", "advertised_end_time"),
    ("advertisedEndTime", "advertised_end_time"),
]);

/// A single sports event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub venue_id: i64,
    pub sport_id: i64,
    pub participants_id: i64,
    pub advertised_start_time: DateTime<Utc>,
    pub advertised_end_time: DateTime<Utc>,
    /// Computed when the row was read, never stored
    pub status: EventStatus,
}

impl FromCatalogRow for Event {
    fn from_row(row: &SqliteRow) -> RepositoryResult<Self> {
        let start: String = row.try_get("advertised_start_time")?;
        let end: String = row.try_get("advertised_end_time")?;
        let advertised_start_time = parse_instant("advertised_start_time", &start)?;
        let advertised_end_time = parse_instant("advertised_end_time", &end)?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            venue_id: row.try_get("venue_id")?,
            sport_id: row.try_get("sport_id")?,
            participants_id: row.try_get("participants_id")?,
            advertised_start_time,
            advertised_end_time,
            status: EventStatus::at(advertised_start_time, advertised_end_time, Utc::now()),
        })
    }
}

impl CatalogEntity for Event {
    const KIND: &'static str = "Event";
    const LIST_QUERY: &'static str = "SELECT id, name, venue_id, sport_id, participants_id, \
        advertised_start_time, advertised_end_time FROM events";
    const COLUMNS: ColumnMap = EVENT_COLUMNS;
    const DERIVED_FIELDS: &'static [&'static str] = &["status"];
}

impl From<Event> for pb::Event {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            venue_id: event.venue_id,
            sport_id: event.sport_id,
            participants_id: event.participants_id,
            advertised_start_time: Some(to_timestamp(event.advertised_start_time)),
            advertised_end_time: Some(to_timestamp(event.advertised_end_time)),
            status: event.status.to_string(),
        }
    }
}

/// Optional predicates for listing events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub sport_id: Option<i64>,
    /// Status keyword; unrecognized keywords add no constraint
    pub status: Option<String>,
}

impl ListFilter for EventFilter {
    fn apply(&self, mut query: ListQuery, now: DateTime<Utc>) -> ListQuery {
        if let Some(sport_id) = self.sport_id {
            query = query.compare("sport_id", Comparison::Equal, SqlParam::Integer(sport_id));
        }

        let Some(keyword) = self.status.as_deref() else {
            return query;
        };

        match EventStatus::parse(keyword) {
            Some(EventStatus::Closed) => {
                query.compare_instant("advertised_end_time", Comparison::LessThan, now)
            }
            Some(EventStatus::Open) => {
                query.compare_instant("advertised_start_time", Comparison::GreaterThan, now)
            }
            Some(EventStatus::Ongoing) => query
                .compare_instant("advertised_start_time", Comparison::LessThan, now)
                .compare_instant("advertised_end_time", Comparison::GreaterThan, now),
            None => {
                tracing::debug!(status = keyword, "Ignoring unknown status filter");
                query
            }
        }
    }
}

impl From<pb::ListEventsRequestFilter> for EventFilter {
    fn from(filter: pb::ListEventsRequestFilter) -> Self {
        Self {
            sport_id: filter.sport_id,
            status: Some(filter.status).filter(|s| !s.trim().is_empty()),
        }
    }
}
