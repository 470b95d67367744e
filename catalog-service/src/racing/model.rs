//! Race entity, its filter and its wire conversions

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::proto::racing as pb;
use crate::repository::{
    parse_instant, CatalogEntity, ColumnMap, FromCatalogRow, ListFilter, ListQuery,
    RepositoryResult,
};
use crate::timestamp::to_timestamp;

/// Sortable race fields, by proto and JSON spelling
pub const RACE_COLUMNS: ColumnMap = ColumnMap::new(&[
    ("id", "id"),
    ("meeting_id", "meeting_id"),
    ("meetingId", "meeting_id"),
    ("name", "name"),
    ("number", "number"),
    ("visible", "visible"),
    ("advertised_start_time", "advertised_start_time"),
    ("advertisedStartTime", "advertised_start_time"),
]);

/// A single race
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
}

impl FromCatalogRow for Race {
    fn from_row(row: &SqliteRow) -> RepositoryResult<Self> {
        let start: String = row.try_get("advertised_start_time")?;
        let visible: i64 = row.try_get("visible")?;

        Ok(Self {
            id: row.try_get("id")?,
            meeting_id: row.try_get("meeting_id")?,
            name: row.try_get("name")?,
            number: row.try_get("number")?,
            visible: visible != 0,
            advertised_start_time: parse_instant("advertised_start_time", &start)?,
        })
    }
}

impl CatalogEntity for Race {
    const KIND: &'static str = "Race";
    const LIST_QUERY: &'static str =
        "SELECT id, meeting_id, name, number, visible, advertised_start_time FROM races";
    const COLUMNS: ColumnMap = RACE_COLUMNS;
}

impl From<Race> for pb::Race {
    fn from(race: Race) -> Self {
        Self {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time: Some(to_timestamp(race.advertised_start_time)),
        }
    }
}

/// Optional predicates for listing races
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceFilter {
    /// Races in any of these meetings; empty means any meeting
    pub meeting_ids: Vec<i64>,
    pub visible: Option<bool>,
}

impl ListFilter for RaceFilter {
    fn apply(&self, query: ListQuery, _now: DateTime<Utc>) -> ListQuery {
        query
            .member_of("meeting_id", &self.meeting_ids)
            .flag("visible", self.visible)
    }
}

impl From<pb::ListRacesRequestFilter> for RaceFilter {
    fn from(filter: pb::ListRacesRequestFilter) -> Self {
        Self {
            meeting_ids: filter.meeting_ids,
            visible: filter.visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{build_list_query, SqlParam};
    use chrono::TimeZone;

    #[test]
    fn test_empty_filter_leaves_base_query() {
        let (sql, params) =
            build_list_query::<Race>(&RaceFilter::default(), "", Utc::now()).unwrap();
        assert_eq!(sql, Race::LIST_QUERY);
        assert!(params.is_empty());
    }

    #[test]
    fn test_meetings_and_visibility() {
        let filter = RaceFilter {
            meeting_ids: vec![5, 2],
            visible: Some(false),
        };
        let (sql, params) = build_list_query::<Race>(&filter, "meetingId desc", Utc::now()).unwrap();

        assert!(sql.ends_with(
            "FROM races WHERE meeting_id IN (?,?) AND NOT visible ORDER BY meeting_id DESC"
        ));
        assert_eq!(params, vec![SqlParam::Integer(5), SqlParam::Integer(2)]);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        let err = build_list_query::<Race>(&RaceFilter::default(), "colour asc", Utc::now())
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.message.contains("colour"));
    }

    #[test]
    fn test_proto_filter_conversion() {
        let filter = RaceFilter::from(pb::ListRacesRequestFilter {
            meeting_ids: vec![1],
            visible: Some(true),
        });
        assert_eq!(filter.meeting_ids, vec![1]);
        assert_eq!(filter.visible, Some(true));
    }

    #[test]
    fn test_race_to_proto() {
        let start = Utc.with_ymd_and_hms(2026, 10, 17, 9, 30, 0).unwrap();
        let race = Race {
            id: 7,
            meeting_id: 3,
            name: "Geelong Hawks".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: start,
        };

        let wire = pb::Race::from(race);
        assert_eq!(wire.id, 7);
        assert_eq!(wire.advertised_start_time.unwrap().seconds, start.timestamp());
    }
}
