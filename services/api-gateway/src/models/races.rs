use catalog_service::proto::racing as pb;
use catalog_service::timestamp::from_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceFilter {
    #[serde(default)]
    pub meeting_ids: Vec<i64>,
    #[serde(default)]
    pub visible: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRacesRequest {
    #[serde(default)]
    pub filter: Option<RaceFilter>,
    #[serde(default)]
    pub order_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRacesResponse {
    pub races: Vec<Race>,
}

impl From<ListRacesRequest> for pb::ListRacesRequest {
    fn from(req: ListRacesRequest) -> Self {
        Self {
            filter: req.filter.map(|f| pb::ListRacesRequestFilter {
                meeting_ids: f.meeting_ids,
                visible: f.visible,
            }),
            order_by: req.order_by,
        }
    }
}

impl From<pb::Race> for Race {
    fn from(race: pb::Race) -> Self {
        Self {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time: race.advertised_start_time.as_ref().and_then(from_timestamp),
        }
    }
}

impl From<pb::ListRacesResponse> for ListRacesResponse {
    fn from(response: pb::ListRacesResponse) -> Self {
        Self {
            races: response.races.into_iter().map(Into::into).collect(),
        }
    }
}
