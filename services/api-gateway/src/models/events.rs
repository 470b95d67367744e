use catalog_service::proto::sports as pb;
use catalog_service::timestamp::from_timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilter {
    #[serde(default)]
    pub sport_id: Option<i64>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsRequest {
    #[serde(default)]
    pub filter: Option<EventFilter>,
    #[serde(default)]
    pub order_by: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub venue_id: i64,
    pub sport_id: i64,
    pub participants_id: i64,
    pub advertised_start_time: Option<DateTime<Utc>>,
    pub advertised_end_time: Option<DateTime<Utc>>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetEventResponse {
    pub event: Event,
}

impl From<ListEventsRequest> for pb::ListEventsRequest {
    fn from(req: ListEventsRequest) -> Self {
        Self {
            filter: req.filter.map(|f| pb::ListEventsRequestFilter {
                sport_id: f.sport_id,
                status: f.status,
            }),
            order_by: req.order_by,
        }
    }
}

impl From<pb::Event> for Event {
    fn from(event: pb::Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            venue_id: event.venue_id,
            sport_id: event.sport_id,
            participants_id: event.participants_id,
            advertised_start_time: event.advertised_start_time.as_ref().and_then(from_timestamp),
            advertised_end_time: event.advertised_end_time.as_ref().and_then(from_timestamp),
            status: event.status,
        }
    }
}

impl From<pb::ListEventsResponse> for ListEventsResponse {
    fn from(response: pb::ListEventsResponse) -> Self {
        Self {
            events: response.events.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_from_camel_case_json() {
        let req: ListEventsRequest = serde_json::from_value(json!({
            "filter": {"sportId": 4, "status": "ONGOING"},
            "orderBy": "name"
        }))
        .unwrap();

        let wire = pb::ListEventsRequest::from(req);
        let filter = wire.filter.unwrap();
        assert_eq!(filter.sport_id, Some(4));
        assert_eq!(filter.status, "ONGOING");
    }

    #[test]
    fn test_event_json_field_names() {
        let event = Event::from(pb::Event {
            id: 9,
            name: "Sandown Sharks".to_string(),
            venue_id: 1,
            sport_id: 2,
            participants_id: 3,
            advertised_start_time: None,
            advertised_end_time: None,
            status: "OPEN".to_string(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["participantsId"], 3);
        assert_eq!(json["status"], "OPEN");
        assert!(json["advertisedEndTime"].is_null());
    }
}
