mod common;

use std::sync::Arc;

use catalog_service::proto::racing::racing_server::Racing;
use catalog_service::proto::racing::{ListRacesRequest, ListRacesRequestFilter};
use catalog_service::proto::sports::sports_server::Sports;
use catalog_service::proto::sports::{GetEventRequest, ListEventsRequest, ListEventsRequestFilter};
use catalog_service::racing::{RacesRepo, RacesRepository, RacingService};
use catalog_service::sports::{SportsRepo, SportsRepository, SportsService};
use tonic::{Code, Request};

use common::memory_pool;

async fn racing() -> RacingService<RacesRepo> {
    let repo = Arc::new(RacesRepo::new(memory_pool().await));
    repo.init().await.unwrap();
    RacingService::new(repo)
}

async fn sports() -> SportsService<SportsRepo> {
    let repo = Arc::new(SportsRepo::new(memory_pool().await));
    repo.init().await.unwrap();
    SportsService::new(repo)
}

#[tokio::test]
async fn list_races_without_filter() {
    let service = racing().await;

    let response = service
        .list_races(Request::new(ListRacesRequest::default()))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.races.len(), 100);
    assert!(response
        .races
        .iter()
        .all(|r| r.advertised_start_time.is_some()));
}

#[tokio::test]
async fn list_races_visible_only_sorted() {
    let service = racing().await;

    let response = service
        .list_races(Request::new(ListRacesRequest {
            filter: Some(ListRacesRequestFilter {
                meeting_ids: vec![],
                visible: Some(true),
            }),
            order_by: "meeting_id desc".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(response.races.iter().all(|r| r.visible));
    assert!(response
        .races
        .windows(2)
        .all(|w| w[0].meeting_id >= w[1].meeting_id));
}

#[tokio::test]
async fn bad_sort_is_invalid_argument() {
    let service = racing().await;

    let status = service
        .list_races(Request::new(ListRacesRequest {
            filter: None,
            order_by: "name sideways".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn uninitialized_repository_is_failed_precondition() {
    let service = RacingService::new(Arc::new(RacesRepo::new(memory_pool().await)));

    let status = service
        .list_races(Request::new(ListRacesRequest::default()))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::FailedPrecondition);
}

#[tokio::test]
async fn list_events_carries_status() {
    let service = sports().await;

    let response = service
        .list_events(Request::new(ListEventsRequest {
            filter: Some(ListEventsRequestFilter {
                sport_id: None,
                status: "open".to_string(),
            }),
            order_by: "advertisedStartTime".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert!(response.events.iter().all(|e| e.status == "OPEN"));
}

#[tokio::test]
async fn get_event_found_and_missing() {
    let service = sports().await;

    let event = service
        .get_event(Request::new(GetEventRequest { id: 42 }))
        .await
        .unwrap()
        .into_inner()
        .event
        .unwrap();
    assert_eq!(event.id, 42);
    assert!(["OPEN", "ONGOING", "CLOSED"].contains(&event.status.as_str()));

    let status = service
        .get_event(Request::new(GetEventRequest { id: 4242 }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}
