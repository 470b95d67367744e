use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use api_gateway::{create_http_router, AppState};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use catalog_service::config::{DatabaseConfig, GatewayConfig};
use catalog_service::database::create_pool;
use catalog_service::proto::racing::racing_server::RacingServer;
use catalog_service::proto::sports::sports_server::SportsServer;
use catalog_service::racing::{RacesRepo, RacesRepository, RacingService};
use catalog_service::sports::{SportsRepo, SportsRepository, SportsService};
use serde_json::{json, Value};
use tower::ServiceExt;

fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout_secs: 5,
        max_retries: 0,
        retry_delay_secs: 0,
    }
}

fn free_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

/// Start both catalog services on local ports and return a gateway router
async fn start_backends() -> Router {
    let racing_addr = free_addr();
    let sports_addr = free_addr();

    let races = Arc::new(RacesRepo::new(create_pool(&memory_database()).await.unwrap()));
    races.init().await.unwrap();
    let events = Arc::new(SportsRepo::new(create_pool(&memory_database()).await.unwrap()));
    events.init().await.unwrap();

    let (_racing_health, racing_health_service) = tonic_health::server::health_reporter();
    tokio::spawn(
        tonic::transport::Server::builder()
            .add_service(racing_health_service)
            .add_service(RacingServer::new(RacingService::new(races)))
            .serve(racing_addr),
    );

    let (_sports_health, sports_health_service) = tonic_health::server::health_reporter();
    tokio::spawn(
        tonic::transport::Server::builder()
            .add_service(sports_health_service)
            .add_service(SportsServer::new(SportsService::new(events)))
            .serve(sports_addr),
    );

    let config = GatewayConfig {
        racing_endpoint: racing_addr.to_string(),
        sports_endpoint: sports_addr.to_string(),
        timeout_secs: 5,
        ..GatewayConfig::default()
    };
    let app = create_http_router(AppState::new(config).unwrap());

    for _ in 0..100 {
        let (status, _) = send(&app, get("/ready")).await;
        if status == StatusCode::OK {
            return app;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("catalog services did not become ready");
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn list_races_through_the_gateway() {
    let app = start_backends().await;

    let (status, body) = send(
        &app,
        post(
            "/v1/list-races",
            json!({"filter": {"visible": true}, "orderBy": "name desc"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let races = body["races"].as_array().unwrap();
    assert!(!races.is_empty());
    assert!(races.iter().all(|r| r["visible"] == true));
    assert!(races.iter().all(|r| r["advertisedStartTime"].is_string()));

    let names: Vec<&str> = races.iter().map(|r| r["name"].as_str().unwrap()).collect();
    assert!(names.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn invalid_sort_is_bad_request() {
    let app = start_backends().await;

    let (status, body) = send(
        &app,
        post("/v1/list-races", json!({"orderBy": "name sideways"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("sideways"));
}

#[tokio::test]
async fn list_events_and_get_event() {
    let app = start_backends().await;

    let (status, body) = send(
        &app,
        post("/v1/list-events", json!({"filter": {"status": "OPEN"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["events"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["status"] == "OPEN"));

    let (status, body) = send(&app, get("/v1/events/7")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["event"]["id"], 7);
    assert!(body["event"]["advertisedEndTime"].is_string());

    let (status, body) = send(&app, get("/v1/events/7000")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let config = GatewayConfig {
        racing_endpoint: "127.0.0.1:1".to_string(),
        sports_endpoint: "127.0.0.1:1".to_string(),
        timeout_secs: 2,
        ..GatewayConfig::default()
    };
    let app = create_http_router(AppState::new(config).unwrap());

    let (status, body) = send(&app, post("/v1/list-races", json!({}))).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["code"], "UNAVAILABLE");

    let (status, _) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
}
