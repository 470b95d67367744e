use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::{handlers, AppState};

/// Create the HTTP router with all routes and middleware
pub fn create_http_router(state: AppState) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(state.config.timeout()))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::readiness))
        .route("/v1/list-races", post(handlers::list_races))
        .route("/v1/list-events", post(handlers::list_events))
        .route("/v1/events/{id}", get(handlers::get_event))
        .with_state(state)
        .layer(middleware_stack)
}
