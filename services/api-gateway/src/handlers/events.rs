use axum::{
    extract::{Path, State},
    Json,
};
use catalog_service::proto::sports::GetEventRequest;
use tonic::Request;

use crate::models::{GetEventResponse, ListEventsRequest, ListEventsResponse};
use crate::{AppState, GatewayError};

/// Proxy: list events via the sports service
pub async fn list_events(
    State(state): State<AppState>,
    Json(payload): Json<ListEventsRequest>,
) -> Result<Json<ListEventsResponse>, GatewayError> {
    tracing::debug!(order_by = %payload.order_by, "API Gateway: Proxying list events");

    let response = state
        .backends
        .sports()
        .list_events(Request::new(payload.into()))
        .await?
        .into_inner();

    Ok(Json(response.into()))
}

/// Proxy: get one event via the sports service
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GetEventResponse>, GatewayError> {
    tracing::debug!(id, "API Gateway: Proxying get event");

    let event = state
        .backends
        .sports()
        .get_event(Request::new(GetEventRequest { id }))
        .await?
        .into_inner()
        .event
        .ok_or_else(|| GatewayError::MalformedResponse(format!("no event in response for {}", id)))?;

    Ok(Json(GetEventResponse {
        event: event.into(),
    }))
}
