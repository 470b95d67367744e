use axum::{extract::State, Json};
use tonic::Request;

use crate::models::{ListRacesRequest, ListRacesResponse};
use crate::{AppState, GatewayError};

/// Proxy: list races via the racing service
pub async fn list_races(
    State(state): State<AppState>,
    Json(payload): Json<ListRacesRequest>,
) -> Result<Json<ListRacesResponse>, GatewayError> {
    tracing::debug!(order_by = %payload.order_by, "API Gateway: Proxying list races");

    let response = state
        .backends
        .racing()
        .list_races(Request::new(payload.into()))
        .await?
        .into_inner();

    Ok(Json(response.into()))
}
