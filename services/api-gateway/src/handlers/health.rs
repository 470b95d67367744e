use axum::extract::State;

use crate::{AppState, GatewayError};

/// Health check endpoint
///
/// Returns "ok" if the gateway process is running.
pub async fn health() -> &'static str {
    "ok"
}

/// Readiness check endpoint
///
/// Returns "ready" once both catalog services report SERVING.
pub async fn readiness(State(state): State<AppState>) -> Result<&'static str, GatewayError> {
    state.backends.check().await?;
    Ok("ready")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use catalog_service::config::GatewayConfig;

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn test_readiness_fails_without_backends() {
        let config = GatewayConfig {
            racing_endpoint: "127.0.0.1:1".to_string(),
            sports_endpoint: "127.0.0.1:1".to_string(),
            timeout_secs: 2,
            ..GatewayConfig::default()
        };
        let state = AppState::new(config).unwrap();

        let response = readiness(State(state)).await.unwrap_err().into_response();
        assert!(response.status().is_server_error());
        assert_ne!(response.status(), StatusCode::OK);
    }
}
