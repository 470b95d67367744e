//! Gateway errors and their HTTP rendering

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tonic::Code;

/// Errors surfaced by gateway handlers
#[derive(Debug, Error)]
pub enum GatewayError {
    /// A backend call returned a gRPC status
    #[error("Upstream error: {}", .0.message())]
    Upstream(#[from] tonic::Status),

    /// A backend endpoint could not be parsed
    #[error("Invalid backend endpoint: {0}")]
    InvalidEndpoint(String),

    /// A backend is reachable but not serving
    #[error("Not ready: {0}")]
    NotReady(String),

    /// The backend answered without a required field
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Optional error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// HTTP status code
    pub status: u16,
}

impl ErrorResponse {
    /// Create error response with a code
    pub fn with_code(
        status: StatusCode,
        code: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        Self {
            error: error.into(),
            code: Some(code.into()),
            status: status.as_u16(),
        }
    }
}

/// HTTP status for a gRPC code
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::FailedPrecondition => StatusCode::SERVICE_UNAVAILABLE,
        Code::Unavailable => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Canonical upper-case name of a gRPC code
pub fn code_name(code: Code) -> &'static str {
    match code {
        Code::Ok => "OK",
        Code::Cancelled => "CANCELLED",
        Code::Unknown => "UNKNOWN",
        Code::InvalidArgument => "INVALID_ARGUMENT",
        Code::DeadlineExceeded => "DEADLINE_EXCEEDED",
        Code::NotFound => "NOT_FOUND",
        Code::AlreadyExists => "ALREADY_EXISTS",
        Code::PermissionDenied => "PERMISSION_DENIED",
        Code::ResourceExhausted => "RESOURCE_EXHAUSTED",
        Code::FailedPrecondition => "FAILED_PRECONDITION",
        Code::Aborted => "ABORTED",
        Code::OutOfRange => "OUT_OF_RANGE",
        Code::Unimplemented => "UNIMPLEMENTED",
        Code::Internal => "INTERNAL",
        Code::Unavailable => "UNAVAILABLE",
        Code::DataLoss => "DATA_LOSS",
        Code::Unauthenticated => "UNAUTHENTICATED",
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            GatewayError::Upstream(upstream) => {
                let status = http_status(upstream.code());
                if status.is_server_error() {
                    tracing::error!(code = ?upstream.code(), "Upstream error: {}", upstream.message());
                } else {
                    tracing::debug!(code = ?upstream.code(), "Upstream rejected request: {}", upstream.message());
                }
                (
                    status,
                    ErrorResponse::with_code(status, code_name(upstream.code()), upstream.message()),
                )
            }
            GatewayError::InvalidEndpoint(message) => {
                tracing::error!("Invalid backend endpoint: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_code(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        self.to_string(),
                    ),
                )
            }
            GatewayError::NotReady(message) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorResponse::with_code(StatusCode::SERVICE_UNAVAILABLE, "NOT_READY", message),
            ),
            GatewayError::MalformedResponse(message) => {
                tracing::error!("Malformed upstream response: {}", message);
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorResponse::with_code(StatusCode::BAD_GATEWAY, "BAD_UPSTREAM", message),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
