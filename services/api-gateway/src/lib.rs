pub mod error;
pub mod grpc_client;
pub mod handlers;
pub mod models;
pub mod router;

use catalog_service::config::GatewayConfig;

pub use error::{ErrorResponse, GatewayError};
pub use grpc_client::Backends;
pub use router::create_http_router;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: GatewayConfig,
    pub backends: Backends,
}

impl AppState {
    /// Build state with lazily connected backend channels
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let backends = Backends::connect_lazy(&config)?;
        Ok(Self { config, backends })
    }
}
