//! gRPC server setup shared by the catalog binaries

use std::net::SocketAddr;

use tonic::transport::Server;

use crate::config::GrpcConfig;
use crate::error::{Error, Result};

/// gRPC server builder
///
/// Applies the configured request timeout and resolves the listen endpoint.
/// Services and layers are added by the caller.
#[derive(Debug, Clone)]
pub struct GrpcServer {
    config: GrpcConfig,
}

impl GrpcServer {
    /// Create a new gRPC server with the given configuration
    pub fn new(config: GrpcConfig) -> Self {
        Self { config }
    }

    /// Build the tonic server
    pub fn build(&self) -> Server {
        Server::builder()
            .timeout(self.config.timeout())
            .tcp_keepalive(Some(std::time::Duration::from_secs(60)))
    }

    /// Resolve the configured `host:port` to the first matching address
    pub async fn socket_addr(&self) -> Result<SocketAddr> {
        resolve(&self.config.endpoint).await
    }
}

/// Resolve `host:port`, accepting names such as `localhost`
pub async fn resolve(endpoint: &str) -> Result<SocketAddr> {
    tokio::net::lookup_host(endpoint)
        .await?
        .next()
        .ok_or_else(|| Error::Internal(format!("endpoint {} resolved to no address", endpoint)))
}

/// Wait for shutdown signal (SIGTERM, SIGINT, or Ctrl+C)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_localhost() {
        let addr = resolve("localhost:9000").await.unwrap();
        assert_eq!(addr.port(), 9000);
        assert!(addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_resolve_literal() {
        let server = GrpcServer::new(GrpcConfig {
            endpoint: "127.0.0.1:7000".to_string(),
            timeout_secs: 5,
        });
        let addr = server.socket_addr().await.unwrap();
        assert_eq!(addr, SocketAddr::from(([127, 0, 0, 1], 7000)));
    }

    #[tokio::test]
    async fn test_resolve_rejects_missing_port() {
        assert!(resolve("localhost").await.is_err());
    }
}
