use std::path::PathBuf;

use api_gateway::{create_http_router, AppState};
use catalog_service::config::Config;
use catalog_service::grpc::{resolve, shutdown_signal};
use catalog_service::observability::init_tracing;
use clap::Parser;

const SERVICE_NAME: &str = "api-gateway";

#[derive(Debug, Parser)]
#[command(name = "api-gateway", version, about = "HTTP/JSON gateway for the catalog services")]
struct Args {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// HTTP listen address, e.g. localhost:8000
    #[arg(long)]
    listen: Option<String>,

    /// Racing gRPC endpoint
    #[arg(long)]
    racing_endpoint: Option<String>,

    /// Sports gRPC endpoint
    #[arg(long)]
    sports_endpoint: Option<String>,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(listen) = self.listen {
            config.gateway.listen = listen;
        }
        if let Some(endpoint) = self.racing_endpoint {
            config.gateway.racing_endpoint = endpoint;
        }
        if let Some(endpoint) = self.sports_endpoint {
            config.gateway.sports_endpoint = endpoint;
        }
        if let Some(level) = self.log_level {
            config.service.log_level = level;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = Config::load_for_service(SERVICE_NAME, args.config.as_deref())?;
    args.apply(&mut config);
    config.validate()?;

    init_tracing(&config.service)?;

    let state = AppState::new(config.gateway.clone())?;
    let app = create_http_router(state);

    let addr = resolve(&config.gateway.listen).await?;

    tracing::info!("API Gateway listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  POST /v1/list-races - List races (proxied to racing)");
    tracing::info!("  POST /v1/list-events - List events (proxied to sports)");
    tracing::info!("  GET  /v1/events/{{id}} - Get event (proxied to sports)");
    tracing::info!("  GET  /health - Health check");
    tracing::info!("  GET  /ready - Readiness check");

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
}
