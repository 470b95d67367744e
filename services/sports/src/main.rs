use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use catalog_service::prelude::*;
use catalog_service::proto::sports::sports_server::SportsServer;
use clap::Parser;
use tower_http::trace::TraceLayer;

const SERVICE_NAME: &str = "sports";

#[derive(Debug, Parser)]
#[command(name = "sports", version, about = "Serve the sports catalog over gRPC")]
struct Args {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, env = "CATALOG_CONFIG")]
    config: Option<PathBuf>,

    /// gRPC listen endpoint, e.g. localhost:7000
    #[arg(long)]
    grpc_endpoint: Option<String>,

    /// SQLite database URL
    #[arg(long)]
    database_url: Option<String>,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn apply(self, config: &mut Config) {
        if let Some(endpoint) = self.grpc_endpoint {
            config.grpc.endpoint = endpoint;
        }
        if let Some(url) = self.database_url {
            config.database.url = url;
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

    let pool = create_pool(&config.database).await?;
    let repo = Arc::new(SportsRepo::new(pool));
    repo.init().await.context("failed to initialise sports repository")?;

    let (reporter, health_service) = tonic_health::server::health_reporter();
    reporter
        .set_serving::<SportsServer<SportsService<SportsRepo>>>()
        .await;

    let server = GrpcServer::new(config.grpc.clone());
    let addr = server.socket_addr().await?;

    tracing::info!("Sports service listening on {}", addr);
    tracing::info!("  sports.Sports/ListEvents");
    tracing::info!("  sports.Sports/GetEvent");

    server
        .build()
        .layer(TraceLayer::new_for_grpc())
        .add_service(health_service)
        .add_service(SportsServer::new(SportsService::new(repo)))
        .serve_with_shutdown(addr, shutdown_signal())
        .await?;

    tracing::info!("Sports service stopped gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let args = Args::parse_from(["sports"]);
        let mut config = Config::defaults_for(SERVICE_NAME);
        args.apply(&mut config);

        assert_eq!(config.grpc.endpoint, "localhost:7000");
        assert_eq!(config.database.url, "sqlite://sports.db?mode=rwc");
    }

    #[test]
    fn test_log_level_flag() {
        let args = Args::parse_from(["sports", "--log-level", "debug"]);
        let mut config = Config::defaults_for(SERVICE_NAME);
        args.apply(&mut config);
        assert_eq!(config.service.log_level, "debug");
    }
}
