use catalog_service::config::GatewayConfig;
use catalog_service::proto::racing::racing_client::RacingClient;
use catalog_service::proto::sports::sports_client::SportsClient;
use tonic::transport::{Channel, Endpoint};
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;

use crate::error::GatewayError;

pub type RacingGrpcClient = RacingClient<Channel>;
pub type SportsGrpcClient = SportsClient<Channel>;

/// Channels to the catalog services
///
/// Channels connect on first use and reconnect on their own, so the gateway
/// starts even when a backend is down.
#[derive(Debug, Clone)]
pub struct Backends {
    racing: Channel,
    sports: Channel,
}

impl Backends {
    pub fn connect_lazy(config: &GatewayConfig) -> Result<Self, GatewayError> {
        Ok(Self {
            racing: lazy_channel(&config.racing_endpoint, config)?,
            sports: lazy_channel(&config.sports_endpoint, config)?,
        })
    }

    pub fn racing(&self) -> RacingGrpcClient {
        RacingClient::new(self.racing.clone())
    }

    pub fn sports(&self) -> SportsGrpcClient {
        SportsClient::new(self.sports.clone())
    }

    /// Whether both backends report SERVING on the standard health service
    pub async fn check(&self) -> Result<(), GatewayError> {
        check_serving("racing", self.racing.clone()).await?;
        check_serving("sports", self.sports.clone()).await
    }
}

/// `host:port` or a full URL to a URL tonic can dial
pub fn endpoint_url(endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        endpoint.to_string()
    } else {
        format!("http://{}", endpoint)
    }
}

fn lazy_channel(endpoint: &str, config: &GatewayConfig) -> Result<Channel, GatewayError> {
    let url = endpoint_url(endpoint);
    tracing::info!("Backend gRPC service at {}", url);

    let channel = Endpoint::from_shared(url.clone())
        .map_err(|e| GatewayError::InvalidEndpoint(format!("{}: {}", url, e)))?
        .timeout(config.timeout())
        .connect_lazy();
    Ok(channel)
}

async fn check_serving(name: &str, channel: Channel) -> Result<(), GatewayError> {
    let response = HealthClient::new(channel)
        .check(HealthCheckRequest {
            service: String::new(),
        })
        .await?;

    if response.into_inner().status == ServingStatus::Serving as i32 {
        Ok(())
    } else {
        Err(GatewayError::NotReady(format!("{} is not serving", name)))
    }
}
