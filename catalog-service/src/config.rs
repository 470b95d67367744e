//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Command-line flags (applied by each binary after loading)
//! 2. Environment variables (prefix: `CATALOG_`, nested keys split on `__`)
//! 3. A TOML file: the `--config` path, or `./config.toml` when present
//! 4. Per-service defaults
//!
//! ```toml
//! [service]
//! name = "racing"
//! log_level = "debug"
//!
//! [grpc]
//! endpoint = "0.0.0.0:9000"
//!
//! [database]
//! url = "sqlite://racing.db?mode=rwc"
//! ```
//!
//! `CATALOG_DATABASE__MAX_CONNECTIONS=4` overrides `database.max_connections`.

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// Environment variable prefix for every service in the workspace
pub const ENV_PREFIX: &str = "CATALOG_";

const DEFAULT_CONFIG_FILE: &str = "config.toml";
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// gRPC server configuration
    #[serde(default)]
    pub grpc: GrpcConfig,

    /// Store configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name, used in logs
    pub name: String,

    /// Log level or `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Human-readable text
    Text,
}

/// gRPC server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrpcConfig {
    /// `host:port` the server listens on
    #[serde(default = "default_racing_endpoint")]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    #[serde(default = "default_racing_database")]
    pub url: String,

    /// Maximum number of connections in the pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connection acquire timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout_secs: u64,

    /// Maximum retry attempts for establishing the pool
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Base delay between retry attempts in seconds
    #[serde(default = "default_retry_delay")]
    pub retry_delay_secs: u64,
}

/// HTTP gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// `host:port` the gateway listens on
    #[serde(default = "default_gateway_listen")]
    pub listen: String,

    /// Racing gRPC endpoint
    #[serde(default = "default_racing_endpoint")]
    pub racing_endpoint: String,

    /// Sports gRPC endpoint
    #[serde(default = "default_sports_endpoint")]
    pub sports_endpoint: String,

    /// Upstream call timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_racing_endpoint() -> String {
    "localhost:9000".to_string()
}

fn default_sports_endpoint() -> String {
    "localhost:7000".to_string()
}

fn default_gateway_listen() -> String {
    "localhost:8000".to_string()
}

fn default_racing_database() -> String {
    "sqlite://racing.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    5
}

fn default_connection_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay() -> u64 {
    1
}

impl Default for GrpcConfig {
    fn default() -> Self {
        Self {
            endpoint: default_racing_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_racing_database(),
            max_connections: default_max_connections(),
            connection_timeout_secs: default_connection_timeout(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen: default_gateway_listen(),
            racing_endpoint: default_racing_endpoint(),
            sports_endpoint: default_sports_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults_for("catalog")
    }
}

impl Config {
    /// Defaults for a named service
    ///
    /// `sports` listens on `localhost:7000` with its own database file; every
    /// other name gets the racing defaults.
    pub fn defaults_for(service_name: &str) -> Self {
        let mut config = Self {
            service: ServiceConfig {
                name: service_name.to_string(),
                log_level: default_log_level(),
                log_format: LogFormat::default(),
            },
            grpc: GrpcConfig::default(),
            database: DatabaseConfig::default(),
            gateway: GatewayConfig::default(),
        };

        if service_name == "sports" {
            config.grpc.endpoint = default_sports_endpoint();
            config.database.url = "sqlite://sports.db?mode=rwc".to_string();
        }

        config
    }

    /// Load configuration for a service
    ///
    /// Reads `path` when given (it must exist), otherwise `./config.toml` if
    /// present, then applies `CATALOG_` environment overrides and validates.
    pub fn load_for_service(service_name: &str, path: Option<&Path>) -> Result<Self> {
        let mut figment =
            Figment::new().merge(Serialized::defaults(Self::defaults_for(service_name)));

        match path {
            Some(path) => {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(require_file(path)?));
            }
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                tracing::info!("Loading configuration from: {}", DEFAULT_CONFIG_FILE);
                figment = figment.merge(Toml::file(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        Self::extract(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Load configuration from a specific file, ignoring the environment
    ///
    /// Useful for testing.
    pub fn load_from(service_name: &str, path: &Path) -> Result<Self> {
        Self::extract(
            Figment::new()
                .merge(Serialized::defaults(Self::defaults_for(service_name)))
                .merge(Toml::file(require_file(path)?)),
        )
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values no service can start with
    pub fn validate(&self) -> Result<()> {
        if self.service.name.trim().is_empty() {
            return Err(invalid("service.name must not be empty"));
        }

        let level = self.service.log_level.trim().to_ascii_lowercase();
        if !level.contains('=') && !LOG_LEVELS.contains(&level.as_str()) {
            return Err(invalid(format!(
                "service.log_level must be one of {:?}, got {:?}",
                LOG_LEVELS, self.service.log_level
            )));
        }

        if self.database.url.trim().is_empty() {
            return Err(invalid("database.url must not be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(invalid("database.max_connections must be at least 1"));
        }

        for (key, value) in [
            ("grpc.endpoint", &self.grpc.endpoint),
            ("gateway.listen", &self.gateway.listen),
            ("gateway.racing_endpoint", &self.gateway.racing_endpoint),
            ("gateway.sports_endpoint", &self.gateway.sports_endpoint),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(format!("{} must not be empty", key)));
            }
        }

        Ok(())
    }
}

impl GrpcConfig {
    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl DatabaseConfig {
    /// Acquire timeout as a Duration
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(self.connection_timeout_secs)
    }
}

impl GatewayConfig {
    /// Upstream timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn require_file(path: &Path) -> Result<&Path> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(invalid(format!("configuration file not found: {}", path.display())))
    }
}

fn invalid(message: impl Into<String>) -> crate::error::Error {
    crate::error::Error::Config(Box::new(figment::Error::from(message.into())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_racing_defaults() {
        let config = Config::defaults_for("racing");
        assert_eq!(config.service.name, "racing");
        assert_eq!(config.grpc.endpoint, "localhost:9000");
        assert_eq!(config.database.url, "sqlite://racing.db?mode=rwc");
        assert_eq!(config.gateway.listen, "localhost:8000");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_sports_defaults() {
        let config = Config::defaults_for("sports");
        assert_eq!(config.grpc.endpoint, "localhost:7000");
        assert_eq!(config.database.url, "sqlite://sports.db?mode=rwc");
        assert_eq!(config.gateway.sports_endpoint, "localhost:7000");
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let file = write_config(
            r#"
            [service]
            name = "racing"
            log_level = "debug"
            log_format = "text"

            [database]
            url = "sqlite::memory:"
            max_connections = 1
            "#,
        );

        let config = Config::load_from("racing", file.path()).unwrap();
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.service.log_format, LogFormat::Text);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.database.max_connections, 1);
        assert_eq!(config.database.max_retries, 3);
        assert_eq!(config.grpc.endpoint, "localhost:9000");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from("racing", &dir.path().join("absent.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_pool_rejected() {
        let file = write_config("[database]\nmax_connections = 0\n");
        let err = Config::load_from("sports", file.path()).unwrap_err();
        assert!(err.to_string().contains("max_connections"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let mut config = Config::defaults_for("racing");
        config.service.log_level = "loud".to_string();
        assert!(config.validate().is_err());

        config.service.log_level = "catalog_service=debug,info".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_name_rejected() {
        let config = Config::defaults_for(" ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_durations() {
        let config = Config::default();
        assert_eq!(config.grpc.timeout(), Duration::from_secs(30));
        assert_eq!(config.database.connection_timeout(), Duration::from_secs(10));
    }
}
