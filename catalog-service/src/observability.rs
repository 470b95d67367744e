//! Tracing setup

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServiceConfig};
use crate::error::{Error, Result};

/// Build the log filter: `RUST_LOG` when set, otherwise the configured level
fn env_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global tracing subscriber
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter(&config.log_level));

    let installed = match config.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.with_target(true).try_init(),
    };
    installed.map_err(|e| Error::Internal(format!("failed to install tracing subscriber: {}", e)))?;

    tracing::info!("Tracing initialized for service: {}", config.name);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_second_init_fails_instead_of_panicking() {
        let config = Config::defaults_for("racing");
        let _ = init_tracing(&config.service);
        assert!(init_tracing(&config.service).is_err());
    }

    #[test]
    fn test_bad_directive_falls_back() {
        let filter = env_filter("not a [valid directive");
        assert!(!filter.to_string().is_empty());
    }
}
