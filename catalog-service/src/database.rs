//! SQLite connection pool management

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::{config::DatabaseConfig, error::Result};

/// Create a SQLite connection pool with retry logic
///
/// Retries `max_retries` times with exponential backoff starting at
/// `retry_delay_secs`.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let mut attempt = 0;
    let base_delay = Duration::from_secs(config.retry_delay_secs);

    loop {
        match try_create_pool(config).await {
            Ok(pool) => {
                if attempt > 0 {
                    tracing::info!(
                        "Database connection established after {} attempt(s)",
                        attempt + 1
                    );
                } else {
                    tracing::info!(
                        url = %config.url,
                        max_connections = config.max_connections,
                        "Database connection pool created"
                    );
                }
                return Ok(pool);
            }
            Err(e) => {
                attempt += 1;

                if attempt > config.max_retries {
                    tracing::error!(
                        "Failed to connect to database after {} attempts: {}",
                        config.max_retries + 1,
                        e
                    );
                    return Err(e);
                }

                let delay = base_delay * 2_u32.pow(attempt.saturating_sub(1));

                tracing::warn!(
                    "Database connection attempt {} failed: {}. Retrying in {:?}...",
                    attempt,
                    e,
                    delay
                );

                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Whether `url` names a private in-memory database
pub fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Attempt to create a pool (single try)
async fn try_create_pool(config: &DatabaseConfig) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(|e| connect_error(config, &e))?
        .create_if_missing(true);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connection_timeout());

    // Every connection to `:memory:` opens a fresh database, so the pool must
    // hold exactly one connection for its whole life.
    if is_memory_url(&config.url) {
        pool_options = pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }

    pool_options
        .connect_with(options)
        .await
        .map_err(|e| connect_error(config, &e))
}

fn connect_error(config: &DatabaseConfig, err: &sqlx::Error) -> crate::error::Error {
    crate::error::Error::Internal(format!(
        "Failed to connect to database at '{}': {}\n\n\
        Troubleshooting:\n\
        1. Check the URL format: sqlite://path/to/file.db?mode=rwc or sqlite::memory:\n\
        2. Verify the directory exists and is writable\n\
        3. Make sure no other process holds an exclusive lock on the file\n\n\
        Original error: {}",
        config.url,
        categorize_db_error(err),
        err
    ))
}

/// Categorize database error for better user guidance
fn categorize_db_error(err: &sqlx::Error) -> &'static str {
    use sqlx::Error;
    match err {
        Error::Configuration(_) => "Configuration error",
        Error::Database(_) => "Database error",
        Error::Io(_) => "File I/O error",
        Error::PoolTimedOut => "Connection pool timeout",
        Error::PoolClosed => "Connection pool closed",
        Error::WorkerCrashed => "Database worker crashed",
        _ => "Connection error",
    }
}
