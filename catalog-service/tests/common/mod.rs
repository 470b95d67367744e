#![allow(dead_code)]

use catalog_service::config::DatabaseConfig;
use catalog_service::database::create_pool;
use sqlx::SqlitePool;

pub async fn memory_pool() -> SqlitePool {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout_secs: 5,
        max_retries: 0,
        retry_delay_secs: 0,
    };
    create_pool(&config).await.expect("in-memory pool")
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count rows");
    n
}
