//! Sports events repository

use std::future::Future;

use sqlx::sqlite::SqlitePool;

use super::model::{Event, EventFilter};
use super::seed::seed_events;
use crate::repository::{
    fetch_optional, list_entities, CatalogEntity, InitGuard, RepositoryError,
    RepositoryOperation, RepositoryResult, SqlParam,
};

/// Access to the sports catalog
pub trait SportsRepository: Send + Sync {
    /// Create and seed the store; runs once no matter how often it is called
    fn init(&self) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// List events matching `filter`, ordered by the `order_by` directive
    fn list(
        &self,
        filter: &EventFilter,
        order_by: &str,
    ) -> impl Future<Output = RepositoryResult<Vec<Event>>> + Send;

    /// Fetch one event, failing with a not-found error when `id` is unknown
    fn get_by_id(&self, id: i64) -> impl Future<Output = RepositoryResult<Event>> + Send;
}

/// SQLite-backed [`SportsRepository`]
#[derive(Debug)]
pub struct SportsRepo {
    pool: SqlitePool,
    init: InitGuard,
}

impl SportsRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            init: InitGuard::new(),
        }
    }

    /// Whether `init` has completed successfully
    pub fn is_ready(&self) -> bool {
        self.init.is_ready()
    }
}

impl SportsRepository for SportsRepo {
    async fn init(&self) -> RepositoryResult<()> {
        self.init.run(|| seed_events(&self.pool)).await
    }

    async fn list(&self, filter: &EventFilter, order_by: &str) -> RepositoryResult<Vec<Event>> {
        self.init
            .ensure_ready(RepositoryOperation::List, Event::KIND)?;
        list_entities(&self.pool, filter, order_by).await
    }

    async fn get_by_id(&self, id: i64) -> RepositoryResult<Event> {
        self.init
            .ensure_ready(RepositoryOperation::GetById, Event::KIND)?;

        let sql = format!("{} WHERE id = ?", Event::LIST_QUERY);
        let event = fetch_optional::<Event>(&self.pool, &sql, &[SqlParam::Integer(id)])
            .await
            .map_err(|e| e.with_operation(RepositoryOperation::GetById))?;

        event.ok_or_else(|| RepositoryError::not_found(Event::KIND, id.to_string()))
    }
}
