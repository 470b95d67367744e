//! Races repository

use std::future::Future;

use sqlx::sqlite::SqlitePool;

use super::model::{Race, RaceFilter};
use super::seed::seed_races;
use crate::repository::{
    list_entities, CatalogEntity, InitGuard, RepositoryOperation, RepositoryResult,
};

/// Access to the racing catalog
pub trait RacesRepository: Send + Sync {
    /// Create and seed the store; runs once no matter how often it is called
    fn init(&self) -> impl Future<Output = RepositoryResult<()>> + Send;

    /// List races matching `filter`, ordered by the `order_by` directive
    fn list(
        &self,
        filter: &RaceFilter,
        order_by: &str,
    ) -> impl Future<Output = RepositoryResult<Vec<Race>>> + Send;
}

/// SQLite-backed [`RacesRepository`]
#[derive(Debug)]
pub struct RacesRepo {
    pool: SqlitePool,
    init: InitGuard,
}

impl RacesRepo {
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

impl RacesRepository for RacesRepo {
    async fn init(&self) -> RepositoryResult<()> {
        self.init.run(|| seed_races(&self.pool)).await
    }

    async fn list(&self, filter: &RaceFilter, order_by: &str) -> RepositoryResult<Vec<Race>> {
        self.init
            .ensure_ready(RepositoryOperation::List, Race::KIND)?;
        list_entities(&self.pool, filter, order_by).await
    }
}
