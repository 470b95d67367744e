//! One-shot repository initialization
//!
//! [`InitGuard`] runs a seeding future at most once. Callers that arrive while
//! the seed is running wait for it and receive the same result; callers that
//! arrive afterwards get the stored result without running anything.

use std::future::Future;

use tokio::sync::OnceCell;

use super::error::{RepositoryError, RepositoryOperation, RepositoryResult};

/// Tracks whether a repository has moved from uninitialized to ready
#[derive(Debug, Default)]
pub struct InitGuard {
    outcome: OnceCell<RepositoryResult<()>>,
}

impl InitGuard {
    /// Create a guard in the uninitialized state
    pub fn new() -> Self {
        Self {
            outcome: OnceCell::new(),
        }
    }

    /// Run `seed` unless it has already run, returning its result
    ///
    /// A failed seed is stored like a successful one: it is not retried and
    /// every caller sees the same error.
    pub async fn run<F, Fut>(&self, seed: F) -> RepositoryResult<()>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = RepositoryResult<()>>,
    {
        self.outcome
            .get_or_init(|| async move { seed().await.map_err(RepositoryError::into_init_failure) })
            .await
            .clone()
    }

    /// Whether a seed has completed successfully
    pub fn is_ready(&self) -> bool {
        matches!(self.outcome.get(), Some(Ok(())))
    }

    /// Fail unless the repository is ready
    pub fn ensure_ready(
        &self,
        operation: RepositoryOperation,
        entity_type: &str,
    ) -> RepositoryResult<()> {
        match self.outcome.get() {
            Some(Ok(())) => Ok(()),
            Some(Err(err)) => Err(err.clone().with_operation(operation)),
            None => Err(RepositoryError::not_initialized(operation, entity_type)),
        }
    }
}
