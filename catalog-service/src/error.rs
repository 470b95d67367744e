//! Process-level error type
//!
//! Request-path failures are [`RepositoryError`]s and become `tonic::Status`
//! at the service boundary. This type covers everything that can stop a
//! process from starting or serving.

use thiserror::Error;

use crate::repository::RepositoryError;

/// Result type alias using the crate error type
pub type Result<T> = std::result::Result<T, Error>;

/// Startup and serving errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Store operation failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// gRPC transport failed to bind, connect or serve
    #[error("Transport error: {0}")]
    Transport(#[from] tonic::transport::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}
