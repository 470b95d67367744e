//! Repository error types
//!
//! Every failure the catalogs can produce while listing or fetching entities
//! is a [`RepositoryError`]. The [`RepositoryErrorKind`] separates request
//! problems (a malformed sort directive, an unknown id) from store failures,
//! so the gRPC layer can pick the right status code.
//!
//! # Example
//!
//! ```rust
//! use catalog_service::repository::{RepositoryError, RepositoryErrorKind};
//!
//! let error = RepositoryError::not_found("Event", "42");
//! assert!(matches!(error.kind, RepositoryErrorKind::NotFound));
//! assert!(error.entity_id.is_some());
//! ```

use std::fmt;

/// Operation being performed when the repository error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryOperation {
    /// Seeding the store on first initialization
    Init,
    /// Listing entities with an optional filter and sort directive
    List,
    /// Fetching a single entity by its identifier
    GetById,
}

impl fmt::Display for RepositoryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::List => write!(f, "list"),
            Self::GetById => write!(f, "get_by_id"),
        }
    }
}

/// Category of repository error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepositoryErrorKind {
    /// Entity was not found
    NotFound,
    /// The request was rejected before reaching the store
    ValidationFailed,
    /// The repository was used before a successful `init`
    NotInitialized,
    /// Seeding the store failed
    InitializationFailed,
    /// Failed to connect to the store
    ConnectionFailed,
    /// Operation timed out
    Timeout,
    /// Underlying database error
    DatabaseError,
    /// A row could not be scanned into an entity
    SerializationError,
}

impl fmt::Display for RepositoryErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::ValidationFailed => write!(f, "validation_failed"),
            Self::NotInitialized => write!(f, "not_initialized"),
            Self::InitializationFailed => write!(f, "initialization_failed"),
            Self::ConnectionFailed => write!(f, "connection_failed"),
            Self::Timeout => write!(f, "timeout"),
            Self::DatabaseError => write!(f, "database_error"),
            Self::SerializationError => write!(f, "serialization_error"),
        }
    }
}

/// Structured repository error with operation context
///
/// # Example
///
/// ```rust
/// use catalog_service::repository::{RepositoryError, RepositoryOperation};
///
/// let error = RepositoryError::validation_failed("unknown field: colour")
///     .with_operation(RepositoryOperation::List);
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryError {
    /// The operation being performed when the error occurred
    pub operation: RepositoryOperation,
    /// The category of error
    pub kind: RepositoryErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The type of entity involved (e.g., "Race", "Event")
    pub entity_type: Option<String>,
    /// The ID of the entity involved
    pub entity_id: Option<String>,
}

/// Result type for repository operations
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    /// Create a new repository error
    pub fn new(
        operation: RepositoryOperation,
        kind: RepositoryErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            entity_type: None,
            entity_id: None,
        }
    }

    /// Create a "not found" error with entity context
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::GetById,
            RepositoryErrorKind::NotFound,
            "Entity not found",
        )
        .with_entity(entity_type, entity_id)
    }

    /// Create a validation failed error
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(
            RepositoryOperation::List,
            RepositoryErrorKind::ValidationFailed,
            message,
        )
    }

    /// Create an error for a repository used before `init` completed
    pub fn not_initialized(operation: RepositoryOperation, entity_type: &str) -> Self {
        Self::new(
            operation,
            RepositoryErrorKind::NotInitialized,
            format!("{} repository has not been initialized", entity_type),
        )
    }

    /// Create a scan error for a row that could not be mapped
    pub fn serialization_error(operation: RepositoryOperation, message: impl Into<String>) -> Self {
        Self::new(operation, RepositoryErrorKind::SerializationError, message)
    }

    /// Add entity context to an existing error
    #[must_use]
    pub fn with_entity(
        mut self,
        entity_type: impl Into<String>,
        entity_id: impl Into<String>,
    ) -> Self {
        self.entity_type = Some(entity_type.into());
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: RepositoryOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Re-tag a store failure raised while seeding
    #[must_use]
    pub fn into_init_failure(self) -> Self {
        Self {
            operation: RepositoryOperation::Init,
            kind: RepositoryErrorKind::InitializationFailed,
            message: format!("{} ({})", self.message, self.kind),
            entity_type: self.entity_type,
            entity_id: self.entity_id,
        }
    }

    /// Whether the request itself was at fault
    pub fn is_validation(&self) -> bool {
        self.kind == RepositoryErrorKind::ValidationFailed
    }

    /// Whether this is a get-by-id miss
    pub fn is_not_found(&self) -> bool {
        self.kind == RepositoryErrorKind::NotFound
    }
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Repository {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let (Some(entity_type), Some(entity_id)) = (&self.entity_type, &self.entity_id) {
            write!(f, " [{}: {}]", entity_type, entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RepositoryError {}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::Error as E;

        let kind = match &err {
            E::PoolTimedOut => RepositoryErrorKind::Timeout,
            E::PoolClosed | E::Io(_) | E::Tls(_) | E::WorkerCrashed => {
                RepositoryErrorKind::ConnectionFailed
            }
            E::ColumnDecode { .. }
            | E::Decode(_)
            | E::ColumnNotFound(_)
            | E::ColumnIndexOutOfBounds { .. }
            | E::TypeNotFound { .. } => RepositoryErrorKind::SerializationError,
            _ => RepositoryErrorKind::DatabaseError,
        };

        Self::new(RepositoryOperation::List, kind, err.to_string())
    }
}

impl From<RepositoryError> for tonic::Status {
    fn from(err: RepositoryError) -> Self {
        match err.kind {
            RepositoryErrorKind::ValidationFailed => tonic::Status::invalid_argument(err.message),
            RepositoryErrorKind::NotFound => tonic::Status::not_found(err.to_string()),
            RepositoryErrorKind::NotInitialized => {
                tonic::Status::failed_precondition(err.message)
            }
            RepositoryErrorKind::Timeout => tonic::Status::deadline_exceeded(err.message),
            RepositoryErrorKind::ConnectionFailed => tonic::Status::unavailable(err.message),
            _ => {
                tracing::error!(
                    operation = %err.operation,
                    kind = %err.kind,
                    "Repository error: {}", err.message
                );
                tonic::Status::internal(err.to_string())
            }
        }
    }
}
