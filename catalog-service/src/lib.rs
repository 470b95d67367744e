//! # catalog-service
//!
//! Racing and sports catalogs served over gRPC from a SQLite store.
//!
//! ## Features
//!
//! - **Dynamic list queries**: optional filters and a `"<field> [asc|desc]"`
//!   sort directive become one parameterized `SELECT`
//! - **Derived status**: sports events are OPEN, ONGOING or CLOSED relative to
//!   the moment they are read
//! - **One-shot seeding**: each repository creates and seeds its table once,
//!   however many callers race to initialize it
//! - **Layered configuration**: defaults, TOML, `CATALOG_` environment
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use catalog_service::prelude::*;
//!
//! # async fn run() -> catalog_service::error::Result<()> {
//! let config = Config::load_for_service("racing", None)?;
//! let pool = create_pool(&config.database).await?;
//!
//! let repo = Arc::new(RacesRepo::new(pool));
//! repo.init().await?;
//!
//! let races = repo.list(&RaceFilter::default(), "advertised_start_time").await?;
//! # let _ = races;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod database;
pub mod error;
pub mod grpc;
pub mod observability;
pub mod racing;
pub mod repository;
pub mod seed;
pub mod sports;
pub mod timestamp;

/// Generated protobuf types, clients and servers
pub mod proto {
    pub mod racing {
        tonic::include_proto!("racing");
    }

    pub mod sports {
        tonic::include_proto!("sports");
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, DatabaseConfig, GatewayConfig, GrpcConfig, LogFormat};
    pub use crate::database::create_pool;
    pub use crate::error::{Error, Result};
    pub use crate::grpc::{shutdown_signal, GrpcServer};
    pub use crate::observability::init_tracing;
    pub use crate::racing::{Race, RaceFilter, RacesRepo, RacesRepository, RacingService};
    pub use crate::repository::{RepositoryError, RepositoryErrorKind, RepositoryResult};
    pub use crate::sports::{
        Event, EventFilter, EventStatus, SportsRepo, SportsRepository, SportsService,
    };
}
