//! gRPC server support for the catalog services
//!
//! ```ignore
//! use catalog_service::grpc::{shutdown_signal, GrpcServer};
//! use tower_http::trace::TraceLayer;
//!
//! let server = GrpcServer::new(config.grpc.clone());
//! let addr = server.socket_addr().await?;
//!
//! server
//!     .build()
//!     .layer(TraceLayer::new_for_grpc())
//!     .add_service(health_service)
//!     .add_service(RacingServer::new(service))
//!     .serve_with_shutdown(addr, shutdown_signal())
//!     .await?;
//! ```

pub mod server;

pub use server::{resolve, shutdown_signal, GrpcServer};
