//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly, health checks, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: structured error responses with error codes
//! - **[`extractors`]**: validated query-string extraction
//!
//! ```ignore
//! use axum_helpers::{http::create_permissive_cors_layer, server::create_router};
//!
//! let router = create_router::<ApiDoc>(api_routes, root_routes, create_permissive_cors_layer());
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::ValidatedQuery;
pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, ShutdownCoordinator, create_production_app, create_router, health_router,
    run_health_checks,
};
