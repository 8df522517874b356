//! API routes module
//!
//! Content listings live under `/api`; landing, diagnostics and health
//! endpoints sit at the root.

pub mod diagnostics;
pub mod health;
pub mod root;

use axum::{Router, routing::get};
use axum_helpers::{create_cors_layer, create_permissive_cors_layer, create_router, health_router};
use domain_content::{ContentService, handlers};

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Content routes; nested under `/api` by `create_router`
pub fn routes(state: &AppState) -> Router {
    handlers::router(ContentService::new(state.store.clone()))
}

/// `/`, `/test`, `/ready` and `/health`
pub fn root_routes(state: &AppState) -> Router {
    Router::new()
        .route("/", get(root::root))
        .route("/test", get(diagnostics::test_database))
        .route("/ready", get(health::readiness_check))
        .with_state(state.clone())
        .merge(health_router(state.config.app))
}

/// The complete application router, CORS included
pub fn app(state: &AppState) -> Router {
    let cors = if state.config.cors_allowed_origins.is_empty() {
        create_permissive_cors_layer()
    } else {
        create_cors_layer(state.config.cors_allowed_origins.clone())
    };

    create_router::<ApiDoc>(routes(state), root_routes(state), cors)
}
