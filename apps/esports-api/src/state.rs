//! Application state management.
//!
//! Shared state handed to the root routes (landing, diagnostics, readiness).

use domain_content::MongoDocumentStore;

use crate::config::Config;

/// Shared application state.
///
/// Cloned per handler; the store wraps the pooled MongoDB handle.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// Document store, unavailable when the database could not be reached
    pub store: MongoDocumentStore,
}
