//! `GET /test`: human-readable connectivity report.
//!
//! Every failure is rendered into the body; the endpoint always answers `200`.

use axum::{Json, extract::State};
use domain_content::DocumentStore;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

const MAX_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 80;

#[derive(Debug, Serialize, ToSchema)]
pub struct DiagnosticsResponse {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    /// At most ten names
    pub collections: Vec<String>,
}

fn set_flag(set: bool) -> String {
    if set { "✅ Set" } else { "❌ Not Set" }.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/// Report backend and database status
#[utoipa::path(
    get,
    path = "/test",
    tag = "System",
    responses((status = 200, description = "Connectivity report", body = DiagnosticsResponse))
)]
pub async fn test_database(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let mut response = DiagnosticsResponse {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: set_flag(state.config.database_url_set),
        database_name: set_flag(state.config.database_name_set),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    if !state.store.is_available() {
        return Json(response);
    }

    response.database = "✅ Available".to_string();
    response.connection_status = "Connected".to_string();

    match state.store.list_collection_names().await {
        Ok(mut names) => {
            names.truncate(MAX_COLLECTIONS);
            response.collections = names;
            response.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            tracing::warn!(error = %e, "Listing collections failed");
            response.database = format!("⚠️ Connected but Error: {}", truncate(&e.to_string()));
        }
    }

    Json(response)
}
