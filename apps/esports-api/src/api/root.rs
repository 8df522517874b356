//! Landing endpoint

use axum::Json;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Confirms the backend is serving
#[utoipa::path(
    get,
    path = "/",
    tag = "System",
    responses((status = 200, description = "Backend is running", body = RootResponse))
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Esports Committee Backend running".to_string(),
    })
}
