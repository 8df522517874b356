use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::{
    ValidatedQuery,
    errors::responses::{BadRequestValidationResponse, InternalServerErrorResponse},
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ContentResult;
use crate::models::{Event, EventQuery, EventStatus, GalleryItem, GalleryQuery, TeamMember};
use crate::service::ContentService;
use crate::store::DocumentStore;

/// OpenAPI documentation for the content endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_events, list_gallery, list_team),
    components(
        schemas(Event, EventStatus, GalleryItem, TeamMember),
        responses(BadRequestValidationResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "Content", description = "Events, gallery and team listings")
    )
)]
pub struct ApiDoc;

/// Routes for `/events`, `/gallery` and `/team`
pub fn router<S: DocumentStore + 'static>(service: ContentService<S>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/events", get(list_events))
        .route("/gallery", get(list_gallery))
        .route("/team", get(list_team))
        .with_state(shared_service)
}

/// List events, optionally filtered by status
#[utoipa::path(
    get,
    path = "/events",
    tag = "Content",
    params(EventQuery),
    responses(
        (status = 200, description = "Events; past newest first, upcoming soonest first", body = Vec<Event>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_events<S: DocumentStore>(
    State(service): State<Arc<ContentService<S>>>,
    ValidatedQuery(query): ValidatedQuery<EventQuery>,
) -> ContentResult<Json<Vec<Event>>> {
    let events = service.list_events(query).await?;
    Ok(Json(events))
}

/// List gallery images
#[utoipa::path(
    get,
    path = "/gallery",
    tag = "Content",
    params(GalleryQuery),
    responses(
        (status = 200, description = "Gallery images", body = Vec<GalleryItem>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_gallery<S: DocumentStore>(
    State(service): State<Arc<ContentService<S>>>,
    ValidatedQuery(query): ValidatedQuery<GalleryQuery>,
) -> ContentResult<Json<Vec<GalleryItem>>> {
    let items = service.list_gallery(query.limit).await?;
    Ok(Json(items))
}

/// List team members
#[utoipa::path(
    get,
    path = "/team",
    tag = "Content",
    responses(
        (status = 200, description = "Team members", body = Vec<TeamMember>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_team<S: DocumentStore>(
    State(service): State<Arc<ContentService<S>>>,
) -> ContentResult<Json<Vec<TeamMember>>> {
    let team = service.list_team().await?;
    Ok(Json(team))
}
