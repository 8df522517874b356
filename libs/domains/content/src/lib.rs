//! Content Domain
//!
//! Read-only listings of events, gallery images and team members stored in
//! MongoDB, plus the startup seeder that fills empty collections.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐     ┌──────────┐
//! │   Service   │ ──► │  Seeder  │
//! └──────┬──────┘     └────┬─────┘
//!        │                 │
//! ┌──────▼─────────────────▼──┐
//! │      DocumentStore        │  ← generic document access (trait + MongoDB)
//! └──────┬────────────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Records   │  ← `_id` normalization, decoding into output models
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_content::{ContentService, MongoDocumentStore, handlers};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = MongoDocumentStore::new(client.database("esports"));
//! let service = ContentService::new(store);
//!
//! service.seed_if_empty().await?;
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod record;
pub mod seed;
pub mod service;
pub mod store;

pub use error::{ContentError, ContentResult};
pub use handlers::ApiDoc;
pub use models::{
    CollectionKind, Event, EventQuery, EventStatus, GalleryItem, GalleryQuery, NewEvent,
    NewGalleryImage, NewRecord, NewTeamMember, TeamMember,
};
pub use crate::mongodb::MongoDocumentStore;
pub use seed::SeedReport;
pub use service::ContentService;
pub use store::DocumentStore;
