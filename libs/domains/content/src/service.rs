//! Content Service - read paths and seeding

use mongodb::bson::{Document, doc};
use std::sync::Arc;
use tracing::instrument;

use crate::error::{ContentError, ContentResult};
use crate::models::{Event, EventQuery, EventStatus, GalleryItem, TeamMember};
use crate::record::{FromRecord, decode_all};
use crate::seed::{self, SeedReport};
use crate::store::DocumentStore;

/// Read access to events, gallery and team.
///
/// An unavailable store is not an error here: list calls log a warning and
/// return an empty list.
pub struct ContentService<S: DocumentStore> {
    store: Arc<S>,
}

impl<S: DocumentStore> ContentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Events, optionally filtered by status.
    ///
    /// `past` is ordered newest first and `upcoming` soonest first; without a
    /// status the store order is kept.
    #[instrument(skip(self))]
    pub async fn list_events(&self, query: EventQuery) -> ContentResult<Vec<Event>> {
        let filter = match query.status {
            Some(status) => doc! { "status": status.to_string() },
            None => doc! {},
        };

        let mut events: Vec<Event> = self.fetch(filter, None).await?;
        match query.status {
            Some(EventStatus::Past) => events.sort_by(|a, b| b.date.cmp(&a.date)),
            Some(EventStatus::Upcoming) => events.sort_by_key(|e| e.date),
            None => {}
        }

        Ok(events)
    }

    /// Gallery images in store order; a `limit` of `0` returns all of them.
    #[instrument(skip(self))]
    pub async fn list_gallery(&self, limit: i64) -> ContentResult<Vec<GalleryItem>> {
        if limit < 0 {
            return Err(ContentError::Validation(format!(
                "limit must be non-negative, got {limit}"
            )));
        }
        self.fetch(doc! {}, Some(limit)).await
    }

    #[instrument(skip(self))]
    pub async fn list_team(&self) -> ContentResult<Vec<TeamMember>> {
        self.fetch(doc! {}, None).await
    }

    /// Insert the sample records into every empty collection.
    pub async fn seed_if_empty(&self) -> ContentResult<SeedReport> {
        seed::seed_if_empty(self.store.as_ref()).await
    }

    async fn fetch<T: FromRecord>(&self, filter: Document, limit: Option<i64>) -> ContentResult<Vec<T>> {
        match self.store.get_documents(T::KIND, filter, limit).await {
            Ok(docs) => decode_all(docs),
            Err(ContentError::StoreUnavailable) => {
                tracing::warn!(
                    collection = %T::KIND,
                    "Document store unavailable, returning empty list"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl<S: DocumentStore> Clone for ContentService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
