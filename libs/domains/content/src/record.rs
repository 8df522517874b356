//! Mapping raw documents onto the output shapes.

use chrono::{DateTime, Utc};
use mongodb::bson::{self, Bson, Document};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{ContentError, ContentResult};
use crate::models::{CollectionKind, Event, EventStatus, GalleryItem, TeamMember};

/// Render a store identifier as a string.
///
/// ObjectIds become their 24-character hex form; other values keep their
/// natural text.
pub fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace `_id` with a string `id`.
pub fn normalize_id(mut doc: Document) -> Document {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id_to_string(&id));
    }
    doc
}

/// Output shape decodable from a stored document.
pub trait FromRecord: Sized {
    const KIND: CollectionKind;

    fn from_record(doc: Document) -> ContentResult<Self>;
}

fn invalid(collection: CollectionKind, reason: impl ToString) -> ContentError {
    ContentError::InvalidRecord {
        collection,
        reason: reason.to_string(),
    }
}

fn decode<T: DeserializeOwned>(kind: CollectionKind, doc: Document) -> ContentResult<T> {
    bson::from_document(normalize_id(doc)).map_err(|e| invalid(kind, e))
}

/// Event as stored: the date is a native BSON datetime.
#[derive(Deserialize)]
struct StoredEvent {
    id: String,
    title: String,
    description: String,
    date: bson::DateTime,
    game: String,
    location: String,
    cover_image: Option<String>,
    #[serde(default)]
    gallery_urls: Vec<String>,
    status: EventStatus,
}

impl FromRecord for Event {
    const KIND: CollectionKind = CollectionKind::Event;

    fn from_record(doc: Document) -> ContentResult<Self> {
        let stored: StoredEvent = decode(Self::KIND, doc)?;
        let date = DateTime::<Utc>::from_timestamp_millis(stored.date.timestamp_millis())
            .ok_or_else(|| invalid(Self::KIND, "date out of range"))?;

        Ok(Event {
            id: stored.id,
            title: stored.title,
            description: stored.description,
            date,
            game: stored.game,
            location: stored.location,
            cover_image: stored.cover_image,
            gallery_urls: stored.gallery_urls,
            status: stored.status,
        })
    }
}

impl FromRecord for GalleryItem {
    const KIND: CollectionKind = CollectionKind::GalleryImage;

    fn from_record(doc: Document) -> ContentResult<Self> {
        decode(Self::KIND, doc)
    }
}

impl FromRecord for TeamMember {
    const KIND: CollectionKind = CollectionKind::TeamMember;

    fn from_record(doc: Document) -> ContentResult<Self> {
        decode(Self::KIND, doc)
    }
}

/// Decode every document, failing on the first mismatch.
pub fn decode_all<T: FromRecord>(docs: Vec<Document>) -> ContentResult<Vec<T>> {
    docs.into_iter().map(T::from_record).collect()
}
