use chrono::{DateTime, Utc};
use mongodb::bson::{self, Document, doc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidateUrl, ValidationError};

/// The three content collections, named by the lowercase entity name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKind {
    Event,
    GalleryImage,
    TeamMember,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [Self::Event, Self::GalleryImage, Self::TeamMember];

    /// Collection name in the database
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Past,
    Upcoming,
}

// ---------------------------------------------------------------------------
// Output shapes
// ---------------------------------------------------------------------------

/// An esports event as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Store-assigned identifier, rendered as a string
    pub id: String,
    pub title: String,
    pub description: String,
    /// Event date and time (UTC)
    pub date: DateTime<Utc>,
    /// Primary game or category
    pub game: String,
    /// Venue or online platform
    pub location: String,
    pub cover_image: Option<String>,
    #[serde(default)]
    pub gallery_urls: Vec<String>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GalleryItem {
    pub id: String,
    pub url: String,
    pub caption: Option<String>,
    /// Related event id; not checked against the event collection
    pub event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar_url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub bio: Option<String>,
}

// ---------------------------------------------------------------------------
// Insert shapes
// ---------------------------------------------------------------------------

/// A record that can be validated and written to its collection.
pub trait NewRecord: Validate {
    const KIND: CollectionKind;

    fn to_document(&self) -> Document;
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub game: String,
    pub location: String,
    #[validate(url)]
    pub cover_image: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_urls"))]
    pub gallery_urls: Vec<String>,
    pub status: EventStatus,
}

impl NewRecord for NewEvent {
    const KIND: CollectionKind = CollectionKind::Event;

    fn to_document(&self) -> Document {
        doc! {
            "title": self.title.as_str(),
            "description": self.description.as_str(),
            "date": bson::DateTime::from_millis(self.date.timestamp_millis()),
            "game": self.game.as_str(),
            "location": self.location.as_str(),
            "cover_image": self.cover_image.clone(),
            "gallery_urls": self.gallery_urls.clone(),
            "status": self.status.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewGalleryImage {
    #[validate(url)]
    pub url: String,
    pub caption: Option<String>,
    pub event_id: Option<String>,
}

impl NewRecord for NewGalleryImage {
    const KIND: CollectionKind = CollectionKind::GalleryImage;

    fn to_document(&self) -> Document {
        doc! {
            "url": self.url.as_str(),
            "caption": self.caption.clone(),
            "event_id": self.event_id.clone(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewTeamMember {
    pub name: String,
    pub role: String,
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub discord: Option<String>,
    pub bio: Option<String>,
}

impl NewRecord for NewTeamMember {
    const KIND: CollectionKind = CollectionKind::TeamMember;

    fn to_document(&self) -> Document {
        doc! {
            "name": self.name.as_str(),
            "role": self.role.as_str(),
            "avatar_url": self.avatar_url.clone(),
            "twitter": self.twitter.clone(),
            "instagram": self.instagram.clone(),
            "discord": self.discord.clone(),
            "bio": self.bio.clone(),
        }
    }
}

fn validate_urls(urls: &[String]) -> Result<(), ValidationError> {
    if urls.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQuery {
    /// Only return events with this status
    pub status: Option<EventStatus>,
}

pub const DEFAULT_GALLERY_LIMIT: i64 = 24;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GalleryQuery {
    /// Maximum number of images; `0` returns all of them
    #[serde(default = "default_gallery_limit")]
    #[validate(range(min = 0))]
    #[param(default = 24, minimum = 0)]
    pub limit: i64,
}

impl Default for GalleryQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_GALLERY_LIMIT,
        }
    }
}

fn default_gallery_limit() -> i64 {
    DEFAULT_GALLERY_LIMIT
}
