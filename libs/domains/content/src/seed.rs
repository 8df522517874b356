//! Sample content inserted into empty collections at startup.

use chrono::{DateTime, Utc};
use mongodb::bson::doc;
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::error::{ContentError, ContentResult};
use crate::models::{EventStatus, NewEvent, NewGalleryImage, NewRecord, NewTeamMember};
use crate::store::DocumentStore;

/// Records inserted per collection by one seeding pass
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub events: usize,
    pub team_members: usize,
    pub gallery_images: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.events + self.team_members + self.gallery_images
    }
}

fn utc(timestamp: &str) -> ContentResult<DateTime<Utc>> {
    timestamp
        .parse()
        .map_err(|e| ContentError::Internal(format!("bad sample date {timestamp}: {e}")))
}

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?q=80&w={width}&auto=format&fit=crop")
}

pub fn sample_events() -> ContentResult<Vec<NewEvent>> {
    Ok(vec![
        NewEvent {
            title: "Valorant Showdown 2024".into(),
            description: "Inter-college 5v5 tournament with live shoutcasting.".into(),
            date: utc("2024-10-12T14:00:00Z")?,
            game: "Valorant".into(),
            location: "Main Auditorium + Twitch".into(),
            cover_image: Some(unsplash("photo-1605647512339-1644ff3d63a8", 1600)),
            gallery_urls: Vec::new(),
            status: EventStatus::Past,
        },
        NewEvent {
            title: "Rocket League Freshers Cup".into(),
            description: "2v2 rocket-powered soccer spectacular.".into(),
            date: utc("2025-01-20T16:00:00Z")?,
            game: "Rocket League".into(),
            location: "Esports Lab".into(),
            cover_image: Some(unsplash("photo-1511735111819-9a3f7709049c", 1600)),
            gallery_urls: Vec::new(),
            status: EventStatus::Upcoming,
        },
        NewEvent {
            title: "CS2 LAN Night".into(),
            description: "Casual brackets, pro vibes. BYO peripherals.".into(),
            date: utc("2024-11-05T18:30:00Z")?,
            game: "Counter-Strike 2".into(),
            location: "Innovation Hub".into(),
            cover_image: Some(unsplash("photo-1542751371-adc38448a05e", 1600)),
            gallery_urls: Vec::new(),
            status: EventStatus::Past,
        },
    ])
}

pub fn sample_team() -> Vec<NewTeamMember> {
    vec![
        NewTeamMember {
            name: "Aarav Kapoor".into(),
            role: "President".into(),
            avatar_url: Some(unsplash("photo-1547425260-76bcadfb4f2c", 800)),
            twitter: Some(String::new()),
            instagram: Some("@aarav.gg".into()),
            discord: Some("aarav#1024".into()),
            bio: Some("Leading the charge to make campus esports legendary.".into()),
        },
        NewTeamMember {
            name: "Meera Shah".into(),
            role: "Events Lead".into(),
            avatar_url: Some(unsplash("photo-1544005313-94ddf0286df2", 800)),
            twitter: None,
            instagram: Some("@meeracalls".into()),
            discord: Some("meerashah#2255".into()),
            bio: Some("Crafting unforgettable brackets and hype moments.".into()),
        },
        NewTeamMember {
            name: "Rohan Das".into(),
            role: "Broadcast & Production".into(),
            avatar_url: Some(unsplash("photo-1527980965255-d3b416303d12", 800)),
            twitter: None,
            instagram: Some("@rohancuts".into()),
            discord: Some("rohandas#7744".into()),
            bio: Some("Cameras, overlays, replays – all the magic behind the stream.".into()),
        },
    ]
}

pub fn sample_gallery() -> Vec<NewGalleryImage> {
    [
        ("photo-1542751110-97427bbecf20", "LAN vibes"),
        ("photo-1511512578047-dfb367046420", "Clutch moment"),
        ("photo-1511379938547-c1f69419868d", "Caster desk"),
        ("photo-1505740420928-5e560c06d30e", "Headset check"),
    ]
    .into_iter()
    .map(|(photo, caption)| NewGalleryImage {
        url: unsplash(photo, 1600),
        caption: Some(caption.into()),
        event_id: None,
    })
    .collect()
}

/// Insert `records` when the collection holds nothing yet.
async fn seed_collection<S, T>(store: &S, records: Vec<T>) -> ContentResult<usize>
where
    S: DocumentStore + ?Sized,
    T: NewRecord,
{
    let existing = store.count(T::KIND, doc! {}).await?;
    if existing > 0 {
        debug!(collection = %T::KIND, existing, "Collection not empty, skipping seed");
        return Ok(0);
    }

    for record in &records {
        record.validate()?;
    }
    for record in &records {
        store.create_document(T::KIND, record.to_document()).await?;
    }

    info!(collection = %T::KIND, inserted = records.len(), "Seeded collection");
    Ok(records.len())
}

/// Seed events, team members and gallery images, in that order.
///
/// Does nothing when the store is unavailable. Stops at the first failure;
/// collections seeded before it keep their records.
#[instrument(skip(store))]
pub async fn seed_if_empty<S>(store: &S) -> ContentResult<SeedReport>
where
    S: DocumentStore + ?Sized,
{
    if !store.is_available() {
        debug!("Document store unavailable, skipping seed");
        return Ok(SeedReport::default());
    }

    Ok(SeedReport {
        events: seed_collection(store, sample_events()?).await?,
        team_members: seed_collection(store, sample_team()).await?,
        gallery_images: seed_collection(store, sample_gallery()).await?,
    })
}
