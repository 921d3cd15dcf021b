//! Entity models and request/patch types
//!
//! Field types mirror what the mobile client sends and expects. Note that
//! `mood` and `plan` are stored as free strings: the enumerated values the
//! client uses are published via `/api/moods` and the plan table, but the
//! server deliberately does not reject other values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Moods known to the client, with the "All" sentinel used to disable the
/// mood filter on catalog listings.
pub const MOODS: [&str; 6] = ["All", "Calm", "Drums", "Spiritual", "Soft", "Energetic"];

/// Default gradient color for catalog cards and playlist covers
pub const DEFAULT_THUMBNAIL_COLOR: &str = "#4A3463";

/// A single catalog audio track
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Instrumental {
    pub id: String,
    pub title: String,
    /// Calm, Drums, Spiritual, Soft, Energetic (not validated server-side)
    pub mood: String,
    /// Track length in seconds
    pub duration: i64,
    /// Display string, e.g. "3:45" (stored, not derived from `duration`)
    pub duration_formatted: String,
    pub is_premium: bool,
    pub is_featured: bool,
    /// Opaque reference into external storage; audio bytes never pass
    /// through this service
    pub audio_url: Option<String>,
    pub thumbnail_color: String,
    /// Size of the audio file in bytes, when known
    pub file_size: Option<i64>,
    pub play_count: i64,
    /// Preview window in seconds, meaningful for premium tracks
    pub preview_start: Option<i64>,
    pub preview_end: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating an instrumental; id and created_at are generated
#[derive(Debug, Clone, Deserialize)]
pub struct InstrumentalCreate {
    pub title: String,
    pub mood: String,
    pub duration: i64,
    pub duration_formatted: String,
    #[serde(default)]
    pub is_premium: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default = "default_thumbnail_color")]
    pub thumbnail_color: String,
    #[serde(default)]
    pub file_size: Option<i64>,
    #[serde(default)]
    pub preview_start: Option<i64>,
    #[serde(default)]
    pub preview_end: Option<i64>,
}

fn default_thumbnail_color() -> String {
    DEFAULT_THUMBNAIL_COLOR.to_string()
}

impl InstrumentalCreate {
    /// Materialize a full record with a fresh id and timestamp
    pub fn into_instrumental(self) -> Instrumental {
        Instrumental {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            mood: self.mood,
            duration: self.duration,
            duration_formatted: self.duration_formatted,
            is_premium: self.is_premium,
            is_featured: self.is_featured,
            audio_url: self.audio_url,
            thumbnail_color: self.thumbnail_color,
            file_size: self.file_size,
            play_count: 0,
            preview_start: self.preview_start,
            preview_end: self.preview_end,
            created_at: Utc::now(),
        }
    }
}

/// Partial update for an instrumental. `None` means leave unchanged, so a
/// field cannot be explicitly cleared through this path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentalPatch {
    pub title: Option<String>,
    pub mood: Option<String>,
    pub duration: Option<i64>,
    pub duration_formatted: Option<String>,
    pub is_premium: Option<bool>,
    pub is_featured: Option<bool>,
    pub audio_url: Option<String>,
    pub thumbnail_color: Option<String>,
    pub file_size: Option<i64>,
    pub preview_start: Option<i64>,
    pub preview_end: Option<i64>,
}

impl InstrumentalPatch {
    /// True when every field is absent (such a patch is rejected)
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.mood.is_none()
            && self.duration.is_none()
            && self.duration_formatted.is_none()
            && self.is_premium.is_none()
            && self.is_featured.is_none()
            && self.audio_url.is_none()
            && self.thumbnail_color.is_none()
            && self.file_size.is_none()
            && self.preview_start.is_none()
            && self.preview_end.is_none()
    }

    /// Merge provided fields into an existing record
    pub fn apply(self, record: &mut Instrumental) {
        if let Some(v) = self.title {
            record.title = v;
        }
        if let Some(v) = self.mood {
            record.mood = v;
        }
        if let Some(v) = self.duration {
            record.duration = v;
        }
        if let Some(v) = self.duration_formatted {
            record.duration_formatted = v;
        }
        if let Some(v) = self.is_premium {
            record.is_premium = v;
        }
        if let Some(v) = self.is_featured {
            record.is_featured = v;
        }
        if let Some(v) = self.audio_url {
            record.audio_url = Some(v);
        }
        if let Some(v) = self.thumbnail_color {
            record.thumbnail_color = v;
        }
        if let Some(v) = self.file_size {
            record.file_size = Some(v);
        }
        if let Some(v) = self.preview_start {
            record.preview_start = Some(v);
        }
        if let Some(v) = self.preview_end {
            record.preview_end = Some(v);
        }
    }
}

/// A user record, keyed externally by device_id
///
/// Favorites live in the `user_favorites` relation and are hydrated by the
/// query layer before serialization.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    /// Client-generated identity, unique per device; no credential backs it
    pub device_id: String,
    /// Denormalized from the active subscription
    pub is_subscribed: bool,
    /// Set of instrumental ids; no ordering guarantee, no referential
    /// cleanup when a track is deleted
    #[sqlx(skip)]
    #[serde(default)]
    pub favorites: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for create-or-get by device id
#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub device_id: String,
}

impl User {
    /// Fresh unsubscribed user for a device id
    pub fn new(device_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            device_id,
            is_subscribed: false,
            favorites: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// A user-curated ordered collection of track references
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Playlist {
    pub id: String,
    /// Owning user; not enforced referentially
    pub user_id: String,
    pub name: String,
    pub description: Option<String>,
    /// Playback order; hydrated from `playlist_tracks` by the query layer
    #[sqlx(skip)]
    #[serde(default)]
    pub track_ids: Vec<String>,
    pub cover_color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a playlist
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistCreate {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_thumbnail_color")]
    pub cover_color: String,
}

impl PlaylistCreate {
    pub fn into_playlist(self) -> Playlist {
        let now = Utc::now();
        Playlist {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            name: self.name,
            description: self.description,
            track_ids: Vec::new(),
            cover_color: self.cover_color,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update for a playlist; updated_at is refreshed even when no
/// field is provided
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaylistPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_color: Option<String>,
}

impl PlaylistPatch {
    pub fn apply(self, record: &mut Playlist) {
        if let Some(v) = self.name {
            record.name = v;
        }
        if let Some(v) = self.description {
            record.description = Some(v);
        }
        if let Some(v) = self.cover_color {
            record.cover_color = v;
        }
        record.updated_at = Utc::now();
    }
}

/// A mocked subscription row; no real billing behind it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Subscription {
    pub id: String,
    pub user_id: String,
    pub is_active: bool,
    /// "monthly" or "yearly" (not validated server-side)
    pub plan: String,
    pub price: f64,
    pub subscribed_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fixed monthly price (INR)
pub const MONTHLY_PRICE: f64 = 53.0;
/// Fixed yearly price (INR)
pub const YEARLY_PRICE: f64 = 530.0;

/// Static price/term table: (price, duration in days).
///
/// Unrecognized plan strings fall back to monthly terms rather than being
/// rejected, matching the permissive validation stance elsewhere.
pub fn plan_terms(plan: &str) -> (f64, i64) {
    match plan {
        "yearly" => (YEARLY_PRICE, 365),
        _ => (MONTHLY_PRICE, 30),
    }
}

impl Subscription {
    /// New active subscription for a user, priced from the static table
    pub fn new(user_id: String, plan: String) -> Self {
        let (price, days) = plan_terms(&plan);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            is_active: true,
            plan,
            price,
            subscribed_at: now,
            expires_at: Some(now + chrono::Duration::days(days)),
        }
    }
}
