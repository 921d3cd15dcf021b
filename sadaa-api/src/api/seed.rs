//! Database seeding endpoint
//!
//! Destructive reset of the catalog with a fixed sample set. Users,
//! favorites and playlists are untouched, so favorites pointing at a
//! previous generation of seed ids go stale (and are dropped on read).

use axum::{extract::State, Json};
use serde_json::{json, Value};

use sadaa_common::db::{insert_instrumental, Instrumental, InstrumentalCreate};
use sadaa_common::human_time::format_duration;

use crate::error::ApiError;
use crate::AppState;

/// Fixed sample catalog: (title, mood, duration, is_premium, is_featured,
/// thumbnail_color). 2 featured, 5 free, 8 premium.
const SAMPLE_INSTRUMENTALS: &[(&str, &str, i64, bool, bool, &str)] = &[
    // Featured
    ("Mawla Ya Salli - Peaceful", "Spiritual", 245, false, true, "#4A3463"),
    ("Nasheed of Dawn", "Calm", 312, true, true, "#2D5A4A"),
    // Free
    ("Morning Dhikr", "Calm", 180, false, false, "#5A4A63"),
    ("Peaceful Heart", "Soft", 210, false, false, "#4A5A63"),
    ("Blessed Sunrise", "Spiritual", 195, false, false, "#634A5A"),
    ("Gentle Breeze", "Calm", 240, false, false, "#4A6357"),
    ("Silent Prayer", "Soft", 165, false, false, "#574A63"),
    // Premium
    ("Ya Sahib al-Taj", "Spiritual", 420, true, false, "#634A4A"),
    ("Drums of Devotion", "Drums", 285, true, false, "#8B5A2B"),
    ("Energetic Praise", "Energetic", 198, true, false, "#6B4A3A"),
    ("Sacred Rhythm", "Drums", 330, true, false, "#4A4A63"),
    ("Night of Peace", "Calm", 480, true, false, "#2A3A4A"),
    ("Joyful Celebration", "Energetic", 252, true, false, "#5A3A4A"),
    ("Soft Meditation", "Soft", 360, true, false, "#3A4A5A"),
    ("Divine Harmony", "Spiritual", 390, true, false, "#4A3A5A"),
];

// Premium tracks get a 30-second preview window starting at 0:30
const PREVIEW_START: i64 = 30;
const PREVIEW_END: i64 = 60;

// Rough size estimate at 256 kbps, good enough for the client's
// download-size display
const BYTES_PER_SECOND: i64 = 32_000;

/// Build the sample records with fresh ids
pub fn sample_instrumentals() -> Vec<Instrumental> {
    SAMPLE_INSTRUMENTALS
        .iter()
        .map(|&(title, mood, duration, is_premium, is_featured, color)| {
            InstrumentalCreate {
                title: title.to_string(),
                mood: mood.to_string(),
                duration,
                duration_formatted: format_duration(duration),
                is_premium,
                is_featured,
                audio_url: None,
                thumbnail_color: color.to_string(),
                file_size: Some(duration * BYTES_PER_SECOND),
                preview_start: is_premium.then_some(PREVIEW_START),
                preview_end: is_premium.then_some(PREVIEW_END),
            }
            .into_instrumental()
        })
        .collect()
}

/// POST /api/seed
///
/// Clears the instrumentals collection, then inserts the sample set.
/// Replaces rather than appends: a second call leaves the same count.
pub async fn seed_database(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    sqlx::query("DELETE FROM instrumentals")
        .execute(&state.db)
        .await?;

    let records = sample_instrumentals();
    for record in &records {
        insert_instrumental(&state.db, record).await?;
    }

    Ok(Json(json!({
        "message": format!("Seeded {} instrumentals", records.len()),
    })))
}
