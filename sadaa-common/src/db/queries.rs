//! Shared row-level queries
//!
//! Handlers own their endpoint-specific SQL; the queries here are the ones
//! reused across resources, mostly record hydration (favorites and
//! playlist track lists live in relation tables and are folded back into
//! the entity structs before serialization).

use crate::db::models::{Instrumental, Playlist, Subscription, User};
use crate::Result;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// Fetch a single instrumental by id
pub async fn instrumental_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Instrumental>> {
    let record = sqlx::query_as::<_, Instrumental>("SELECT * FROM instrumentals WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(record)
}

/// Fetch instrumentals matching any of `ids`. Ids missing from the catalog
/// are silently absent from the result; no ordering guarantee.
pub async fn instrumentals_by_ids(pool: &SqlitePool, ids: &[String]) -> Result<Vec<Instrumental>> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM instrumentals WHERE id IN (");
    let mut separated = qb.separated(", ");
    for id in ids {
        separated.push_bind(id);
    }
    separated.push_unseparated(")");

    let records = qb
        .build_query_as::<Instrumental>()
        .fetch_all(pool)
        .await?;
    Ok(records)
}

/// Persist a full instrumental record
pub async fn insert_instrumental(pool: &SqlitePool, record: &Instrumental) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO instrumentals
            (id, title, mood, duration, duration_formatted, is_premium, is_featured,
             audio_url, thumbnail_color, file_size, play_count, preview_start, preview_end, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&record.id)
    .bind(&record.title)
    .bind(&record.mood)
    .bind(record.duration)
    .bind(&record.duration_formatted)
    .bind(record.is_premium)
    .bind(record.is_featured)
    .bind(&record.audio_url)
    .bind(&record.thumbnail_color)
    .bind(record.file_size)
    .bind(record.play_count)
    .bind(record.preview_start)
    .bind(record.preview_end)
    .bind(record.created_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Write back a merged instrumental record (full-row update)
pub async fn update_instrumental(pool: &SqlitePool, record: &Instrumental) -> Result<()> {
    sqlx::query(
        r#"
        UPDATE instrumentals SET
            title = ?, mood = ?, duration = ?, duration_formatted = ?,
            is_premium = ?, is_featured = ?, audio_url = ?, thumbnail_color = ?,
            file_size = ?, preview_start = ?, preview_end = ?
        WHERE id = ?
        "#,
    )
    .bind(&record.title)
    .bind(&record.mood)
    .bind(record.duration)
    .bind(&record.duration_formatted)
    .bind(record.is_premium)
    .bind(record.is_featured)
    .bind(&record.audio_url)
    .bind(&record.thumbnail_color)
    .bind(record.file_size)
    .bind(record.preview_start)
    .bind(record.preview_end)
    .bind(&record.id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Favorite track ids for a user (unordered set)
pub async fn favorite_ids(pool: &SqlitePool, user_id: &str) -> Result<Vec<String>> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT instrumental_id FROM user_favorites WHERE user_id = ?",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

async fn hydrate_user(pool: &SqlitePool, mut user: User) -> Result<User> {
    user.favorites = favorite_ids(pool, &user.id).await?;
    Ok(user)
}

/// Fetch a user by internal id, with favorites hydrated
pub async fn user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match user {
        Some(u) => Ok(Some(hydrate_user(pool, u).await?)),
        None => Ok(None),
    }
}

/// Fetch a user by device id, with favorites hydrated
pub async fn user_by_device_id(pool: &SqlitePool, device_id: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE device_id = ?")
        .bind(device_id)
        .fetch_optional(pool)
        .await?;
    match user {
        Some(u) => Ok(Some(hydrate_user(pool, u).await?)),
        None => Ok(None),
    }
}

/// Persist a new user
pub async fn insert_user(pool: &SqlitePool, user: &User) -> Result<()> {
    sqlx::query("INSERT INTO users (id, device_id, is_subscribed, created_at) VALUES (?, ?, ?, ?)")
        .bind(&user.id)
        .bind(&user.device_id)
        .bind(user.is_subscribed)
        .bind(user.created_at)
        .execute(pool)
        .await?;
    Ok(())
}

/// Track ids for a playlist in playback order
pub async fn playlist_track_ids(pool: &SqlitePool, playlist_id: &str) -> Result<Vec<String>> {
    let ids = sqlx::query_scalar::<_, String>(
        "SELECT instrumental_id FROM playlist_tracks WHERE playlist_id = ? ORDER BY position",
    )
    .bind(playlist_id)
    .fetch_all(pool)
    .await?;
    Ok(ids)
}

/// Fetch a playlist by id, with track_ids hydrated
pub async fn playlist_by_id(pool: &SqlitePool, id: &str) -> Result<Option<Playlist>> {
    let playlist = sqlx::query_as::<_, Playlist>("SELECT * FROM playlists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    match playlist {
        Some(mut p) => {
            p.track_ids = playlist_track_ids(pool, &p.id).await?;
            Ok(Some(p))
        }
        None => Ok(None),
    }
}

/// Persist a new playlist (track list starts empty, no relation rows)
pub async fn insert_playlist(pool: &SqlitePool, playlist: &Playlist) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO playlists (id, user_id, name, description, cover_color, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&playlist.id)
    .bind(&playlist.user_id)
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(&playlist.cover_color)
    .bind(playlist.created_at)
    .bind(playlist.updated_at)
    .execute(pool)
    .await?;
    Ok(())
}

/// Active subscription for a user, if any.
///
/// A row past its expiry is still returned as long as is_active has not
/// been flipped; expiry is applied lazily by the status endpoint.
pub async fn active_subscription(pool: &SqlitePool, user_id: &str) -> Result<Option<Subscription>> {
    let sub = sqlx::query_as::<_, Subscription>(
        "SELECT * FROM subscriptions WHERE user_id = ? AND is_active = 1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(sub)
}

/// Persist a new subscription row
pub async fn insert_subscription(pool: &SqlitePool, sub: &Subscription) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO subscriptions (id, user_id, is_active, plan, price, subscribed_at, expires_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&sub.id)
    .bind(&sub.user_id)
    .bind(sub.is_active)
    .bind(&sub.plan)
    .bind(sub.price)
    .bind(sub.subscribed_at)
    .bind(sub.expires_at)
    .execute(pool)
    .await?;
    Ok(())
}
