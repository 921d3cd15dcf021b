//! Playlist endpoints
//!
//! Playlists are user-owned ordered track lists. Track membership lives in
//! `playlist_tracks` with an explicit position; re-adding a track is
//! ignored, so it keeps its original playback slot. Any mutation refreshes
//! updated_at. Ownership is not enforced against the users table.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use sadaa_common::db::{
    insert_playlist, playlist_by_id, playlist_track_ids, Instrumental, Playlist, PlaylistCreate,
    PlaylistPatch,
};

use crate::error::ApiError;
use crate::AppState;

/// Playlist plus its resolved track records in playback order
#[derive(Debug, Serialize)]
pub struct PlaylistDetail {
    pub playlist: Playlist,
    pub tracks: Vec<Instrumental>,
}

/// GET /api/playlists/:user_id
pub async fn list_playlists(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Playlist>>, ApiError> {
    let mut playlists =
        sqlx::query_as::<_, Playlist>("SELECT * FROM playlists WHERE user_id = ? LIMIT 50")
            .bind(&user_id)
            .fetch_all(&state.db)
            .await?;

    for playlist in &mut playlists {
        playlist.track_ids = playlist_track_ids(&state.db, &playlist.id).await?;
    }

    Ok(Json(playlists))
}

/// GET /api/playlists/detail/:playlist_id
///
/// Track order follows track_ids; ids missing from the catalog are
/// silently omitted (the join drops them).
pub async fn get_playlist_detail(
    State(state): State<AppState>,
    Path(playlist_id): Path<String>,
) -> Result<Json<PlaylistDetail>, ApiError> {
    let playlist = playlist_by_id(&state.db, &playlist_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    let tracks = sqlx::query_as::<_, Instrumental>(
        r#"
        SELECT i.* FROM playlist_tracks t
        JOIN instrumentals i ON i.id = t.instrumental_id
        WHERE t.playlist_id = ?
        ORDER BY t.position
        "#,
    )
    .bind(&playlist_id)
    .fetch_all(&state.db)
    .await?;

    Ok(Json(PlaylistDetail { playlist, tracks }))
}

/// POST /api/playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    Json(payload): Json<PlaylistCreate>,
) -> Result<Json<Playlist>, ApiError> {
    let playlist = payload.into_playlist();
    insert_playlist(&state.db, &playlist).await?;
    Ok(Json(playlist))
}

/// PUT /api/playlists/:id
///
/// Merges non-null fields; updated_at is refreshed even when the patch is
/// otherwise empty.
pub async fn update_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<PlaylistPatch>,
) -> Result<Json<Playlist>, ApiError> {
    let mut playlist = playlist_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    patch.apply(&mut playlist);

    sqlx::query(
        "UPDATE playlists SET name = ?, description = ?, cover_color = ?, updated_at = ? WHERE id = ?",
    )
    .bind(&playlist.name)
    .bind(&playlist.description)
    .bind(&playlist.cover_color)
    .bind(playlist.updated_at)
    .bind(&playlist.id)
    .execute(&state.db)
    .await?;

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
pub async fn delete_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Playlist not found".to_string()));
    }

    // Track rows belong to the playlist, so they go with it
    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Playlist deleted" })))
}

/// POST /api/playlists/:id/tracks/:track_id
///
/// Idempotent: a track already present keeps its position. No existence
/// check against the catalog.
pub async fn add_playlist_track(
    State(state): State<AppState>,
    Path((id, track_id)): Path<(String, String)>,
) -> Result<Json<Playlist>, ApiError> {
    let mut playlist = playlist_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    sqlx::query(
        r#"
        INSERT OR IGNORE INTO playlist_tracks (playlist_id, instrumental_id, position)
        VALUES (?, ?, (SELECT COALESCE(MAX(position) + 1, 0) FROM playlist_tracks WHERE playlist_id = ?))
        "#,
    )
    .bind(&id)
    .bind(&track_id)
    .bind(&id)
    .execute(&state.db)
    .await?;

    playlist.updated_at = Utc::now();
    touch_playlist(&state, &playlist).await?;

    playlist.track_ids = playlist_track_ids(&state.db, &id).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id/tracks/:track_id
///
/// Removing an absent track is a success no-op (updated_at still moves).
pub async fn remove_playlist_track(
    State(state): State<AppState>,
    Path((id, track_id)): Path<(String, String)>,
) -> Result<Json<Playlist>, ApiError> {
    let mut playlist = playlist_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

    sqlx::query("DELETE FROM playlist_tracks WHERE playlist_id = ? AND instrumental_id = ?")
        .bind(&id)
        .bind(&track_id)
        .execute(&state.db)
        .await?;

    playlist.updated_at = Utc::now();
    touch_playlist(&state, &playlist).await?;

    playlist.track_ids = playlist_track_ids(&state.db, &id).await?;
    Ok(Json(playlist))
}

async fn touch_playlist(state: &AppState, playlist: &Playlist) -> Result<(), ApiError> {
    sqlx::query("UPDATE playlists SET updated_at = ? WHERE id = ?")
        .bind(playlist.updated_at)
        .bind(&playlist.id)
        .execute(&state.db)
        .await?;
    Ok(())
}
