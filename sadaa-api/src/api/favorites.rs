//! Favorites endpoints
//!
//! Favorites are a set-valued relation on the user: inserts and removals
//! are idempotent, and nothing checks the track id against the catalog,
//! so a favorite can reference a since-deleted (or never-existing) track.
//! The list endpoint drops such stale ids when resolving.

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use sqlx::SqlitePool;

use sadaa_common::db::{favorite_ids, instrumentals_by_ids, Instrumental};

use crate::error::ApiError;
use crate::AppState;

async fn user_exists(pool: &SqlitePool, user_id: &str) -> Result<bool, ApiError> {
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM users WHERE id = ?")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;
    Ok(found.is_some())
}

/// GET /api/favorites/:user_id
///
/// Resolves the user's favorites set against the catalog. An empty set
/// short-circuits without a catalog query.
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Instrumental>>, ApiError> {
    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    let ids = favorite_ids(&state.db, &user_id).await?;
    if ids.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let records = instrumentals_by_ids(&state.db, &ids).await?;
    Ok(Json(records))
}

/// POST /api/favorites/:user_id/:track_id
pub async fn add_favorite(
    State(state): State<AppState>,
    Path((user_id, track_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    // OR IGNORE makes re-adding a no-op
    sqlx::query("INSERT OR IGNORE INTO user_favorites (user_id, instrumental_id) VALUES (?, ?)")
        .bind(&user_id)
        .bind(&track_id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Added to favorites" })))
}

/// DELETE /api/favorites/:user_id/:track_id
///
/// Removing an absent favorite is a success no-op.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Path((user_id, track_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    if !user_exists(&state.db, &user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    sqlx::query("DELETE FROM user_favorites WHERE user_id = ? AND instrumental_id = ?")
        .bind(&user_id)
        .bind(&track_id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Removed from favorites" })))
}

/// GET /api/favorites/:user_id/check/:track_id
///
/// Boolean check; a missing user answers false rather than 404.
pub async fn check_favorite(
    State(state): State<AppState>,
    Path((user_id, track_id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    let found = sqlx::query_scalar::<_, i64>(
        "SELECT 1 FROM user_favorites WHERE user_id = ? AND instrumental_id = ?",
    )
    .bind(&user_id)
    .bind(&track_id)
    .fetch_optional(&state.db)
    .await?;

    Ok(Json(json!({ "is_favorite": found.is_some() })))
}
