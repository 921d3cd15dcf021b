//! Instrumentals catalog endpoints
//!
//! Filtered listing, featured subset, CRUD and the play-count analytics
//! increment. Listing filters compose with AND; the mood filter treats
//! "All" as absent. Results carry the store's natural order, capped at
//! 100 rows (10 for featured).

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::{QueryBuilder, Sqlite};

use sadaa_common::db::{
    insert_instrumental, instrumental_by_id, update_instrumental as write_instrumental,
    Instrumental, InstrumentalCreate, InstrumentalPatch, MOODS,
};

use crate::error::ApiError;
use crate::AppState;

/// Query parameters for catalog listing
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Mood filter; the sentinel "All" disables it
    pub mood: Option<String>,
    pub is_premium: Option<bool>,
    /// Case-insensitive substring match against title
    pub search: Option<String>,
}

/// GET /api/instrumentals
pub async fn get_instrumentals(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Instrumental>>, ApiError> {
    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT * FROM instrumentals WHERE 1 = 1");

    if let Some(mood) = &query.mood {
        // An empty mood (bare `?mood=`) disables the filter like "All"
        if !mood.is_empty() && mood != "All" {
            qb.push(" AND mood = ").push_bind(mood);
        }
    }

    if let Some(is_premium) = query.is_premium {
        qb.push(" AND is_premium = ").push_bind(is_premium);
    }

    if let Some(search) = &query.search {
        let pattern = format!("%{}%", search.to_lowercase());
        qb.push(" AND LOWER(title) LIKE ").push_bind(pattern);
    }

    qb.push(" LIMIT 100");

    let records = qb
        .build_query_as::<Instrumental>()
        .fetch_all(&state.db)
        .await?;
    Ok(Json(records))
}

/// GET /api/instrumentals/featured
pub async fn get_featured_instrumentals(
    State(state): State<AppState>,
) -> Result<Json<Vec<Instrumental>>, ApiError> {
    let records = sqlx::query_as::<_, Instrumental>(
        "SELECT * FROM instrumentals WHERE is_featured = 1 LIMIT 10",
    )
    .fetch_all(&state.db)
    .await?;
    Ok(Json(records))
}

/// GET /api/instrumentals/:id
pub async fn get_instrumental(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Instrumental>, ApiError> {
    let record = instrumental_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Instrumental not found".to_string()))?;
    Ok(Json(record))
}

/// POST /api/instrumentals
pub async fn create_instrumental(
    State(state): State<AppState>,
    Json(payload): Json<InstrumentalCreate>,
) -> Result<Json<Instrumental>, ApiError> {
    let record = payload.into_instrumental();
    insert_instrumental(&state.db, &record).await?;
    Ok(Json(record))
}

/// PUT /api/instrumentals/:id
///
/// Merges only fields present in the payload; a payload with no fields at
/// all is rejected. Absent fields stay untouched, so a field cannot be
/// explicitly cleared through this endpoint.
pub async fn update_instrumental(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<InstrumentalPatch>,
) -> Result<Json<Instrumental>, ApiError> {
    if patch.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }

    let mut record = instrumental_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Instrumental not found".to_string()))?;

    patch.apply(&mut record);
    write_instrumental(&state.db, &record).await?;
    Ok(Json(record))
}

/// DELETE /api/instrumentals/:id
///
/// Does not cascade: favorites and playlists keep their (now stale)
/// references, which the read paths silently drop.
pub async fn delete_instrumental(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let result = sqlx::query("DELETE FROM instrumentals WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound("Instrumental not found".to_string()));
    }

    Ok(Json(json!({ "message": "Instrumental deleted" })))
}

/// POST /api/instrumentals/:id/play
///
/// Atomic counter bump with no existence check: an unknown id is a silent
/// success, unlike the other mutators. Known inconsistency, kept because
/// the client fires this on every playback start and does not care.
pub async fn increment_play_count(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    sqlx::query("UPDATE instrumentals SET play_count = play_count + 1 WHERE id = ?")
        .bind(&id)
        .execute(&state.db)
        .await?;

    Ok(Json(json!({ "message": "Play count incremented" })))
}

/// GET /api/moods
pub async fn get_moods() -> Json<Value> {
    Json(json!({ "moods": MOODS }))
}
