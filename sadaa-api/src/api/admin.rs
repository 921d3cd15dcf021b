//! Aggregate stats endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::AppState;

/// Aggregate counts across all collections
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub instrumentals: i64,
    pub users: i64,
    pub playlists: i64,
    pub subscriptions: i64,
    pub total_plays: i64,
}

/// GET /api/admin/stats
pub async fn admin_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let instrumentals = count(&state, "instrumentals").await?;
    let users = count(&state, "users").await?;
    let playlists = count(&state, "playlists").await?;
    let subscriptions = count(&state, "subscriptions").await?;

    let total_plays =
        sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(play_count), 0) FROM instrumentals")
            .fetch_one(&state.db)
            .await?;

    Ok(Json(StatsResponse {
        instrumentals,
        users,
        playlists,
        subscriptions,
        total_plays,
    }))
}

async fn count(state: &AppState, table: &str) -> Result<i64, ApiError> {
    // Table names come from the fixed list above, never from the request
    let n = sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(&state.db)
        .await?;
    Ok(n)
}
