//! User endpoints
//!
//! Identity is a client-supplied device string; there is no credential or
//! session behind it. Users are created lazily on first contact.

use axum::{
    extract::{Path, State},
    Json,
};

use sadaa_common::db::{insert_user, user_by_device_id, user_by_id, User, UserCreate};

use crate::error::ApiError;
use crate::AppState;

/// POST /api/users
///
/// Create-or-get by device id. An existing user is returned verbatim (no
/// field refresh); otherwise a fresh unsubscribed user is persisted.
pub async fn create_or_get_user(
    State(state): State<AppState>,
    Json(payload): Json<UserCreate>,
) -> Result<Json<User>, ApiError> {
    if let Some(existing) = user_by_device_id(&state.db, &payload.device_id).await? {
        return Ok(Json(existing));
    }

    let user = User::new(payload.device_id);
    insert_user(&state.db, &user).await?;
    Ok(Json(user))
}

/// GET /api/users/:id
///
/// Lookup by internal id (not device id).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = user_by_id(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}
