//! Mocked subscription endpoints
//!
//! No billing provider sits behind this: subscribe writes a priced row
//! and flips the user's denormalized flag. Expiry is soft; it is applied
//! on status reads, never by a background job. The restore endpoint
//! reports the active row verbatim without the expiry check.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use sadaa_common::db::{active_subscription, insert_subscription, Subscription};

use crate::error::ApiError;
use crate::AppState;

/// Payload for POST /api/subscription/subscribe
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    pub user_id: String,
    /// "monthly" or "yearly"; defaults to monthly
    #[serde(default = "default_plan")]
    pub plan: String,
}

fn default_plan() -> String {
    "monthly".to_string()
}

/// Response for GET /api/subscription/status/:user_id
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub is_subscribed: bool,
    pub subscription: Option<Subscription>,
}

/// POST /api/subscription/subscribe
///
/// Idempotent while a subscription is active: the existing row is
/// returned unchanged, with no plan-change path. The lookup and insert
/// are not wrapped in a transaction, so two concurrent calls for the same
/// user can both insert; accepted for this mocked flow.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(payload): Json<SubscribeRequest>,
) -> Result<Json<Subscription>, ApiError> {
    if let Some(existing) = active_subscription(&state.db, &payload.user_id).await? {
        return Ok(Json(existing));
    }

    let subscription = Subscription::new(payload.user_id.clone(), payload.plan);
    insert_subscription(&state.db, &subscription).await?;

    sqlx::query("UPDATE users SET is_subscribed = 1 WHERE id = ?")
        .bind(&payload.user_id)
        .execute(&state.db)
        .await?;

    Ok(Json(subscription))
}

/// GET /api/subscription/status/:user_id
///
/// Lazy expiry: a row past expires_at is flipped inactive here (and the
/// user flag cleared) before reporting unsubscribed. A row never queried
/// stays "active" in storage however old it is.
pub async fn subscription_status(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<StatusResponse>, ApiError> {
    let subscription = match active_subscription(&state.db, &user_id).await? {
        Some(sub) => sub,
        None => {
            return Ok(Json(StatusResponse {
                is_subscribed: false,
                subscription: None,
            }))
        }
    };

    if let Some(expires_at) = subscription.expires_at {
        if expires_at < Utc::now() {
            sqlx::query("UPDATE subscriptions SET is_active = 0 WHERE id = ?")
                .bind(&subscription.id)
                .execute(&state.db)
                .await?;
            sqlx::query("UPDATE users SET is_subscribed = 0 WHERE id = ?")
                .bind(&user_id)
                .execute(&state.db)
                .await?;

            return Ok(Json(StatusResponse {
                is_subscribed: false,
                subscription: None,
            }));
        }
    }

    Ok(Json(StatusResponse {
        is_subscribed: true,
        subscription: Some(subscription),
    }))
}

/// POST /api/subscription/restore/:user_id
///
/// Reports whether an active row exists, without mutating anything and
/// without the expiry check the status endpoint performs.
pub async fn restore_subscription(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    match active_subscription(&state.db, &user_id).await? {
        Some(subscription) => Ok(Json(json!({
            "restored": true,
            "subscription": subscription,
        }))),
        None => Ok(Json(json!({
            "restored": false,
            "message": "No active subscription found to restore",
        }))),
    }
}
