//! sadaa-api library - HTTP service for the Sadaa Instrumentals catalog
//!
//! CRUD backend for the mobile app: instrumentals catalog, device-keyed
//! users, favorites, playlists and a mocked subscription flow.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod error;

/// Application state shared across HTTP handlers
///
/// The pool is the only shared resource; handlers keep no other state
/// between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
///
/// All resource routes live under `/api`; the health endpoint sits at the
/// root. CORS is fully open (mobile clients call from arbitrary origins
/// and nothing here requires credentials).
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    let api = Router::new()
        .route("/", get(api::api_root))
        .route("/seed", post(api::seed_database))
        .route(
            "/instrumentals",
            get(api::get_instrumentals).post(api::create_instrumental),
        )
        .route("/instrumentals/featured", get(api::get_featured_instrumentals))
        .route(
            "/instrumentals/:id",
            get(api::get_instrumental)
                .put(api::update_instrumental)
                .delete(api::delete_instrumental),
        )
        .route("/instrumentals/:id/play", post(api::increment_play_count))
        .route("/moods", get(api::get_moods))
        .route("/users", post(api::create_or_get_user))
        .route("/users/:id", get(api::get_user))
        .route("/favorites/:user_id", get(api::list_favorites))
        .route(
            "/favorites/:user_id/:track_id",
            post(api::add_favorite).delete(api::remove_favorite),
        )
        .route("/favorites/:user_id/check/:track_id", get(api::check_favorite))
        .route("/playlists", post(api::create_playlist))
        .route(
            "/playlists/:id",
            get(api::list_playlists)
                .put(api::update_playlist)
                .delete(api::delete_playlist),
        )
        .route("/playlists/detail/:playlist_id", get(api::get_playlist_detail))
        .route(
            "/playlists/:id/tracks/:track_id",
            post(api::add_playlist_track).delete(api::remove_playlist_track),
        )
        .route("/subscription/subscribe", post(api::subscribe))
        .route("/subscription/status/:user_id", get(api::subscription_status))
        .route("/subscription/restore/:user_id", post(api::restore_subscription))
        .route("/admin/stats", get(api::admin_stats));

    Router::new()
        .nest("/api", api)
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
