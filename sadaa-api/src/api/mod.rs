//! HTTP API handlers for sadaa-api

pub mod admin;
pub mod catalog;
pub mod favorites;
pub mod health;
pub mod playlists;
pub mod seed;
pub mod subscription;
pub mod users;

pub use admin::admin_stats;
pub use catalog::{
    create_instrumental, delete_instrumental, get_featured_instrumentals, get_instrumental,
    get_instrumentals, get_moods, increment_play_count, update_instrumental,
};
pub use favorites::{add_favorite, check_favorite, list_favorites, remove_favorite};
pub use health::{api_root, health_routes};
pub use playlists::{
    add_playlist_track, create_playlist, delete_playlist, get_playlist_detail, list_playlists,
    remove_playlist_track, update_playlist,
};
pub use seed::seed_database;
pub use subscription::{restore_subscription, subscribe, subscription_status};
pub use users::{create_or_get_user, get_user};
