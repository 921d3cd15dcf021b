//! Database initialization
//!
//! Creates the SQLite database on first run and brings the schema up
//! idempotently. Relation tables (`user_favorites`, `playlist_tracks`)
//! deliberately carry no FOREIGN KEY constraints: deleting an instrumental
//! must not cascade, and stale references are tolerated at read time.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Open (creating if needed) the database at `db_path` and initialize the
/// schema.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // WAL allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(&pool)
        .await?;

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&pool)
        .await?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Create all tables if missing (idempotent, safe to call repeatedly)
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    create_instrumentals_table(pool).await?;
    create_users_table(pool).await?;
    create_user_favorites_table(pool).await?;
    create_playlists_table(pool).await?;
    create_playlist_tracks_table(pool).await?;
    create_subscriptions_table(pool).await?;
    Ok(())
}

async fn create_instrumentals_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS instrumentals (
            id TEXT PRIMARY KEY NOT NULL,
            title TEXT NOT NULL,
            mood TEXT NOT NULL,
            duration INTEGER NOT NULL,
            duration_formatted TEXT NOT NULL,
            is_premium BOOLEAN NOT NULL DEFAULT 0,
            is_featured BOOLEAN NOT NULL DEFAULT 0,
            audio_url TEXT,
            thumbnail_color TEXT NOT NULL,
            file_size INTEGER,
            play_count INTEGER NOT NULL DEFAULT 0,
            preview_start INTEGER,
            preview_end INTEGER,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY NOT NULL,
            device_id TEXT NOT NULL UNIQUE,
            is_subscribed BOOLEAN NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_user_favorites_table(pool: &SqlitePool) -> Result<()> {
    // Composite primary key gives set semantics: INSERT OR IGNORE is the
    // idempotent insert, duplicates are impossible
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_favorites (
            user_id TEXT NOT NULL,
            instrumental_id TEXT NOT NULL,
            PRIMARY KEY (user_id, instrumental_id)
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_playlists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlists (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            name TEXT NOT NULL,
            description TEXT,
            cover_color TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_playlist_tracks_table(pool: &SqlitePool) -> Result<()> {
    // position is the playback order; re-adding an existing track is
    // ignored, so its original position is kept
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS playlist_tracks (
            playlist_id TEXT NOT NULL,
            instrumental_id TEXT NOT NULL,
            position INTEGER NOT NULL,
            PRIMARY KEY (playlist_id, instrumental_id)
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

async fn create_subscriptions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS subscriptions (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL,
            is_active BOOLEAN NOT NULL DEFAULT 1,
            plan TEXT NOT NULL,
            price REAL NOT NULL,
            subscribed_at TEXT NOT NULL,
            expires_at TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
