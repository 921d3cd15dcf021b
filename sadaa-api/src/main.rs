//! Sadaa Instrumentals API - Main entry point
//!
//! Serves the instrumentals catalog, user records, favorites, playlists
//! and the mocked subscription flow over HTTP/JSON.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sadaa_api::{build_router, AppState};

/// Command-line arguments for sadaa-api
#[derive(Parser, Debug)]
#[command(name = "sadaa-api")]
#[command(about = "HTTP backend for the Sadaa Instrumentals catalog")]
#[command(version)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "8001", env = "SADAA_PORT")]
    port: u16,

    /// Path to the SQLite database file (created on first run)
    #[arg(short, long, default_value = "sadaa.db", env = "SADAA_DATABASE")]
    database: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sadaa_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting Sadaa Instrumentals API v{}", env!("CARGO_PKG_VERSION"));
    info!("Database path: {}", args.database.display());

    let pool = sadaa_common::db::init_database(&args.database)
        .await
        .context("Failed to initialize database")?;

    let state = AppState::new(pool);
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("sadaa-api listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
