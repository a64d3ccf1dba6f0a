//! # folio-server
//!
//! Content API for the portfolio site.
//!
//! This binary provides:
//! - **Read endpoints** for the profile, services, projects, education and
//!   experience documents held in the SQLite content store
//! - **Contact relay** that validates a visitor's message and forwards it to
//!   the site owner over SMTP
//! - **Health checks** for uptime probes

mod api;
mod config;
mod error;
mod mailer;

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use folio_store::{Database, SqliteRepository};

use crate::api::AppState;
use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Initialize tracing (respects RUST_LOG env var)
    // -----------------------------------------------------------------------
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,folio_server=debug,folio_store=info")),
        )
        .init();

    info!("Starting portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // -----------------------------------------------------------------------
    // 2. Load configuration
    // -----------------------------------------------------------------------
    let config = ServerConfig::from_env();
    info!(?config, "Loaded configuration");

    // -----------------------------------------------------------------------
    // 3. Open the content store (fatal on failure)
    // -----------------------------------------------------------------------
    let db_path = config
        .database_path
        .clone()
        .context("DATABASE_PATH is not set; refusing to start without a content store")?;
    let db = Database::open_at(&db_path)
        .with_context(|| format!("Failed to open content store at {}", db_path.display()))?;

    if let Some(seed_path) = &config.seed_path {
        db.seed_if_empty(seed_path)
            .with_context(|| format!("Failed to seed from {}", seed_path.display()))?;
    }

    let repo = Arc::new(SqliteRepository::new(db));

    // -----------------------------------------------------------------------
    // 4. Outbound mail (optional)
    // -----------------------------------------------------------------------
    let mailer = mailer::from_settings(config.mail.as_ref());

    let http_addr = config.http_addr;
    let app_state = AppState {
        repo,
        mailer,
        config: Arc::new(config),
    };

    // -----------------------------------------------------------------------
    // 5. Run the HTTP API server (blocks until shutdown)
    // -----------------------------------------------------------------------
    tokio::select! {
        result = api::serve(app_state, http_addr) => {
            if let Err(e) = result {
                tracing::error!(error = %e, "HTTP server failed");
                return Err(e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
        }
    }

    Ok(())
}
