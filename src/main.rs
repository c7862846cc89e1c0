//! Contacts Web - Main entry point
//!
//! Builds the contact store, validates the resource paths and serves the
//! contact pages until interrupted.

use anyhow::Result;
use contacts_web::repositories::{ContactRepository, InMemoryContactRepository};
use contacts_web::server::{self, AppState, ResourcePaths};
use contacts_web::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first: it names the fallback log level
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let paths = match ResourcePaths::default().validated() {
        Ok(paths) => paths,
        Err(e) => {
            error!("Invalid resource paths: {}", e);
            return Err(e.into());
        }
    };

    let store = if config.seed_fixtures {
        InMemoryContactRepository::populated()
    } else {
        InMemoryContactRepository::new()
    };
    info!("Contact store ready with {} contacts", store.len());

    let repo = Arc::new(store) as Arc<dyn ContactRepository>;
    let state = AppState::new(repo, paths, &config);

    server::run_server(&config, state).await?;

    info!("Contacts Web shutdown complete");
    Ok(())
}
