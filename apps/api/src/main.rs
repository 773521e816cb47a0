mod auth;
mod config;
mod errors;
mod models;
mod quiz;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::{ServerState, Storage};
use crate::store::{FileStorage, MemoryStorage, SessionHistory, StateStore};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting career advisor v{}", env!("CARGO_PKG_VERSION"));

    // Local storage lives in one JSON document; the session opens at START_PATH.
    let storage: Storage = match &config.state_file {
        Some(path) => {
            info!("Local storage at {}", path.display());
            Box::new(FileStorage::new(path))
        }
        None => {
            warn!("STATE_FILE is empty; state will not survive a restart");
            Box::new(MemoryStorage::new())
        }
    };
    let store = StateStore::open(storage, SessionHistory::new(config.start_path.clone()));
    info!(
        "Session opened on page '{}'",
        store.state().current_page.id()
    );

    let state = ServerState::new(store, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
