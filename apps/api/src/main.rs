mod auth;
mod catalog;
mod config;
mod errors;
mod matching;
mod profile;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::HttpIdentityProvider;
use crate::catalog::Catalog;
use crate::config::Config;
use crate::profile::store::{MemoryProfileStore, ProfileStore, RedisProfileStore};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Career catalog is fixed for the life of the process
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    info!("Career catalog ready ({} careers)", catalog.len());

    // Profile store: Redis when configured, process memory otherwise
    let profiles: Arc<dyn ProfileStore> = match &config.redis_url {
        Some(url) => {
            let client = redis::Client::open(url.as_str())?;
            info!("Redis profile store initialized");
            Arc::new(RedisProfileStore::new(client))
        }
        None => {
            warn!("REDIS_URL not set; profiles are kept in memory and lost on restart");
            Arc::new(MemoryProfileStore::default())
        }
    };

    let identity = Arc::new(HttpIdentityProvider::new(
        config.auth_url.clone(),
        config.auth_service_key.clone(),
    ));
    info!("Identity provider: {}", config.auth_url);

    let state = AppState {
        catalog: Arc::new(catalog),
        profiles,
        identity,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
