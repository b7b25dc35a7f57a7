mod analysis;
mod assessment;
mod careers;
mod config;
mod dashboard;
mod db;
mod errors;
mod journal;
mod models;
mod recommendation;
mod routes;
mod state;
mod store;
#[cfg(test)]
mod testing;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::careers::seed::seed_catalog_if_empty;
use crate::config::Config;
use crate::db::create_pool;
use crate::recommendation::scoring::WeightedCosineScorer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::{MemoryStore, PgStore, Store};

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

    info!("Starting Niyati API v{}", env!("CARGO_PKG_VERSION"));

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            info!("PostgreSQL store initialized");
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set; using in-memory store (data is lost on restart)");
            Arc::new(MemoryStore::new())
        }
    };

    if config.seed_catalog {
        let inserted = seed_catalog_if_empty(store.as_ref()).await?;
        if inserted > 0 {
            info!("Seeded career catalog with {inserted} careers");
        }
    }

    let scorer = Arc::new(WeightedCosineScorer::default());
    info!(
        "Recommendation settings: top {} careers from last {} journal entries",
        config.recommendation_limit, config.journal_history_limit
    );

    let state = AppState {
        store,
        scorer,
        config: config.clone(),
    };

    // TODO: restrict allowed origins once the web client has a fixed host
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {e}");
            }
            info!("Shutting down...");
        })
        .await?;

    Ok(())
}
