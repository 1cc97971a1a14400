use anyhow::Context;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use time_tracking::modules::directory::adapters::outbound::directory_in_memory::InMemoryDirectory;
use time_tracking::modules::time_entries::adapters::outbound::projections_in_memory::InMemoryProjections;
use time_tracking::shared::infrastructure::clock::SystemClock;
use time_tracking::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use time_tracking::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use time_tracking::shell::config::AppConfig;
use time_tracking::shell::http::{GRAPHQL_PATH, router};
use time_tracking::shell::state::{AppState, seed_admin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let directory = Arc::new(InMemoryDirectory::new());
    seed_admin(&config, &*directory).await?;
    let state = AppState::new(
        &config,
        Arc::new(InMemoryEventStore::new()),
        Arc::new(InMemoryDomainOutbox::new()),
        Arc::new(InMemoryProjections::new()),
        directory,
        Arc::new(SystemClock),
    );

    let app = router(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("HTTP API on http://{}, GraphQL on {}", config.addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    axum::serve(listener, app).await?;
    Ok(())
}
