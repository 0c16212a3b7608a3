//! Circulation Server - library borrow/return/hold engine
//!
//! REST API over an in-memory catalogue.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use circulation_server::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{Catalogue, InMemoryCatalogue},
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    tracing::info!("Starting Circulation Server v{}", env!("CARGO_PKG_VERSION"));

    let catalogue: Arc<dyn Catalogue> = if config.catalogue.seed {
        Arc::new(InMemoryCatalogue::seeded())
    } else {
        Arc::new(InMemoryCatalogue::new())
    };

    let items = catalogue.list_items().await?.len();
    let users = catalogue.list_users().await?.len();
    tracing::info!(items, users, "Catalogue loaded");
    tracing::info!(
        max_loans = config.circulation.max_loans,
        loan_period_days = config.circulation.loan_period_days,
        "Circulation policy"
    );

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState::new(config, catalogue);
    let app = api::create_router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("circulation_server={},tower_http=debug", logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
