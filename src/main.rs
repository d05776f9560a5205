//! Book Catalog Server
//!
//! Serves the in-memory book catalog over HTTP.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use book_catalog::{api, config::AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file; reported once tracing is up
    let dotenv = dotenvy::dotenv();

    let config = AppConfig::load()?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("book_catalog={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    if let Err(e) = dotenv {
        tracing::warn!("Error loading .env file: {}", e);
    }

    tracing::info!("Starting Book Catalog v{}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.address();
    let state = AppState::new();
    tracing::info!(
        "Catalog seeded with {} books",
        state.services.catalog.count().await
    );

    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
