//! Main entry point for the AI Playground Gateway

use ai_playground_gateway::{api, config::Settings, AppState};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the key variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;
    settings.validate()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.logging.level.clone()));

    if settings.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    info!("Starting AI Playground Gateway");
    info!(
        "Loaded configuration: server={}:{}",
        settings.server.host, settings.server.port
    );

    if settings.openai.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; OpenAI-backed routes will return 500");
    }
    if settings.places.api_key.is_none() {
        tracing::warn!("GOOGLE_PLACES_API_KEY is not set; place search routes will return 500");
    }

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    // Create application state and router
    let app_state = Arc::new(AppState::from_settings(settings)?);
    let app = api::routes::create_router(app_state);

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
