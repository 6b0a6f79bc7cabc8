//! HTTP route definitions

use crate::api::models::*;
use crate::api::{
    analyzer_handlers, chat_handlers, handlers, persona_handlers, place_handlers,
};
use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "AI Playground Gateway API",
        version = "0.1.0",
        description = "API gateway for the AI Playground demo products. Every route validates input, forwards to one third-party API, and reshapes the JSON response.",
        license(name = "MIT"),
    ),
    paths(
        handlers::health_check,
        chat_handlers::chat,
        persona_handlers::generate_persona,
        persona_handlers::generate_marketing_strategy,
        place_handlers::search_places,
        place_handlers::smart_search_places,
        analyzer_handlers::analyze_website,
    ),
    components(schemas(
        ChatRequest,
        ChatResponse,
        GeneratePersonaRequest,
        GeneratePersonaResponse,
        MarketingStrategyRequest,
        MarketingStrategyResponse,
        PlacesSearchRequest,
        PlacesSearchResponse,
        QueryOptimization,
        SmartSearchResponse,
        AnalyzeWebsiteRequest,
        AnalyzeWebsiteResponse,
        HealthResponse,
    )),
    tags(
        (name = "Chat", description = "Assistant chat"),
        (name = "Marketing", description = "Persona and marketing strategy generation"),
        (name = "Places", description = "Place search"),
        (name = "Analyzer", description = "Website analysis"),
        (name = "Health", description = "Health endpoints"),
    )
)]
pub struct ApiDoc;

/// Build the CORS layer from configuration
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(origins)
}

/// Create the main application router
pub fn create_router(state: Arc<crate::AppState>) -> Router {
    let api_routes = Router::new()
        .route("/chat", post(chat_handlers::chat))
        .route("/generate-persona", post(persona_handlers::generate_persona))
        .route(
            "/generate-marketing-strategy",
            post(persona_handlers::generate_marketing_strategy),
        )
        .route("/search-places", post(place_handlers::search_places))
        .route(
            "/smart-search-places",
            post(place_handlers::smart_search_places),
        )
        .route("/analyze-website", post(analyzer_handlers::analyze_website));

    let cors = cors_layer(&state.settings.cors.allowed_origins);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
