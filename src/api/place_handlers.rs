//! Place search API handlers

use crate::api::models::{
    PlacesSearchRequest, PlacesSearchResponse, QueryOptimization, SmartSearchResponse,
};
use crate::error::AppError;
use crate::prompts;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::{info, warn};

const SMART_SEARCH_MAX_TOKENS: u32 = 500;

/// Search for places with Google Places text search
#[utoipa::path(
    post,
    path = "/api/search-places",
    tag = "Places",
    request_body = PlacesSearchRequest,
    responses(
        (status = 200, description = "Matching places", body = PlacesSearchResponse),
        (status = 400, description = "Missing query"),
        (status = 500, description = "Missing API key or upstream failure"),
    )
)]
pub async fn search_places(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlacesSearchRequest>,
) -> Result<Json<PlacesSearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::BadRequest(
            "検索条件が提供されていません".to_string(),
        ));
    }

    info!(query = %request.query, "Received place search request");

    let result = state
        .places
        .text_search(&request.query, request.location.as_deref())
        .await?;

    info!(count = result.places.len(), "Place search completed");

    Ok(Json(PlacesSearchResponse {
        places: result.places,
        status: result.status,
    }))
}

/// Smart search: rewrite a vague request with the LLM, then search
#[utoipa::path(
    post,
    path = "/api/smart-search-places",
    tag = "Places",
    request_body = PlacesSearchRequest,
    responses(
        (status = 200, description = "Matching places with the rewrite metadata", body = SmartSearchResponse),
        (status = 400, description = "Missing query"),
        (status = 500, description = "Missing API key or upstream failure"),
    )
)]
pub async fn smart_search_places(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlacesSearchRequest>,
) -> Result<Json<SmartSearchResponse>, AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::BadRequest(
            "検索条件が提供されていません".to_string(),
        ));
    }

    // Both upstreams are required; check keys before any outbound call
    state.places.require_key()?;
    state.openai.require_key()?;

    info!(query = %request.query, "Received smart search request");

    let location = request.location.as_deref();
    let rewrite_prompt = prompts::smart_search_prompt(&request.query, location);
    let content = state
        .openai
        .complete(
            prompts::SMART_SEARCH_SYSTEM,
            &rewrite_prompt,
            SMART_SEARCH_MAX_TOKENS,
            true,
        )
        .await?;

    // An unparseable rewrite is not fatal; fall back to the original query
    let optimization: QueryOptimization = match serde_json::from_str(content.trim()) {
        Ok(optimization) => optimization,
        Err(e) => {
            warn!(error = %e, "Query rewrite output was not valid JSON, using original query");
            QueryOptimization::passthrough(&request.query)
        }
    };

    info!(optimized = %optimization.optimized_query, "Query rewritten");

    let result = state
        .places
        .text_search(&optimization.optimized_query, location)
        .await?;

    info!(count = result.places.len(), "Smart search completed");

    Ok(Json(SmartSearchResponse {
        places: result.places,
        optimized_query: optimization.optimized_query.clone(),
        ai_analysis: optimization,
        original_query: request.query,
        status: result.status,
    }))
}
