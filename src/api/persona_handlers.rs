//! Persona and marketing strategy API handlers

use crate::api::models::{
    GeneratePersonaRequest, GeneratePersonaResponse, MarketingStrategyRequest,
    MarketingStrategyResponse,
};
use crate::error::AppError;
use crate::prompts;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

const PERSONA_MAX_TOKENS: u32 = 2000;
const MARKETING_MAX_TOKENS: u32 = 3000;

/// Generate three customer personas for a service
#[utoipa::path(
    post,
    path = "/api/generate-persona",
    tag = "Marketing",
    request_body = GeneratePersonaRequest,
    responses(
        (status = 200, description = "Generated personas", body = GeneratePersonaResponse),
        (status = 400, description = "Missing service name or description"),
        (status = 500, description = "Missing API key, upstream failure, or unparseable model output"),
    )
)]
pub async fn generate_persona(
    State(state): State<Arc<AppState>>,
    Json(request): Json<GeneratePersonaRequest>,
) -> Result<Json<GeneratePersonaResponse>, AppError> {
    if request.service_name.trim().is_empty() || request.service_description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "サービス名とサービス概要が必要です".to_string(),
        ));
    }

    info!(service = %request.service_name, "Received persona generation request");

    let prompt = prompts::persona_prompt(&request.service_name, &request.service_description);
    let content = state
        .openai
        .complete(prompts::PERSONA_SYSTEM, &prompt, PERSONA_MAX_TOKENS, true)
        .await?;

    let personas: Value = serde_json::from_str(content.trim()).map_err(|e| {
        warn!(error = %e, "Persona output was not valid JSON");
        AppError::UpstreamParse {
            message: "ペルソナデータの解析に失敗しました".to_string(),
            raw_response: content.clone(),
        }
    })?;

    info!(service = %request.service_name, "Persona generation completed");

    Ok(Json(GeneratePersonaResponse { personas }))
}

/// Generate per-persona marketing strategies for a service
#[utoipa::path(
    post,
    path = "/api/generate-marketing-strategy",
    tag = "Marketing",
    request_body = MarketingStrategyRequest,
    responses(
        (status = 200, description = "Generated strategies", body = MarketingStrategyResponse),
        (status = 400, description = "Missing service info or personas"),
        (status = 500, description = "Missing API key, upstream failure, or unparseable model output"),
    )
)]
pub async fn generate_marketing_strategy(
    State(state): State<Arc<AppState>>,
    Json(request): Json<MarketingStrategyRequest>,
) -> Result<Json<MarketingStrategyResponse>, AppError> {
    let personas = match &request.personas {
        Some(personas) if !personas.is_null() => personas,
        _ => {
            return Err(AppError::BadRequest(
                "サービス名、サービス概要、ペルソナデータが必要です".to_string(),
            ))
        }
    };
    if request.service_name.trim().is_empty() || request.service_description.trim().is_empty() {
        return Err(AppError::BadRequest(
            "サービス名、サービス概要、ペルソナデータが必要です".to_string(),
        ));
    }

    info!(service = %request.service_name, "Received marketing strategy request");

    let personas_json = serde_json::to_string_pretty(personas)
        .map_err(|e| AppError::Internal(format!("Failed to serialize personas: {}", e)))?;
    let prompt = prompts::marketing_prompt(
        &request.service_name,
        &request.service_description,
        &personas_json,
    );

    let content = state
        .openai
        .complete(prompts::MARKETING_SYSTEM, &prompt, MARKETING_MAX_TOKENS, true)
        .await?;

    let marketing_strategies: Value = serde_json::from_str(content.trim()).map_err(|e| {
        warn!(error = %e, "Marketing strategy output was not valid JSON");
        AppError::UpstreamParse {
            message: "マーケティング施策データの解析に失敗しました".to_string(),
            raw_response: content.clone(),
        }
    })?;

    info!(service = %request.service_name, "Marketing strategy generation completed");

    Ok(Json(MarketingStrategyResponse {
        marketing_strategies,
    }))
}
