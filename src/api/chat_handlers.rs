//! Chat API handler

use crate::api::models::{ChatRequest, ChatResponse};
use crate::error::AppError;
use crate::prompts;
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::info;

const CHAT_MAX_TOKENS: u32 = 1000;

/// Free-form chat with the assistant
#[utoipa::path(
    post,
    path = "/api/chat",
    tag = "Chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Assistant reply", body = ChatResponse),
        (status = 400, description = "Missing message"),
        (status = 500, description = "Missing API key or upstream failure"),
    )
)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::BadRequest(
            "メッセージが提供されていません".to_string(),
        ));
    }

    info!(message_chars = request.message.chars().count(), "Received chat request");

    let message = state
        .openai
        .complete(prompts::CHAT_SYSTEM, &request.message, CHAT_MAX_TOKENS, false)
        .await?;

    info!(reply_chars = message.chars().count(), "Chat completed");

    Ok(Json(ChatResponse { message }))
}
