//! Application error type and HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or invalid request input (user-facing Japanese message)
    #[error("{0}")]
    BadRequest(String),

    /// Required API key is not configured
    #[error("{0} APIキーが設定されていません")]
    MissingApiKey(&'static str),

    /// Upstream service returned an error or unusable payload
    #[error("{service}: {detail}")]
    Upstream { service: &'static str, detail: String },

    /// Upstream AI output could not be parsed; the raw text is kept for debugging
    #[error("{message}")]
    UpstreamParse { message: String, raw_response: String },

    /// HTTP client failure
    #[error("HTTPクライアントエラー: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Internal error
    #[error("内部エラー: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(rename = "rawResponse", skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        let raw_response = match &self {
            AppError::UpstreamParse { raw_response, .. } => Some(raw_response.clone()),
            _ => None,
        };

        let body = ErrorResponse {
            error: match &self {
                AppError::Upstream { detail, .. } => detail.clone(),
                other => other.to_string(),
            },
            raw_response,
        };

        (status, Json(body)).into_response()
    }
}
