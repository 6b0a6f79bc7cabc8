//! OpenAI chat completions client

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::OpenAiConfig;
use crate::error::{AppError, Result};

/// Chat message for completion requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Response format selector (used to request strict JSON output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

/// Chat completion request (OpenAI wire format)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Chat completion response (only the fields the gateway consumes)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
}

/// Thin client for the OpenAI chat completions endpoint
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiClient {
    pub fn new(config: &OpenAiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fail early when no API key is configured
    pub fn require_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey("OpenAI"))
    }

    /// Run a single system+user completion and return the first choice content.
    ///
    /// With `json_mode` set the request asks for a `json_object` response so
    /// the model is schema-constrained instead of free to wrap its JSON in prose.
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        max_tokens: u32,
        json_mode: bool,
    ) -> Result<String> {
        let api_key = self.require_key()?.to_string();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            max_tokens: Some(max_tokens),
            temperature: Some(0.7),
            response_format: json_mode.then(|| ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };

        let url = format!("{}/chat/completions", self.base_url);
        debug!(model = %self.model, json_mode, "Sending chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream {
                service: "OpenAI",
                detail: format!("OpenAI APIエラー: {}", response.status()),
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(|e| AppError::Upstream {
                service: "OpenAI",
                detail: format!("OpenAI応答の解析に失敗しました: {}", e),
            })?;

        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|c| !c.is_empty());

        content.ok_or(AppError::Upstream {
            service: "OpenAI",
            detail: "OpenAIからの応答が無効です".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OpenAiConfig;

    #[test]
    fn require_key_rejects_missing_and_empty() {
        let mut config = OpenAiConfig::default();
        config.api_key = None;
        let client = OpenAiClient::new(&config).unwrap();
        assert!(client.require_key().is_err());

        config.api_key = Some(String::new());
        let client = OpenAiClient::new(&config).unwrap();
        assert!(client.require_key().is_err());

        config.api_key = Some("sk-test".to_string());
        let client = OpenAiClient::new(&config).unwrap();
        assert_eq!(client.require_key().unwrap(), "sk-test");
    }

    #[test]
    fn json_mode_sets_response_format() {
        let request = ChatCompletionRequest {
            model: "gpt-4o-mini".to_string(),
            messages: vec![],
            max_tokens: Some(100),
            temperature: Some(0.7),
            response_format: Some(ResponseFormat {
                format_type: "json_object".to_string(),
            }),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["response_format"]["type"], "json_object");
    }
}
