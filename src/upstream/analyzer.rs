//! Website analysis webhook (n8n) client
//!
//! The workflow on the other end crawls the site and answers with free-form
//! Japanese prose in an `output` field. Empty, non-JSON, and truncated
//! responses each get their own user-facing error so the front end can tell
//! "workflow still running" apart from "workflow broken".

use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::{AppError, Result};

/// Thin client for the n8n analysis webhook
pub struct AnalyzerClient {
    client: Client,
    webhook_url: String,
    min_output_chars: usize,
}

impl AnalyzerClient {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
            min_output_chars: config.min_output_chars,
        })
    }

    /// Run the analysis workflow for a site and return the raw analysis text
    pub async fn analyze(&self, website_url: &str) -> Result<String> {
        info!(url = %website_url, "Sending analysis request to webhook");

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&json!({
                "website_url": website_url,
                "timestamp": Utc::now().to_rfc3339(),
            }))
            .send()
            .await?;

        let status = response.status();
        debug!(status = %status, "Webhook responded");

        if !status.is_success() {
            return Err(AppError::Upstream {
                service: "n8n",
                detail: format!("分析サービスエラー: {}", status),
            });
        }

        // Read as text first so empty and malformed bodies are distinguishable
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(AppError::Upstream {
                service: "n8n",
                detail: "N8Nから空のレスポンスが返されました。ワークフローがまだ完了していない可能性があります。"
                    .to_string(),
            });
        }

        let payload: Value = serde_json::from_str(&body).map_err(|_| AppError::Upstream {
            service: "n8n",
            detail: "分析結果の解析に失敗しました。N8Nワークフローの出力形式を確認してください。"
                .to_string(),
        })?;

        let output = payload
            .get("output")
            .and_then(Value::as_str)
            .ok_or(AppError::Upstream {
                service: "n8n",
                detail: "N8Nワークフローから有効な分析結果が返されませんでした。outputフィールドが見つからないか、無効な形式です。"
                    .to_string(),
            })?;

        if output.chars().count() < self.min_output_chars {
            return Err(AppError::Upstream {
                service: "n8n",
                detail: "分析結果が不完全です。N8Nワークフローがまだ処理中の可能性があります。少し時間をおいて再度お試しください。"
                    .to_string(),
            });
        }

        info!(output_chars = output.chars().count(), "Analysis output received");

        Ok(output.to_string())
    }
}
