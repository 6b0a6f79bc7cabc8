//! Google Places Text Search client

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::PlacesConfig;
use crate::error::{AppError, Result};

/// Result of a text search, truncated to the configured maximum
#[derive(Debug, Clone)]
pub struct PlacesSearchResult {
    pub places: Vec<Value>,
    pub status: String,
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    #[serde(default)]
    results: Vec<Value>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    error_message: Option<String>,
}

/// Thin client for the Google Places Text Search API
pub struct PlacesClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    language: String,
    region: String,
    max_results: usize,
}

impl PlacesClient {
    pub fn new(config: &PlacesConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            region: config.region.clone(),
            max_results: config.max_results,
        })
    }

    /// Fail early when no API key is configured
    pub fn require_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey("Google Places"))
    }

    /// Combine query and location the way the front end expects
    pub fn build_query(query: &str, location: Option<&str>) -> String {
        match location.filter(|l| !l.trim().is_empty()) {
            Some(location) => format!("{} in {}", query, location),
            None => query.to_string(),
        }
    }

    /// Text search; results are passed through as raw JSON, capped at `max_results`
    pub async fn text_search(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<PlacesSearchResult> {
        let api_key = self.require_key()?.to_string();
        let search_query = Self::build_query(query, location);

        debug!(query = %search_query, "Searching places");

        let url = format!("{}/textsearch/json", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("query", search_query.as_str()),
                ("key", api_key.as_str()),
                ("language", self.language.as_str()),
                ("region", self.region.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AppError::Upstream {
                service: "Google Places",
                detail: format!("Google Places APIエラー: {}", response.status()),
            });
        }

        let body: TextSearchResponse =
            response.json().await.map_err(|e| AppError::Upstream {
                service: "Google Places",
                detail: format!("Google Places応答の解析に失敗しました: {}", e),
            })?;

        if body.status != "OK" && body.status != "ZERO_RESULTS" {
            warn!(
                status = %body.status,
                error_message = body.error_message.as_deref().unwrap_or(""),
                "Google Places returned an error status"
            );
            return Err(AppError::Upstream {
                service: "Google Places",
                detail: format!("Google Places API response error: {}", body.status),
            });
        }

        let mut places = body.results;
        places.truncate(self.max_results);

        debug!(count = places.len(), status = %body.status, "Places search completed");

        Ok(PlacesSearchResult {
            places,
            status: body.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_query_appends_location() {
        assert_eq!(
            PlacesClient::build_query("カフェ", Some("渋谷")),
            "カフェ in 渋谷"
        );
        assert_eq!(PlacesClient::build_query("カフェ", None), "カフェ");
        assert_eq!(PlacesClient::build_query("カフェ", Some("  ")), "カフェ");
    }
}
