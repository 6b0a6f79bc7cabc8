//! API request and response models
//!
//! Field names mirror what the front end sends and expects (camelCase for
//! the request DTOs, mixed for responses), so serde renames are explicit.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Chat request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The user message to answer
    #[serde(default)]
    pub message: String,
}

/// Chat response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChatResponse {
    pub message: String,
}

/// Persona generation request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct GeneratePersonaRequest {
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    #[serde(rename = "serviceDescription", default)]
    pub service_description: String,
}

/// Persona generation response; `personas` holds the model's JSON verbatim
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GeneratePersonaResponse {
    #[schema(value_type = Object)]
    pub personas: Value,
}

/// Marketing strategy request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MarketingStrategyRequest {
    #[serde(rename = "serviceName", default)]
    pub service_name: String,
    #[serde(rename = "serviceDescription", default)]
    pub service_description: String,
    /// Personas produced by the persona generator, passed back as-is
    #[serde(default)]
    #[schema(value_type = Object)]
    pub personas: Option<Value>,
}

/// Marketing strategy response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MarketingStrategyResponse {
    #[schema(value_type = Object)]
    pub marketing_strategies: Value,
}

/// Place search request (shared by plain and smart search)
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PlacesSearchRequest {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Place search response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PlacesSearchResponse {
    /// Raw Google Places results, at most `places.max_results` entries
    #[schema(value_type = Vec<Object>)]
    pub places: Vec<Value>,
    /// Google Places status (`OK` or `ZERO_RESULTS`)
    pub status: String,
}

/// Result of the LLM query rewrite used by smart search
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct QueryOptimization {
    #[serde(rename = "optimizedQuery")]
    pub optimized_query: String,
    pub explanation: String,
    #[serde(rename = "searchTips")]
    pub search_tips: String,
}

impl QueryOptimization {
    /// Fallback used when the model output does not parse: search with the
    /// original query instead of failing the request
    pub fn passthrough(query: &str) -> Self {
        Self {
            optimized_query: query.to_string(),
            explanation: "元の検索条件をそのまま使用します".to_string(),
            search_tips: "検索条件をより具体的にすると、より良い結果が得られます".to_string(),
        }
    }
}

/// Smart place search response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SmartSearchResponse {
    #[schema(value_type = Vec<Object>)]
    pub places: Vec<Value>,
    #[serde(rename = "aiAnalysis")]
    pub ai_analysis: QueryOptimization,
    #[serde(rename = "originalQuery")]
    pub original_query: String,
    #[serde(rename = "optimizedQuery")]
    pub optimized_query: String,
    pub status: String,
}

/// Website analysis request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AnalyzeWebsiteRequest {
    #[serde(default)]
    pub url: String,
}

/// Website analysis response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeWebsiteResponse {
    /// Heuristic score in [40, 95]
    pub score: u32,
    pub summary: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    /// The complete analysis text from the workflow
    #[serde(rename = "fullAnalysis")]
    pub full_analysis: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
