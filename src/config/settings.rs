//! Application settings and configuration management

use crate::error::{AppError, Result};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// OpenAI upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenAiConfig {
    /// API key; falls back to the OPENAI_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_timeout")]
    pub timeout_ms: u64,
}

fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_openai_timeout() -> u64 {
    60000
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_base_url(),
            model: default_openai_model(),
            timeout_ms: default_openai_timeout(),
        }
    }
}

/// Google Places upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlacesConfig {
    /// API key; falls back to the GOOGLE_PLACES_API_KEY environment variable
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_places_base_url")]
    pub base_url: String,
    #[serde(default = "default_places_timeout")]
    pub timeout_ms: u64,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_places_base_url() -> String {
    "https://maps.googleapis.com/maps/api/place".to_string()
}

fn default_places_timeout() -> u64 {
    30000
}

fn default_max_results() -> usize {
    10
}

fn default_language() -> String {
    "ja".to_string()
}

fn default_region() -> String {
    "jp".to_string()
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_places_base_url(),
            timeout_ms: default_places_timeout(),
            max_results: default_max_results(),
            language: default_language(),
            region: default_region(),
        }
    }
}

/// Website analysis webhook (n8n) configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,
    /// The n8n workflow crawls the site before answering, so the timeout is generous
    #[serde(default = "default_analyzer_timeout")]
    pub timeout_ms: u64,
    /// Analyses shorter than this are treated as incomplete workflow runs
    #[serde(default = "default_min_output_chars")]
    pub min_output_chars: usize,
}

fn default_webhook_url() -> String {
    "https://n8n.srv927568.hstgr.cloud/webhook/n8n-myPortfolio".to_string()
}

fn default_analyzer_timeout() -> u64 {
    120000
}

fn default_min_output_chars() -> usize {
    100
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            timeout_ms: default_analyzer_timeout(),
            min_output_chars: default_min_output_chars(),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct CorsConfig {
    /// Origins allowed to call the API; empty means allow any origin
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Settings {
    /// Load settings from the default configuration file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path("config/playground.yaml")
    }

    /// Load settings from a specific configuration file path
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let format = if path.extension().map_or(false, |ext| ext == "yaml" || ext == "yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let mut builder = Config::builder();

        if path.exists() {
            builder = builder.add_source(File::from(path).format(format));
        }

        builder = builder.add_source(
            Environment::with_prefix("PLAYGROUND")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        let mut settings: Settings = config.try_deserialize()?;

        // Well-known key variables take over when the config file leaves them unset
        if settings.openai.api_key.is_none() {
            settings.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if settings.places.api_key.is_none() {
            settings.places.api_key = std::env::var("GOOGLE_PLACES_API_KEY").ok();
        }

        Ok(settings)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "Server port cannot be 0".to_string(),
            )));
        }

        if self.analyzer.webhook_url.is_empty() {
            return Err(AppError::Config(config::ConfigError::Message(
                "Analyzer webhook URL cannot be empty".to_string(),
            )));
        }

        if self.places.max_results == 0 {
            return Err(AppError::Config(config::ConfigError::Message(
                "places.max_results must be at least 1".to_string(),
            )));
        }

        Ok(())
    }
}
