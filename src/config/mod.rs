//! Configuration module

pub mod settings;

pub use settings::{
    AnalyzerConfig, CorsConfig, LoggingConfig, OpenAiConfig, PlacesConfig, ServerConfig, Settings,
};
