//! AI Playground Gateway
//!
//! A Rust-based API gateway for the AI Playground demo products (chat,
//! persona generator, marketing strategies, place finder, website analyzer).
//! Each route is a thin forward-call to one third-party API: validate input,
//! call upstream, reshape the JSON for the front end.

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod prompts;
pub mod upstream;

pub use error::{AppError, Result};

use config::Settings;
use upstream::{AnalyzerClient, OpenAiClient, PlacesClient};

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Settings,
    pub openai: OpenAiClient,
    pub places: PlacesClient,
    pub analyzer: AnalyzerClient,
}

impl AppState {
    /// Build the state and its upstream clients from settings
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let openai = OpenAiClient::new(&settings.openai)?;
        let places = PlacesClient::new(&settings.places)?;
        let analyzer = AnalyzerClient::new(&settings.analyzer)?;

        Ok(Self {
            settings,
            openai,
            places,
            analyzer,
        })
    }
}
