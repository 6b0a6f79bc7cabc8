//! Upstream clients - one thin wrapper per third-party service

pub mod analyzer;
pub mod openai;
pub mod places;

pub use analyzer::AnalyzerClient;
pub use openai::OpenAiClient;
pub use places::{PlacesClient, PlacesSearchResult};
