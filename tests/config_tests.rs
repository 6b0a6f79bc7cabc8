//! Configuration loading tests

use ai_playground_gateway::config::Settings;
use std::io::Write;

#[test]
fn load_missing_file_uses_defaults() {
    let settings = Settings::load_from_path("does/not/exist.yaml").unwrap();
    assert_eq!(settings.server.port, 8080);
    assert_eq!(settings.openai.model, "gpt-4o-mini");
    assert_eq!(settings.places.language, "ja");
    assert!(settings.validate().is_ok());
}

#[test]
fn load_yaml_file_overrides_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        "server:\n  port: 3000\nplaces:\n  max_results: 5\nanalyzer:\n  webhook_url: \"https://example.com/hook\"\n  min_output_chars: 50"
    )
    .unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();
    assert_eq!(settings.server.port, 3000);
    assert_eq!(settings.places.max_results, 5);
    assert_eq!(settings.analyzer.webhook_url, "https://example.com/hook");
    assert_eq!(settings.analyzer.min_output_chars, 50);
    // Untouched sections keep their defaults
    assert_eq!(settings.server.host, "0.0.0.0");
    assert_eq!(settings.openai.model, "gpt-4o-mini");
}

#[test]
fn partial_yaml_keeps_section_defaults() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "logging:\n  format: \"text\"").unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();
    assert_eq!(settings.logging.format, "text");
    assert_eq!(settings.logging.level, "info");
}

#[test]
fn api_key_can_be_set_in_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".yaml")
        .tempfile()
        .unwrap();
    writeln!(file, "openai:\n  api_key: \"sk-from-file\"").unwrap();

    let settings = Settings::load_from_path(file.path()).unwrap();
    assert_eq!(settings.openai.api_key.as_deref(), Some("sk-from-file"));
}
