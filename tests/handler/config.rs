use error_report::{Format, HandlerConfig};

#[test]
fn default_config_renders_html_without_stripping() {
    let config = HandlerConfig::default();
    assert_eq!(config.format, Format::Html);
    assert_eq!(config.remove_path, None);
}

#[test]
fn presets_and_builders() {
    assert_eq!(HandlerConfig::json().format, Format::Json);
    assert_eq!(HandlerConfig::text().format, Format::Text);
    assert_eq!(HandlerConfig::html().format, Format::Html);

    let config = HandlerConfig::default().remove_path("/app").format("application/json");
    assert_eq!(config.remove_path.as_deref(), Some("/app"));
    assert_eq!(config.format, Format::Json);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: HandlerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, HandlerConfig::default());

    let config: HandlerConfig = serde_json::from_str(r#"{ "format": "text/csv" }"#).unwrap();
    assert_eq!(config.format, Format::Text);
}
