use error_report::format::{HtmlFormatter, JsonFormatter};
use error_report::{format_records, Exception, Format, RecordFormatter};

pub mod html;
pub mod text;

#[test]
fn format_from_content_type() {
    assert_eq!(Format::from_content_type("text/html"), Format::Html);
    assert_eq!(Format::from_content_type("application/json"), Format::Json);
    assert_eq!(Format::from_content_type("text/plain"), Format::Text);
    assert_eq!(Format::from_content_type("application/xml"), Format::Text);
    assert_eq!(Format::from_content_type(""), Format::Text);
    assert_eq!(Format::from_content_type(" text/html "), Format::Text);
    assert_eq!(Format::from_content_type("TEXT/HTML"), Format::Text);
    assert_eq!("application/json".parse::<Format>(), Ok(Format::Json));
}

#[test]
fn format_defaults_to_html() {
    assert_eq!(Format::default(), Format::Html);
}

#[test]
fn format_serde_uses_content_types() {
    assert_eq!(serde_json::to_string(&Format::Json).unwrap(), "\"application/json\"");
    assert_eq!(serde_json::to_string(&Format::Text).unwrap(), "\"text/plain\"");

    let parsed: Format = serde_json::from_str("\"text/html\"").unwrap();
    assert_eq!(parsed, Format::Html);
    let fallback: Format = serde_json::from_str("\"image/png\"").unwrap();
    assert_eq!(fallback, Format::Text);
}

#[test]
fn record_formatters_report_content_type() {
    let records = format_records(&Exception::new("boom"), None);

    let formatters: [&dyn RecordFormatter; 2] = [&JsonFormatter, &HtmlFormatter::default()];
    let types: Vec<&str> = formatters.iter().map(|f| f.content_type()).collect();
    assert_eq!(types, ["application/json", "text/html"]);

    for formatter in formatters {
        assert!(formatter.format(&records).unwrap().contains("boom"));
    }
}
