use crate::error::ReportError;
use crate::format::{Format, RecordFormatter};
use crate::types::ErrorRecord;

/// Serializes the records as a pretty-printed JSON array.
///
/// # Examples
///
/// ```
/// use error_report::{format::json, format_records, Exception};
///
/// let records = format_records(&Exception::new("boom"), None);
/// let out = json::render(&records).unwrap();
/// assert!(out.starts_with('['));
/// assert!(out.contains("\"message\": \"Uncaught exception: 'boom'\""));
/// ```
pub fn render(records: &[ErrorRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Single-line JSON, as written to the diagnostic log.
pub fn render_compact(records: &[ErrorRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string(records)?)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl RecordFormatter for JsonFormatter {
    fn content_type(&self) -> &'static str {
        Format::JSON
    }

    fn format(&self, records: &[ErrorRecord]) -> Result<String, ReportError> {
        render(records)
    }
}
