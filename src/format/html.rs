//! HTML rendering of error records.
//!
//! Every user-controlled field is escaped before it reaches the markup. The
//! optional console script embeds the records as a JavaScript literal with
//! `<`, `>`, `&` and the JS line separators escaped, so no record content can
//! close the `<script>` element.

use crate::error::ReportError;
use crate::format::{json, Format, RecordFormatter};
use crate::types::ErrorRecord;
use std::fmt::Write;

const STYLE: &str = "<style>
  ul.exceptionList {
    padding: 0;
    color: red;
    font-family: monospace;
  }
  ul.exceptionList>li.exception {
    list-style: none;
    display: grid;
    grid-template-columns: max-content 1fr;
    gap: 0.25rem 0.5rem;
  }
  ul.exceptionList>li.exception>div.field {
    font-size: small;
    text-transform: uppercase;
    text-decoration: underline;
    text-align: right;
    font-weight: bold;
  }
  ul.exceptionList>li.exception>div.value {
    font-style: italic;
  }
</style>
";

/// Renders `records` as a styled list.
///
/// With `embed_json`, a script block logs the records to the browser console.
///
/// # Examples
///
/// ```
/// use error_report::{format::html, format_records, Exception};
///
/// let records = format_records(&Exception::new("<script>alert(1)</script>"), None);
/// let page = html::render(&records, false).unwrap();
///
/// assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
/// assert!(!page.contains("<script>"));
/// ```
pub fn render(records: &[ErrorRecord], embed_json: bool) -> Result<String, ReportError> {
    let mut html = String::with_capacity(STYLE.len() + records.len() * 512);
    html.push_str(STYLE);
    html.push_str("<ul class='exceptionList'>\n");

    for record in records {
        let trace = record
            .trace
            .iter()
            .map(|line| escape(line))
            .collect::<Vec<_>>()
            .join("</li><li>");

        // Writing into a String cannot fail.
        let _ = write!(
            html,
            "  <li class='exception'>\n    \
             <div class='field'>message:</div><div class='value'>{}</div>\n    \
             <div class='field'>code:</div><div class='value'>{}</div>\n    \
             <div class='field'>file:</div><div class='value'>{}</div>\n    \
             <div class='field'>line:</div><div class='value'>{}</div>\n    \
             <div class='field'>trace:</div><div class='value'><ol><li>{}</li></ol></div>\n  \
             </li>\n",
            escape(&record.message),
            record.code,
            escape(&record.file),
            record.line,
            trace,
        );
    }
    html.push_str("</ul>\n");

    if embed_json {
        let literal = script_literal(&json::render(records)?);
        html.push_str("<script>\nconsole.log(");
        html.push_str(&literal);
        html.push_str(");\n</script>\n");
    }

    Ok(html)
}

/// Escapes text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Makes a JSON document safe to place verbatim inside a `<script>` element.
///
/// The replaced characters only occur inside JSON strings, where the
/// `\uXXXX` forms decode to the same text.
pub fn script_literal(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(c),
        }
    }
    out
}

/// [`RecordFormatter`] producing HTML.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormatter {
    pub embed_json: bool,
}

impl HtmlFormatter {
    pub fn with_console_script() -> Self {
        Self { embed_json: true }
    }
}

impl RecordFormatter for HtmlFormatter {
    fn content_type(&self) -> &'static str {
        Format::HTML
    }

    fn format(&self, records: &[ErrorRecord]) -> Result<String, ReportError> {
        render(records, self.embed_json)
    }
}
