//! Presentation formatters for error records.
//!
//! Three renderers share the same input:
//!
//! - [`html`]: a styled list with every text field escaped
//! - [`json`]: a pretty-printed array of [`ErrorRecord`]s
//! - [`text`]: one line per chain entry using the error's own `Display`
//!
//! [`Format`] selects one of them from a content type.

use crate::error::ReportError;
use crate::types::ErrorRecord;
use core::fmt::{self, Display};
use core::str::FromStr;
use serde::{Deserialize, Serialize};

pub mod html;
pub mod json;
pub mod text;

pub use html::HtmlFormatter;
pub use json::JsonFormatter;

/// Output format of a report.
///
/// Parsed from a content type; anything other than `text/html` or
/// `application/json` selects plain text.
///
/// # Examples
///
/// ```
/// use error_report::Format;
///
/// assert_eq!(Format::from_content_type("application/json"), Format::Json);
/// assert_eq!(Format::from_content_type("text/csv"), Format::Text);
/// assert_eq!(Format::Html.content_type(), "text/html");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Format {
    #[default]
    Html,
    Json,
    Text,
}

impl Format {
    pub const HTML: &'static str = "text/html";
    pub const JSON: &'static str = "application/json";
    pub const TEXT: &'static str = "text/plain";

    pub fn from_content_type(content_type: &str) -> Self {
        match content_type {
            Self::HTML => Format::Html,
            Self::JSON => Format::Json,
            _ => Format::Text,
        }
    }

    #[inline]
    pub const fn content_type(self) -> &'static str {
        match self {
            Format::Html => Self::HTML,
            Format::Json => Self::JSON,
            Format::Text => Self::TEXT,
        }
    }
}

impl Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.content_type())
    }
}

impl FromStr for Format {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_content_type(s))
    }
}

impl From<&str> for Format {
    fn from(content_type: &str) -> Self {
        Self::from_content_type(content_type)
    }
}

impl From<String> for Format {
    fn from(content_type: String) -> Self {
        Self::from_content_type(&content_type)
    }
}

impl From<Format> for String {
    fn from(format: Format) -> Self {
        format.content_type().to_string()
    }
}

/// Renders a sequence of records into a document.
pub trait RecordFormatter {
    fn content_type(&self) -> &'static str;

    fn format(&self, records: &[ErrorRecord]) -> Result<String, ReportError>;
}
