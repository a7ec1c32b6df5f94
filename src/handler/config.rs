use crate::format::Format;
use serde::{Deserialize, Serialize};

/// Settings of an [`ExceptionHandler`](crate::ExceptionHandler).
///
/// Deserializable so applications can keep it in their own settings file:
///
/// ```
/// use error_report::{Format, HandlerConfig};
///
/// let raw = r#"{ "remove_path": "/srv/app", "format": "application/json" }"#;
/// let config: HandlerConfig = serde_json::from_str(raw).unwrap();
/// assert_eq!(config.remove_path.as_deref(), Some("/srv/app"));
/// assert_eq!(config.format, Format::Json);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Substring removed from messages, files and traces before display.
    pub remove_path: Option<String>,
    pub format: Format,
}

impl HandlerConfig {
    #[inline]
    pub fn html() -> Self {
        Self { format: Format::Html, ..Default::default() }
    }

    #[inline]
    pub fn json() -> Self {
        Self { format: Format::Json, ..Default::default() }
    }

    #[inline]
    pub fn text() -> Self {
        Self { format: Format::Text, ..Default::default() }
    }

    #[must_use]
    pub fn remove_path(mut self, path: impl Into<String>) -> Self {
        self.remove_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<Format>) -> Self {
        self.format = format.into();
        self
    }
}
