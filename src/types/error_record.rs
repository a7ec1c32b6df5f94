//! Flattened, display-ready representation of one link in an error chain.

use crate::chain::ErrorChain;
use crate::types::Exception;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::io;

/// Label every record message starts with.
pub const MESSAGE_LABEL: &str = "Uncaught exception";

/// One error of a cause chain, ready for rendering.
///
/// Text fields are raw; escaping is left to the presentation formatters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub message: String,
    pub code: i64,
    pub file: String,
    pub line: u32,
    pub trace: Vec<String>,
}

impl ErrorRecord {
    /// Builds the record for a single chain link, without following its causes.
    pub fn from_error(error: &(dyn Error + 'static), remove_path: Option<&str>) -> Self {
        let message = strip(&format!("{MESSAGE_LABEL}: '{error}'"), remove_path);

        if let Some(exception) = error.downcast_ref::<Exception>() {
            let trace = exception
                .trace()
                .map(|t| split_trace(&strip(&t, remove_path)))
                .unwrap_or_default();
            return Self {
                message,
                code: exception.code(),
                file: strip(exception.file(), remove_path),
                line: exception.line(),
                trace,
            };
        }

        let code = error
            .downcast_ref::<io::Error>()
            .and_then(io::Error::raw_os_error)
            .map_or(0, i64::from);

        Self { message, code, file: String::new(), line: 0, trace: Vec::new() }
    }
}

/// Produces one record per link of the chain of `error`, outermost first.
///
/// When `remove_path` is given, every literal occurrence of it is deleted from
/// the message, file and trace text.
///
/// # Examples
///
/// ```
/// use error_report::{format_records, Exception};
///
/// let err = Exception::new("boom").at("/app/src/x.rs", 7);
/// let records = format_records(&err, Some("/app"));
///
/// assert_eq!(records[0].message, "Uncaught exception: 'boom'");
/// assert_eq!(records[0].file, "/src/x.rs");
/// assert_eq!(records[0].line, 7);
/// ```
pub fn format_records(
    error: &(dyn Error + 'static),
    remove_path: Option<&str>,
) -> Vec<ErrorRecord> {
    ErrorChain::new(error)
        .map(|link| ErrorRecord::from_error(link, remove_path))
        .collect()
}

/// Deletes every occurrence of `remove_path` from `text`.
pub(crate) fn strip(text: &str, remove_path: Option<&str>) -> String {
    match remove_path {
        Some(path) if !path.is_empty() => text.replace(path, ""),
        _ => text.to_string(),
    }
}

fn split_trace(trace: &str) -> Vec<String> {
    trace.lines().map(str::to_string).collect()
}
