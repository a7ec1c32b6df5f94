//! Failures of the reporting pipeline itself.

use std::error::Error;
use std::fmt::{self, Display};
use std::io;

/// Error raised while rendering or writing a report.
#[derive(Debug)]
pub enum ReportError {
    /// The records could not be serialized to JSON.
    Serialize(serde_json::Error),
    /// A sink rejected the output.
    Io(io::Error),
}

impl Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Serialize(e) => write!(f, "failed to serialize error records: {e}"),
            ReportError::Io(e) => write!(f, "failed to write error report: {e}"),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::Serialize(e) => Some(e),
            ReportError::Io(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for ReportError {
    fn from(e: serde_json::Error) -> Self {
        ReportError::Serialize(e)
    }
}

impl From<io::Error> for ReportError {
    fn from(e: io::Error) -> Self {
        ReportError::Io(e)
    }
}
