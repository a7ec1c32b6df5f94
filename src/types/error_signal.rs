use crate::types::Severity;
use core::fmt::{self, Display};
use core::panic::Location;

/// A non-fatal runtime signal such as a warning or a notice.
///
/// Signals are raised through [`trigger`](crate::trigger) and either promoted
/// to an [`Exception`](crate::Exception) or left to default handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSignal {
    pub severity: Severity,
    pub message: String,
    pub file: String,
    pub line: u32,
}

impl ErrorSignal {
    /// Creates a signal located at the caller.
    #[track_caller]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            severity,
            message: message.into(),
            file: location.file().to_string(),
            line: location.line(),
        }
    }

    /// Overrides the recorded source location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }
}

impl Display for ErrorSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} in {}:{}", self.severity, self.message, self.file, self.line)
    }
}
