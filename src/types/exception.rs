//! The rich error type reported by the uncaught-error handlers.
//!
//! [`Exception`] carries what plain `std::error::Error` values lack: a
//! numeric code, the source location it was raised at, and a captured
//! backtrace. Any other error can still be reported; it simply contributes
//! less detail to its [`ErrorRecord`](crate::ErrorRecord).

use crate::types::{ErrorSignal, Severity};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::fmt::{self, Display};
use std::panic::{Location, PanicHookInfo};

/// Boxed cause accepted by [`Exception::caused_by`].
pub type BoxedCause = Box<dyn Error + Send + Sync + 'static>;

/// Error with a code, a source location, a backtrace and an optional cause.
///
/// # Examples
///
/// ```
/// use error_report::Exception;
///
/// let err = Exception::new("could not load profile")
///     .with_code(404)
///     .caused_by(Exception::new("row not found"));
///
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.to_string(), "could not load profile");
/// assert!(std::error::Error::source(&err).is_some());
/// ```
#[derive(Debug)]
pub struct Exception {
    message: String,
    code: i64,
    file: String,
    line: u32,
    severity: Option<Severity>,
    backtrace: Backtrace,
    source: Option<BoxedCause>,
}

impl Exception {
    /// Creates an exception located at the caller.
    ///
    /// The backtrace is captured according to `RUST_BACKTRACE` /
    /// `RUST_LIB_BACKTRACE`.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            code: 0,
            file: location.file().to_string(),
            line: location.line(),
            severity: None,
            backtrace: Backtrace::capture(),
            source: None,
        }
    }

    /// Builds an exception describing a panic.
    ///
    /// String payloads become the message; anything else is reported as
    /// `Box<dyn Any>`.
    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let payload = info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };

        let (file, line) = info
            .location()
            .map(|l| (l.file().to_string(), l.line()))
            .unwrap_or_default();

        Self {
            message,
            code: 0,
            file,
            line,
            severity: None,
            backtrace: Backtrace::capture(),
            source: None,
        }
    }

    pub(crate) fn from_signal(signal: &ErrorSignal) -> Self {
        Self {
            message: signal.message.clone(),
            code: 0,
            file: signal.file.clone(),
            line: signal.line,
            severity: Some(signal.severity),
            backtrace: Backtrace::capture(),
            source: None,
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Overrides the recorded source location.
    #[must_use]
    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Attaches the error that caused this one.
    #[must_use]
    pub fn caused_by(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.source = Some(cause.into());
        self
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn code(&self) -> i64 {
        self.code
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Severity of the runtime signal this exception was promoted from.
    #[inline]
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    #[inline]
    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }

    /// The backtrace as text, or `None` when capturing was disabled.
    pub fn trace(&self) -> Option<String> {
        match self.backtrace.status() {
            BacktraceStatus::Captured => Some(self.backtrace.to_string()),
            _ => None,
        }
    }
}

impl Display for Exception {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Exception {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
