//! Logging capability injected into the exception handler.

use crate::format::json;
use crate::types::ErrorRecord;

/// Receives an error-level entry for every reported error.
///
/// Closures with a matching signature implement the trait:
///
/// ```
/// use error_report::{ErrorRecord, Logger};
///
/// let logger = |message: &str, records: &[ErrorRecord]| {
///     eprintln!("{message} ({} records)", records.len());
/// };
/// logger.error("Uncaught exception: 'boom'", &[]);
/// ```
pub trait Logger: Send + Sync {
    fn error(&self, message: &str, context: &[ErrorRecord]);
}

/// Logger that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    #[inline]
    fn error(&self, _message: &str, _context: &[ErrorRecord]) {}
}

/// Forwards reports to `tracing` at error level.
///
/// The records are attached as a compact JSON field named `records`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str, context: &[ErrorRecord]) {
        match json::render_compact(context) {
            Ok(records) => tracing::error!(records = %records, "{message}"),
            Err(_) => tracing::error!(records = context.len(), "{message}"),
        }
    }
}

impl<F> Logger for F
where
    F: Fn(&str, &[ErrorRecord]) + Send + Sync,
{
    #[inline]
    fn error(&self, message: &str, context: &[ErrorRecord]) {
        self(message, context)
    }
}
