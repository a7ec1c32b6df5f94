//! Handlers for uncaught errors and runtime signals.
//!
//! [`ExceptionHandler`] renders an error chain, logs it and writes the report.
//! [`ErrorPromoter`] decides which runtime signals become exceptions.
//! Both can be used directly, or installed process-wide with
//! [`register`](crate::register).

mod config;
mod promoter;

pub use config::HandlerConfig;
pub use promoter::ErrorPromoter;

use crate::error::ReportError;
use crate::format::{html, json, text, Format};
use crate::traits::{Logger, NullLogger, Sink, StderrSink, StdoutSink};
use crate::types::error_record::strip;
use crate::types::{format_records, BoxedCause, ErrorRecord, Exception, MESSAGE_LABEL};
use std::error::Error;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;

/// A rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub records: Vec<ErrorRecord>,
    /// Pretty-printed JSON of `records`.
    pub json: String,
    /// The document in the configured format.
    pub body: String,
    pub content_type: &'static str,
}

/// Turns an uncaught error into a report and writes it out.
///
/// # Examples
///
/// ```
/// use error_report::{Exception, ExceptionHandler, HandlerConfig, MemorySink, Format};
///
/// let output = MemorySink::new();
/// let handler = ExceptionHandler::new(HandlerConfig::default().format(Format::Json))
///     .with_output(output.clone())
///     .with_diagnostic(MemorySink::new());
///
/// handler.handle(&Exception::new("boom"));
///
/// let parsed: serde_json::Value = serde_json::from_str(&output.contents()).unwrap();
/// assert_eq!(parsed[0]["message"], "Uncaught exception: 'boom'");
/// ```
#[derive(Clone)]
pub struct ExceptionHandler {
    config: HandlerConfig,
    logger: Arc<dyn Logger>,
    output: Arc<dyn Sink>,
    diagnostic: Arc<dyn Sink>,
}

impl ExceptionHandler {
    /// Creates a handler writing to stdout, logging JSON to stderr, with a
    /// [`NullLogger`].
    pub fn new(config: HandlerConfig) -> Self {
        Self {
            config,
            logger: Arc::new(NullLogger),
            output: Arc::new(StdoutSink),
            diagnostic: Arc::new(StderrSink),
        }
    }

    #[must_use]
    pub fn with_logger(mut self, logger: impl Logger + 'static) -> Self {
        self.logger = Arc::new(logger);
        self
    }

    /// Sets the primary output the rendered report is written to.
    #[must_use]
    pub fn with_output(mut self, output: impl Sink + 'static) -> Self {
        self.output = Arc::new(output);
        self
    }

    /// Sets the diagnostic log that receives one JSON line per report.
    #[must_use]
    pub fn with_diagnostic(mut self, diagnostic: impl Sink + 'static) -> Self {
        self.diagnostic = Arc::new(diagnostic);
        self
    }

    #[inline]
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Renders `error` without any side effect.
    pub fn render(&self, error: &(dyn Error + 'static)) -> Result<Report, ReportError> {
        let remove_path = self.config.remove_path.as_deref();
        let records = format_records(error, remove_path);
        let json = json::render(&records)?;
        let body = match self.config.format {
            Format::Html => html::render(&records, true)?,
            Format::Json => json.clone(),
            Format::Text => text::render(error, remove_path),
        };
        Ok(Report { records, json, body, content_type: self.config.format.content_type() })
    }

    /// Reports `error`: diagnostic JSON line, logger entry, then the rendered
    /// document on the primary output.
    ///
    /// Never panics. If rendering fails the plain-text form is written instead,
    /// and a panicking logger does not keep the report from the output.
    pub fn handle(&self, error: &(dyn Error + 'static)) {
        let remove_path = self.config.remove_path.as_deref();
        let message = strip(&format!("{MESSAGE_LABEL}: '{error}'"), remove_path);

        let (records, body) = match self.render(error) {
            Ok(report) => {
                match json::render_compact(&report.records) {
                    Ok(line) => self.write(&*self.diagnostic, &(line + "\n")),
                    Err(e) => tracing::warn!(error = %e, "failed to serialize diagnostic line"),
                }
                (report.records, report.body)
            },
            Err(e) => {
                tracing::warn!(error = %e, "falling back to plain-text error report");
                let fallback = text::render(error, remove_path);
                self.write(&*self.diagnostic, &format!("{fallback}\n"));
                (format_records(error, remove_path), fallback)
            },
        };

        let logged =
            panic::catch_unwind(AssertUnwindSafe(|| self.logger.error(&message, &records)));
        if logged.is_err() {
            tracing::warn!("logger panicked while reporting an uncaught error");
        }
        self.write(&*self.output, &body);
    }

    /// Reports a panic.
    ///
    /// Payloads raised with [`throw`](crate::throw) or `panic_any` carrying an
    /// [`Exception`] or a boxed error are reported with their whole chain.
    pub fn handle_panic(&self, info: &PanicHookInfo<'_>) {
        let payload = info.payload();
        if let Some(exception) = payload.downcast_ref::<Exception>() {
            self.handle(exception);
        } else if let Some(error) = payload.downcast_ref::<BoxedCause>() {
            self.handle(&**error);
        } else {
            self.handle(&Exception::from_panic(info));
        }
    }

    fn write(&self, sink: &dyn Sink, text: &str) {
        if let Err(e) = sink.write(text) {
            tracing::warn!(error = %e, "failed to write error report");
        }
    }
}

impl Default for ExceptionHandler {
    fn default() -> Self {
        Self::new(HandlerConfig::default())
    }
}

impl core::fmt::Debug for ExceptionHandler {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExceptionHandler").field("config", &self.config).finish_non_exhaustive()
    }
}
