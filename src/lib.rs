//! Structured reports for uncaught errors and panics.
//!
//! An error and its chain of causes are flattened into [`ErrorRecord`]s and
//! rendered as HTML, JSON or plain text. [`register`] installs the reporting
//! once per process as the panic hook; errors escaping as `Result`s go through
//! [`report`].
//!
//! # Examples
//!
//! ## Records from an error chain
//!
//! ```
//! use error_report::{format_records, Exception};
//!
//! let err = Exception::new("checkout failed")
//!     .with_code(502)
//!     .caused_by(Exception::new("payment gateway timed out"));
//!
//! let records = format_records(&err, None);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].message, "Uncaught exception: 'checkout failed'");
//! assert_eq!(records[0].code, 502);
//! ```
//!
//! ## Rendering with a handler
//!
//! ```
//! use error_report::{Exception, ExceptionHandler, HandlerConfig};
//!
//! let handler = ExceptionHandler::new(HandlerConfig::html().remove_path("/srv/app"));
//! let report = handler
//!     .render(&Exception::new("template missing").at("/srv/app/views/index.html", 3))
//!     .unwrap();
//!
//! assert_eq!(report.content_type, "text/html");
//! assert!(report.body.contains("/views/index.html"));
//! assert!(!report.body.contains("/srv/app"));
//! ```
//!
//! ## Promoting runtime signals
//!
//! ```
//! use error_report::{ErrorPromoter, ErrorSignal, ReportingMask, Severity};
//!
//! let signal = ErrorSignal::new(Severity::Notice, "undefined index");
//! let promoter = ErrorPromoter::default();
//!
//! assert!(promoter.promote(&signal, ReportingMask::ALL).is_err());
//! assert!(promoter.promote(&signal, ReportingMask::ALL.without(Severity::Notice)).is_ok());
//! ```

/// Walking an error's chain of causes
pub mod chain;
/// Failures of the reporting pipeline
pub mod error;
/// HTML, JSON and plain-text renderers
pub mod format;
/// Uncaught-error and signal handlers
pub mod handler;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Process-wide registration
pub mod register;
/// Logger and sink capabilities
pub mod traits;
/// Exceptions, records and runtime signals
pub mod types;

pub use chain::{error_chain, ErrorChain};
pub use error::ReportError;
pub use format::{Format, RecordFormatter};
pub use handler::{ErrorPromoter, ExceptionHandler, HandlerConfig, Report};
pub use register::{
    error_reporting, is_registered, register, register_with, report, set_error_reporting, throw,
    trigger,
};
pub use traits::*;
pub use types::{
    format_records, BoxedCause, ErrorRecord, ErrorSignal, ErrorVec, Exception, ReportingMask,
    Severity,
};
