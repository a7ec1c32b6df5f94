//! Error types and records.
//!
//! - [`Exception`]: error with code, source location, backtrace and cause
//! - [`ErrorRecord`]: flattened form of one chain link, produced by [`format_records`]
//! - [`ErrorSignal`], [`Severity`], [`ReportingMask`]: non-fatal runtime signals
//!
//! # Examples
//!
//! ```
//! use error_report::{format_records, Exception};
//!
//! let err = Exception::new("database connection failed")
//!     .with_code(500)
//!     .caused_by("connection refused");
//!
//! let records = format_records(&err, None);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].code, 500);
//! assert_eq!(records[1].message, "Uncaught exception: 'connection refused'");
//! ```
use smallvec::SmallVec;

pub mod error_record;
pub mod error_signal;
pub mod exception;
pub mod severity;

pub use error_record::*;
pub use error_signal::*;
pub use exception::*;
pub use severity::*;

/// SmallVec-backed collection used for short error chains.
///
/// Uses inline storage for a single element, which covers errors without a cause.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
