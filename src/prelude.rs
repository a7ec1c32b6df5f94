//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_report::prelude::*;
//!
//! fn load(path: &str) -> Result<String, Exception> {
//!     std::fs::read_to_string(path)
//!         .map_err(|e| Exception::new(format!("cannot read {path}")).caused_by(e))
//! }
//!
//! let err = load("/definitely/missing").unwrap_err();
//! assert_eq!(format_records(&err, None).len(), 2);
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Exception`], [`ErrorRecord`], [`ExceptionHandler`], [`HandlerConfig`], [`Format`]
//! - **Functions**: [`register`], [`report`], [`throw`], [`trigger`], [`format_records`]
//! - **Traits**: [`Logger`], [`Sink`]

pub use crate::format::Format;
pub use crate::handler::{ExceptionHandler, HandlerConfig};
pub use crate::register::{register, report, throw, trigger};
pub use crate::traits::{Logger, Sink, TracingLogger};
pub use crate::types::{format_records, ErrorRecord, Exception, Severity};
