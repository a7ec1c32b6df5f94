//! Capabilities the handlers are wired with.
//!
//! - [`Logger`]: structured error-level logging, [`NullLogger`] by default
//! - [`Sink`]: where rendered reports and diagnostic lines are written
//!
//! # Examples
//!
//! ```
//! use error_report::traits::{Logger, NullLogger, Sink, MemorySink};
//!
//! NullLogger.error("ignored", &[]);
//!
//! let sink = MemorySink::new();
//! sink.write("report").unwrap();
//! assert_eq!(sink.take(), "report");
//! assert!(sink.contents().is_empty());
//! ```

pub mod logger;
pub mod sink;

pub use logger::{Logger, NullLogger, TracingLogger};
pub use sink::{MemorySink, Sink, StderrSink, StdoutSink};
