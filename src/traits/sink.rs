//! Output destinations for rendered reports.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Destination a report is written to.
pub trait Sink: Send + Sync {
    fn write(&self, text: &str) -> io::Result<()>;
}

/// Primary output stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl Sink for StdoutSink {
    fn write(&self, text: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }
}

/// Process diagnostic log.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl Sink for StderrSink {
    fn write(&self, text: &str) -> io::Result<()> {
        io::stderr().lock().write_all(text.as_bytes())
    }
}

/// In-memory buffer; clones share the same contents.
///
/// # Examples
///
/// ```
/// use error_report::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.write("hello").unwrap();
/// assert_eq!(sink.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Returns the contents and empties the buffer.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.buffer.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Sink for MemorySink {
    fn write(&self, text: &str) -> io::Result<()> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner).push_str(text);
        Ok(())
    }
}
