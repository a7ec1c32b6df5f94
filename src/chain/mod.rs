//! Walking an error's chain of causes.
//!
//! The chain starts with the error itself and follows
//! [`Error::source`] until no further cause exists:
//!
//! ```
//! use error_report::{error_chain, Exception};
//!
//! let err = Exception::new("request failed")
//!     .caused_by(Exception::new("query failed").caused_by("connection reset"));
//!
//! let messages: Vec<String> = error_chain(&err).iter().map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["request failed", "query failed", "connection reset"]);
//! ```
//!
//! No cycle detection is performed. A `source()` implementation that leads
//! back to an earlier link makes the walk infinite.

use crate::types::ErrorVec;
use std::error::Error;
use std::iter::FusedIterator;

/// Iterator over an error and its causes, outermost first.
#[derive(Clone, Copy)]
pub struct ErrorChain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> ErrorChain<'a> {
    #[inline]
    pub fn new(error: &'a (dyn Error + 'static)) -> Self {
        Self { next: Some(error) }
    }

    /// Returns the innermost cause.
    pub fn root_cause(self) -> Option<&'a (dyn Error + 'static)> {
        self.last()
    }
}

impl<'a> Iterator for ErrorChain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for ErrorChain<'_> {}

/// Collects the chain of `error` into a vector, outermost first.
#[inline]
pub fn error_chain<'a>(error: &'a (dyn Error + 'static)) -> ErrorVec<&'a (dyn Error + 'static)> {
    ErrorChain::new(error).collect()
}
