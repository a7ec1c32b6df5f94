use crate::types::{ErrorSignal, Exception, ReportingMask};

/// Promotes runtime signals to exceptions.
///
/// A signal is left to default handling when its severity is outside the
/// active reporting mask or in the ignored set (deprecations by default).
///
/// # Examples
///
/// ```
/// use error_report::{ErrorPromoter, ErrorSignal, ReportingMask, Severity};
///
/// let promoter = ErrorPromoter::default();
///
/// let warning = ErrorSignal::new(Severity::Warning, "division by zero");
/// let err = promoter.promote(&warning, ReportingMask::ALL).unwrap_err();
/// assert_eq!(err.message(), "division by zero");
///
/// let deprecated = ErrorSignal::new(Severity::Deprecated, "old api");
/// assert!(promoter.promote(&deprecated, ReportingMask::ALL).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPromoter {
    ignored: ReportingMask,
}

impl ErrorPromoter {
    pub fn new() -> Self {
        Self { ignored: ReportingMask::DEPRECATIONS }
    }

    /// Replaces the set of severities that are never promoted.
    #[must_use]
    pub fn ignoring(mut self, ignored: ReportingMask) -> Self {
        self.ignored = ignored;
        self
    }

    #[inline]
    pub fn ignored(&self) -> ReportingMask {
        self.ignored
    }

    /// `Ok(())` means the signal was not handled and default handling applies;
    /// `Err` carries the exception to raise in its place.
    pub fn promote(&self, signal: &ErrorSignal, mask: ReportingMask) -> Result<(), Exception> {
        if !mask.contains(signal.severity) || self.ignored.contains(signal.severity) {
            return Ok(());
        }
        Err(Exception::from_signal(signal))
    }
}

impl Default for ErrorPromoter {
    fn default() -> Self {
        Self::new()
    }
}
