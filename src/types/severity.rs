//! Runtime signal severities and the reporting mask that filters them.

use core::fmt::{self, Display};
use core::ops::{BitOr, BitOrAssign};
use serde::{Deserialize, Serialize};

/// Class of a non-fatal runtime signal.
///
/// The discriminants are bit values so severities combine into a
/// [`ReportingMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Severity {
    Warning = 2,
    Notice = 8,
    UserError = 256,
    UserWarning = 512,
    UserNotice = 1024,
    RecoverableError = 4096,
    Deprecated = 8192,
    UserDeprecated = 16384,
}

impl Severity {
    /// Returns the bit this severity occupies in a [`ReportingMask`].
    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Deprecation notices are never promoted to exceptions.
    #[inline]
    pub const fn is_deprecation(self) -> bool {
        matches!(self, Severity::Deprecated | Severity::UserDeprecated)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Notice => "notice",
            Severity::UserError => "user error",
            Severity::UserWarning => "user warning",
            Severity::UserNotice => "user notice",
            Severity::RecoverableError => "recoverable error",
            Severity::Deprecated => "deprecated",
            Severity::UserDeprecated => "user deprecated",
        }
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bitmask of the severities that are currently reported.
///
/// # Examples
///
/// ```
/// use error_report::{ReportingMask, Severity};
///
/// let mask = ReportingMask::ALL.without(Severity::Notice);
/// assert!(mask.contains(Severity::Warning));
/// assert!(!mask.contains(Severity::Notice));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportingMask(u32);

impl ReportingMask {
    pub const NONE: Self = Self(0);
    pub const ALL: Self = Self(32767);
    pub const DEPRECATIONS: Self =
        Self(Severity::Deprecated.bits() | Severity::UserDeprecated.bits());

    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, severity: Severity) -> bool {
        self.0 & severity.bits() != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, severity: Severity) -> Self {
        Self(self.0 | severity.bits())
    }

    #[inline]
    #[must_use]
    pub const fn without(self, severity: Severity) -> Self {
        Self(self.0 & !severity.bits())
    }
}

impl Default for ReportingMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl From<Severity> for ReportingMask {
    fn from(severity: Severity) -> Self {
        Self(severity.bits())
    }
}

impl BitOr for ReportingMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<Severity> for ReportingMask {
    type Output = Self;

    fn bitor(self, rhs: Severity) -> Self {
        self.with(rhs)
    }
}

impl BitOr for Severity {
    type Output = ReportingMask;

    fn bitor(self, rhs: Self) -> ReportingMask {
        ReportingMask(self.bits() | rhs.bits())
    }
}

impl BitOrAssign<Severity> for ReportingMask {
    fn bitor_assign(&mut self, rhs: Severity) {
        self.0 |= rhs.bits();
    }
}
