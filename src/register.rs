//! Process-wide installation of the handlers.
//!
//! [`register`] installs an [`ExceptionHandler`] as the panic hook and an
//! [`ErrorPromoter`] for [`trigger`], exactly once per process. Errors that
//! escape as `Result`s are passed to [`report`] by the host application.
//!
//! ```no_run
//! use error_report::{register, report, ExceptionHandler, HandlerConfig, TracingLogger};
//!
//! fn run() -> Result<(), std::io::Error> {
//!     std::fs::read_to_string("/missing").map(drop)
//! }
//!
//! register(
//!     ExceptionHandler::new(HandlerConfig::text().remove_path("/srv/app"))
//!         .with_logger(TracingLogger),
//! );
//!
//! if let Err(err) = run() {
//!     report(&err);
//!     std::process::exit(255);
//! }
//! ```

use crate::handler::{ErrorPromoter, ExceptionHandler};
use crate::types::{ErrorSignal, Exception, ReportingMask, Severity};
use std::error::Error;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

struct Hooks {
    exceptions: Arc<ExceptionHandler>,
    signals: ErrorPromoter,
}

static HOOKS: OnceLock<Hooks> = OnceLock::new();
static ERROR_REPORTING: AtomicU32 = AtomicU32::new(ReportingMask::ALL.bits());

/// Installs `handler` as the uncaught-error hook of the process.
///
/// Returns `true` if this call installed the hooks. Once installed they stay
/// for the lifetime of the process; later calls return `false` and leave the
/// existing hooks untouched, including when racing from several threads.
pub fn register(handler: ExceptionHandler) -> bool {
    register_with(handler, ErrorPromoter::default())
}

/// Like [`register`], with a custom promotion policy for [`trigger`].
pub fn register_with(handler: ExceptionHandler, promoter: ErrorPromoter) -> bool {
    let mut installed = false;
    HOOKS.get_or_init(|| {
        installed = true;
        install(handler, promoter)
    });

    if installed {
        tracing::info!("uncaught error hooks installed");
    } else {
        tracing::debug!("uncaught error hooks already installed, ignoring registration");
    }
    installed
}

fn install(handler: ExceptionHandler, signals: ErrorPromoter) -> Hooks {
    let exceptions = Arc::new(handler);
    let hook = Arc::clone(&exceptions);
    std::panic::set_hook(Box::new(move |info| hook.handle_panic(info)));
    Hooks { exceptions, signals }
}

/// Whether [`register`] has completed.
#[inline]
pub fn is_registered() -> bool {
    HOOKS.get().is_some()
}

/// Reports an error that escaped the application through the installed handler.
///
/// Returns `false`, doing nothing, when no handler is registered.
pub fn report(error: &(dyn Error + 'static)) -> bool {
    match HOOKS.get() {
        Some(hooks) => {
            hooks.exceptions.handle(error);
            true
        },
        None => false,
    }
}

/// Raises `exception` as a panic so the installed hook reports its whole chain.
pub fn throw(exception: Exception) -> ! {
    std::panic::panic_any(exception)
}

/// Returns the active reporting mask.
#[inline]
pub fn error_reporting() -> ReportingMask {
    ReportingMask::from_bits(ERROR_REPORTING.load(Ordering::Acquire))
}

/// Sets the active reporting mask, returning the previous one.
pub fn set_error_reporting(mask: ReportingMask) -> ReportingMask {
    ReportingMask::from_bits(ERROR_REPORTING.swap(mask.bits(), Ordering::AcqRel))
}

/// Raises a runtime signal at the caller's location.
///
/// With hooks installed, a signal the promoter accepts comes back as `Err`.
/// Otherwise the signal gets default handling: it is logged at warn level and
/// `Ok(())` is returned.
///
/// # Examples
///
/// ```
/// use error_report::{trigger, Severity};
///
/// // Nothing registered: default handling only.
/// assert!(trigger(Severity::UserNotice, "cache miss").is_ok());
/// ```
#[track_caller]
pub fn trigger(severity: Severity, message: impl Into<String>) -> Result<(), Exception> {
    let signal = ErrorSignal::new(severity, message);
    if let Some(hooks) = HOOKS.get() {
        hooks.signals.promote(&signal, error_reporting())?;
    }

    if error_reporting().contains(signal.severity) {
        tracing::warn!(
            severity = %signal.severity,
            file = %signal.file,
            line = signal.line,
            "{}",
            signal.message
        );
    }
    Ok(())
}
