use error_report::{ErrorPromoter, ErrorSignal, Exception, ReportingMask, Severity};
use std::error::Error;

#[test]
fn new_records_caller_location() {
    let line = line!() + 1;
    let err = Exception::new("boom");

    assert_eq!(err.file(), file!());
    assert_eq!(err.line(), line);
    assert_eq!(err.code(), 0);
    assert_eq!(err.severity(), None);
}

#[test]
fn builders_override_fields() {
    let err = Exception::new("boom")
        .with_code(42)
        .at("/app/src/x.rs", 9)
        .with_severity(Severity::UserError);

    assert_eq!(err.message(), "boom");
    assert_eq!(err.code(), 42);
    assert_eq!(err.file(), "/app/src/x.rs");
    assert_eq!(err.line(), 9);
    assert_eq!(err.severity(), Some(Severity::UserError));
}

#[test]
fn display_is_the_message_only() {
    let err = Exception::new("disk full").with_code(28).caused_by("write failed");
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn source_exposes_cause() {
    let err = Exception::new("outer").caused_by(Exception::new("inner"));

    let source = err.source().expect("cause should be attached");
    assert_eq!(source.to_string(), "inner");
    assert!(source.downcast_ref::<Exception>().is_some());
    assert!(source.source().is_none());
}

#[test]
fn trace_is_none_or_multiline_text() {
    let err = Exception::new("traced");
    if let Some(trace) = err.trace() {
        assert!(!trace.is_empty());
    }
}

#[test]
fn promoted_signal_keeps_message_and_location() {
    let signal = ErrorSignal::new(Severity::UserWarning, "low disk space").at("/srv/job.rs", 12);
    let err = ErrorPromoter::default().promote(&signal, ReportingMask::ALL).unwrap_err();

    assert_eq!(err.message(), "low disk space");
    assert_eq!(err.file(), "/srv/job.rs");
    assert_eq!(err.line(), 12);
    assert_eq!(err.code(), 0);
    assert_eq!(err.severity(), Some(Severity::UserWarning));
}

#[test]
fn exception_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<Exception>();
}
