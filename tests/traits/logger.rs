use error_report::{format_records, ErrorRecord, Exception, Logger, NullLogger, TracingLogger};
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.text()
}

#[test]
fn null_logger_accepts_anything() {
    let records = format_records(&Exception::new("boom"), None);
    NullLogger.error("Uncaught exception: 'boom'", &records);
}

#[test]
fn tracing_logger_emits_error_with_json_records() {
    let records = format_records(&Exception::new("boom").caused_by("root"), None);
    let log = capture(|| TracingLogger.error("Uncaught exception: 'boom'", &records));

    assert!(log.contains("ERROR"));
    assert!(log.contains("Uncaught exception: 'boom'"));

    let field = log
        .lines()
        .find_map(|line| line.split_once("records=").map(|(_, json)| json.trim_end()))
        .expect("records field");
    let logged: Vec<ErrorRecord> = serde_json::from_str(field).unwrap();
    assert_eq!(logged, records);
}

#[test]
fn loggers_are_object_safe() {
    let loggers: Vec<Box<dyn Logger>> = vec![Box::new(NullLogger), Box::new(TracingLogger)];
    for logger in &loggers {
        logger.error("message", &[]);
    }
}
