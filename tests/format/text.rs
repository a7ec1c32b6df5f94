use error_report::format::text;
use error_report::Exception;
use std::io;

#[test]
fn text_is_one_display_line_per_entry() {
    let err = Exception::new("request failed")
        .with_code(500)
        .at("/srv/app/handler.rs", 20)
        .caused_by(io::Error::new(io::ErrorKind::TimedOut, "upstream timed out"));

    assert_eq!(text::render(&err, None), "request failed\nupstream timed out");
}

#[test]
fn text_omits_record_fields() {
    let err = Exception::new("boom").with_code(99).at("src/lib.rs", 7);
    let out = text::render(&err, None);

    assert!(!out.contains("99"));
    assert!(!out.contains("src/lib.rs"));
    assert!(!out.contains("Uncaught exception"));
}

#[test]
fn text_strips_remove_path() {
    let err = Exception::new("missing /srv/app/config.toml");
    assert_eq!(text::render(&err, Some("/srv/app")), "missing /config.toml");
}

#[test]
fn text_does_not_escape() {
    assert_eq!(text::render(&Exception::new("<b>"), None), "<b>");
}
