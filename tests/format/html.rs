use error_report::format::html;
use error_report::{format_records, ErrorRecord, Exception};

fn record(message: &str) -> ErrorRecord {
    ErrorRecord {
        message: message.into(),
        code: 500,
        file: "src/<main>.rs".into(),
        line: 10,
        trace: vec!["#0 run()".into(), "#1 <init>".into()],
    }
}

fn script_body(page: &str) -> &str {
    let start = page.find("<script>").expect("script block") + "<script>".len();
    let end = page.rfind("</script>").expect("closing tag");
    &page[start..end]
}

#[test]
fn html_lists_each_record() {
    let err = Exception::new("outer").caused_by("inner");
    let page = html::render(&format_records(&err, None), false).unwrap();

    assert!(page.starts_with("<style>"));
    assert!(page.contains("<ul class='exceptionList'>"));
    assert_eq!(page.matches("<li class='exception'>").count(), 2);
    assert!(page.contains("Uncaught exception: &#039;outer&#039;"));
    assert!(page.contains("Uncaught exception: &#039;inner&#039;"));
}

#[test]
fn html_escapes_every_text_field() {
    let page = html::render(&[record("<script>alert('x')</script>")], false).unwrap();

    assert!(page.contains("&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;"));
    assert!(page.contains("src/&lt;main&gt;.rs"));
    assert!(page.contains("<ol><li>#0 run()</li><li>#1 &lt;init&gt;</li></ol>"));
    assert!(!page.contains("<script>"));
    assert!(!page.contains("<main>"));
}

#[test]
fn html_shows_code_and_line() {
    let page = html::render(&[record("m")], false).unwrap();
    assert!(page.contains("<div class='field'>code:</div><div class='value'>500</div>"));
    assert!(page.contains("<div class='field'>line:</div><div class='value'>10</div>"));
}

#[test]
fn console_script_is_optional() {
    let records = [record("m")];
    assert!(!html::render(&records, false).unwrap().contains("console.log"));
    assert!(html::render(&records, true).unwrap().contains("console.log("));
}

#[test]
fn console_script_cannot_be_closed_by_record_content() {
    let page = html::render(&[record("</script><script>alert(1)</script>`${x}`")], true).unwrap();
    let script = script_body(&page);

    assert!(!script.contains('<'));
    assert!(!script.contains('>'));
    assert_eq!(page.matches("</script>").count(), 1);
}

#[test]
fn console_script_embeds_equivalent_json() {
    let records = [record("a < b && c > d")];
    let page = html::render(&records, true).unwrap();
    let script = script_body(&page).trim();

    let literal = script
        .strip_prefix("console.log(")
        .and_then(|s| s.strip_suffix(");"))
        .expect("console.log call");
    let parsed: Vec<ErrorRecord> = serde_json::from_str(literal).unwrap();
    assert_eq!(parsed, records);
}

#[test]
fn escape_handles_all_special_characters() {
    assert_eq!(
        html::escape(r#"<a href="x">'&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
    );
    assert_eq!(html::escape("plain"), "plain");
}

#[test]
fn script_literal_escapes_line_separators() {
    assert_eq!(html::script_literal("\"\u{2028}\u{2029}\""), "\"\\u2028\\u2029\"");
}
