use crate::chain::ErrorChain;
use crate::types::error_record::strip;
use std::error::Error;

/// Renders one line per chain entry using each error's own `Display`.
///
/// Unlike the record-based formatters, no code, file or trace is included.
/// `remove_path` is still stripped from every line.
///
/// # Examples
///
/// ```
/// use error_report::{format::text, Exception};
///
/// let err = Exception::new("save failed").caused_by("disk full at /srv/data");
/// assert_eq!(text::render(&err, Some("/srv")), "save failed\ndisk full at /data");
/// ```
pub fn render(error: &(dyn Error + 'static), remove_path: Option<&str>) -> String {
    ErrorChain::new(error)
        .map(|link| strip(&link.to_string(), remove_path))
        .collect::<Vec<_>>()
        .join("\n")
}
