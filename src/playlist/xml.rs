use std::path::Path;

use url::Url;

/// Escape text content for XML. Only element content goes through here; the
/// structural tags around it are written as-is.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// `file://` URI for a track path (not yet XML-escaped).
///
/// Absolute paths get full percent-encoding; relative paths can't be
/// expressed as file URLs, so only their spaces are encoded.
pub fn file_location(path: &Path) -> String {
    if path.is_absolute() {
        if let Ok(url) = Url::from_file_path(path) {
            return url.into();
        }
    }
    format!("file://{}", path.to_string_lossy().replace(' ', "%20"))
}
