//! Clickable file URLs for console output

use std::fmt::Write as _;
use std::path::Path;

/// Render a filesystem path as a clickable `file://` URL.
///
/// Unix absolute paths become `file:///abs/path`; Windows paths get the
/// extra slash and forward-slash separators (`file:///C:/dir/file`). Bytes
/// outside the URL-safe set are percent-encoded, so paths with spaces stay
/// clickable in terminals.
#[must_use]
pub fn file_url(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let normalized = if cfg!(windows) {
        raw.replace('\\', "/")
    } else {
        raw.into_owned()
    };

    let mut url = String::with_capacity(normalized.len() + 8);
    url.push_str("file://");
    if cfg!(windows) && !normalized.starts_with('/') {
        url.push('/');
    }
    for byte in normalized.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'/'
            | b':'
            | b'-'
            | b'_'
            | b'.'
            | b'~' => url.push(byte as char),
            other => {
                let _ = write!(url, "%{other:02X}");
            }
        }
    }
    url
}
