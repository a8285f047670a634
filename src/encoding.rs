//! Character encoding detection and transcoding.
//!
//! The bytes entry point accepts documents in whatever charset the publisher
//! declared. Detection looks at `<meta charset>` and `http-equiv` tags in
//! the first kilobyte; decoding is lossy, replacing invalid sequences with
//! U+FFFD rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Detect the declared character encoding of an HTML document.
///
/// Covers both `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="...; charset=...">` shapes.
/// Defaults to UTF-8 when nothing is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|captures| captures.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string using the declared encoding.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_charset_detected() {
        let html = br#"<html><head><meta charset="windows-1252"></head><body>x</body></html>"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_charset_detected() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        // WHATWG maps ISO-8859-1 onto windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<html><body>plain</body></html>"), UTF_8);
    }

    #[test]
    fn latin1_bytes_transcode() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
        assert!(transcode_to_utf8(html).contains("Caf\u{e9}"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let html = b"<html><body>Test \xFF\xFE Invalid</body></html>";
        let result = transcode_to_utf8(html);
        assert!(result.contains("Test"));
        assert!(result.contains("Invalid"));
    }
}
