//! Character encoding detection for saved product pages.
//!
//! Pages handed over as raw bytes are decoded using the charset declared in
//! their `<meta>` tags, falling back to UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// `<meta charset="...">`, or the `charset=` parameter of a
/// `<meta http-equiv="Content-Type" content="...">` tag.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Detect the character encoding declared in the head of `html`.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    META_CHARSET_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "page contained undecodable bytes");
    }
    decoded.into_owned()
}
