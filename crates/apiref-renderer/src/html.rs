//! HTML escaping helpers shared by node rendering.

use std::borrow::Cow;
use std::fmt::Write;

/// Characters markdown gives meaning to inside a paragraph.
const MARKDOWN_SPECIAL: [char; 7] = ['\\', '*', '_', '`', '[', ']', '~'];

/// Escape text content for HTML output.
///
/// Markdown punctuation (backslash, emphasis, code, link and strikethrough
/// markers) is also written as numeric character references, so role output
/// reaches the final HTML unchanged after the markdown pass.
#[must_use]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_text(s);
    if !escaped.contains(MARKDOWN_SPECIAL) {
        return escaped;
    }

    let mut out = String::with_capacity(escaped.len() + 8);
    for c in escaped.chars() {
        if MARKDOWN_SPECIAL.contains(&c) {
            let _ = write!(out, "&#{};", u32::from(c));
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Escape a value for use inside a double-quoted HTML attribute.
#[must_use]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    let escaped = html_escape::encode_double_quoted_attribute(s);
    if escaped.contains('\\') {
        Cow::Owned(escaped.replace('\\', "&#92;"))
    } else {
        escaped
    }
}
