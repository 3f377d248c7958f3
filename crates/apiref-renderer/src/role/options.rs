//! Role option parsing.
//!
//! Parses the `{#id .class key="value"}` block that may follow a role's content.

use std::collections::BTreeMap;

/// Rendering options attached to a role occurrence.
///
/// Options are passed through to the produced node unchanged, so an author can
/// add an id, CSS classes, or extra attributes to the rendered link.
///
/// # Example
///
/// ```
/// use apiref_renderer::role::RoleOptions;
///
/// let options = RoleOptions::parse(r#"#ref .inline .muted target="_blank""#);
/// assert_eq!(options.id, Some("ref".to_owned()));
/// assert_eq!(options.classes, vec!["inline", "muted"]);
/// assert_eq!(options.get("target"), Some("_blank"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoleOptions {
    /// ID from `{#id}`.
    pub id: Option<String>,
    /// Classes from `{.class1 .class2}` and from a `class="a b"` attribute.
    pub classes: Vec<String>,
    /// Remaining key-value attributes, ordered by key.
    pub attrs: BTreeMap<String, String>,
}

impl RoleOptions {
    /// Parse an attribute string (the text between the braces).
    ///
    /// Supports `#id`, `.class`, `key="value"`, `key='value'` and `key=value`.
    /// A `class` attribute is split on whitespace and merged into
    /// [`classes`](Self::classes) instead of being kept as a plain attribute.
    #[must_use]
    pub fn parse(attrs_str: &str) -> Self {
        let mut options = Self::default();
        let mut remaining = attrs_str.trim();

        while !remaining.is_empty() {
            if let Some(rest) = remaining.strip_prefix('#') {
                let end = token_end(rest);
                options.id = Some(rest[..end].to_owned());
                remaining = &rest[end..];
            } else if let Some(rest) = remaining.strip_prefix('.') {
                let end = token_end(rest);
                if end > 0 {
                    options.classes.push(rest[..end].to_owned());
                }
                remaining = &rest[end..];
            } else if let Some((key, value, rest)) = parse_key_value(remaining) {
                options.insert(key, value);
                remaining = rest;
            } else {
                // Skip unrecognized character
                let skip = remaining.chars().next().map_or(1, char::len_utf8);
                remaining = &remaining[skip..];
            }
            remaining = remaining.trim_start();
        }

        options
    }

    /// Get an attribute value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: &str) {
        if key == "class" {
            self.classes
                .extend(value.split_whitespace().map(str::to_owned));
        } else {
            self.attrs.insert(key.to_owned(), value.to_owned());
        }
    }
}

/// End of an `#id` or `.class` token.
fn token_end(s: &str) -> usize {
    s.find(|c: char| c.is_whitespace() || c == '.' || c == '#')
        .unwrap_or(s.len())
}

/// Parse `key="value"`, `key='value'` or `key=value`.
///
/// Returns the key, the value and the unparsed rest.
fn parse_key_value(s: &str) -> Option<(&str, &str, &str)> {
    let eq_pos = s.find('=')?;
    let key = s[..eq_pos].trim();

    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    let after_eq = &s[eq_pos + 1..];

    for quote in ['"', '\''] {
        if let Some(stripped) = after_eq.strip_prefix(quote) {
            let end_quote = stripped.find(quote)?;
            return Some((key, &stripped[..end_quote], &stripped[end_quote + 1..]));
        }
    }

    let end = after_eq.find(char::is_whitespace).unwrap_or(after_eq.len());
    Some((key, &after_eq[..end], &after_eq[end..]))
}
