//! Class reference resolution: normalization, validation and URL building.

/// Configuration key holding the root URL of the generated API pages.
pub const CONFIG_KEY: &str = "apigen_docs_uri";

/// Page category used in generated URLs and link text.
pub const TYPE_TAG: &str = "class";

/// Extension of generated API pages.
const PAGE_SUFFIX: &str = ".html";

/// Reason a reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// The token does not name a class.
    #[error("Class name must be a valid fully qualified class name; \"{raw_text}\" is invalid.")]
    Validation {
        /// Token as written in the document.
        raw_text: String,
        /// Source line of the token.
        line: usize,
    },
    /// No base URI is configured.
    #[error("{} configuration value is not set", CONFIG_KEY)]
    Configuration,
}

/// A reference ready to be rendered as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    /// Human-readable link text, e.g. `class Foo.Bar`.
    pub display_text: String,
    /// Target page URL.
    pub url: String,
}

/// Normalize a class token to its dotted form.
///
/// Namespace separators (`\`) become dots and one leading dot, the marker of
/// the root namespace, is dropped.
///
/// # Example
///
/// ```
/// use apiref_apigen::normalize_class_name;
///
/// assert_eq!(normalize_class_name(r"\Foo\Bar"), "Foo.Bar");
/// assert_eq!(normalize_class_name("Foo.Bar"), "Foo.Bar");
/// ```
#[must_use]
pub fn normalize_class_name(text: &str) -> String {
    let dotted = text.replace('\\', ".");
    match dotted.strip_prefix('.') {
        Some(stripped) => stripped.to_owned(),
        None => dotted,
    }
}

/// Build the URL of an API page.
///
/// A `/` is inserted between base and page name unless the base already ends
/// with one. Returns [`ResolutionError::Configuration`] when the base is
/// missing or empty.
///
/// # Example
///
/// ```
/// use apiref_apigen::build_url;
///
/// let url = build_url(Some("https://docs.example.com/api"), "Foo.Bar").unwrap();
/// assert_eq!(url, "https://docs.example.com/api/class-Foo.Bar.html");
/// ```
pub fn build_url(base_uri: Option<&str>, slug: &str) -> Result<String, ResolutionError> {
    let base = base_uri
        .filter(|base| !base.is_empty())
        .ok_or(ResolutionError::Configuration)?;

    let slash = if base.ends_with('/') { "" } else { "/" };
    Ok(format!("{base}{slash}{TYPE_TAG}-{slug}{PAGE_SUFFIX}"))
}

/// Link text for a slug: the type tag, a space, and the unescaped slug.
#[must_use]
pub fn display_text(slug: &str) -> String {
    format!("{TYPE_TAG} {}", unescape(slug))
}

/// Decode markup-level character escapes (HTML character references).
fn unescape(text: &str) -> std::borrow::Cow<'_, str> {
    html_escape::decode_html_entities(text)
}

/// Resolve a class token against a base URI.
///
/// The token is validated before the configuration is consulted, so a
/// malformed token is reported as such even when no base URI is set.
pub fn resolve(
    text: &str,
    line: usize,
    base_uri: Option<&str>,
) -> Result<ResolvedLink, ResolutionError> {
    let class_name = normalize_class_name(text);
    if class_name.is_empty() {
        return Err(ResolutionError::Validation {
            raw_text: text.to_owned(),
            line,
        });
    }

    let url = build_url(base_uri, &class_name)?;
    Ok(ResolvedLink {
        display_text: display_text(&class_name),
        url,
    })
}
