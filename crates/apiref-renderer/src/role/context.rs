//! Role resolution context.

use std::path::Path;

/// Source location handed to a role handler for each occurrence.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use apiref_renderer::role::RoleContext;
///
/// let ctx = RoleContext {
///     source_path: Some(Path::new("docs/usage.md")),
///     line: 42,
/// };
/// assert_eq!(ctx.location(), "docs/usage.md:42");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RoleContext<'a> {
    /// Path to the document being processed (if known).
    pub source_path: Option<&'a Path>,
    /// Line where the role appears (1-indexed).
    pub line: usize,
}

impl RoleContext<'_> {
    /// Human-readable location: `path:line`, or `line N` without a path.
    #[must_use]
    pub fn location(&self) -> String {
        match self.source_path {
            Some(path) => format!("{}:{}", path.display(), self.line),
            None => format!("line {}", self.line),
        }
    }
}
