//! Inline role trait.

use super::{Node, RoleContext, RoleOptions};

/// Error returned by a role handler.
#[derive(Debug, thiserror::Error)]
pub enum RoleError {
    /// The occurrence is malformed.
    ///
    /// Reported at error level; a problematic placeholder replaces the role.
    #[error("{0}")]
    Invalid(String),
    /// The handler cannot resolve anything (e.g. missing configuration).
    ///
    /// Stops processing of the current document.
    #[error(transparent)]
    Fatal(Box<dyn std::error::Error + Send + Sync>),
}

/// Handler for inline roles: `:name[content]{attrs}`
///
/// Handlers are constructed by the embedding application, which hands them
/// whatever configuration they need, and registered with
/// [`RoleProcessor::with_role`](super::RoleProcessor::with_role).
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each document gets its own
/// processor instance. For parallel document processing, create separate processor
/// instances per thread.
pub trait InlineRole: Send {
    /// Role name (e.g., "apiclass").
    ///
    /// This is matched against the role syntax: `:name[...]`
    fn name(&self) -> &str;

    /// Resolve one occurrence of the role.
    ///
    /// * `raw_text` - the whole occurrence as written, including delimiters
    /// * `text` - the content between the brackets
    /// * `options` - rendering options from the braces, to be carried into the node
    fn resolve(
        &self,
        raw_text: &str,
        text: &str,
        options: RoleOptions,
        ctx: &RoleContext<'_>,
    ) -> Result<Node, RoleError>;
}
