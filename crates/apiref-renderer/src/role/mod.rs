//! Pluggable inline roles: `:name[content]{attrs}`.
//!
//! A role is a named inline markup extension. The embedding application
//! constructs role handlers itself and registers them on a [`RoleProcessor`];
//! each occurrence of a registered role is resolved to a [`Node`].
//!
//! # Failure handling
//!
//! Handlers return [`RoleError`]:
//!
//! - [`RoleError::Invalid`]: the occurrence is malformed. The processor reports
//!   a [`SystemMessage`] at the source line and renders a problematic
//!   placeholder; processing continues.
//! - [`RoleError::Fatal`]: the handler cannot work at all (for example, it
//!   is missing required configuration). Processing stops and
//!   [`RoleProcessor::process`] returns [`ProcessError::Role`].
//!
//! # Example
//!
//! ```
//! use apiref_renderer::role::{InlineRole, Node, RoleContext, RoleError, RoleOptions, RoleProcessor};
//!
//! struct Issue;
//!
//! impl InlineRole for Issue {
//!     fn name(&self) -> &str { "issue" }
//!
//!     fn resolve(
//!         &self,
//!         raw_text: &str,
//!         text: &str,
//!         options: RoleOptions,
//!         _ctx: &RoleContext<'_>,
//!     ) -> Result<Node, RoleError> {
//!         if text.is_empty() {
//!             return Err(RoleError::Invalid("issue number required".to_owned()));
//!         }
//!         let url = format!("https://tracker.example.com/{text}");
//!         Ok(Node::reference(raw_text, format!("#{text}"), url, options))
//!     }
//! }
//!
//! let mut processor = RoleProcessor::new().with_role(Issue);
//! let output = processor.process("Fixed in :issue[42].").unwrap();
//! assert!(output.contains(r#"href="https://tracker.example.com/42""#));
//! ```

mod context;
mod inline;
mod node;
mod options;
mod parser;
mod processor;
mod reporter;

pub use context::RoleContext;
pub use inline::{InlineRole, RoleError};
pub use node::{Node, Problematic, Reference};
pub use options::RoleOptions;
pub use processor::{ProcessError, RoleProcessor};
pub use reporter::{Reporter, SystemMessage};
