//! Inline role processing and markdown rendering.
//!
//! This crate provides a small host for inline markup roles written as
//! `:name[content]{attrs}` inside markdown documents. Role handlers are plain
//! objects implementing [`InlineRole`](role::InlineRole) and are registered
//! explicitly on a [`RoleProcessor`](role::RoleProcessor); there is no global
//! registry.
//!
//! # Architecture
//!
//! Rendering is a two-step pipeline:
//!
//! 1. **Role expansion** ([`RoleProcessor::process`](role::RoleProcessor::process)):
//!    every role occurrence outside code fences and code spans is handed to
//!    its handler and replaced with the HTML of the returned
//!    [`Node`](role::Node). Invalid input is reported through the
//!    [`Reporter`](role::Reporter) and replaced with a problematic placeholder.
//! 2. **Markdown rendering** ([`MarkdownRenderer`]): the expanded text is
//!    rendered with pulldown-cmark, which passes role HTML through unchanged.
//!    Markdown punctuation in role text is written as character references
//!    so it is not read as emphasis or links.
//!
//! # Example
//!
//! ```
//! use apiref_renderer::MarkdownRenderer;
//! use apiref_renderer::role::{InlineRole, Node, RoleContext, RoleError, RoleOptions, RoleProcessor};
//!
//! struct Kbd;
//!
//! impl InlineRole for Kbd {
//!     fn name(&self) -> &str { "kbd" }
//!
//!     fn resolve(
//!         &self,
//!         raw_text: &str,
//!         text: &str,
//!         options: RoleOptions,
//!         _ctx: &RoleContext<'_>,
//!     ) -> Result<Node, RoleError> {
//!         Ok(Node::reference(raw_text, text, format!("#{text}"), options))
//!     }
//! }
//!
//! let mut renderer = MarkdownRenderer::new(RoleProcessor::new().with_role(Kbd));
//! let result = renderer.render("Press :kbd[Enter].").unwrap();
//! assert!(result.html.contains(r##"href="#Enter""##));
//! ```

mod fence;
mod html;
mod renderer;
pub mod role;

pub use html::{escape_attr, escape_html};
pub use renderer::{MarkdownRenderer, RenderResult};
