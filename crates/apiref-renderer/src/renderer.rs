//! Markdown renderer with role expansion.

use pulldown_cmark::{Options, Parser, html};

use crate::role::{ProcessError, RoleProcessor, SystemMessage};

/// Result of rendering markdown.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Messages reported while expanding roles.
    pub messages: Vec<SystemMessage>,
}

impl RenderResult {
    /// Whether any message was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }
}

/// Renders markdown to HTML after expanding registered roles.
///
/// GFM tables and strikethrough are enabled.
pub struct MarkdownRenderer {
    processor: RoleProcessor,
    options: Options,
}

impl MarkdownRenderer {
    #[must_use]
    pub fn new(processor: RoleProcessor) -> Self {
        Self {
            processor,
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }

    /// Render a markdown document.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError`] if a role fails fatally.
    pub fn render(&mut self, markdown: &str) -> Result<RenderResult, ProcessError> {
        let expanded = self.processor.process(markdown)?;

        let parser = Parser::new_ext(&expanded, self.options);
        let mut html = String::with_capacity(expanded.len() + expanded.len() / 4);
        html::push_html(&mut html, parser);

        let messages = self.processor.take_messages();
        tracing::debug!(
            bytes = html.len(),
            messages = messages.len(),
            "Rendered document"
        );

        Ok(RenderResult { html, messages })
    }
}
