//! Role processor: expands registered roles in markdown source.

use std::path::{Path, PathBuf};

use crate::fence::FenceTracker;

use super::parser::{ParsedRole, parse_line};
use super::{InlineRole, Node, Reporter, RoleContext, RoleError, RoleOptions, SystemMessage};

/// Error that stops processing of a document.
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    /// A role handler failed fatally.
    #[error("{location}: role \"{role}\" failed: {source}")]
    Role {
        role: String,
        location: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Processor for inline roles.
///
/// Roles are registered explicitly with [`with_role`](Self::with_role); the
/// first handler registered under a name wins. Occurrences of unregistered
/// names pass through unchanged.
///
/// One processor handles one document at a time. Diagnostics accumulate in
/// its [`Reporter`] until taken with [`take_messages`](Self::take_messages).
pub struct RoleProcessor {
    roles: Vec<Box<dyn InlineRole>>,
    source_path: Option<PathBuf>,
    reporter: Reporter,
}

impl Default for RoleProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RoleProcessor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            roles: Vec::new(),
            source_path: None,
            reporter: Reporter::default(),
        }
    }

    /// Register an inline role handler.
    #[must_use]
    pub fn with_role<R: InlineRole + 'static>(mut self, role: R) -> Self {
        tracing::debug!(role = role.name(), "Registered inline role");
        self.roles.push(Box::new(role));
        self
    }

    /// Set the path of the document being processed (used in diagnostics).
    #[must_use]
    pub fn with_source_path(mut self, source_path: impl Into<PathBuf>) -> Self {
        self.set_source_path(Some(source_path.into()));
        self
    }

    /// Change the document path between documents.
    pub fn set_source_path(&mut self, source_path: Option<PathBuf>) {
        self.reporter = Reporter::new(source_path.clone());
        self.source_path = source_path;
    }

    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Expand every registered role in `input`.
    ///
    /// Line endings are preserved. Fenced code blocks and inline code spans
    /// are left untouched. Invalid occurrences are reported and replaced with
    /// a problematic placeholder.
    ///
    /// Messages left over from a previous document are discarded first.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessError::Role`] when a handler fails with
    /// [`RoleError::Fatal`]; the partially processed output is discarded.
    pub fn process(&mut self, input: &str) -> Result<String, ProcessError> {
        self.reporter.take();

        let mut fence = FenceTracker::new();
        let mut output = String::with_capacity(input.len());

        for (idx, line) in input.split_inclusive('\n').enumerate() {
            let (body, ending) = split_line_ending(line);

            fence.update(body);
            if fence.in_fence() {
                output.push_str(line);
                continue;
            }

            self.process_line(body, idx + 1, &mut output)?;
            output.push_str(ending);
        }

        Ok(output)
    }

    fn process_line(
        &mut self,
        line: &str,
        line_num: usize,
        output: &mut String,
    ) -> Result<(), ProcessError> {
        let mut offset = 0;

        while let Some(parsed) = parse_line(&line[offset..]) {
            let rest = &line[offset..];
            output.push_str(&rest[..parsed.start]);
            let raw_text = parsed.raw_text(rest);

            match self.dispatch(&parsed, raw_text, line_num)? {
                Some(html) => output.push_str(&html),
                None => output.push_str(raw_text),
            }

            offset += parsed.end;
        }

        output.push_str(&line[offset..]);
        Ok(())
    }

    /// Resolve one occurrence. `None` means no handler is registered.
    fn dispatch(
        &mut self,
        parsed: &ParsedRole<'_>,
        raw_text: &str,
        line_num: usize,
    ) -> Result<Option<String>, ProcessError> {
        let Some(role) = self.roles.iter().find(|r| r.name() == parsed.name) else {
            return Ok(None);
        };

        let ctx = RoleContext {
            source_path: self.source_path.as_deref(),
            line: line_num,
        };
        let options = RoleOptions::parse(parsed.attrs);

        match role.resolve(raw_text, parsed.content, options, &ctx) {
            Ok(node) => Ok(Some(node.to_html())),
            Err(RoleError::Invalid(message)) => {
                let message = self.reporter.error(line_num, message).message.clone();
                Ok(Some(Node::problematic(raw_text, message).to_html()))
            }
            Err(RoleError::Fatal(source)) => Err(ProcessError::Role {
                role: parsed.name.to_owned(),
                location: ctx.location(),
                source,
            }),
        }
    }

    /// Messages reported for the current document.
    #[must_use]
    pub fn messages(&self) -> &[SystemMessage] {
        self.reporter.messages()
    }

    /// Take all reported messages.
    pub fn take_messages(&mut self) -> Vec<SystemMessage> {
        self.reporter.take()
    }
}

/// Split a line from `split_inclusive` into its body and its `\n`/`\r\n` ending.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Links `:doc[name]` to `/name.html`; empty names are invalid.
    struct TestDoc;

    impl InlineRole for TestDoc {
        fn name(&self) -> &'static str {
            "doc"
        }

        fn resolve(
            &self,
            raw_text: &str,
            text: &str,
            options: RoleOptions,
            _ctx: &RoleContext<'_>,
        ) -> Result<Node, RoleError> {
            if text.is_empty() {
                return Err(RoleError::Invalid(format!("\"{raw_text}\" needs a name")));
            }
            Ok(Node::reference(raw_text, text, format!("/{text}.html"), options))
        }
    }

    /// Always fails fatally.
    struct TestBroken;

    impl InlineRole for TestBroken {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn resolve(
            &self,
            _raw_text: &str,
            _text: &str,
            _options: RoleOptions,
            _ctx: &RoleContext<'_>,
        ) -> Result<Node, RoleError> {
            Err(RoleError::Fatal("not configured".into()))
        }
    }

    /// Records the line it was called with in the link target.
    struct TestLine;

    impl InlineRole for TestLine {
        fn name(&self) -> &'static str {
            "line"
        }

        fn resolve(
            &self,
            raw_text: &str,
            text: &str,
            options: RoleOptions,
            ctx: &RoleContext<'_>,
        ) -> Result<Node, RoleError> {
            Ok(Node::reference(raw_text, text, format!("#L{}", ctx.line), options))
        }
    }

    #[test]
    fn test_single_role() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process("Read :doc[intro] first.").unwrap();
        assert_eq!(
            output,
            r#"Read <a class="reference external" href="/intro.html">intro</a> first."#
        );
    }

    #[test]
    fn test_multiple_roles_on_one_line() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process(":doc[a] and :doc[b]").unwrap();
        assert!(output.contains(r#"href="/a.html""#));
        assert!(output.contains(r#"href="/b.html""#));
        assert!(output.contains(" and "));
    }

    #[test]
    fn test_options_pass_through() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process(":doc[a]{.hint}").unwrap();
        assert!(output.contains(r#"class="reference external hint""#));
    }

    #[test]
    fn test_unknown_role_passthrough() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process(":unknown[content]{.x}").unwrap();
        assert_eq!(output, ":unknown[content]{.x}");
    }

    #[test]
    fn test_invalid_role_reports_and_renders_problematic() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process("one\ntwo :doc[] three").unwrap();
        assert!(output.contains(r#"<span class="problematic""#));
        assert!(output.contains(">:doc&#91;&#93;</span> three"));

        let messages = processor.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].line, 2);
        assert_eq!(messages[0].message, "\":doc[]\" needs a name");
    }

    #[test]
    fn test_processing_continues_after_invalid_role() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let output = processor.process(":doc[] :doc[ok]").unwrap();
        assert!(output.contains("problematic"));
        assert!(output.contains(r#"href="/ok.html""#));
    }

    #[test]
    fn test_fatal_error_stops_processing() {
        let mut processor = RoleProcessor::new()
            .with_source_path("docs/page.md")
            .with_role(TestBroken);

        let err = processor.process("x\n:broken[y]").unwrap_err();
        let ProcessError::Role { role, location, .. } = &err;
        assert_eq!(role, "broken");
        assert_eq!(location, "docs/page.md:2");
        assert!(err.to_string().contains("not configured"));
    }

    #[test]
    fn test_line_numbers() {
        let mut processor = RoleProcessor::new().with_role(TestLine);

        let output = processor.process("a\nb\n:line[x]\n").unwrap();
        assert!(output.contains(r##"href="#L3""##));
    }

    #[test]
    fn test_code_fence_skipping() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let input = "```\n:doc[inside]\n```\n:doc[outside]";
        let output = processor.process(input).unwrap();

        assert!(output.contains(":doc[inside]"));
        assert!(output.contains(r#"href="/outside.html""#));
    }

    #[test]
    fn test_line_endings_preserved() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        assert_eq!(processor.process("a\r\nb\n").unwrap(), "a\r\nb\n");
        assert_eq!(processor.process("no newline").unwrap(), "no newline");
        assert_eq!(processor.process("").unwrap(), "");
    }

    #[test]
    fn test_first_registered_role_wins() {
        struct Shadow;

        impl InlineRole for Shadow {
            fn name(&self) -> &'static str {
                "doc"
            }

            fn resolve(
                &self,
                raw_text: &str,
                text: &str,
                options: RoleOptions,
                _ctx: &RoleContext<'_>,
            ) -> Result<Node, RoleError> {
                Ok(Node::reference(raw_text, text, "/shadow", options))
            }
        }

        let mut processor = RoleProcessor::new().with_role(TestDoc).with_role(Shadow);
        let output = processor.process(":doc[a]").unwrap();
        assert!(output.contains(r#"href="/a.html""#));
    }

    #[test]
    fn test_code_span_skipping() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let input = "Write `:doc[x]` to link, or ``:doc[]`` for nothing.";
        assert_eq!(processor.process(input).unwrap(), input);
        assert!(processor.messages().is_empty());

        let output = processor.process("`:doc[x]` gives :doc[x]").unwrap();
        assert!(output.starts_with("`:doc[x]` gives <a "));
    }

    #[test]
    fn test_bare_role_name_is_prose() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);

        let input = "Use the :doc role to link pages.";
        assert_eq!(processor.process(input).unwrap(), input);
        assert!(processor.messages().is_empty());
    }

    #[test]
    fn test_messages_cleared_after_fatal_error() {
        let mut processor = RoleProcessor::new().with_role(TestDoc).with_role(TestBroken);

        processor.process(":doc[]
:broken[y]").unwrap_err();
        assert_eq!(processor.messages().len(), 1);

        processor.process(":doc[fine]").unwrap();
        assert!(processor.messages().is_empty());
    }

    #[test]
    fn test_take_messages() {
        let mut processor = RoleProcessor::new().with_role(TestDoc);
        processor.process(":doc[]").unwrap();

        assert_eq!(processor.take_messages().len(), 1);
        assert!(processor.messages().is_empty());
    }
}
