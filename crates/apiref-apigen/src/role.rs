//! The `apiclass` inline role.

use apiref_renderer::role::{InlineRole, Node, RoleContext, RoleError, RoleOptions};

use crate::resolver::{self, ResolutionError, ResolvedLink};

/// Name the role is registered under: `:apiclass[Foo\Bar]`.
pub const ROLE_NAME: &str = "apiclass";

/// Links class names to their API reference pages.
///
/// The base URI is handed in at construction; a role built without one
/// still validates tokens but fails every otherwise valid reference with a
/// configuration error.
///
/// # Example
///
/// ```
/// use apiref_apigen::ApiClassRole;
/// use apiref_renderer::role::RoleProcessor;
///
/// let role = ApiClassRole::new(Some("https://docs.example.com/api".to_owned()));
/// let mut processor = RoleProcessor::new().with_role(role);
///
/// let output = processor.process(r"Use :apiclass[CSVelte\Reader] to read.").unwrap();
/// assert!(output.contains(r#"href="https://docs.example.com/api/class-CSVelte.Reader.html""#));
/// assert!(output.contains(">class CSVelte.Reader</a>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ApiClassRole {
    docs_uri: Option<String>,
}

impl ApiClassRole {
    #[must_use]
    pub fn new(docs_uri: Option<String>) -> Self {
        tracing::info!(configured = docs_uri.is_some(), "Initializing API class role");
        Self { docs_uri }
    }

    /// Resolve a class token found at `line`.
    ///
    /// # Errors
    ///
    /// [`ResolutionError::Validation`] if the token normalizes to an empty
    /// name, [`ResolutionError::Configuration`] if no base URI is set.
    pub fn resolve_reference(
        &self,
        raw_text: &str,
        line: usize,
    ) -> Result<ResolvedLink, ResolutionError> {
        resolver::resolve(raw_text, line, self.docs_uri.as_deref())
    }
}

impl InlineRole for ApiClassRole {
    fn name(&self) -> &str {
        ROLE_NAME
    }

    fn resolve(
        &self,
        raw_text: &str,
        text: &str,
        options: RoleOptions,
        ctx: &RoleContext<'_>,
    ) -> Result<Node, RoleError> {
        let link = self.resolve_reference(text, ctx.line)?;
        tracing::debug!(line = ctx.line, url = %link.url, "Resolved API class reference");
        Ok(Node::reference(raw_text, link.display_text, link.url, options))
    }
}

impl From<ResolutionError> for RoleError {
    fn from(err: ResolutionError) -> Self {
        match err {
            ResolutionError::Validation { .. } => Self::Invalid(err.to_string()),
            ResolutionError::Configuration => Self::Fatal(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiref_renderer::role::{ProcessError, Reference, RoleProcessor};
    use pretty_assertions::assert_eq;

    const BASE: &str = "https://docs.example.com/api";

    fn role() -> ApiClassRole {
        ApiClassRole::new(Some(BASE.to_owned()))
    }

    fn ctx(line: usize) -> RoleContext<'static> {
        RoleContext {
            source_path: None,
            line,
        }
    }

    #[test]
    fn test_name() {
        assert_eq!(role().name(), "apiclass");
    }

    #[test]
    fn test_resolve_reference() {
        let link = role().resolve_reference(r"Foo\Bar\Baz", 42).unwrap();
        assert_eq!(link.display_text, "class Foo.Bar.Baz");
        assert_eq!(link.url, "https://docs.example.com/api/class-Foo.Bar.Baz.html");
    }

    #[test]
    fn test_resolve_node_keeps_raw_text_and_options() {
        let options = RoleOptions::parse(".api-link");
        let node = role()
            .resolve(r":apiclass[Foo\Bar]{.api-link}", r"Foo\Bar", options.clone(), &ctx(1))
            .unwrap();

        assert_eq!(
            node,
            Node::Reference(Reference {
                raw_text: r":apiclass[Foo\Bar]{.api-link}".to_owned(),
                text: "class Foo.Bar".to_owned(),
                refuri: "https://docs.example.com/api/class-Foo.Bar.html".to_owned(),
                options,
            })
        );
    }

    #[test]
    fn test_invalid_token_maps_to_invalid() {
        let err = role()
            .resolve(":apiclass[]", "", RoleOptions::default(), &ctx(9))
            .unwrap_err();
        assert!(matches!(
            err,
            RoleError::Invalid(ref msg) if msg == r#"Class name must be a valid fully qualified class name; "" is invalid."#
        ));
    }

    #[test]
    fn test_missing_uri_maps_to_fatal() {
        let err = ApiClassRole::new(None)
            .resolve(":apiclass[Foo]", "Foo", RoleOptions::default(), &ctx(1))
            .unwrap_err();
        assert!(matches!(err, RoleError::Fatal(_)));
        assert_eq!(err.to_string(), "apigen_docs_uri configuration value is not set");
    }

    #[test]
    fn test_processor_problematic_for_lone_backslash() {
        let mut processor = RoleProcessor::new().with_role(role());

        let output = processor.process("Intro\n\nSee :apiclass[\\] here.\n").unwrap();
        assert!(output.contains(r#"<span class="problematic""#));
        assert!(output.contains(":apiclass&#91;&#92;&#93;</span> here."));

        let messages = processor.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].line, 3);
    }

    #[test]
    fn test_processor_escapes_markdown_in_link_text() {
        let mut processor = RoleProcessor::new().with_role(role());

        let output = processor.process(r"See :apiclass[My\_Foo_].").unwrap();
        assert!(output.contains(r#"href="https://docs.example.com/api/class-My._Foo_.html""#));
        assert!(output.contains(">class My.&#95;Foo&#95;</a>."));
    }

    #[test]
    fn test_processor_leaves_code_spans_and_prose() {
        let mut processor = RoleProcessor::new().with_role(role());

        let input = "Write `:apiclass[Foo]` or use the :apiclass role.";
        assert_eq!(processor.process(input).unwrap(), input);
        assert!(processor.messages().is_empty());
    }

    #[test]
    fn test_processor_aborts_without_uri() {
        let mut processor = RoleProcessor::new()
            .with_source_path("docs/reader.md")
            .with_role(ApiClassRole::new(None));

        let err = processor.process("Use :apiclass[Reader].").unwrap_err();
        let ProcessError::Role { role, location, .. } = &err;
        assert_eq!(role, "apiclass");
        assert_eq!(location, "docs/reader.md:1");
    }

    #[test]
    fn test_processor_with_options() {
        let mut processor = RoleProcessor::new().with_role(role());

        let output = processor
            .process(r#":apiclass[\CSVelte\Writer]{#writer class="api" target=_blank}"#)
            .unwrap();
        assert_eq!(
            output,
            r#"<a id="writer" class="reference external api" href="https://docs.example.com/api/class-CSVelte.Writer.html" target="_blank">class CSVelte.Writer</a>"#
        );
    }
}
