//! `apiref render` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use apiref_apigen::ApiClassRole;
use apiref_renderer::role::RoleProcessor;
use apiref_renderer::{MarkdownRenderer, RenderResult};
use clap::Args;

use super::load_config;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to the markdown file.
    markdown_file: PathBuf,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API docs base URI (overrides config).
    #[arg(long, env = "APIGEN_DOCS_URI")]
    docs_uri: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URI is not configured, the file cannot be
    /// read or written, or any reference in the document is invalid.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let config = load_config(self.config.as_deref(), self.docs_uri)?;
        // Fail before reading anything: every link would be broken otherwise.
        let docs_uri = config.require_docs_uri()?.to_owned();

        output.info(&format!("Rendering {}...", self.markdown_file.display()));
        let result = render_file(&self.markdown_file, docs_uri)?;

        for message in &result.messages {
            output.message(message);
        }

        match &self.output {
            Some(path) => {
                std::fs::write(path, &result.html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(result.html.as_bytes())?;
                stdout.flush()?;
            }
        }

        if result.has_errors() {
            return Err(CliError::Validation(format!(
                "{} problem(s) reported in {}",
                result.messages.len(),
                self.markdown_file.display()
            )));
        }

        Ok(())
    }
}

/// Render one markdown file with the `apiclass` role registered.
fn render_file(path: &Path, docs_uri: String) -> Result<RenderResult, CliError> {
    let markdown = std::fs::read_to_string(path)?;

    let processor = RoleProcessor::new()
        .with_source_path(path)
        .with_role(ApiClassRole::new(Some(docs_uri)));
    let mut renderer = MarkdownRenderer::new(processor);
    let result = renderer.render(&markdown)?;

    tracing::info!(
        path = %path.display(),
        messages = result.messages.len(),
        "Rendered markdown file"
    );
    Ok(result)
}
