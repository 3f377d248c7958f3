//! `apiref resolve` command implementation.

use std::io::Write;
use std::path::PathBuf;

use apiref_apigen::{ApiClassRole, ResolvedLink};
use clap::Args;

use super::load_config;
use crate::error::CliError;

/// Arguments for the resolve command.
#[derive(Args)]
pub(crate) struct ResolveArgs {
    /// Class token, e.g. `CSVelte\Reader` or `CSVelte.Reader`.
    class_name: String,

    /// Path to configuration file (default: auto-discover apiref.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API docs base URI (overrides config).
    #[arg(long, env = "APIGEN_DOCS_URI")]
    docs_uri: Option<String>,
}

impl ResolveArgs {
    /// Execute the resolve command.
    ///
    /// Prints the link text and URL on separate lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or no base URI is configured.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let config = load_config(self.config.as_deref(), self.docs_uri)?;
        let link = resolve_token(&self.class_name, config.apigen_docs_uri)?;

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", link.display_text)?;
        writeln!(stdout, "{}", link.url)?;
        Ok(())
    }
}

fn resolve_token(class_name: &str, docs_uri: Option<String>) -> Result<ResolvedLink, CliError> {
    let role = ApiClassRole::new(docs_uri);
    Ok(role.resolve_reference(class_name, 1)?)
}
