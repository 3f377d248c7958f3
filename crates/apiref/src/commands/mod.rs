//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod resolve;

pub(crate) use render::RenderArgs;
pub(crate) use resolve::ResolveArgs;

use std::path::Path;

use apiref_config::{CliSettings, Config};

use crate::error::CliError;

/// Load configuration, letting `--docs-uri` override the file value.
fn load_config(config_path: Option<&Path>, docs_uri: Option<String>) -> Result<Config, CliError> {
    let cli_settings = CliSettings {
        apigen_docs_uri: docs_uri,
    };
    Ok(Config::load(config_path, Some(&cli_settings))?)
}
