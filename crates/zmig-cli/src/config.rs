//! The optional JSON configuration file and its merge with CLI flags.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use zmig_core::MigrationOptions;

use crate::args::CliArgs;

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileConfig {
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    pub dry_run: Option<bool>,
    pub verbose: Option<bool>,
}

pub fn parse_config(source: &str) -> Result<FileConfig> {
    let config = serde_json::from_str(source).context("failed to parse config JSON")?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<FileConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to load config: {}", path.display()))
}

/// Combine file values with command-line flags.
///
/// A flag given on the command line always wins. Boolean flags can only
/// switch a setting on, so a file value of `true` survives an absent flag.
/// Ignore patterns from both sources are kept, file patterns first.
pub fn resolve_options(args: &CliArgs, file: Option<FileConfig>) -> MigrationOptions {
    let file = file.unwrap_or_default();
    MigrationOptions {
        dry_run: args.dry_run || file.dry_run.unwrap_or(false),
        verbose: args.verbose || file.verbose.unwrap_or(false),
        ignore_patterns: file
            .ignore_patterns
            .into_iter()
            .chain(args.ignore.iter().cloned())
            .collect(),
    }
}

/// Load the file named by `--config`, if any, and merge it with `args`.
pub fn options_from_args(args: &CliArgs) -> Result<MigrationOptions> {
    let file = match &args.config {
        Some(path) => Some(load_config(path)?),
        None => None,
    };
    Ok(resolve_options(args, file))
}
