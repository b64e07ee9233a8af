use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the zod-openapi-migrate binary.
#[derive(Parser, Debug)]
#[command(
    name = "zod-openapi-migrate",
    version,
    about = "Migrate zod-openapi v4 code to v5"
)]
pub struct CliArgs {
    /// File, directory or glob pattern selecting the files to migrate.
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// Run every transformation without writing files back.
    #[arg(short, long)]
    pub dry_run: bool,

    /// Print per-file details.
    #[arg(short, long)]
    pub verbose: bool,

    /// Additional glob patterns to ignore (comma-separated, repeatable).
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Path to a JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the result record as JSON on stdout instead of the report.
    #[arg(long)]
    pub json: bool,

    /// When to use colored output.
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Resolve against whether the output stream is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}
