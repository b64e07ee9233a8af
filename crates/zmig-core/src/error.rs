//! Error types for the migration engine.

use std::path::PathBuf;
use thiserror::Error;

/// A source file that could not be parsed.
///
/// Parse failures are never fatal to a run: the driver logs them and moves on
/// to the next file.
#[derive(Debug, Clone, Error)]
#[error("{file}:{line}: {message}")]
pub struct ParseError {
    pub file: String,
    /// 1-based line of the first reported syntax error.
    pub line: usize,
    pub message: String,
}

/// Failure to turn a user pattern into a list of candidate files.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Umbrella error for engine operations.
#[derive(Debug, Error)]
pub enum MigrateError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to print transformed source: {0}")]
    Print(#[source] std::io::Error),

    #[error("printer produced invalid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
