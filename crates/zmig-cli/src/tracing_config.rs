//! Tracing configuration for debugging a migration run.
//!
//! Supports three output formats controlled by `ZMIG_LOG_FORMAT`:
//!
//! - `text` (default): standard `tracing-subscriber` flat output
//! - `tree`: hierarchical indented output via `tracing-tree`, one span per file
//! - `json`: one JSON object per span/event
//!
//! ## Quick start
//!
//! ```bash
//! # Which rules fired in which file
//! ZMIG_LOG=debug ZMIG_LOG_FORMAT=tree zod-openapi-migrate "src/**/*.ts" --dry-run
//!
//! # JSON lines for tooling
//! ZMIG_LOG=debug ZMIG_LOG_FORMAT=json zod-openapi-migrate src
//!
//! # Only the engine's discovery module
//! ZMIG_LOG="zmig_core::discovery=debug" zod-openapi-migrate src
//! ```
//!
//! The subscriber is only initialised when `ZMIG_LOG` (or `RUST_LOG`) is set.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Standard flat text lines (default).
    Text,
    /// Hierarchical indented tree via `tracing-tree`.
    Tree,
    /// Newline-delimited JSON objects.
    Json,
}

impl LogFormat {
    /// Parse a `ZMIG_LOG_FORMAT` value. Unknown values fall back to text.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    fn from_env() -> Self {
        Self::parse(&std::env::var("ZMIG_LOG_FORMAT").unwrap_or_default())
    }
}

/// Filter directives from `ZMIG_LOG`, falling back to `RUST_LOG`.
/// `None` means tracing stays off.
pub(crate) fn filter_directives(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["ZMIG_LOG", "RUST_LOG"].into_iter().find_map(lookup)
}

/// Initialise the global tracing subscriber.
///
/// Does nothing when neither `ZMIG_LOG` nor `RUST_LOG` is set. All output
/// goes to stderr so `--json` output on stdout stays machine-readable.
pub fn init_tracing() {
    let Some(directives) = filter_directives(|var| std::env::var(var).ok()) else {
        return;
    };
    let filter = EnvFilter::builder().parse_lossy(directives);

    match LogFormat::from_env() {
        LogFormat::Tree => {
            // Spans are shallow (`migrate` > `file`), so each file's events
            // print directly under its path.
            let tree_layer = tracing_tree::HierarchicalLayer::new(2)
                .with_indent_lines(true)
                .with_bracketed_fields(true);

            Registry::default().with(filter).with(tree_layer).init();
        }
        LogFormat::Json => {
            // The enclosing `file` span carries the path; the full span list
            // adds nothing.
            let json_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(std::io::stderr);

            Registry::default().with(filter).with(json_layer).init();
        }
        LogFormat::Text => {
            let text_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

            Registry::default().with(filter).with(text_layer).init();
        }
    }
}
