//! Transformation engine for migrating `zod-openapi` v4 code to v5.
//!
//! This crate provides everything the `zod-openapi-migrate` binary drives:
//! - Parsing and printing of TypeScript/JavaScript sources (`syntax`)
//! - Structural predicates over syntax nodes (`matcher`)
//! - The rewrite passes: object properties, override synthesis, call sites
//!   and imports (`rewrite`)
//! - The textual `effectType` deprecation pass (`annotate`)
//! - Per-rule change counters (`counters`)
//! - File discovery and the per-run driver (`discovery`, `driver`)

pub mod annotate;
pub mod counters;
pub mod discovery;
pub mod driver;
pub mod error;
pub mod matcher;
pub mod options;
pub mod rewrite;
pub mod syntax;

pub use counters::{ChangeCounters, Rule};
pub use driver::{FileOutcome, FileStats, MigrationResult, Migrator, SourceMigration, migrate_source};
pub use error::{DiscoveryError, MigrateError, ParseError};
pub use options::{DEFAULT_IGNORE_PATTERNS, MigrationOptions};
pub use syntax::SourceKind;

#[cfg(test)]
#[path = "tests/annotate_tests.rs"]
mod annotate_tests;
#[cfg(test)]
#[path = "tests/call_site_tests.rs"]
mod call_site_tests;
#[cfg(test)]
#[path = "tests/counters_tests.rs"]
mod counters_tests;
#[cfg(test)]
#[path = "tests/discovery_tests.rs"]
mod discovery_tests;
#[cfg(test)]
#[path = "tests/imports_tests.rs"]
mod imports_tests;
#[cfg(test)]
#[path = "tests/matcher_tests.rs"]
mod matcher_tests;
#[cfg(test)]
#[path = "tests/object_props_tests.rs"]
mod object_props_tests;
#[cfg(test)]
#[path = "tests/overrides_tests.rs"]
mod overrides_tests;
#[cfg(test)]
#[path = "tests/syntax_tests.rs"]
mod syntax_tests;
