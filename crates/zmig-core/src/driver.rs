//! Per-run orchestration: discover, then parse, rewrite, print, annotate and
//! write each file in turn.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::annotate::annotate_effect_types;
use crate::counters::{ChangeCounters, Rule};
use crate::discovery::discover_files;
use crate::error::MigrateError;
use crate::options::MigrationOptions;
use crate::rewrite::rewrite_module;
use crate::syntax::{SourceKind, SourceTree};

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum FileOutcome {
    /// Parsed, no rule matched.
    Unchanged,
    /// At least one rule matched. In dry-run mode the file was not written.
    Modified,
    /// Not migrated; contributes no changes.
    Skipped { reason: String },
}

/// Per-file record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileStats {
    pub path: PathBuf,
    pub changes: ChangeCounters,
    pub outcome: FileOutcome,
}

impl FileStats {
    fn skipped(path: &Path, reason: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            changes: ChangeCounters::new(),
            outcome: FileOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn is_modified(&self) -> bool {
        self.outcome == FileOutcome::Modified
    }
}

/// Run-wide aggregate.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MigrationResult {
    pub files_processed: usize,
    pub files_modified: usize,
    #[serde(flatten)]
    pub totals: ChangeCounters,
    pub files: Vec<FileStats>,
}

impl MigrationResult {
    fn record(&mut self, stats: FileStats) {
        self.files_processed += 1;
        if stats.is_modified() {
            self.files_modified += 1;
        }
        self.totals.absorb(&stats.changes);
        self.files.push(stats);
    }

    pub fn get(&self, rule: Rule) -> usize {
        self.totals.get(rule)
    }
}

/// In-memory migration of one source text.
#[derive(Debug, Clone)]
pub struct SourceMigration {
    pub changes: ChangeCounters,
    /// Rewritten text; `None` when no rule matched.
    pub output: Option<String>,
}

impl SourceMigration {
    pub fn is_modified(&self) -> bool {
        self.changes.has_changes()
    }
}

/// Run the full pipeline on `source` without touching the filesystem.
pub fn migrate_source(source: &str, kind: SourceKind) -> Result<SourceMigration, MigrateError> {
    transform_source(source, "<input>", kind)
}

fn transform_source(
    source: &str,
    name: &str,
    kind: SourceKind,
) -> Result<SourceMigration, MigrateError> {
    let mut tree = SourceTree::parse(source, name, kind)?;
    let changes = rewrite_module(&mut tree.module);
    if !changes.has_changes() {
        return Ok(SourceMigration {
            changes,
            output: None,
        });
    }

    let mut output = tree.print()?;
    let effect_types = changes.get(Rule::EffectTypeCommented);
    if effect_types > 0 {
        let annotated = annotate_effect_types(&output);
        if annotated.annotated != effect_types {
            warn!(
                file = name,
                detected = effect_types,
                annotated = annotated.annotated,
                "some effectType properties could not be commented out"
            );
        }
        output = annotated.text;
    }

    Ok(SourceMigration {
        changes,
        output: Some(output),
    })
}

/// Drives a migration run over the files matching a pattern.
#[derive(Debug, Clone, Default)]
pub struct Migrator {
    options: MigrationOptions,
}

impl Migrator {
    pub fn new(options: MigrationOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MigrationOptions {
        &self.options
    }

    /// Migrate every eligible file matching `pattern`.
    ///
    /// Only discovery failures are returned; per-file failures are recorded
    /// as skipped files.
    pub fn migrate(&self, pattern: &str) -> Result<MigrationResult> {
        let ignore = self.options.effective_ignore_patterns();
        let files = discover_files(pattern, &ignore)
            .with_context(|| format!("failed to discover files matching '{pattern}'"))?;

        if files.is_empty() {
            warn!(pattern, "no files found matching pattern");
            return Ok(MigrationResult::default());
        }

        let _span = tracing::info_span!(
            "migrate",
            files = files.len(),
            dry_run = self.options.dry_run
        )
        .entered();

        let mut result = MigrationResult::default();
        for path in &files {
            result.record(self.process_file(path));
        }

        info!(
            processed = result.files_processed,
            modified = result.files_modified,
            changes = result.totals.total(),
            "migration finished"
        );
        Ok(result)
    }

    /// Migrate one file. Never fails: problems are reported through
    /// [`FileOutcome::Skipped`].
    pub fn process_file(&self, path: &Path) -> FileStats {
        let _span = tracing::info_span!("file", path = %path.display()).entered();

        let Some(kind) = SourceKind::from_path(path) else {
            return FileStats::skipped(path, "unsupported file extension");
        };

        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                warn!(error = %err, "failed to read file");
                return FileStats::skipped(path, format!("failed to read: {err}"));
            }
        };

        let name = path.display().to_string();
        let migration = match transform_source(&source, &name, kind) {
            Ok(migration) => migration,
            Err(MigrateError::Parse(err)) => {
                warn!(%err, "failed to parse");
                return FileStats::skipped(path, format!("parse error: {err}"));
            }
            Err(err) => {
                warn!(error = %err, "failed to transform");
                return FileStats::skipped(path, err.to_string());
            }
        };

        let Some(output) = migration.output else {
            debug!("no changes");
            return FileStats {
                path: path.to_path_buf(),
                changes: migration.changes,
                outcome: FileOutcome::Unchanged,
            };
        };

        for (rule, count) in migration.changes.nonzero() {
            debug!(rule = rule.key(), count, "rule applied");
        }

        if self.options.dry_run {
            debug!("dry run, not writing");
        } else if let Err(err) = write_file(path, &output) {
            warn!(error = %err, "failed to write");
            return FileStats::skipped(path, err.to_string());
        }

        FileStats {
            path: path.to_path_buf(),
            changes: migration.changes,
            outcome: FileOutcome::Modified,
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), MigrateError> {
    fs::write(path, contents).map_err(|source| MigrateError::Io {
        path: path.to_path_buf(),
        source,
    })
}
