use colored::Colorize;
use std::fmt::Write as _;

use zmig_core::{FileOutcome, FileStats, MigrationResult, Rule};

/// Renders run progress and results for the console.
///
/// Every method returns the text instead of printing it; the binary decides
/// where it goes.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    pub fn banner(&self) -> String {
        let line = "Starting zod-openapi v5 migration...";
        if self.color {
            format!("{}\n", line.blue())
        } else {
            format!("{line}\n")
        }
    }

    /// Per-file lines (when `verbose`) followed by the summary block.
    pub fn render(&self, result: &MigrationResult, verbose: bool, dry_run: bool) -> String {
        let mut out = String::new();
        if verbose {
            for file in &result.files {
                out.push_str(&self.format_file(file));
            }
        }
        out.push_str(&self.format_summary(result, dry_run));
        out
    }

    pub fn format_file(&self, file: &FileStats) -> String {
        let path = file.path.display();
        let mut out = match &file.outcome {
            FileOutcome::Modified => {
                format!("{}\n", self.paint(&format!("  ✓ Modified: {path}"), Tone::Good))
            }
            FileOutcome::Unchanged => {
                format!("{}\n", self.paint(&format!("  - No changes: {path}"), Tone::Muted))
            }
            FileOutcome::Skipped { reason } => format!(
                "{}\n",
                self.paint(&format!("  ! Skipped: {path} ({reason})"), Tone::Warn)
            ),
        };

        for (rule, count) in file.changes.nonzero() {
            let line = format!("    - {}", rule.describe(count));
            let _ = writeln!(out, "{}", self.paint(&line, Tone::Detail));
        }
        out
    }

    pub fn format_summary(&self, result: &MigrationResult, dry_run: bool) -> String {
        let mut out = String::new();
        if dry_run {
            let line = "Dry run completed. No files were modified.";
            let _ = writeln!(out, "{}", self.paint(line, Tone::Warn));
        } else {
            let line = "Migration completed successfully!";
            let _ = writeln!(out, "{}", self.paint(line, Tone::Good));
        }

        let _ = writeln!(out, "{}", self.paint("Summary:", Tone::Summary));
        let mut line = |label: &str, value: usize| {
            let text = format!("  - {label}: {value}");
            let _ = writeln!(out, "{}", self.paint(&text, Tone::Summary));
        };
        line("Files processed", result.files_processed);
        line("Files modified", result.files_modified);
        for rule in Rule::ALL {
            line(rule.label(), result.get(rule));
        }
        out
    }

    /// The fatal-error line, including the full context chain.
    pub fn format_failure(&self, err: &anyhow::Error) -> String {
        let label = "Migration failed:";
        if self.color {
            format!("{} {err:#}\n", label.red().bold())
        } else {
            format!("{label} {err:#}\n")
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        if !self.color {
            return text.to_string();
        }

        match tone {
            Tone::Good => text.green().to_string(),
            Tone::Warn => text.yellow().to_string(),
            Tone::Muted => text.dimmed().to_string(),
            Tone::Detail => text.blue().to_string(),
            Tone::Summary => text.cyan().to_string(),
        }
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Good,
    Warn,
    Muted,
    Detail,
    Summary,
}
