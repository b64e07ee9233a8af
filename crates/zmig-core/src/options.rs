use serde::Deserialize;

/// Glob patterns that are always excluded from discovery.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
    "**/.git/**",
    "**/.next/**",
    "**/.nuxt/**",
    "**/coverage/**",
];

/// Options controlling a migration run.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MigrationOptions {
    /// Run every transformation but never write files back.
    pub dry_run: bool,
    /// Report per-file details. The engine only logs; the CLI decides what to print.
    pub verbose: bool,
    /// Extra ignore globs, applied after [`DEFAULT_IGNORE_PATTERNS`].
    pub ignore_patterns: Vec<String>,
}

impl MigrationOptions {
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_ignore<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_patterns.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// The complete ignore list: defaults first, then user patterns.
    pub fn effective_ignore_patterns(&self) -> Vec<String> {
        DEFAULT_IGNORE_PATTERNS
            .iter()
            .map(|pattern| (*pattern).to_string())
            .chain(
                self.ignore_patterns
                    .iter()
                    .map(|pattern| pattern.trim())
                    .filter(|pattern| !pattern.is_empty())
                    .map(str::to_string),
            )
            .collect()
    }
}
