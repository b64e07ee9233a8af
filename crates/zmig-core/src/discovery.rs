//! Candidate file discovery.
//!
//! A pattern is either a plain path (file or directory) or a glob. Globs are
//! resolved by walking their literal directory prefix and matching every file
//! against the full pattern; `*` never crosses a `/`.

use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobBuilder, GlobMatcher, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::DiscoveryError;
use crate::syntax::SourceKind;

const GLOB_META: &[char] = &['*', '?', '[', '{'];

fn is_glob(pattern: &str) -> bool {
    pattern.contains(GLOB_META)
}

fn build_glob(pattern: &str) -> Result<Glob, DiscoveryError> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map_err(|source| DiscoveryError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

fn build_ignore_set(patterns: &[String]) -> Result<GlobSet, DiscoveryError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(build_glob(pattern)?);
    }
    builder.build().map_err(|source| DiscoveryError::InvalidPattern {
        pattern: patterns.join(","),
        source,
    })
}

/// Leading components of `pattern` that contain no glob syntax.
fn literal_prefix(pattern: &str) -> PathBuf {
    let mut prefix = PathBuf::new();
    for component in pattern.split('/') {
        if is_glob(component) {
            break;
        }
        if component.is_empty() && prefix.as_os_str().is_empty() {
            prefix.push("/");
            continue;
        }
        prefix.push(component);
    }
    prefix
}

/// Resolves a user pattern to the sorted list of eligible source files.
pub struct FileDiscovery {
    ignore: GlobSet,
}

impl FileDiscovery {
    pub fn new(ignore_patterns: &[String]) -> Result<Self, DiscoveryError> {
        Ok(Self {
            ignore: build_ignore_set(ignore_patterns)?,
        })
    }

    fn is_candidate(&self, path: &Path) -> bool {
        SourceKind::from_path(path).is_some() && !self.ignore.is_match(path)
    }

    pub fn discover(&self, pattern: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
        let mut files = if is_glob(pattern) {
            let matcher = build_glob(pattern)?.compile_matcher();
            let base = literal_prefix(pattern);
            self.walk(&base, Some(&matcher))?
        } else {
            let path = Path::new(pattern);
            if path.is_file() {
                if self.is_candidate(path) {
                    vec![path.to_path_buf()]
                } else {
                    Vec::new()
                }
            } else if path.is_dir() {
                self.walk(path, None)?
            } else {
                debug!(pattern, "pattern names no existing path");
                Vec::new()
            }
        };

        files.sort();
        files.dedup();
        debug!(pattern, count = files.len(), "discovered candidate files");
        Ok(files)
    }

    /// Walk `base` recursively. An empty `base` walks the working directory
    /// and yields paths relative to it.
    fn walk(
        &self,
        base: &Path,
        matcher: Option<&GlobMatcher>,
    ) -> Result<Vec<PathBuf>, DiscoveryError> {
        let relative = base.as_os_str().is_empty();
        let root = if relative { Path::new(".") } else { base };

        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    let path = root.to_path_buf();
                    let source = err
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("filesystem loop"));
                    if source.kind() == io::ErrorKind::NotFound {
                        return Ok(Vec::new());
                    }
                    return Err(DiscoveryError::Unreadable { path, source });
                }
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = if relative {
                entry
                    .path()
                    .strip_prefix(".")
                    .unwrap_or(entry.path())
                    .to_path_buf()
            } else {
                entry.into_path()
            };
            if matcher.is_some_and(|matcher| !matcher.is_match(&path)) {
                continue;
            }
            if self.is_candidate(&path) {
                files.push(path);
            }
        }
        Ok(files)
    }
}

/// Discover files for `pattern`, excluding anything matched by `ignore_patterns`.
pub fn discover_files(
    pattern: &str,
    ignore_patterns: &[String],
) -> Result<Vec<PathBuf>, DiscoveryError> {
    FileDiscovery::new(ignore_patterns)?.discover(pattern)
}
