//! Fixture directory walking

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions read when a source does not configure its own
pub const DEFAULT_EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// Lists fixture files below a root directory in file name order
#[derive(Debug, Clone)]
pub struct FixtureWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FixtureWalker {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// Restrict the walk to these extensions (compared case-insensitively)
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lazily iterate matching files
    ///
    /// A missing root yields nothing.
    pub fn files(&self) -> FixtureFiles {
        let entries = if self.root.is_dir() {
            Some(
                WalkDir::new(&self.root)
                    .follow_links(true)
                    .sort_by_file_name()
                    .into_iter(),
            )
        } else {
            tracing::debug!(root = %self.root.display(), "fixture root does not exist");
            None
        };

        FixtureFiles {
            entries,
            extensions: self.extensions.clone(),
        }
    }

    fn matches(extensions: &[String], path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}

/// Iterator returned by [`FixtureWalker::files`]
pub struct FixtureFiles {
    entries: Option<walkdir::IntoIter>,
    extensions: Vec<String>,
}

impl Iterator for FixtureFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        let entries = self.entries.as_mut()?;

        for entry in entries.by_ref() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable fixture entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            if FixtureWalker::matches(&self.extensions, entry.path()) {
                return Some(entry.into_path());
            }
        }

        None
    }
}
