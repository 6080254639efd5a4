//! Lazy, de-duplicated record streams over a fixture directory
//!
//! Files are read one at a time in walker order. Rows without a usable
//! user agent are dropped, the agent is trimmed, and only the first row for
//! each trimmed agent is emitted. Once `limit` records were emitted no
//! further file is opened.

use crate::loader::load_fixture_file;
use crate::row::FixtureRow;
use crate::walker::{FixtureFiles, FixtureWalker};
use std::collections::HashSet;
use std::path::PathBuf;
use ua_fixture_sources_common::{Progress, ProgressSink, TestCase};

/// Turns a unique fixture row into a test case
pub trait RowConverter {
    fn convert(&self, user_agent: &str, row: &FixtureRow) -> TestCase;
}

/// A row whose trimmed user agent was seen for the first time
#[derive(Debug, Clone)]
pub struct UniqueRow {
    pub user_agent: String,
    pub row: FixtureRow,
    pub path: PathBuf,
}

struct OpenFile {
    path: PathBuf,
    rows: std::vec::IntoIter<FixtureRow>,
    added: usize,
}

/// Iterator over first occurrences of each user agent
pub struct UniqueRows<'a> {
    root: PathBuf,
    files: FixtureFiles,
    current: Option<OpenFile>,
    seen: HashSet<String>,
    limit: Option<usize>,
    emitted: usize,
    started: bool,
    progress: &'a dyn ProgressSink,
}

impl<'a> UniqueRows<'a> {
    /// `limit` of `None` or `Some(0)` means unlimited
    pub fn new(walker: &FixtureWalker, progress: &'a dyn ProgressSink, limit: Option<usize>) -> Self {
        Self {
            root: walker.root().to_path_buf(),
            files: walker.files(),
            current: None,
            seen: HashSet::new(),
            limit: limit.filter(|&l| l > 0),
            emitted: 0,
            started: false,
            progress,
        }
    }

    /// Number of records emitted so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn limit_reached(&self) -> bool {
        self.limit.is_some_and(|limit| self.emitted >= limit)
    }

    fn open(&mut self, path: PathBuf) {
        self.progress.report(Progress::ReadingFile(path.clone()));

        match load_fixture_file(&path) {
            Ok(Some(rows)) => {
                tracing::debug!(file = %path.display(), rows = rows.len(), "reading fixture file");
                self.current = Some(OpenFile {
                    path,
                    rows: rows.into_iter(),
                    added: 0,
                });
            }
            Ok(None) => {
                tracing::debug!(file = %path.display(), "fixture file holds no rows, skipping");
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable fixture file");
                self.progress.report(Progress::SkippedFile {
                    path,
                    reason: e.to_string(),
                });
            }
        }
    }

    fn close(&mut self) {
        if let Some(file) = self.current.take() {
            self.progress.report(Progress::FileDone {
                path: file.path,
                added: file.added,
                total: self.emitted,
            });
        }
    }
}

impl Iterator for UniqueRows<'_> {
    type Item = UniqueRow;

    fn next(&mut self) -> Option<UniqueRow> {
        if !self.started {
            self.started = true;
            if self.root.is_dir() {
                self.progress.report(Progress::ReadingPath(self.root.clone()));
            }
        }

        loop {
            if self.limit_reached() {
                self.close();
                return None;
            }

            if let Some(file) = self.current.as_mut() {
                for row in file.rows.by_ref() {
                    let Some(raw) = row.user_agent() else {
                        continue;
                    };
                    let user_agent = raw.trim();
                    if user_agent.is_empty() || self.seen.contains(user_agent) {
                        continue;
                    }

                    self.seen.insert(user_agent.to_string());
                    file.added += 1;
                    self.emitted += 1;

                    return Some(UniqueRow {
                        user_agent: user_agent.to_string(),
                        row,
                        path: file.path.clone(),
                    });
                }
                self.close();
            }

            let path = self.files.next()?;
            self.open(path);
        }
    }
}

/// De-duplicated, trimmed user agent strings
pub struct UserAgents<'a> {
    rows: UniqueRows<'a>,
}

impl<'a> UserAgents<'a> {
    pub fn new(rows: UniqueRows<'a>) -> Self {
        Self { rows }
    }
}

impl Iterator for UserAgents<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.rows.next().map(|unique| unique.user_agent)
    }
}

/// De-duplicated test cases built by a source's converter
pub struct TestCases<'a> {
    rows: UniqueRows<'a>,
    converter: &'a dyn RowConverter,
}

impl<'a> TestCases<'a> {
    pub fn new(rows: UniqueRows<'a>, converter: &'a dyn RowConverter) -> Self {
        Self { rows, converter }
    }
}

impl Iterator for TestCases<'_> {
    type Item = TestCase;

    fn next(&mut self) -> Option<TestCase> {
        let unique = self.rows.next()?;
        Some(self.converter.convert(&unique.user_agent, &unique.row))
    }
}
