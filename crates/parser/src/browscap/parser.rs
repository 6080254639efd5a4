//! Browscap issues directory source

use crate::row::FixtureRow;
use crate::stream::{RowConverter, TestCases, UniqueRows, UserAgents};
use crate::walker::FixtureWalker;
use crate::Source;
use std::path::PathBuf;
use ua_fixture_sources_common::{ProgressSink, Request, TestCase};

pub const DEFAULT_BROWSCAP_ISSUES_PATH: &str = "vendor/browscap/browscap/tests/fixtures/issues";

/// Source over browscap's `tests/fixtures/issues` directory
#[derive(Debug, Clone)]
pub struct BrowscapIssuesSource {
    walker: FixtureWalker,
}

impl BrowscapIssuesSource {
    pub fn new() -> Self {
        Self::with_path(DEFAULT_BROWSCAP_ISSUES_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            walker: FixtureWalker::new(path).extensions(["yml"]),
        }
    }

    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.walker = self.walker.extensions(extensions);
        self
    }

    pub fn walker(&self) -> &FixtureWalker {
        &self.walker
    }
}

impl Default for BrowscapIssuesSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RowConverter for BrowscapIssuesSource {
    fn convert(&self, user_agent: &str, _row: &FixtureRow) -> TestCase {
        TestCase::new(Request::from_user_agent(user_agent))
    }
}

impl Source for BrowscapIssuesSource {
    fn name(&self) -> &str {
        "browscap"
    }

    fn user_agents<'a>(
        &'a self,
        progress: &'a dyn ProgressSink,
        limit: Option<usize>,
    ) -> UserAgents<'a> {
        UserAgents::new(UniqueRows::new(&self.walker, progress, limit))
    }

    fn tests<'a>(&'a self, progress: &'a dyn ProgressSink, limit: Option<usize>) -> TestCases<'a> {
        TestCases::new(UniqueRows::new(&self.walker, progress, limit), self)
    }
}
