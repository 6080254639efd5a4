//! Fixture sources for third-party user agent test suites
//!
//! This crate scans vendor fixture directories and yields their user agents
//! or normalized [`TestCase`](ua_fixture_sources_common::TestCase) records.
//!
//! ## Reading Strategy
//!
//! Every source runs the same single pass:
//! - walk the fixture root, files sorted by name, filtered by extension
//! - parse each YAML / JSON file into rows, skipping malformed files
//! - trim each row's `user_agent` and emit it only the first time it is seen
//! - optionally map vendor fields through injected collaborators
//!
//! Records are produced lazily, so stopping iteration early (or passing a
//! limit) stops reading files.

pub mod browscap;
mod loader;
pub mod piwik;
mod row;
mod stream;
mod walker;

pub use browscap::BrowscapIssuesSource;
pub use loader::{load_fixture_file, parse_rows, FixtureFormat};
pub use piwik::PiwikSource;
pub use row::FixtureRow;
pub use stream::{RowConverter, TestCases, UniqueRow, UniqueRows, UserAgents};
pub use walker::{FixtureFiles, FixtureWalker, DEFAULT_EXTENSIONS};

use ua_fixture_sources_common::ProgressSink;

/// An adapter over one vendor's fixture directory
pub trait Source {
    /// Short identifier, e.g. "piwik"
    fn name(&self) -> &str;

    /// Distinct trimmed user agents in file order
    ///
    /// `limit` of `None` or `Some(0)` means unlimited.
    fn user_agents<'a>(
        &'a self,
        progress: &'a dyn ProgressSink,
        limit: Option<usize>,
    ) -> UserAgents<'a>;

    /// One test case per distinct trimmed user agent, in file order
    fn tests<'a>(&'a self, progress: &'a dyn ProgressSink, limit: Option<usize>) -> TestCases<'a>;
}
