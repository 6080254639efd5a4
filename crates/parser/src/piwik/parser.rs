//! Piwik fixture directory source

use super::converter::PiwikConverter;
use crate::stream::{TestCases, UniqueRows, UserAgents};
use crate::walker::FixtureWalker;
use crate::Source;
use std::path::PathBuf;
use ua_fixture_sources_common::{Mapping, ProgressSink};

/// Where composer installs the device-detector fixtures
pub const DEFAULT_PIWIK_PATH: &str = "vendor/piwik/device-detector/Tests/fixtures";

/// Source over a device-detector fixture directory
///
/// # Example
/// ```rust,ignore
/// let source = PiwikSource::with_path("fixtures/piwik").with_mapping(mapping);
/// let first = source.tests(&NoProgress, Some(1)).next();
/// ```
#[derive(Debug)]
pub struct PiwikSource {
    walker: FixtureWalker,
    converter: PiwikConverter,
}

impl PiwikSource {
    /// Source reading the default vendor path
    pub fn new() -> Self {
        Self::with_path(DEFAULT_PIWIK_PATH)
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            walker: FixtureWalker::new(path),
            converter: PiwikConverter::default(),
        }
    }

    /// Restrict the file extensions read
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.walker = self.walker.extensions(extensions);
        self
    }

    /// Translate fixture fields through these collaborators
    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.converter = PiwikConverter::new(Some(mapping));
        self
    }

    pub fn walker(&self) -> &FixtureWalker {
        &self.walker
    }
}

impl Default for PiwikSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for PiwikSource {
    fn name(&self) -> &str {
        "piwik"
    }

    fn user_agents<'a>(
        &'a self,
        progress: &'a dyn ProgressSink,
        limit: Option<usize>,
    ) -> UserAgents<'a> {
        UserAgents::new(UniqueRows::new(&self.walker, progress, limit))
    }

    fn tests<'a>(&'a self, progress: &'a dyn ProgressSink, limit: Option<usize>) -> TestCases<'a> {
        TestCases::new(
            UniqueRows::new(&self.walker, progress, limit),
            &self.converter,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_default_path() {
        let source = PiwikSource::new();
        assert_eq!(source.walker().root(), Path::new(DEFAULT_PIWIK_PATH));
        assert_eq!(source.name(), "piwik");
    }
}
