//! Progress lines on stderr

use colored::*;
use ua_fixture_sources_common::{Progress, ProgressSink};

/// Prints scan progress to stderr so stdout stays machine readable
///
/// Per-file lines only appear in verbose mode.
pub struct ConsoleProgress {
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn line(&self, event: &Progress) -> Option<String> {
        match event {
            Progress::ReadingPath(path) => {
                Some(format!("{} reading path {}", "→".cyan(), path.display()))
            }
            Progress::ReadingFile(path) if self.verbose => {
                Some(format!("    reading file {}", path.display()))
            }
            Progress::SkippedFile { path, reason } => Some(format!(
                "{} skipped {}: {}",
                "!".yellow(),
                path.display(),
                reason
            )),
            Progress::FileDone { added, total, .. } if self.verbose => Some(format!(
                "    [added {} agents, {} so far]",
                added.to_string().green(),
                total
            )),
            _ => None,
        }
    }
}

impl ProgressSink for ConsoleProgress {
    fn report(&self, event: Progress) {
        if let Some(line) = self.line(&event) {
            eprintln!("{}", line);
        }
    }
}
