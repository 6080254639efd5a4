//! Progress reporting for fixture scans

use std::cell::RefCell;
use std::path::PathBuf;

/// A step of a fixture scan, reported as it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Scan of a source root started
    ReadingPath(PathBuf),
    /// A fixture file is about to be parsed
    ReadingFile(PathBuf),
    /// A fixture file was skipped because it could not be used
    SkippedFile { path: PathBuf, reason: String },
    /// All rows of a file were consumed; `total` counts the whole pass
    FileDone {
        path: PathBuf,
        added: usize,
        total: usize,
    },
}

/// Receives progress events from sources
pub trait ProgressSink {
    fn report(&self, event: Progress);
}

/// Discards all progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn report(&self, _event: Progress) {}
}

/// Keeps every event, mostly useful in tests
#[derive(Debug, Default)]
pub struct RecordingProgress {
    events: RefCell<Vec<Progress>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Progress> {
        self.events.borrow().clone()
    }
}

impl ProgressSink for RecordingProgress {
    fn report(&self, event: Progress) {
        self.events.borrow_mut().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_progress_keeps_order() {
        let sink = RecordingProgress::new();
        sink.report(Progress::ReadingPath(PathBuf::from("fixtures")));
        sink.report(Progress::ReadingFile(PathBuf::from("fixtures/a.yml")));

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], Progress::ReadingPath(PathBuf::from("fixtures")));
    }
}
