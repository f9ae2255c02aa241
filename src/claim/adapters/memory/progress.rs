//! Progress sink that keeps every line in memory.

use crate::claim::ports::ProgressSink;
use std::sync::{Arc, Mutex};

/// Records progress lines for later inspection.
#[derive(Debug, Clone, Default)]
pub struct RecordingProgress {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgress {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines pushed so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl ProgressSink for RecordingProgress {
    fn push(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}
