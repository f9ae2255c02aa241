//! Progress sink for human-readable workflow updates.

use std::sync::Arc;

/// Append-only sink for progress lines.
///
/// Lines are advisory. Workflows never read them back or branch on them.
pub trait ProgressSink: Send + Sync {
    /// Appends a line.
    fn push(&self, line: &str);
}

/// Shared handle to a progress sink.
pub type SharedProgress = Arc<dyn ProgressSink>;

/// Pushes `line` to `sink` when one is present.
pub fn report(sink: Option<&SharedProgress>, line: impl AsRef<str>) {
    if let Some(progress) = sink {
        progress.push(line.as_ref());
    }
}
