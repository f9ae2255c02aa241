//! Progress sink that forwards lines to the `tracing` subscriber.

use crate::claim::ports::ProgressSink;
use tracing::info;

/// Emits every progress line as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn push(&self, line: &str) {
        info!(target: "claimant::progress", "{line}");
    }
}
