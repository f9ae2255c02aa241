//! In-memory adapters for tests and local tooling.

mod identity;
mod progress;
mod tracker;

pub use identity::StaticIdentity;
pub use progress::RecordingProgress;
pub use tracker::{InMemoryIssueTracker, TrackerOperation};
