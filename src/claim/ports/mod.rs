//! Port contracts for the claim workflows.
//!
//! Ports define the collaborators the workflows depend on: the remote issue
//! tracker, the caller's identity, branch naming, and progress reporting.

pub mod branch;
pub mod identity;
pub mod pagination;
pub mod progress;
pub mod tracker;

pub use branch::WorkBranchNamer;
pub use identity::{IdentityError, IdentityResolver, IdentityResult};
pub use pagination::{DEFAULT_PAGE_SIZE, Page, PageRequest, collect_pages};
pub use progress::{ProgressSink, SharedProgress, report};
pub use tracker::{IssueTracker, TrackerError, TrackerResult};
