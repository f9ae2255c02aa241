//! Domain model for issue claiming.
//!
//! Issue references, tracker snapshots, and workflow outcomes. Nothing here
//! talks to the tracker; that happens through [`crate::claim::ports`].

mod branch;
mod error;
mod issue;
mod outcome;
mod reference;

pub use branch::WorkBranchName;
pub use error::ClaimDomainError;
pub use issue::{Issue, IssueComment, IssueState};
pub use outcome::{ClaimOutcome, WorkflowOutcome};
pub use reference::IssueReference;
