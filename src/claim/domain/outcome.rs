//! Results of workflows that ran to completion.

use super::{IssueReference, WorkBranchName};

/// Ordered list of issues whose workflow steps all succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowOutcome {
    completed: Vec<IssueReference>,
}

impl WorkflowOutcome {
    /// Creates an empty outcome.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            completed: Vec::new(),
        }
    }

    /// Records a fully processed issue.
    pub fn record(&mut self, reference: IssueReference) {
        self.completed.push(reference);
    }

    /// Returns completed issues in processing order.
    #[must_use]
    pub fn completed(&self) -> &[IssueReference] {
        &self.completed
    }

    /// Consumes the outcome, returning completed issues.
    #[must_use]
    pub fn into_completed(self) -> Vec<IssueReference> {
        self.completed
    }
}

/// Result of a successful claim batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    /// Work branch derived from the first issue in the batch.
    pub branch: WorkBranchName,
    /// Login assigned to every issue, if any.
    pub assignee: Option<String>,
    /// Announcement comment text used for the batch.
    pub comment: String,
    /// Issues where an identical comment already existed.
    pub comments_skipped: Vec<IssueReference>,
    /// Issues claimed, in processing order.
    pub outcome: WorkflowOutcome,
}
