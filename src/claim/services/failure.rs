//! Partial-failure reporting for batch workflows.
//!
//! A batch stops at the first failed step. The resulting error records which
//! issues were fully processed beforehand, which issue was in flight, and the
//! tracker error that stopped it.

use super::WorkflowError;
use crate::claim::{
    domain::{IssueReference, WorkflowOutcome},
    ports::TrackerError,
};
use std::fmt;
use tracing::warn;

/// Workflow step that was being attempted when a batch stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailedStep {
    /// Adding the claim label.
    AttachLabel,
    /// Listing existing comments.
    ListComments,
    /// Posting a comment.
    PostComment,
    /// Adding the assignee.
    AttachAssignee,
    /// Listing current assignees.
    ListAssignees,
    /// Removing current assignees.
    DetachAssignees,
    /// Removing the claim label.
    DetachLabel,
}

impl FailedStep {
    /// Returns the kind of resource the step targets.
    #[must_use]
    pub const fn target_type(self) -> &'static str {
        match self {
            Self::AttachLabel | Self::DetachLabel => "label",
            Self::ListComments => "comments",
            Self::PostComment => "comment",
            Self::AttachAssignee => "assignee",
            Self::ListAssignees | Self::DetachAssignees => "assignees",
        }
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::AttachLabel | Self::PostComment | Self::AttachAssignee => "adding",
            Self::ListComments | Self::ListAssignees => "reading",
            Self::DetachAssignees | Self::DetachLabel => "removing",
        }
    }

    const fn preposition(self) -> &'static str {
        match self {
            Self::AttachLabel | Self::PostComment | Self::AttachAssignee => "to",
            Self::ListComments | Self::ListAssignees => "of",
            Self::DetachAssignees | Self::DetachLabel => "from",
        }
    }

    const fn is_collective(self) -> bool {
        matches!(
            self,
            Self::ListComments | Self::ListAssignees | Self::DetachAssignees
        )
    }
}

/// Structured description of a batch that stopped partway through.
#[derive(Debug, Clone)]
pub struct PartialFailure {
    completed: Vec<IssueReference>,
    failed_at: IssueReference,
    step: FailedStep,
    target_name: Option<String>,
    cause: TrackerError,
}

impl PartialFailure {
    /// Issues fully processed before the failure, in order.
    #[must_use]
    pub fn completed(&self) -> &[IssueReference] {
        &self.completed
    }

    /// Issue whose step failed. It may be partially modified.
    #[must_use]
    pub const fn failed_at(&self) -> &IssueReference {
        &self.failed_at
    }

    /// Step that failed.
    #[must_use]
    pub const fn step(&self) -> FailedStep {
        self.step
    }

    /// Name of the label or login the step targeted, if any.
    #[must_use]
    pub fn target_name(&self) -> Option<&str> {
        self.target_name.as_deref()
    }

    /// Tracker error that stopped the batch.
    #[must_use]
    pub const fn cause(&self) -> &TrackerError {
        &self.cause
    }

    fn target_phrase(&self) -> String {
        let target_type = self.step.target_type();
        if self.step.is_collective() {
            return format!("the {target_type}");
        }
        match &self.target_name {
            Some(name) => format!("the '{name}' {target_type}"),
            None => format!("a {target_type}"),
        }
    }
}

impl fmt::Display for PartialFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.completed.is_empty() {
            let updated = self
                .completed
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(
                f,
                "Operation partially succeeded and the following issues were updated: {updated}. "
            )?;
        }
        write!(
            f,
            "There was an error {} {} {} {}: {}.",
            self.step.verb(),
            self.target_phrase(),
            self.step.preposition(),
            self.failed_at,
            self.cause
        )
    }
}

impl std::error::Error for PartialFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}

/// Builds the error for a step that failed on `failed_at`.
///
/// `progress` holds only issues whose every step succeeded, so the in-flight
/// issue is never listed as updated.
#[must_use]
pub fn partial_failure(
    progress: &WorkflowOutcome,
    failed_at: &IssueReference,
    step: FailedStep,
    target_name: Option<&str>,
    cause: TrackerError,
) -> WorkflowError {
    warn!(
        issue = %failed_at,
        ?step,
        completed = progress.completed().len(),
        error = %cause,
        "workflow step failed; aborting batch"
    );
    WorkflowError::PartialFailure(Box::new(PartialFailure {
        completed: progress.completed().to_vec(),
        failed_at: failed_at.clone(),
        step,
        target_name: target_name.map(str::to_owned),
        cause,
    }))
}
