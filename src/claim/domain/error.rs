//! Error types for claim domain parsing and validation.

use thiserror::Error;

/// Errors returned while constructing claim domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimDomainError {
    /// The identifier is not of the form `org/repo/number`.
    #[error("invalid issue reference '{0}', expected org/repo/number")]
    InvalidIssueReference(String),

    /// The issue state reported by the tracker is not recognised.
    #[error("unknown issue state: {0}")]
    UnknownIssueState(String),

    /// The branch name is empty after trimming.
    #[error("work branch name must not be empty")]
    EmptyBranchName,
}
