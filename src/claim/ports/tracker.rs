//! Tracker port for reading and mutating remote issues.

use super::pagination::{Page, PageRequest};
use crate::claim::domain::{Issue, IssueComment, IssueReference};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for issue tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Remote issue tracker contract.
///
/// Every method issues exactly one remote request. Implementations must not
/// retry; callers decide what a failure means.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Fetches the current state of an issue.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the issue does not exist.
    async fn fetch_issue(&self, reference: &IssueReference) -> TrackerResult<Issue>;

    /// Fetches one page of comments on an issue.
    async fn list_comments_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<IssueComment>>;

    /// Fetches one page of logins currently assigned to an issue.
    async fn list_assignees_page(
        &self,
        reference: &IssueReference,
        page: PageRequest,
    ) -> TrackerResult<Page<String>>;

    /// Adds a label to an issue. Adding a label already present succeeds.
    async fn add_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()>;

    /// Removes a label from an issue.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::NotFound`] when the issue does not carry the
    /// label.
    async fn remove_label(&self, reference: &IssueReference, label: &str) -> TrackerResult<()>;

    /// Posts a comment and returns it as stored by the tracker.
    async fn add_comment(
        &self,
        reference: &IssueReference,
        body: &str,
    ) -> TrackerResult<IssueComment>;

    /// Adds logins to the issue's assignee list.
    async fn add_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()>;

    /// Removes logins from the issue's assignee list in a single request.
    async fn remove_assignees(
        &self,
        reference: &IssueReference,
        logins: &[String],
    ) -> TrackerResult<()>;
}

/// Errors returned by issue tracker adapters.
#[derive(Debug, Clone, Error)]
pub enum TrackerError {
    /// The addressed resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The tracker answered with a non-success status.
    #[error("tracker responded with status {status}: {message}")]
    Status {
        /// HTTP-style status code.
        status: u16,
        /// Message reported by the tracker.
        message: String,
    },

    /// The response could not be decoded.
    #[error("could not decode tracker response: {0}")]
    Decode(String),

    /// The request never produced a response.
    #[error("tracker transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TrackerError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when the tracker reported the resource as absent.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Status { status: 404, .. })
    }

    /// Returns the HTTP-style status associated with the error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound(_) => Some(404),
            Self::Status { status, .. } => Some(*status),
            Self::Decode(_) | Self::Transport(_) => None,
        }
    }
}
