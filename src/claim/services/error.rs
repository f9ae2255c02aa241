//! Service-level errors for the claim workflows.

use super::PartialFailure;
use crate::claim::{
    config::ConfigError,
    domain::{ClaimDomainError, IssueReference},
    ports::{IdentityError, TrackerError},
};
use thiserror::Error;

/// Result type for workflow operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Coarse classification of workflow errors, mirroring HTTP semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced issue does not exist.
    NotFound,
    /// The request cannot be honoured in the issue's current state.
    BadRequest,
    /// A remote operation or collaborator failed.
    InternalServerError,
}

impl ErrorKind {
    /// Returns the matching HTTP status code.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::InternalServerError => 500,
        }
    }
}

/// Errors returned by the verification, claim, and release workflows.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The tracker reported the issue as absent.
    #[error("No issue found. Verify issue '{reference}' is valid.")]
    NotFound {
        /// Issue that could not be found.
        reference: IssueReference,
        /// Lookup failure reported by the tracker.
        #[source]
        source: TrackerError,
    },

    /// The issue is closed but an open issue was required.
    #[error("Issue {reference} is 'closed'.")]
    IssueClosed {
        /// Closed issue.
        reference: IssueReference,
    },

    /// The issue already carries the claim label or an assignee.
    #[error("Issue {identity} has already been claimed.")]
    AlreadyClaimed {
        /// `org/repo/number` identity derived from the issue URL.
        identity: String,
    },

    /// A batch stopped partway through.
    #[error(transparent)]
    PartialFailure(Box<PartialFailure>),

    /// A tracker read failed outside a mutating step.
    #[error("tracker request for {reference} failed: {source}")]
    Tracker {
        /// Issue being read.
        reference: IssueReference,
        /// Underlying tracker error.
        #[source]
        source: TrackerError,
    },

    /// The caller's login could not be resolved.
    #[error(transparent)]
    Identity(#[from] IdentityError),

    /// A domain value could not be constructed.
    #[error(transparent)]
    Domain(#[from] ClaimDomainError),

    /// Configuration or template rendering failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The request itself is unusable.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl WorkflowError {
    /// Classifies the error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::IssueClosed { .. }
            | Self::AlreadyClaimed { .. }
            | Self::InvalidRequest(_)
            | Self::Domain(ClaimDomainError::InvalidIssueReference(_)) => ErrorKind::BadRequest,
            Self::PartialFailure(_)
            | Self::Tracker { .. }
            | Self::Identity(_)
            | Self::Domain(_)
            | Self::Config(_) => ErrorKind::InternalServerError,
        }
    }

    /// Returns the HTTP status code for [`Self::kind`].
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Returns the structured partial-failure details, if this is one.
    #[must_use]
    pub fn as_partial_failure(&self) -> Option<&PartialFailure> {
        match self {
            Self::PartialFailure(failure) => Some(failure.as_ref()),
            _ => None,
        }
    }
}
