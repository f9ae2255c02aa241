//! Issue snapshots as reported by the remote tracker.

use super::{ClaimDomainError, IssueReference};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Open/closed state of a tracked issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueState {
    /// The issue is open.
    Open,
    /// The issue has been closed.
    Closed,
}

impl IssueState {
    /// Returns the tracker's wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl TryFrom<&str> for IssueState {
    type Error = ClaimDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ClaimDomainError::UnknownIssueState(value.to_owned())),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only snapshot of an issue.
///
/// The tracker owns the issue; this type only records what was observed when
/// it was fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    url: String,
    state: IssueState,
    labels: Vec<String>,
    assignees: Vec<String>,
}

impl Issue {
    /// Creates an issue snapshot with no labels or assignees.
    #[must_use]
    pub fn new(url: impl Into<String>, state: IssueState) -> Self {
        Self {
            url: url.into(),
            state,
            labels: Vec::new(),
            assignees: Vec::new(),
        }
    }

    /// Sets label names.
    #[must_use]
    pub fn with_labels(mut self, labels: impl IntoIterator<Item = String>) -> Self {
        self.labels = labels.into_iter().collect();
        self
    }

    /// Sets assignee logins.
    #[must_use]
    pub fn with_assignees(mut self, assignees: impl IntoIterator<Item = String>) -> Self {
        self.assignees = assignees.into_iter().collect();
        self
    }

    /// Returns the canonical issue URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the issue state.
    #[must_use]
    pub const fn state(&self) -> IssueState {
        self.state
    }

    /// Returns label names.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns assignee logins.
    #[must_use]
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Returns `true` when the issue has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }

    /// Returns `true` when the issue carries `claim_label` or has any
    /// assignee.
    #[must_use]
    pub fn is_claimed(&self, claim_label: &str) -> bool {
        self.labels.iter().any(|label| label == claim_label) || !self.assignees.is_empty()
    }

    /// Derives `org/repo/number` from the canonical URL.
    ///
    /// Returns `None` unless the URL ends in `<org>/<repo>/issues/<digits>`.
    #[must_use]
    pub fn claim_identity(&self) -> Option<String> {
        let mut segments = self.url.trim_end_matches('/').rsplit('/');
        let number = segments.next()?;
        let marker = segments.next()?;
        let repo = segments.next()?;
        let org = segments.next()?;

        let is_number = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
        if marker != "issues" || !is_number || repo.is_empty() || org.is_empty() {
            return None;
        }
        Some(format!("{org}/{repo}/{number}"))
    }

    /// Returns the claim identity, falling back to `reference` when the URL
    /// has an unexpected shape.
    #[must_use]
    pub fn claim_identity_or(&self, reference: &IssueReference) -> String {
        self.claim_identity().unwrap_or_else(|| reference.to_string())
    }
}

/// A comment posted on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueComment {
    /// Tracker-assigned comment identifier.
    pub id: u64,
    /// Comment body text.
    pub body: String,
}

impl IssueComment {
    /// Creates a comment value.
    #[must_use]
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
        }
    }
}
