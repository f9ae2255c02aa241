//! GitHub REST payloads and their conversion into domain values.

use crate::claim::{
    domain::{Issue, IssueComment, IssueState},
    ports::TrackerError,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(super) struct GitHubIssue {
    pub url: String,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<GitHubLabel>,
    #[serde(default)]
    pub assignees: Vec<GitHubUser>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitHubLabel {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitHubUser {
    pub login: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitHubComment {
    pub id: u64,
    #[serde(default)]
    pub body: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct GitHubErrorBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(super) struct LabelsBody<'a> {
    pub labels: [&'a str; 1],
}

#[derive(Debug, Serialize)]
pub(super) struct CommentBody<'a> {
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(super) struct AssigneesBody<'a> {
    pub assignees: &'a [String],
}

impl TryFrom<GitHubIssue> for Issue {
    type Error = TrackerError;

    fn try_from(value: GitHubIssue) -> Result<Self, Self::Error> {
        let state = IssueState::try_from(value.state.as_str())
            .map_err(|err| TrackerError::Decode(err.to_string()))?;
        Ok(Self::new(value.url, state)
            .with_labels(value.labels.into_iter().map(|label| label.name))
            .with_assignees(value.assignees.into_iter().map(|user| user.login)))
    }
}

impl From<GitHubComment> for IssueComment {
    fn from(value: GitHubComment) -> Self {
        Self::new(value.id, value.body.unwrap_or_default())
    }
}
