//! Release workflow: unassign, unlabel, and comment on a batch of issues.

use super::{FailedStep, WorkflowResult, partial_failure};
use crate::claim::{
    config::{ConfigError, WorkflowConfig},
    domain::{IssueReference, WorkflowOutcome},
    ports::{IssueTracker, SharedProgress, TrackerResult, collect_pages, report},
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Request payload for releasing a batch of issues.
#[derive(Clone)]
pub struct ReleaseRequest {
    issues: Vec<IssueReference>,
    comment: Option<String>,
    no_unassign: bool,
    no_unlabel: bool,
    reporter: Option<SharedProgress>,
}

impl ReleaseRequest {
    /// Creates a request for `issues`, processed in the given order.
    #[must_use]
    pub const fn new(issues: Vec<IssueReference>) -> Self {
        Self {
            issues,
            comment: None,
            no_unassign: false,
            no_unlabel: false,
            reporter: None,
        }
    }

    /// Overrides the release comment. An empty string suppresses commenting.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Leaves current assignees in place.
    #[must_use]
    pub const fn no_unassign(mut self) -> Self {
        self.no_unassign = true;
        self
    }

    /// Leaves the claim label in place.
    #[must_use]
    pub const fn no_unlabel(mut self) -> Self {
        self.no_unlabel = true;
        self
    }

    /// Sends progress lines to `reporter`.
    #[must_use]
    pub fn with_reporter(mut self, reporter: SharedProgress) -> Self {
        self.reporter = Some(reporter);
        self
    }
}

impl fmt::Debug for ReleaseRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReleaseRequest")
            .field("issues", &self.issues)
            .field("comment", &self.comment)
            .field("no_unassign", &self.no_unassign)
            .field("no_unlabel", &self.no_unlabel)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

/// Release workflow service.
#[derive(Clone)]
pub struct ReleaseService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    config: WorkflowConfig,
}

impl<T> ReleaseService<T>
where
    T: IssueTracker,
{
    /// Creates a release service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails validation.
    pub fn new(tracker: Arc<T>, config: WorkflowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { tracker, config })
    }

    /// Releases each issue in order: removes all assignees, removes the
    /// claim label, then posts the release comment.
    ///
    /// A label that is already absent counts as removed. The comment is
    /// posted on every call; there is no duplicate check.
    ///
    /// # Errors
    ///
    /// Returns [`super::WorkflowError::PartialFailure`] when a tracker step
    /// fails. Later issues are not attempted.
    #[instrument(skip(self, request), fields(issues = request.issues.len()))]
    pub async fn release_issues(&self, request: ReleaseRequest) -> WorkflowResult<WorkflowOutcome> {
        let ReleaseRequest {
            issues,
            comment,
            no_unassign,
            no_unlabel,
            reporter,
        } = request;
        let progress = reporter.as_ref();
        let comment_text = comment.unwrap_or_else(|| self.config.release_comment.clone());
        let label = self.config.claim_label.as_str();

        let mut outcome = WorkflowOutcome::new();
        for reference in &issues {
            if !no_unassign {
                self.unassign(reference, &outcome, progress).await?;
            }

            if !no_unlabel {
                report(
                    progress,
                    format!("About to remove '{label}' label from issue {reference}..."),
                );
                match self.tracker.remove_label(reference, label).await {
                    Ok(()) => {}
                    Err(cause) if cause.is_not_found() => {
                        debug!(issue = %reference, label, "claim label already absent");
                    }
                    Err(cause) => {
                        return Err(partial_failure(
                            &outcome,
                            reference,
                            FailedStep::DetachLabel,
                            Some(label),
                            cause,
                        ));
                    }
                }
            }

            if !comment_text.is_empty() {
                report(progress, format!("About to add comment to issue {reference}..."));
                self.tracker
                    .add_comment(reference, &comment_text)
                    .await
                    .map_err(|cause| {
                        partial_failure(&outcome, reference, FailedStep::PostComment, None, cause)
                    })?;
            }

            info!(issue = %reference, "issue released");
            outcome.record(reference.clone());
        }
        Ok(outcome)
    }

    async fn unassign(
        &self,
        reference: &IssueReference,
        outcome: &WorkflowOutcome,
        progress: Option<&SharedProgress>,
    ) -> WorkflowResult<()> {
        report(
            progress,
            format!("Getting current assignments for {reference}..."),
        );
        let assignees = self.all_assignees(reference).await.map_err(|cause| {
            partial_failure(outcome, reference, FailedStep::ListAssignees, None, cause)
        })?;
        if assignees.is_empty() {
            return Ok(());
        }

        report(progress, format!("Removing assignees from issue {reference}..."));
        self.tracker
            .remove_assignees(reference, &assignees)
            .await
            .map_err(|cause| {
                partial_failure(outcome, reference, FailedStep::DetachAssignees, None, cause)
            })
    }

    async fn all_assignees(&self, reference: &IssueReference) -> TrackerResult<Vec<String>> {
        let tracker = &*self.tracker;
        collect_pages(self.config.page_size, move |page| {
            tracker.list_assignees_page(reference, page)
        })
        .await
    }
}
