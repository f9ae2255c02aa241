//! Claim workflow: label, announce, and assign a batch of issues.

use super::{FailedStep, WorkflowError, WorkflowResult, partial_failure};
use crate::claim::{
    config::{ConfigError, WorkflowConfig},
    domain::{ClaimOutcome, IssueComment, IssueReference, WorkflowOutcome},
    ports::{
        IdentityResolver, IssueTracker, SharedProgress, TrackerResult, WorkBranchNamer,
        collect_pages, report,
    },
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Request payload for claiming a batch of issues.
#[derive(Clone)]
pub struct ClaimRequest {
    issues: Vec<IssueReference>,
    assignee: Option<String>,
    claim_label: Option<String>,
    comment: Option<String>,
    no_auto_assign: bool,
    reporter: Option<SharedProgress>,
}

impl ClaimRequest {
    /// Creates a request for `issues`, processed in the given order.
    #[must_use]
    pub const fn new(issues: Vec<IssueReference>) -> Self {
        Self {
            issues,
            assignee: None,
            claim_label: None,
            comment: None,
            no_auto_assign: false,
            reporter: None,
        }
    }

    /// Assigns every issue to `login` instead of the caller.
    #[must_use]
    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignee = Some(login.into());
        self
    }

    /// Overrides the configured claim label.
    #[must_use]
    pub fn with_claim_label(mut self, label: impl Into<String>) -> Self {
        self.claim_label = Some(label.into());
        self
    }

    /// Overrides the templated announcement comment.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Skips resolving the caller's login when no assignee is given.
    #[must_use]
    pub const fn no_auto_assign(mut self) -> Self {
        self.no_auto_assign = true;
        self
    }

    /// Sends progress lines to `reporter`.
    #[must_use]
    pub fn with_reporter(mut self, reporter: SharedProgress) -> Self {
        self.reporter = Some(reporter);
        self
    }
}

impl fmt::Debug for ClaimRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimRequest")
            .field("issues", &self.issues)
            .field("assignee", &self.assignee)
            .field("claim_label", &self.claim_label)
            .field("comment", &self.comment)
            .field("no_auto_assign", &self.no_auto_assign)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

/// Claim workflow service.
#[derive(Clone)]
pub struct ClaimService<T, I, B>
where
    T: IssueTracker,
    I: IdentityResolver,
    B: WorkBranchNamer,
{
    tracker: Arc<T>,
    identity: Arc<I>,
    branch_namer: Arc<B>,
    config: WorkflowConfig,
}

impl<T, I, B> ClaimService<T, I, B>
where
    T: IssueTracker,
    I: IdentityResolver,
    B: WorkBranchNamer,
{
    /// Creates a claim service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails validation.
    pub fn new(
        tracker: Arc<T>,
        identity: Arc<I>,
        branch_namer: Arc<B>,
        config: WorkflowConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            tracker,
            identity,
            branch_namer,
            config,
        })
    }

    /// Claims each issue in order: adds the claim label, posts the
    /// announcement unless an identical comment already exists, then adds
    /// the assignee.
    ///
    /// Stops at the first failure. Issues are not rolled back, so the failing
    /// issue may keep the steps that succeeded.
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::InvalidRequest`] for an empty batch or blank
    /// label, [`WorkflowError::Identity`] when the assignee cannot be
    /// resolved, and [`WorkflowError::PartialFailure`] when a tracker step
    /// fails.
    #[instrument(skip(self, request), fields(issues = request.issues.len()))]
    pub async fn claim_issues(&self, request: ClaimRequest) -> WorkflowResult<ClaimOutcome> {
        let ClaimRequest {
            issues,
            assignee,
            claim_label,
            comment,
            no_auto_assign,
            reporter,
        } = request;
        let progress = reporter.as_ref();

        let primary = issues
            .first()
            .ok_or_else(|| WorkflowError::InvalidRequest("no issues to claim".to_owned()))?;
        let label = claim_label.unwrap_or_else(|| self.config.claim_label.clone());
        if label.trim().is_empty() {
            return Err(WorkflowError::InvalidRequest(
                "claim label must not be empty".to_owned(),
            ));
        }

        let branch = self.branch_namer.work_branch_name(primary)?;
        let comment_text = match comment.filter(|text| !text.is_empty()) {
            Some(text) => text,
            None => self.config.render_claim_comment(&branch, primary)?,
        };
        let login = self
            .determine_assignee(assignee, no_auto_assign, progress)
            .await?;

        let mut outcome = WorkflowOutcome::new();
        let mut comments_skipped = Vec::new();
        for reference in &issues {
            report(progress, format!("Checking issue '{reference}'..."));
            self.tracker
                .add_label(reference, &label)
                .await
                .map_err(|cause| {
                    partial_failure(
                        &outcome,
                        reference,
                        FailedStep::AttachLabel,
                        Some(label.as_str()),
                        cause,
                    )
                })?;

            report(progress, "Checking existing comments...");
            let existing = self.all_comments(reference).await.map_err(|cause| {
                partial_failure(&outcome, reference, FailedStep::ListComments, None, cause)
            })?;
            if existing.iter().any(|posted| posted.body == comment_text) {
                report(
                    progress,
                    "  Found existing comment exact match; skipping adding comment.",
                );
                debug!(issue = %reference, "claim comment already present");
                comments_skipped.push(reference.clone());
            } else {
                report(progress, format!("Adding claim comment to issue {reference}..."));
                self.tracker
                    .add_comment(reference, &comment_text)
                    .await
                    .map_err(|cause| {
                        partial_failure(&outcome, reference, FailedStep::PostComment, None, cause)
                    })?;
            }

            if let Some(assignee_login) = &login {
                report(
                    progress,
                    format!("Attempting to assign the issue to user: {assignee_login}..."),
                );
                self.tracker
                    .add_assignees(reference, std::slice::from_ref(assignee_login))
                    .await
                    .map_err(|cause| {
                        partial_failure(
                            &outcome,
                            reference,
                            FailedStep::AttachAssignee,
                            Some(assignee_login.as_str()),
                            cause,
                        )
                    })?;
            }

            info!(issue = %reference, "issue claimed");
            outcome.record(reference.clone());
        }

        Ok(ClaimOutcome {
            branch,
            assignee: login,
            comment: comment_text,
            comments_skipped,
            outcome,
        })
    }

    async fn determine_assignee(
        &self,
        explicit: Option<String>,
        no_auto_assign: bool,
        progress: Option<&SharedProgress>,
    ) -> WorkflowResult<Option<String>> {
        if let Some(login) = explicit.filter(|login| !login.is_empty()) {
            return Ok(Some(login));
        }
        if no_auto_assign {
            return Ok(None);
        }

        report(progress, "Try to determine assignee from tracker identity...");
        let login = self.identity.resolve_login().await?;
        report(progress, format!("  got: {login}"));
        Ok(Some(login))
    }

    async fn all_comments(&self, reference: &IssueReference) -> TrackerResult<Vec<IssueComment>> {
        let tracker = &*self.tracker;
        collect_pages(self.config.page_size, move |page| {
            tracker.list_comments_page(reference, page)
        })
        .await
    }
}
