//! Verification that issues exist, are open, and are unclaimed.

use super::{WorkflowError, WorkflowResult};
use crate::claim::{
    config::{ConfigError, WorkflowConfig},
    domain::{Issue, IssueReference},
    ports::IssueTracker,
};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Request payload for issue verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyRequest {
    issues: Vec<IssueReference>,
    not_closed: bool,
    claim_label: Option<String>,
}

impl VerifyRequest {
    /// Creates a request that only checks existence.
    #[must_use]
    pub const fn new(issues: Vec<IssueReference>) -> Self {
        Self {
            issues,
            not_closed: false,
            claim_label: None,
        }
    }

    /// Also rejects closed issues.
    #[must_use]
    pub const fn not_closed(mut self) -> Self {
        self.not_closed = true;
        self
    }

    /// Overrides the configured claim label for availability checks.
    #[must_use]
    pub fn with_claim_label(mut self, label: impl Into<String>) -> Self {
        self.claim_label = Some(label.into());
        self
    }

    /// Returns the issues to verify.
    #[must_use]
    pub fn issues(&self) -> &[IssueReference] {
        &self.issues
    }
}

/// Issue verification service.
#[derive(Clone)]
pub struct VerificationService<T>
where
    T: IssueTracker,
{
    tracker: Arc<T>,
    config: WorkflowConfig,
}

impl<T> VerificationService<T>
where
    T: IssueTracker,
{
    /// Creates a verification service.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `config` fails validation.
    pub fn new(tracker: Arc<T>, config: WorkflowConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { tracker, config })
    }

    /// Fetches every issue in order, failing on the first that is missing
    /// (or closed, when the request says so).
    ///
    /// # Errors
    ///
    /// Returns [`WorkflowError::NotFound`] for a missing issue,
    /// [`WorkflowError::IssueClosed`] for a closed issue when openness is
    /// required, and [`WorkflowError::Tracker`] for any other lookup failure.
    #[instrument(skip(self, request), fields(issues = request.issues.len(), not_closed = request.not_closed))]
    pub async fn verify_issues_exist(&self, request: &VerifyRequest) -> WorkflowResult<Vec<Issue>> {
        let mut fetched = Vec::with_capacity(request.issues.len());
        for reference in &request.issues {
            let issue = self
                .tracker
                .fetch_issue(reference)
                .await
                .map_err(|source| {
                    if source.is_not_found() {
                        WorkflowError::NotFound {
                            reference: reference.clone(),
                            source,
                        }
                    } else {
                        WorkflowError::Tracker {
                            reference: reference.clone(),
                            source,
                        }
                    }
                })?;

            if request.not_closed && issue.is_closed() {
                return Err(WorkflowError::IssueClosed {
                    reference: reference.clone(),
                });
            }
            debug!(issue = %reference, state = %issue.state(), "issue verified");
            fetched.push(issue);
        }
        Ok(fetched)
    }

    /// Verifies the issues exist, are open, and carry neither the claim label
    /// nor any assignee.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::verify_issues_exist`], or
    /// [`WorkflowError::AlreadyClaimed`] for the first claimed issue.
    #[instrument(skip(self, request), fields(issues = request.issues.len()))]
    pub async fn verify_issues_available(
        &self,
        request: &VerifyRequest,
    ) -> WorkflowResult<Vec<Issue>> {
        let open_request = request.clone().not_closed();
        let issues = self.verify_issues_exist(&open_request).await?;
        let claim_label = request
            .claim_label
            .as_deref()
            .unwrap_or(&self.config.claim_label);

        for (reference, issue) in request.issues.iter().zip(&issues) {
            if issue.is_claimed(claim_label) {
                return Err(WorkflowError::AlreadyClaimed {
                    identity: issue.claim_identity_or(reference),
                });
            }
        }
        Ok(issues)
    }
}
