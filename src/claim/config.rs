//! Workflow configuration with documented defaults.
//!
//! Every workflow service validates its configuration once, at construction,
//! so individual calls never re-check defaults.

use crate::claim::domain::{IssueReference, WorkBranchName};
use crate::claim::ports::DEFAULT_PAGE_SIZE;
use minijinja::{Environment, context};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label marking an issue as claimed when none is configured.
pub const DEFAULT_CLAIM_LABEL: &str = "assigned";

/// Template for the claim announcement when no comment is supplied.
///
/// Rendered with `branch`, `issue`, `org`, `repo`, and `number` in scope.
pub const DEFAULT_CLAIM_COMMENT_TEMPLATE: &str =
    "Work for this issue will begin on branch {{ branch }}.";

/// Comment posted on release when none is supplied.
pub const DEFAULT_RELEASE_COMMENT: &str = "Issue released.";

/// Errors raised while validating configuration or rendering templates.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The claim label is empty after trimming.
    #[error("claim label must not be empty")]
    EmptyClaimLabel,

    /// The page size is zero.
    #[error("page size must be at least 1")]
    ZeroPageSize,

    /// The claim comment template failed to render.
    #[error("claim comment template is invalid: {reason}")]
    Template {
        /// Renderer error message.
        reason: String,
    },
}

/// Settings shared by the verification, claim, and release workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Label added on claim and removed on release.
    pub claim_label: String,
    /// `minijinja` template for the default claim comment.
    pub claim_comment_template: String,
    /// Comment posted on release when the caller supplies none.
    pub release_comment: String,
    /// Items requested per page when listing comments or assignees.
    pub page_size: u32,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            claim_label: DEFAULT_CLAIM_LABEL.to_owned(),
            claim_comment_template: DEFAULT_CLAIM_COMMENT_TEMPLATE.to_owned(),
            release_comment: DEFAULT_RELEASE_COMMENT.to_owned(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl WorkflowConfig {
    /// Sets the claim label.
    #[must_use]
    pub fn with_claim_label(mut self, label: impl Into<String>) -> Self {
        self.claim_label = label.into();
        self
    }

    /// Sets the claim comment template.
    #[must_use]
    pub fn with_claim_comment_template(mut self, template: impl Into<String>) -> Self {
        self.claim_comment_template = template.into();
        self
    }

    /// Sets the default release comment.
    #[must_use]
    pub fn with_release_comment(mut self, comment: impl Into<String>) -> Self {
        self.release_comment = comment.into();
        self
    }

    /// Sets the listing page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Checks that the configuration can drive a workflow.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the claim label is blank, the page size
    /// is zero, or the claim comment template does not compile.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.claim_label.trim().is_empty() {
            return Err(ConfigError::EmptyClaimLabel);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Environment::new()
            .template_from_str(&self.claim_comment_template)
            .map(|_| ())
            .map_err(|error| ConfigError::Template {
                reason: error.to_string(),
            })
    }

    /// Renders the default claim comment for a batch led by `primary`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Template`] when rendering fails.
    pub fn render_claim_comment(
        &self,
        branch: &WorkBranchName,
        primary: &IssueReference,
    ) -> Result<String, ConfigError> {
        Environment::new()
            .render_str(
                &self.claim_comment_template,
                context! {
                    branch => branch.as_str(),
                    issue => primary.to_string(),
                    org => primary.org(),
                    repo => primary.repo(),
                    number => primary.number(),
                },
            )
            .map_err(|error| ConfigError::Template {
                reason: error.to_string(),
            })
    }
}
