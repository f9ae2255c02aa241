//! Deterministic work-branch naming.

use crate::claim::{
    domain::{ClaimDomainError, IssueReference, WorkBranchName},
    ports::WorkBranchNamer,
};

/// Prefix used when none is configured.
pub const DEFAULT_BRANCH_PREFIX: &str = "work";

/// Names branches `<prefix>-<org>-<repo>-<number>`, lowercased.
///
/// # Examples
///
///     use claimant::claim::{
///         adapters::git::PrefixedBranchNamer, domain::IssueReference, ports::WorkBranchNamer,
///     };
///
///     let reference = IssueReference::parse("Acme/Widgets/42").expect("valid");
///     let branch = PrefixedBranchNamer::default()
///         .work_branch_name(&reference)
///         .expect("valid branch");
///     assert_eq!(branch.as_str(), "work-acme-widgets-42");
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedBranchNamer {
    prefix: String,
}

impl PrefixedBranchNamer {
    /// Creates a namer using `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PrefixedBranchNamer {
    fn default() -> Self {
        Self::new(DEFAULT_BRANCH_PREFIX)
    }
}

impl WorkBranchNamer for PrefixedBranchNamer {
    fn work_branch_name(
        &self,
        primary: &IssueReference,
    ) -> Result<WorkBranchName, ClaimDomainError> {
        let name = [
            self.prefix.as_str(),
            primary.org(),
            primary.repo(),
            primary.number(),
        ]
        .iter()
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_lowercase())
        .collect::<Vec<_>>()
        .join("-");
        WorkBranchName::new(name)
    }
}
