//! Port for deriving work-branch names from issue references.

use crate::claim::domain::{ClaimDomainError, IssueReference, WorkBranchName};

/// Computes the branch on which work for a batch of issues happens.
///
/// Implementations must be deterministic: the same primary issue always
/// yields the same branch name.
pub trait WorkBranchNamer: Send + Sync {
    /// Returns the work branch for `primary`.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimDomainError`] when no valid branch name can be formed.
    fn work_branch_name(
        &self,
        primary: &IssueReference,
    ) -> Result<WorkBranchName, ClaimDomainError>;
}
