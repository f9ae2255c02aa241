//! Work-branch naming value object.

use super::ClaimDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Source-control branch on which work for a claimed issue happens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkBranchName(String);

impl WorkBranchName {
    /// Creates a validated branch name.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimDomainError::EmptyBranchName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, ClaimDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(ClaimDomainError::EmptyBranchName);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the branch name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for WorkBranchName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for WorkBranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
