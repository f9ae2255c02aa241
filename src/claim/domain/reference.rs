//! Compact `org/repo/number` issue identifiers.

use super::ClaimDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference to a single issue in a remote tracker.
///
/// Segments are kept verbatim so that parsing and re-joining with `/` yields
/// the original identifier.
///
/// # Examples
///
///     use claimant::claim::domain::IssueReference;
///
///     let reference = IssueReference::parse("acme/widgets/42").expect("valid");
///     assert_eq!(reference.org(), "acme");
///     assert_eq!(reference.to_string(), "acme/widgets/42");
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IssueReference {
    org: String,
    repo: String,
    number: String,
}

impl IssueReference {
    /// Parses an `org/repo/number` identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ClaimDomainError::InvalidIssueReference`] unless the input
    /// splits into exactly three non-empty, whitespace-free segments.
    pub fn parse(value: &str) -> Result<Self, ClaimDomainError> {
        let invalid = || ClaimDomainError::InvalidIssueReference(value.to_owned());
        let mut segments = value.split('/');
        let (Some(org), Some(repo), Some(number), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(invalid());
        };

        if [org, repo, number].iter().any(|segment| !is_valid_segment(segment)) {
            return Err(invalid());
        }

        Ok(Self {
            org: org.to_owned(),
            repo: repo.to_owned(),
            number: number.to_owned(),
        })
    }

    /// Parses a batch of identifiers, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the error for the first malformed identifier.
    pub fn parse_all<I, S>(values: I) -> Result<Vec<Self>, ClaimDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values
            .into_iter()
            .map(|value| Self::parse(value.as_ref()))
            .collect()
    }

    /// Returns the organisation (repository owner) segment.
    #[must_use]
    pub fn org(&self) -> &str {
        &self.org
    }

    /// Returns the repository segment.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Returns the issue number segment.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }
}

fn is_valid_segment(segment: &str) -> bool {
    !segment.is_empty() && !segment.chars().any(char::is_whitespace)
}

impl fmt::Display for IssueReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.org, self.repo, self.number)
    }
}

impl FromStr for IssueReference {
    type Err = ClaimDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for IssueReference {
    type Error = ClaimDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for IssueReference {
    type Error = ClaimDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<IssueReference> for String {
    fn from(value: IssueReference) -> Self {
        value.to_string()
    }
}
