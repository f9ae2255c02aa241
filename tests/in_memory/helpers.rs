//! Shared fixtures for in-memory workflow integration tests.

use std::sync::Arc;

use claimant::claim::{
    adapters::{
        git::PrefixedBranchNamer,
        memory::{InMemoryIssueTracker, StaticIdentity},
    },
    config::WorkflowConfig,
    domain::IssueReference,
    services::{ClaimService, ReleaseService, VerificationService},
};
use rstest::fixture;

/// Claim service wired to in-memory adapters.
pub type MemoryClaimService =
    ClaimService<InMemoryIssueTracker, StaticIdentity, PrefixedBranchNamer>;

/// Every workflow service sharing one tracker.
pub struct Workflows {
    pub tracker: InMemoryIssueTracker,
    pub verification: VerificationService<InMemoryIssueTracker>,
    pub claim: MemoryClaimService,
    pub release: ReleaseService<InMemoryIssueTracker>,
}

/// Provides services over a tracker holding open issues `acme/widgets/1..=3`.
///
/// # Panics
///
/// Panics if the default configuration is rejected.
#[fixture]
pub fn workflows() -> Workflows {
    let tracker = InMemoryIssueTracker::new();
    for number in 1..=3 {
        tracker.insert_open(&issue(&format!("acme/widgets/{number}")));
    }
    let shared = Arc::new(tracker.clone());
    let config = WorkflowConfig::default();

    Workflows {
        verification: VerificationService::new(Arc::clone(&shared), config.clone())
            .expect("valid config"),
        claim: ClaimService::new(
            Arc::clone(&shared),
            Arc::new(StaticIdentity::new("octocat")),
            Arc::new(PrefixedBranchNamer::default()),
            config.clone(),
        )
        .expect("valid config"),
        release: ReleaseService::new(shared, config).expect("valid config"),
        tracker,
    }
}

/// Parses an issue reference.
///
/// # Panics
///
/// Panics if `raw` is not `org/repo/number`.
#[must_use]
pub fn issue(raw: &str) -> IssueReference {
    IssueReference::parse(raw).expect("valid issue reference")
}
