//! Shared builders for claim workflow tests.

use std::sync::Arc;

use crate::claim::{
    adapters::{
        git::PrefixedBranchNamer,
        memory::{InMemoryIssueTracker, StaticIdentity},
    },
    config::WorkflowConfig,
    domain::IssueReference,
    services::{ClaimService, ReleaseService, VerificationService},
};

pub type TestClaimService = ClaimService<InMemoryIssueTracker, StaticIdentity, PrefixedBranchNamer>;

pub fn reference(raw: &str) -> IssueReference {
    IssueReference::parse(raw).expect("valid issue reference")
}

pub fn claim_service(tracker: &InMemoryIssueTracker, login: &str) -> TestClaimService {
    claim_service_with(tracker, StaticIdentity::new(login), WorkflowConfig::default())
}

pub fn claim_service_with(
    tracker: &InMemoryIssueTracker,
    identity: StaticIdentity,
    config: WorkflowConfig,
) -> TestClaimService {
    ClaimService::new(
        Arc::new(tracker.clone()),
        Arc::new(identity),
        Arc::new(PrefixedBranchNamer::default()),
        config,
    )
    .expect("valid workflow config")
}

pub fn release_service(tracker: &InMemoryIssueTracker) -> ReleaseService<InMemoryIssueTracker> {
    ReleaseService::new(Arc::new(tracker.clone()), WorkflowConfig::default())
        .expect("valid workflow config")
}

pub fn verification_service(
    tracker: &InMemoryIssueTracker,
) -> VerificationService<InMemoryIssueTracker> {
    VerificationService::new(Arc::new(tracker.clone()), WorkflowConfig::default())
        .expect("valid workflow config")
}
