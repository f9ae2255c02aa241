//! Shared world state for claim and release BDD scenarios.

use std::sync::Arc;

use claimant::claim::{
    adapters::{
        git::PrefixedBranchNamer,
        memory::{InMemoryIssueTracker, StaticIdentity},
    },
    config::WorkflowConfig,
    domain::{ClaimOutcome, Issue, IssueReference, WorkflowOutcome},
    services::{ClaimService, ReleaseService, VerificationService, WorkflowError},
};
use rstest::fixture;

/// Claim service type used by the BDD world.
pub type TestClaimService =
    ClaimService<InMemoryIssueTracker, StaticIdentity, PrefixedBranchNamer>;

/// Scenario world for claim and release behaviour tests.
pub struct ClaimWorld {
    pub tracker: InMemoryIssueTracker,
    pub verification: VerificationService<InMemoryIssueTracker>,
    pub claim: TestClaimService,
    pub release: ReleaseService<InMemoryIssueTracker>,
    pub last_claim_result: Option<Result<ClaimOutcome, WorkflowError>>,
    pub last_release_result: Option<Result<WorkflowOutcome, WorkflowError>>,
    pub last_verify_result: Option<Result<Vec<Issue>, WorkflowError>>,
}

impl ClaimWorld {
    /// Creates a world over an empty tracker with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration is rejected.
    #[must_use]
    pub fn new() -> Self {
        let tracker = InMemoryIssueTracker::new();
        let shared = Arc::new(tracker.clone());
        let config = WorkflowConfig::default();
        Self {
            verification: VerificationService::new(Arc::clone(&shared), config.clone())
                .expect("default config is valid"),
            claim: ClaimService::new(
                Arc::clone(&shared),
                Arc::new(StaticIdentity::unconfigured()),
                Arc::new(PrefixedBranchNamer::default()),
                config.clone(),
            )
            .expect("default config is valid"),
            release: ReleaseService::new(shared, config).expect("default config is valid"),
            tracker,
            last_claim_result: None,
            last_release_result: None,
            last_verify_result: None,
        }
    }
}

impl Default for ClaimWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ClaimWorld {
    ClaimWorld::default()
}

/// Parses an issue identifier captured from a step.
///
/// # Errors
///
/// Returns an error when `raw` is not `org/repo/number`.
pub fn parse_issue(raw: &str) -> Result<IssueReference, eyre::Report> {
    IssueReference::parse(raw).map_err(|err| eyre::eyre!("invalid issue {raw}: {err}"))
}

/// Fetches a stored issue from the tracker.
///
/// # Errors
///
/// Returns an error when the issue is not stored.
pub fn stored_issue(world: &ClaimWorld, raw: &str) -> Result<Issue, eyre::Report> {
    let reference = parse_issue(raw)?;
    world
        .tracker
        .issue(&reference)
        .ok_or_else(|| eyre::eyre!("issue {raw} missing from tracker"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
