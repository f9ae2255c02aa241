//! End-to-end verify, claim, and release flows over the in-memory tracker.

use claimant::claim::{
    adapters::memory::TrackerOperation,
    ports::TrackerError,
    services::{ClaimRequest, ErrorKind, ReleaseRequest, VerifyRequest, WorkflowError},
};
use rstest::rstest;

use super::helpers::{Workflows, issue, workflows};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn claim_then_release_restores_availability(workflows: Workflows) {
    let batch = vec![issue("acme/widgets/1"), issue("acme/widgets/2")];
    let verify = VerifyRequest::new(batch.clone());

    workflows
        .verification
        .verify_issues_available(&verify)
        .await
        .expect("issues start available");

    let claimed = workflows
        .claim
        .claim_issues(ClaimRequest::new(batch.clone()))
        .await
        .expect("claim succeeds");
    assert_eq!(claimed.outcome.completed(), batch.as_slice());
    assert_eq!(claimed.assignee.as_deref(), Some("octocat"));

    let blocked = workflows.verification.verify_issues_available(&verify).await;
    assert!(matches!(blocked, Err(WorkflowError::AlreadyClaimed { .. })));

    workflows
        .release
        .release_issues(ReleaseRequest::new(batch.clone()))
        .await
        .expect("release succeeds");

    workflows
        .verification
        .verify_issues_available(&verify)
        .await
        .expect("issues available again");

    let first_comments: Vec<String> = workflows
        .tracker
        .comments(&batch[0])
        .into_iter()
        .map(|comment| comment.body)
        .collect();
    assert_eq!(
        first_comments,
        vec![
            "Work for this issue will begin on branch work-acme-widgets-1.".to_owned(),
            "Issue released.".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reclaiming_after_release_reuses_the_existing_announcement(workflows: Workflows) {
    let batch = vec![issue("acme/widgets/3")];

    workflows
        .claim
        .claim_issues(ClaimRequest::new(batch.clone()))
        .await
        .expect("first claim succeeds");
    workflows
        .release
        .release_issues(ReleaseRequest::new(batch.clone()).with_comment(""))
        .await
        .expect("silent release succeeds");
    let reclaimed = workflows
        .claim
        .claim_issues(ClaimRequest::new(batch.clone()))
        .await
        .expect("second claim succeeds");

    assert_eq!(workflows.tracker.comments(&batch[0]).len(), 1);
    assert_eq!(reclaimed.comments_skipped, batch);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn verifying_unknown_issue_reports_not_found(workflows: Workflows) {
    let error = workflows
        .verification
        .verify_issues_exist(&VerifyRequest::new(vec![issue("acme/widgets/999")]))
        .await
        .expect_err("unknown issue");

    assert_eq!(error.kind(), ErrorKind::NotFound);
    assert_eq!(
        error.to_string(),
        "No issue found. Verify issue 'acme/widgets/999' is valid."
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_claim_leaves_later_issues_untouched(workflows: Workflows) {
    let batch = vec![
        issue("acme/widgets/1"),
        issue("acme/widgets/2"),
        issue("acme/widgets/3"),
    ];
    workflows.tracker.fail_on(
        &batch[1],
        TrackerOperation::ListComments,
        TrackerError::Status {
            status: 500,
            message: "oops".to_owned(),
        },
    );

    let error = workflows
        .claim
        .claim_issues(ClaimRequest::new(batch.clone()))
        .await
        .expect_err("second issue fails");

    let failure = error.as_partial_failure().expect("partial failure");
    assert_eq!(failure.completed(), &batch[..1]);
    assert!(
        workflows
            .tracker
            .issue(&batch[2])
            .expect("issue stored")
            .labels()
            .is_empty()
    );
}
