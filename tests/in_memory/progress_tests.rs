//! Progress reporting during claim and release batches.

use std::sync::Arc;

use claimant::claim::{
    adapters::{memory::RecordingProgress, progress::TracingProgress},
    services::{ClaimRequest, ReleaseRequest},
};
use rstest::rstest;

use super::helpers::{Workflows, issue, workflows};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn claim_reports_each_step(workflows: Workflows) {
    let progress = RecordingProgress::new();

    workflows
        .claim
        .claim_issues(
            ClaimRequest::new(vec![issue("acme/widgets/1")])
                .with_assignee("alice")
                .with_reporter(Arc::new(progress.clone())),
        )
        .await
        .expect("claim succeeds");

    assert_eq!(
        progress.lines(),
        vec![
            "Checking issue 'acme/widgets/1'...".to_owned(),
            "Checking existing comments...".to_owned(),
            "Adding claim comment to issue acme/widgets/1...".to_owned(),
            "Attempting to assign the issue to user: alice...".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn release_reports_each_step(workflows: Workflows) {
    let progress = RecordingProgress::new();

    workflows
        .release
        .release_issues(
            ReleaseRequest::new(vec![issue("acme/widgets/2")])
                .with_reporter(Arc::new(progress.clone())),
        )
        .await
        .expect("release succeeds");

    assert_eq!(
        progress.lines(),
        vec![
            "Getting current assignments for acme/widgets/2...".to_owned(),
            "About to remove 'assigned' label from issue acme/widgets/2...".to_owned(),
            "About to add comment to issue acme/widgets/2...".to_owned(),
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tracing_sink_accepts_release_progress(workflows: Workflows) {
    let outcome = workflows
        .release
        .release_issues(
            ReleaseRequest::new(vec![issue("acme/widgets/3")])
                .with_reporter(Arc::new(TracingProgress)),
        )
        .await
        .expect("release succeeds");

    assert_eq!(outcome.completed(), [issue("acme/widgets/3")]);
}
