//! When steps for claim and release BDD scenarios.

use super::world::{ClaimWorld, parse_issue, run_async};
use claimant::claim::services::{ClaimRequest, ReleaseRequest, VerifyRequest};
use rstest_bdd_macros::when;

#[when(r#"issue "{issue}" is claimed for "{login}" with comment "{comment}""#)]
fn claim_issue(
    world: &mut ClaimWorld,
    issue: String,
    login: String,
    comment: String,
) -> Result<(), eyre::Report> {
    let request = ClaimRequest::new(vec![parse_issue(&issue)?])
        .with_assignee(login)
        .with_comment(comment);
    world.last_claim_result = Some(run_async(world.claim.claim_issues(request)));
    Ok(())
}

#[when(r#"issue "{issue}" is released with an empty comment"#)]
fn release_silently(world: &mut ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    let request = ReleaseRequest::new(vec![parse_issue(&issue)?]).with_comment("");
    world.last_release_result = Some(run_async(world.release.release_issues(request)));
    Ok(())
}

#[when(r#"the existence of issue "{issue}" is verified"#)]
fn verify_exists(world: &mut ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    let request = VerifyRequest::new(vec![parse_issue(&issue)?]);
    world.last_verify_result = Some(run_async(
        world.verification.verify_issues_exist(&request),
    ));
    Ok(())
}

#[when(r#"the availability of issue "{issue}" is verified"#)]
fn verify_available(world: &mut ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    let request = VerifyRequest::new(vec![parse_issue(&issue)?]);
    world.last_verify_result = Some(run_async(
        world.verification.verify_issues_available(&request),
    ));
    Ok(())
}
