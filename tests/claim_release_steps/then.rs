//! Then steps for claim and release BDD scenarios.

use super::world::{ClaimWorld, parse_issue, stored_issue};
use rstest_bdd_macros::then;

#[then("the claim succeeds")]
fn claim_succeeds(world: &ClaimWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_claim_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing claim result in scenario world"))?;
    result
        .as_ref()
        .map(|_| ())
        .map_err(|err| eyre::eyre!("unexpected claim failure: {err}"))
}

#[then("the release succeeds")]
fn release_succeeds(world: &ClaimWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_release_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing release result in scenario world"))?;
    result
        .as_ref()
        .map(|_| ())
        .map_err(|err| eyre::eyre!("unexpected release failure: {err}"))
}

#[then(r#"verification fails with "{message}""#)]
fn verification_fails(world: &ClaimWorld, message: String) -> Result<(), eyre::Report> {
    let result = world
        .last_verify_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing verification result in scenario world"))?;
    match result {
        Ok(_) => Err(eyre::eyre!("expected verification to fail")),
        Err(err) if err.to_string() == message => Ok(()),
        Err(err) => Err(eyre::eyre!("expected \"{message}\", found \"{err}\"")),
    }
}

#[then(r#"issue "{issue}" carries the label "{label}""#)]
fn carries_label(world: &ClaimWorld, issue: String, label: String) -> Result<(), eyre::Report> {
    if stored_issue(world, &issue)?.labels().contains(&label) {
        return Ok(());
    }
    Err(eyre::eyre!("issue {issue} lacks label {label}"))
}

#[then(r#"issue "{issue}" does not carry the label "{label}""#)]
fn lacks_label(world: &ClaimWorld, issue: String, label: String) -> Result<(), eyre::Report> {
    if stored_issue(world, &issue)?.labels().contains(&label) {
        return Err(eyre::eyre!("issue {issue} still has label {label}"));
    }
    Ok(())
}

#[then(r#"issue "{issue}" is assigned to "{login}""#)]
fn assigned_to(world: &ClaimWorld, issue: String, login: String) -> Result<(), eyre::Report> {
    let stored = stored_issue(world, &issue)?;
    if stored.assignees() == [login.clone()] {
        return Ok(());
    }
    Err(eyre::eyre!(
        "expected {issue} assigned to {login}, found {:?}",
        stored.assignees()
    ))
}

#[then(r#"issue "{issue}" has no assignees"#)]
fn no_assignees(world: &ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    let stored = stored_issue(world, &issue)?;
    if stored.assignees().is_empty() {
        return Ok(());
    }
    Err(eyre::eyre!(
        "expected no assignees on {issue}, found {:?}",
        stored.assignees()
    ))
}

#[then(r#"issue "{issue}" has {count:u64} comments"#)]
fn comment_count(world: &ClaimWorld, issue: String, count: u64) -> Result<(), eyre::Report> {
    let found = u64::try_from(world.tracker.comments(&parse_issue(&issue)?).len())?;
    if found == count {
        return Ok(());
    }
    Err(eyre::eyre!("expected {count} comments on {issue}, found {found}"))
}

#[then(r#"the latest comment on issue "{issue}" reads "{body}""#)]
fn latest_comment(world: &ClaimWorld, issue: String, body: String) -> Result<(), eyre::Report> {
    let comments = world.tracker.comments(&parse_issue(&issue)?);
    match comments.last() {
        Some(comment) if comment.body == body => Ok(()),
        Some(comment) => Err(eyre::eyre!("expected \"{body}\", found \"{}\"", comment.body)),
        None => Err(eyre::eyre!("issue {issue} has no comments")),
    }
}
