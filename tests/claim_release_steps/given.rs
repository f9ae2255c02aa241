//! Given steps for claim and release BDD scenarios.

use super::world::{ClaimWorld, parse_issue};
use claimant::claim::domain::IssueState;
use rstest_bdd_macros::given;

#[given(r#"an open issue "{issue}""#)]
fn open_issue(world: &mut ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    world.tracker.insert_open(&parse_issue(&issue)?);
    Ok(())
}

#[given(r#"an issue "{issue}" already claimed by "{login}""#)]
fn claimed_issue(world: &mut ClaimWorld, issue: String, login: String) -> Result<(), eyre::Report> {
    world.tracker.insert(
        &parse_issue(&issue)?,
        IssueState::Open,
        vec!["assigned".to_owned()],
        vec![login],
    );
    Ok(())
}

#[given(r#"no issue "{issue}" exists"#)]
fn missing_issue(world: &ClaimWorld, issue: String) -> Result<(), eyre::Report> {
    let reference = parse_issue(&issue)?;
    if world.tracker.issue(&reference).is_some() {
        return Err(eyre::eyre!("issue {issue} unexpectedly stored"));
    }
    Ok(())
}
