//! Issue claim and release workflows.
//!
//! Claiming marks a batch of tracker issues as being worked on: each issue
//! gets the claim label, an announcement comment naming the work branch, and
//! an assignee. Releasing reverses that. Verification checks that issues
//! exist, are open, and are not already claimed before any work starts.
//!
//! Batches run strictly in order and stop at the first failure. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Shared settings in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
