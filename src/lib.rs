//! Claimant: issue claim workflows over a remote issue tracker.
//!
//! This crate claims, releases, and verifies tracker issues in ordered
//! batches. A batch stops at the first failed remote operation and reports
//! which issues were already updated.
//!
//! # Architecture
//!
//! Claimant follows hexagonal architecture principles:
//!
//! - **Domain**: Issue references, snapshots, and outcomes
//! - **Ports**: Tracker, identity, branch-naming, and progress traits
//! - **Adapters**: In-memory, GitHub REST, and git-naming implementations
//!
//! # Modules
//!
//! - [`claim`]: Verification, claim, and release workflows

pub mod claim;
