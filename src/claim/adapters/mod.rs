//! Adapter implementations for claim ports.

pub mod git;
pub mod github;
pub mod memory;
pub mod progress;
