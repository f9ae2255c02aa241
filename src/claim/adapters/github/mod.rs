//! GitHub REST adapter.

mod client;
mod config;
mod models;

pub use client::GitHubIssueTracker;
pub use config::{DEFAULT_API_BASE_URL, DEFAULT_USER_AGENT, GitHubConfig};
