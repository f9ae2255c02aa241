//! Identity port for resolving the caller's tracker login.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for identity resolution.
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Resolves which tracker account the workflow acts as.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Returns the caller's tracker login.
    async fn resolve_login(&self) -> IdentityResult<String>;
}

/// Errors returned by identity resolvers.
#[derive(Debug, Clone, Error)]
pub enum IdentityError {
    /// No login could be determined from local configuration.
    #[error("no tracker login is configured")]
    NotConfigured,

    /// The lookup against the tracker failed.
    #[error("could not resolve tracker login: {0}")]
    Lookup(Arc<dyn std::error::Error + Send + Sync>),
}

impl IdentityError {
    /// Wraps a lookup failure.
    pub fn lookup(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Lookup(Arc::new(err))
    }
}
