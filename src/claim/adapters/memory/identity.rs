//! Identity resolver backed by a fixed login.

use async_trait::async_trait;

use crate::claim::ports::{IdentityError, IdentityResolver, IdentityResult};

/// Resolves to a login taken from local configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticIdentity {
    login: Option<String>,
}

impl StaticIdentity {
    /// Creates a resolver that always yields `login`.
    #[must_use]
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: Some(login.into()),
        }
    }

    /// Creates a resolver with no configured login.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { login: None }
    }
}

#[async_trait]
impl IdentityResolver for StaticIdentity {
    async fn resolve_login(&self) -> IdentityResult<String> {
        self.login
            .clone()
            .filter(|login| !login.trim().is_empty())
            .ok_or(IdentityError::NotConfigured)
    }
}
