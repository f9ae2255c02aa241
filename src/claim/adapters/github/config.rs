//! Connection settings for the GitHub adapter.

use secrecy::SecretString;
use serde::Deserialize;

/// Public GitHub REST endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// User agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("claimant/", env!("CARGO_PKG_VERSION"));

/// GitHub connection settings.
#[derive(Debug, Deserialize)]
pub struct GitHubConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Token sent as a bearer credential.
    pub token: SecretString,
    /// `User-Agent` header value.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_owned()
}

impl GitHubConfig {
    /// Creates settings for the public API using `token`.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_base_url: default_api_base_url(),
            token: SecretString::from(token.into()),
            user_agent: default_user_agent(),
        }
    }

    /// Points the adapter at a different API root, such as GitHub
    /// Enterprise or a test server.
    #[must_use]
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_owned();
        self
    }
}
