// client_builder.rs
//! Builder pattern for constructing FleetHub clients with better ergonomics and validation

use std::time::Duration;

use reqwest::Client as ReqwestClient;
use url::Url;

use crate::client::FleetHubClient;
use crate::constants::*;
use crate::error::FleetHubError;

type Result<T> = std::result::Result<T, FleetHubError>;

/// Builder for creating FleetHub API clients
///
/// # Examples
///
/// ```no_run
/// use fleethub_sdk::ClientBuilder;
///
/// let client = ClientBuilder::new()
///     .base_url("https://api.fleethub.example.com/")
///     .auth_token("my-api-token")
///     .timeout_secs(30)
///     .build()?;
/// # Ok::<(), fleethub_sdk::FleetHubError>(())
/// ```
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    auth_token: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL
    ///
    /// Default: `https://api.fleethub.io/`. The URL should carry a trailing
    /// slash; requests against a base URL without one fail with a
    /// configuration error.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the bearer token attached to every request
    pub fn auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Set the User-Agent header
    ///
    /// Default: `fleethub-sdk/rust`. An empty value disables the header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set request timeout in seconds
    ///
    /// Default: 60 seconds
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Some(Duration::from_secs(secs));
        self
    }

    /// Set request timeout
    ///
    /// Default: 60 seconds
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<FleetHubClient> {
        let raw_url = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|e| {
            FleetHubError::ConfigurationError(format!("Invalid base URL '{}': {}", raw_url, e))
        })?;

        let http = ReqwestClient::builder()
            .timeout(self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)))
            .build()?;

        Ok(FleetHubClient {
            http,
            base_url,
            user_agent: self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            auth_token: self.auth_token.filter(|t| !t.is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_rejects_invalid_url() {
        let result = ClientBuilder::new().base_url("not a url").build();
        assert!(matches!(result, Err(FleetHubError::ConfigurationError(_))));
    }

    #[test]
    fn test_builder_defaults() {
        let client = ClientBuilder::new().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://api.fleethub.io/");
    }

    #[test]
    fn test_empty_auth_token_means_anonymous() {
        let client = ClientBuilder::new().auth_token("").build().unwrap();
        assert!(client.auth_token.is_none());
    }
}
