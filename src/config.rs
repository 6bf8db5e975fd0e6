use crate::{auth::Credentials, errors::Result, Error};
use std::time::Duration;

/// Client configuration
///
/// An immutable snapshot of everything the client needs; built by
/// [`ClientBuilder`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the portal API
    pub base_url: String,
    /// Resolved API credentials
    pub credentials: Credentials,
    /// Request timeout
    pub timeout: Duration,
    /// Number of retries for transient failures
    pub retries: u32,
    /// User agent suffix
    pub user_agent_suffix: Option<String>,
}

/// Builder for creating a configured [`Client`](crate::Client)
#[derive(Debug)]
pub struct ClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    timeout_ms: u64,
    retries: u32,
    user_agent_suffix: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new(crate::DEFAULT_BASE_URL)
    }
}

impl ClientBuilder {
    /// Create a new client builder with the given base URL
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the portal API
    ///   (e.g. `"https://api.skyfort.io/papi"`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
            timeout_ms: crate::DEFAULT_TIMEOUT_MS,
            retries: crate::DEFAULT_RETRIES,
            user_agent_suffix: None,
        }
    }

    /// Set explicit API credentials
    ///
    /// When not set, credentials are resolved from the `SKYFORT_*`
    /// environment variables at build time. An explicit value missing a
    /// company ID still falls back to `SKYFORT_COMPANY_ID`.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the request timeout in milliseconds
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set the number of retries for transient failures
    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Add a custom user agent suffix
    pub fn user_agent_extra(mut self, suffix: impl Into<String>) -> Self {
        self.user_agent_suffix = Some(suffix.into());
        self
    }

    /// Build the client with the configured options
    ///
    /// Fails with [`Error::Config`] on a malformed base URL and with
    /// [`Error::Auth`] when no credentials are given and the environment
    /// variables are not set. No network request is made here; the token
    /// exchange happens lazily before the first API call.
    pub fn build(self) -> Result<crate::Client> {
        let url = self.base_url.trim_end_matches('/');

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(Error::Config(
                "Base URL must start with http:// or https://".to_string(),
            ));
        }

        let credentials = Credentials::resolve(self.credentials)?;

        let config = ClientConfig {
            base_url: url.to_string(),
            credentials,
            timeout: Duration::from_millis(self.timeout_ms),
            retries: self.retries,
            user_agent_suffix: self.user_agent_suffix,
        };

        crate::client::Client::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_validates_url() {
        let result = ClientBuilder::new("not-a-url")
            .credentials(Credentials::new("id", "secret"))
            .build();
        assert!(matches!(result.unwrap_err(), Error::Config(_)));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = ClientBuilder::new("https://api.example.com/papi/")
            .credentials(Credentials::new("id", "secret"))
            .build()
            .unwrap();
        assert_eq!(format!("{:?}", client).contains("papi/\""), false);
    }

    #[test]
    fn test_builder_accepts_explicit_credentials() {
        let result = ClientBuilder::new("https://api.example.com")
            .credentials(Credentials::new("id", "secret").with_company_id("42"))
            .timeout_ms(1000)
            .retries(0)
            .user_agent_extra("ci")
            .build();
        assert!(result.is_ok());
    }
}
