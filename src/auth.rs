//! Credentials and session token exchange
//!
//! The portal API authenticates a session by trading client credentials
//! for a token (`POST /auth/v1/login`), which is then sent as the
//! `auth-token` header on every subsequent request.
//!
//! Credentials can be given explicitly or resolved from the environment.
//! Precedence is per field: an explicit value wins, and any field left
//! unset falls back to its `SKYFORT_CLIENT_ID`, `SKYFORT_CLIENT_SECRET`
//! or `SKYFORT_COMPANY_ID` environment variable.
//!
//! # Example
//!
//! ```
//! use skyfort_sdk::Credentials;
//!
//! let creds = Credentials::new("client-id", "client-secret")
//!     .with_company_id("8812");
//! ```

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Environment variable holding the client ID
pub const ENV_CLIENT_ID: &str = "SKYFORT_CLIENT_ID";
/// Environment variable holding the client secret
pub const ENV_CLIENT_SECRET: &str = "SKYFORT_CLIENT_SECRET";
/// Environment variable holding the company ID
pub const ENV_COMPANY_ID: &str = "SKYFORT_COMPANY_ID";

/// Header carrying the session token on authenticated requests
pub(crate) const AUTH_TOKEN_HEADER: &str = "auth-token";

/// API client credentials
///
/// The client secret is held as a [`SecretString`] so it never shows up
/// in logs or debug output.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Client ID generated from the portal
    pub client_id: String,
    /// Client secret generated from the portal
    pub client_secret: SecretString,
    /// Company ID, required by some device operations
    pub company_id: Option<String>,
}

impl Credentials {
    /// Create credentials from an explicit client ID and secret
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            company_id: None,
        }
    }

    /// Attach a company ID
    pub fn with_company_id(mut self, company_id: impl Into<String>) -> Self {
        self.company_id = Some(company_id.into());
        self
    }

    /// Read credentials from the environment
    ///
    /// Requires [`ENV_CLIENT_ID`] and [`ENV_CLIENT_SECRET`];
    /// [`ENV_COMPANY_ID`] is optional.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(ENV_CLIENT_ID)
            .map_err(|_| Error::Auth(format!("{} is not set", ENV_CLIENT_ID)))?;
        let client_secret = std::env::var(ENV_CLIENT_SECRET)
            .map_err(|_| Error::Auth(format!("{} is not set", ENV_CLIENT_SECRET)))?;
        let company_id = std::env::var(ENV_COMPANY_ID).ok();

        let mut creds = Credentials::new(client_id, client_secret);
        creds.company_id = company_id;
        Ok(creds)
    }

    /// Resolve credentials with explicit-over-environment precedence
    ///
    /// Precedence applies per field: explicit credentials without a
    /// company ID still pick one up from [`ENV_COMPANY_ID`].
    pub fn resolve(explicit: Option<Credentials>) -> Result<Credentials> {
        match explicit {
            Some(mut creds) => {
                if creds.company_id.is_none() {
                    creds.company_id = std::env::var(ENV_COMPANY_ID).ok();
                }
                Ok(creds)
            }
            None => Self::from_env(),
        }
    }
}

/// Token exchange request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginRequest {
    pub api_key: String,
    pub secret_key: String,
}

impl LoginRequest {
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self {
            api_key: creds.client_id.clone(),
            secret_key: creds.client_secret.expose_secret().clone(),
        }
    }
}

/// Token exchange response body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginResponse {
    pub jwt_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("id-123", "super-secret");
        let debug_str = format!("{:?}", creds);
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("id-123"));
    }

    #[test]
    fn test_login_request_shape() {
        let creds = Credentials::new("id-123", "secret-456");
        let body = serde_json::to_value(LoginRequest::from_credentials(&creds)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"apiKey": "id-123", "secretKey": "secret-456"})
        );
    }

    // Single test touching SKYFORT_* variables so parallel unit tests
    // cannot race on the process environment.
    #[test]
    fn test_env_resolution() {
        std::env::remove_var(ENV_CLIENT_ID);
        std::env::remove_var(ENV_CLIENT_SECRET);
        std::env::remove_var(ENV_COMPANY_ID);

        let err = Credentials::resolve(None).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));

        std::env::set_var(ENV_CLIENT_ID, "env-id");
        std::env::set_var(ENV_CLIENT_SECRET, "env-secret");
        std::env::set_var(ENV_COMPANY_ID, "env-company");

        let creds = Credentials::resolve(None).unwrap();
        assert_eq!(creds.client_id, "env-id");
        assert_eq!(creds.company_id.as_deref(), Some("env-company"));

        // Explicit credentials take precedence over the environment,
        // but a missing company ID still falls back to the variable
        let explicit = Credentials::new("explicit-id", "explicit-secret");
        let creds = Credentials::resolve(Some(explicit)).unwrap();
        assert_eq!(creds.client_id, "explicit-id");
        assert_eq!(creds.company_id.as_deref(), Some("env-company"));

        let explicit = Credentials::new("explicit-id", "explicit-secret")
            .with_company_id("explicit-company");
        let creds = Credentials::resolve(Some(explicit)).unwrap();
        assert_eq!(creds.company_id.as_deref(), Some("explicit-company"));

        std::env::remove_var(ENV_COMPANY_ID);
        let explicit = Credentials::new("explicit-id", "explicit-secret");
        let creds = Credentials::resolve(Some(explicit)).unwrap();
        assert_eq!(creds.company_id, None);

        std::env::remove_var(ENV_CLIENT_ID);
        std::env::remove_var(ENV_CLIENT_SECRET);
        std::env::remove_var(ENV_COMPANY_ID);
    }
}
