//! Skyfort portal client implementation
//!
//! The [`Client`] owns the HTTP connection pool, the resolved
//! configuration and the session token. Resource accessors
//! ([`Devices`](crate::Devices), [`Secrets`](crate::Secrets),
//! [`Dlp`](crate::Dlp)) borrow the client and funnel every call through a
//! shared execution layer that:
//!
//! - exchanges credentials for a session token before the first request
//!   and attaches it as the `auth-token` header,
//! - retries transient failures (429/5xx/network/timeout) with
//!   exponential backoff and jitter,
//! - re-authenticates exactly once when a request answers 401, then
//!   replays the request,
//! - decodes vendor error bodies into [`Error::Http`].

use crate::{
    auth::{LoginRequest, LoginResponse, AUTH_TOKEN_HEADER},
    config::ClientConfig,
    devices::Devices,
    dlp::Dlp,
    endpoints::Endpoints,
    errors::{Error, ErrorResponse, Result},
    secrets::Secrets,
    util::{generate_request_id, header_str},
};

use backoff::{future::retry_notify, ExponentialBackoff};
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, warn};

const USER_AGENT_PREFIX: &str = "skyfort-sdk-rust";

/// Sentinel error code for the internal 401 re-login handshake
const RELOGIN_NEEDED: &str = "relogin_needed";

/// Skyfort portal client
///
/// The main entry point of the SDK. Construct it with
/// [`ClientBuilder`](crate::ClientBuilder), then reach the per-resource
/// accessors through [`devices`](Client::devices),
/// [`secrets`](Client::secrets) and [`dlp`](Client::dlp).
#[derive(Clone)]
pub struct Client {
    pub(crate) config: ClientConfig,
    http: HttpClient,
    endpoints: Endpoints,
    token: Arc<RwLock<Option<SecretString>>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .field("retries", &self.config.retries)
            .finish()
    }
}

impl Client {
    /// Create a new client with the given configuration
    pub(crate) fn new(config: ClientConfig) -> Result<Self> {
        let user_agent = if let Some(suffix) = &config.user_agent_suffix {
            format!("{}/{} {}", USER_AGENT_PREFIX, crate::VERSION, suffix)
        } else {
            format!("{}/{}", USER_AGENT_PREFIX, crate::VERSION)
        };

        let http = HttpClient::builder()
            .user_agent(user_agent)
            .timeout(config.timeout)
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoints: Endpoints::new(&config.base_url),
            http,
            token: Arc::new(RwLock::new(None)),
            config,
        })
    }

    /// The enrolled-devices interface
    pub fn devices(&self) -> Devices<'_> {
        Devices::new(self)
    }

    /// The device-secrets interface
    pub fn secrets(&self) -> Secrets<'_> {
        Secrets::new(self)
    }

    /// The DLP dictionaries interface
    pub fn dlp(&self) -> Dlp<'_> {
        Dlp::new(self)
    }

    pub(crate) fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // Session bootstrap

    /// Exchange client credentials for a session token
    async fn login(&self) -> Result<SecretString> {
        debug!("authenticating session for {}", self.config.credentials.client_id);

        let body = LoginRequest::from_credentials(&self.config.credentials);
        let url = self.endpoints.login();
        let response = self
            .http
            .post(&url)
            .header("X-Request-ID", generate_request_id())
            .json(&body)
            .send()
            .await
            .map_err(Error::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::Auth(format!(
                "token endpoint rejected credentials (status {}): {}",
                status.as_u16(),
                message
            )));
        }

        let login: LoginResponse = response.json().await.map_err(Error::from)?;
        Ok(SecretString::new(login.jwt_token))
    }

    /// Get the session token, performing the token exchange on first use
    async fn auth_token(&self) -> Result<SecretString> {
        if let Some(token) = self.token.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut guard = self.token.write().await;
        // Another task may have logged in while we waited for the lock
        if let Some(token) = guard.as_ref() {
            return Ok(token.clone());
        }

        let token = self.login().await?;
        *guard = Some(token.clone());
        Ok(token)
    }

    /// Drop the stored session token so the next request re-authenticates
    async fn invalidate_token(&self) {
        *self.token.write().await = None;
    }

    // Request plumbing

    /// Build a request with common headers
    pub(crate) fn build_request(&self, method: Method, url: &str) -> Result<reqwest::RequestBuilder> {
        Ok(self
            .http
            .request(method, url)
            .header("X-Request-ID", generate_request_id()))
    }

    /// Execute a request with token injection and retry logic
    pub(crate) async fn execute_with_retry(
        &self,
        request_builder: reqwest::RequestBuilder,
    ) -> Result<Response> {
        let max_retries = self.config.retries;
        let mut relogin_attempted = false;

        loop {
            let token = self.auth_token().await?;
            let req_with_auth = request_builder
                .try_clone()
                .ok_or_else(|| Error::Other("request cannot be cloned".to_string()))?
                .header(AUTH_TOKEN_HEADER, token.expose_secret());

            let mut backoff = ExponentialBackoff {
                initial_interval: Duration::from_millis(100),
                randomization_factor: 0.3,
                multiplier: 2.0,
                max_interval: Duration::from_secs(10),
                max_elapsed_time: None,
                ..Default::default()
            };
            backoff.max_elapsed_time = if max_retries > 0 {
                Some(Duration::from_secs(30))
            } else {
                Some(Duration::from_millis(0))
            };

            let retry_count = Arc::new(AtomicUsize::new(0));
            let retry_count_notify = retry_count.clone();

            let result = retry_notify(
                backoff,
                || async {
                    let current_retry = retry_count.load(Ordering::Relaxed);
                    let req = req_with_auth
                        .try_clone()
                        .ok_or_else(|| {
                            backoff::Error::Permanent(Error::Other(
                                "request cannot be cloned".to_string(),
                            ))
                        })?
                        .build()
                        .map_err(|e| {
                            backoff::Error::Permanent(Error::Other(format!(
                                "failed to build request: {}",
                                e
                            )))
                        })?;

                    match self.http.execute(req).await {
                        Ok(response) => {
                            let status = response.status();

                            // Expired session token; handled by the outer loop
                            if status == StatusCode::UNAUTHORIZED && !relogin_attempted {
                                return Err(backoff::Error::Permanent(Error::Http {
                                    status: 401,
                                    code: RELOGIN_NEEDED.to_string(),
                                    message: "session token rejected".to_string(),
                                    request_id: header_str(response.headers(), "x-request-id"),
                                }));
                            }

                            if status.is_server_error()
                                || status == StatusCode::TOO_MANY_REQUESTS
                                || status == StatusCode::REQUEST_TIMEOUT
                            {
                                let error = self.parse_error_response(response).await;
                                if error.is_retryable() && current_retry < max_retries as usize {
                                    debug!("retrying request due to: {:?}", error);
                                    return Err(backoff::Error::transient(error));
                                }
                                return Err(backoff::Error::Permanent(error));
                            }

                            if !status.is_success() {
                                return Err(backoff::Error::Permanent(
                                    self.parse_error_response(response).await,
                                ));
                            }

                            Ok(response)
                        }
                        Err(e) => {
                            let error = Error::from(e);
                            if error.is_retryable() && current_retry < max_retries as usize {
                                debug!("retrying request due to network error: {:?}", error);
                                Err(backoff::Error::transient(error))
                            } else {
                                Err(backoff::Error::Permanent(error))
                            }
                        }
                    }
                },
                |err, dur| {
                    let count = retry_count_notify.fetch_add(1, Ordering::Relaxed) + 1;
                    debug!("retry {} after {:?} due to: {:?}", count, dur, err);
                },
            )
            .await;

            match result {
                Ok(response) => return Ok(response),
                Err(Error::Http {
                    status: 401, code, ..
                }) if code == RELOGIN_NEEDED && !relogin_attempted => {
                    warn!("got 401, re-authenticating session");
                    self.invalidate_token().await;
                    relogin_attempted = true;
                    continue;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Parse error response from the server
    pub(crate) async fn parse_error_response(&self, response: Response) -> Error {
        let status = response.status().as_u16();
        let request_id = header_str(response.headers(), "x-request-id");

        match response.json::<ErrorResponse>().await {
            Ok(body) => Error::Http {
                status,
                code: body.code.unwrap_or_else(|| "unknown".to_string()),
                message: body
                    .message
                    .unwrap_or_else(|| format!("HTTP error {}", status)),
                request_id,
            },
            Err(_) => Error::Http {
                status,
                code: "unknown".to_string(),
                message: format!("HTTP error {}", status),
                request_id,
            },
        }
    }

    /// Parse a JSON response body
    pub(crate) async fn parse_json_response<T: serde::de::DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T> {
        response.json().await.map_err(Error::from)
    }
}
