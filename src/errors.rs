//! Error types and handling for the Skyfort SDK
//!
//! The SDK uses a structured error system with the following main
//! categories:
//!
//! - **HTTP Errors**: API errors with status code, vendor error code and message
//! - **Auth**: missing or rejected credentials
//! - **Validation**: malformed client-side input (e.g. unknown shorthand action)
//! - **Network Errors**: connection and DNS failures
//! - **Timeout**: request deadline exceeded
//! - **Configuration**: invalid client configuration
//! - **Deserialization**: failed to parse API responses
//!
//! # Example
//!
//! ```no_run
//! # use skyfort_sdk::{Client, Error};
//! # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
//! match client.dlp().get_dict(1).await {
//!     Ok(dict) => println!("dictionary: {}", dict.name),
//!     Err(Error::Http { status: 404, .. }) => println!("dictionary not found"),
//!     Err(Error::Auth(msg)) => println!("authentication failed: {}", msg),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP error from the API
    #[error("http {status}: {code} - {message} (req={request_id:?})")]
    Http {
        /// HTTP status code
        status: u16,
        /// Vendor error code from the response body (e.g. `RESOURCE_NOT_FOUND`)
        code: String,
        /// Error message from the server
        message: String,
        /// Request ID from the x-request-id header, when present
        request_id: Option<String>,
    },

    /// Authentication error (missing or rejected credentials)
    #[error("auth: {0}")]
    Auth(String),

    /// Client-side input validation error
    #[error("validation: {0}")]
    Validation(String),

    /// Deserialization error
    #[error("deserialize: {0}")]
    Deserialize(String),

    /// Network error
    #[error("network: {0}")]
    Network(String),

    /// Request timeout
    #[error("timeout")]
    Timeout,

    /// Configuration error
    #[error("config: {0}")]
    Config(String),

    /// Other errors
    #[error("other: {0}")]
    Other(String),
}

/// Error categories for coarse-grained handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// Authentication/authorization errors (401/403)
    Auth,
    /// Validation errors (400)
    Validation,
    /// Resource not found (404)
    NotFound,
    /// Rate limit exceeded (429)
    RateLimit,
    /// Request timeout (408)
    Timeout,
    /// Internal server error (5xx)
    Internal,
    /// Configuration error
    Config,
    /// Other/unknown error
    Other,
}

impl ErrorKind {
    /// Parse error kind from the vendor error code, falling back to the
    /// HTTP status when the code is unrecognized.
    pub fn from_code(code: &str, status: u16) -> Self {
        match code {
            "AUTHENTICATION_FAILED" | "INVALID_API_KEY" => ErrorKind::Auth,
            "INVALID_INPUT_ARGUMENT" | "INVALID_FORMAT" => ErrorKind::Validation,
            "RESOURCE_NOT_FOUND" => ErrorKind::NotFound,
            "RATE_LIMIT_EXCEEDED" => ErrorKind::RateLimit,
            _ => match status {
                401 | 403 => ErrorKind::Auth,
                400 => ErrorKind::Validation,
                404 => ErrorKind::NotFound,
                408 => ErrorKind::Timeout,
                429 => ErrorKind::RateLimit,
                500..=599 => ErrorKind::Internal,
                _ => ErrorKind::Other,
            },
        }
    }
}

impl Error {
    /// Get the error kind for categorization
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http { code, status, .. } => ErrorKind::from_code(code, *status),
            Error::Auth(_) => ErrorKind::Auth,
            Error::Validation(_) => ErrorKind::Validation,
            Error::Timeout => ErrorKind::Timeout,
            Error::Config(_) => ErrorKind::Config,
            _ => ErrorKind::Other,
        }
    }

    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Error::Network(_) => true,
            Error::Timeout => true,
            _ => false,
        }
    }

    /// Get the HTTP status code if this is an HTTP error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get the request ID if available
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Error::Http { request_id, .. } => request_id.as_deref(),
            _ => None,
        }
    }
}

/// Server error response structure
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ErrorResponse {
    pub code: Option<String>,
    pub message: Option<String>,
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() || err.is_request() {
            Error::Network(err.to_string())
        } else if err.is_decode() {
            Error::Deserialize(err.to_string())
        } else {
            Error::Other(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Deserialize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_from_code() {
        assert_eq!(
            ErrorKind::from_code("RESOURCE_NOT_FOUND", 404),
            ErrorKind::NotFound
        );
        assert_eq!(
            ErrorKind::from_code("INVALID_INPUT_ARGUMENT", 400),
            ErrorKind::Validation
        );
        assert_eq!(
            ErrorKind::from_code("AUTHENTICATION_FAILED", 401),
            ErrorKind::Auth
        );
        // Unknown codes fall back to the status
        assert_eq!(ErrorKind::from_code("unknown", 403), ErrorKind::Auth);
        assert_eq!(ErrorKind::from_code("unknown", 502), ErrorKind::Internal);
        assert_eq!(ErrorKind::from_code("unknown", 200), ErrorKind::Other);
    }

    #[test]
    fn test_error_is_retryable() {
        let err = Error::Http {
            status: 429,
            code: "RATE_LIMIT_EXCEEDED".to_string(),
            message: "Too many requests".to_string(),
            request_id: Some("req-123".to_string()),
        };
        assert!(err.is_retryable());

        let err = Error::Http {
            status: 404,
            code: "RESOURCE_NOT_FOUND".to_string(),
            message: "Dictionary not found".to_string(),
            request_id: None,
        };
        assert!(!err.is_retryable());

        let err = Error::Network("connection failed".to_string());
        assert!(err.is_retryable());

        let err = Error::Validation("unknown action".to_string());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_status_code() {
        let err = Error::Http {
            status: 401,
            code: "AUTHENTICATION_FAILED".to_string(),
            message: "Unauthorized".to_string(),
            request_id: None,
        };
        assert_eq!(err.status_code(), Some(401));
        assert_eq!(err.kind(), ErrorKind::Auth);

        let err = Error::Timeout;
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_error_request_id() {
        let err = Error::Http {
            status: 500,
            code: "unknown".to_string(),
            message: "Server error".to_string(),
            request_id: Some("req-456".to_string()),
        };
        assert_eq!(err.request_id(), Some("req-456"));

        let err = Error::Auth("missing client_id".to_string());
        assert_eq!(err.request_id(), None);
    }
}
