//! Skyfort SDK for Rust
//!
//! A client library for the Skyfort cloud security management API,
//! covering enrolled-device management, device secrets (one-time and
//! uninstall passwords) and DLP dictionaries.
//!
//! # Features
//!
//! - Async/await support with tokio runtime
//! - Automatic session bootstrap: client credentials are exchanged for a
//!   session token which is attached to every subsequent request
//! - Single re-authentication and replay when the session token expires
//! - Transient failures (429/5xx/network) retried with exponential backoff
//! - Typed request and response models
//! - Secret values handled through [`SecretString`]
//!
//! # Example
//!
//! ```no_run
//! use skyfort_sdk::{ClientBuilder, Credentials, ListDevicesOpts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ClientBuilder::new("https://api.skyfort.io/papi")
//!         .credentials(Credentials::new("client-id", "client-secret"))
//!         .build()?;
//!
//!     let devices = client.devices().list(ListDevicesOpts::default()).await?;
//!     println!("{} enrolled devices", devices.len());
//!
//!     Ok(())
//! }
//! ```

#![deny(missing_docs, missing_debug_implementations, unsafe_code)]

mod auth;
mod client;
mod config;
mod devices;
mod dlp;
mod endpoints;
mod errors;
mod models;
mod secrets;
mod util;

pub use auth::{Credentials, ENV_CLIENT_ID, ENV_CLIENT_SECRET, ENV_COMPANY_ID};
pub use client::Client;
pub use config::{ClientBuilder, ClientConfig};
pub use devices::Devices;
pub use dlp::Dlp;
pub use errors::{Error, ErrorKind, Result};
pub use models::*;
pub use secrets::Secrets;

// Re-export commonly used types
pub use secrecy::SecretString;

/// SDK version, matches Cargo.toml version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the Skyfort portal API
pub const DEFAULT_BASE_URL: &str = "https://api.skyfort.io/papi";

/// Default timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Default number of retries for transient failures
pub const DEFAULT_RETRIES: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
