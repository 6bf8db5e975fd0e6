//! Device secret operations (one-time and agent passwords)

use reqwest::Method;

use crate::{
    client::Client,
    errors::Result,
    models::{DeviceOtp, DevicePasswords, OsType},
    util::encode_query,
};

/// Interface for device secret operations
///
/// Obtained from [`Client::secrets`]. All values come back wrapped in
/// [`SecretString`](crate::SecretString) so they stay out of logs.
#[derive(Debug, Clone, Copy)]
pub struct Secrets<'a> {
    client: &'a Client,
}

impl<'a> Secrets<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Get the one-time password for a device
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use skyfort_sdk::Client;
    /// # use secrecy::ExposeSecret;
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let otp = client.secrets().get_otp("device-udid").await?;
    /// println!("otp: {}", otp.otp.expose_secret());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_otp(&self, udid: &str) -> Result<DeviceOtp> {
        let url = format!(
            "{}?udid={}",
            self.client.endpoints().get_otp(),
            encode_query(udid)
        );

        let request = self.client.build_request(Method::GET, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Get the agent passwords for a user's device
    pub async fn get_passwords(&self, username: &str, os_type: OsType) -> Result<DevicePasswords> {
        let url = format!(
            "{}?username={}&osType={}",
            self.client.endpoints().get_passwords(),
            encode_query(username),
            os_type.as_u8()
        );

        let request = self.client.build_request(Method::GET, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }
}
