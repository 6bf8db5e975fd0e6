//! Enrolled device operations

use reqwest::Method;

use crate::{
    client::Client,
    errors::Result,
    models::{Device, ListDevicesOpts, RemoveDevicesRequest, RemoveDevicesResponse},
    util::encode_query,
};

/// Interface for enrolled device operations
///
/// Obtained from [`Client::devices`]. Stateless; every call goes through
/// the parent client's session.
#[derive(Debug, Clone, Copy)]
pub struct Devices<'a> {
    client: &'a Client,
}

impl<'a> Devices<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List enrolled devices
    ///
    /// Returns the devices in the order the server reports them. Filters
    /// and paging parameters are passed through as query parameters; no
    /// pagination is performed client-side.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use skyfort_sdk::{Client, ListDevicesOpts, OsType};
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let opts = ListDevicesOpts {
    ///     os_type: Some(OsType::Windows),
    ///     page_size: Some(50),
    ///     ..Default::default()
    /// };
    /// for device in client.devices().list(opts).await? {
    ///     println!("{} ({})", device.udid, device.user);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list(&self, opts: ListDevicesOpts) -> Result<Vec<Device>> {
        let mut url = self.client.endpoints().list_devices();

        let mut query_parts = Vec::new();
        if let Some(username) = &opts.username {
            query_parts.push(format!("username={}", encode_query(username)));
        }
        if let Some(os_type) = opts.os_type {
            query_parts.push(format!("osType={}", os_type.as_u8()));
        }
        if let Some(page) = opts.page {
            query_parts.push(format!("page={}", page));
        }
        if let Some(page_size) = opts.page_size {
            query_parts.push(format!("pageSize={}", page_size));
        }

        if !query_parts.is_empty() {
            url.push('?');
            url.push_str(&query_parts.join("&"));
        }

        let request = self.client.build_request(Method::GET, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Remove enrolled devices
    ///
    /// The company ID from the resolved credentials is attached to the
    /// request body when present.
    pub async fn remove(&self, req: RemoveDevicesRequest) -> Result<RemoveDevicesResponse> {
        let mut body = serde_json::json!({ "udids": req.udids });
        if let Some(username) = req.username {
            body["userName"] = serde_json::json!(username);
        }
        if let Some(os_type) = req.os_type {
            body["osType"] = serde_json::json!(os_type.as_u8());
        }
        if let Some(company_id) = &self.client.config.credentials.company_id {
            body["companyId"] = serde_json::json!(company_id);
        }

        let url = self.client.endpoints().remove_devices();
        let request = self.client.build_request(Method::POST, &url)?.json(&body);
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }
}
