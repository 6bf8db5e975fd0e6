//! DLP dictionary operations

use reqwest::Method;
use tracing::debug;

use crate::{
    client::Client,
    errors::Result,
    models::{DictionaryUpdate, DlpDictionary, NewDictionary},
};

/// Interface for DLP dictionary operations
///
/// Obtained from [`Client::dlp`].
#[derive(Debug, Clone, Copy)]
pub struct Dlp<'a> {
    client: &'a Client,
}

impl<'a> Dlp<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List all DLP dictionaries
    ///
    /// Returns the dictionaries in the order the server reports them.
    pub async fn list_dicts(&self) -> Result<Vec<DlpDictionary>> {
        let url = self.client.endpoints().dlp_dicts();
        let request = self.client.build_request(Method::GET, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Get a DLP dictionary by ID
    pub async fn get_dict(&self, dict_id: i64) -> Result<DlpDictionary> {
        let url = self.client.endpoints().dlp_dict(dict_id);
        let request = self.client.build_request(Method::GET, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Create a custom DLP dictionary
    pub async fn add_dict(&self, new: NewDictionary) -> Result<DlpDictionary> {
        let body = new.into_body()?;

        let url = self.client.endpoints().dlp_dicts();
        let request = self.client.build_request(Method::POST, &url)?.json(&body);
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Update a DLP dictionary
    ///
    /// The API requires the complete object on PUT, so the current
    /// dictionary is fetched first and the caller-supplied fields are
    /// merged over it client-side. Shorthand phrase/pattern pairs are
    /// expanded to their full wire shape (see
    /// [`expand_phrases`](crate::expand_phrases)).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use skyfort_sdk::{Client, DictionaryUpdate};
    /// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
    /// let updated = client
    ///     .dlp()
    ///     .update_dict(1, DictionaryUpdate::new()
    ///         .name("card-numbers")
    ///         .phrase("all", "primary account number"))
    ///     .await?;
    /// assert_eq!(updated.name, "card-numbers");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn update_dict(
        &self,
        dict_id: i64,
        update: DictionaryUpdate,
    ) -> Result<DlpDictionary> {
        let mut dict = self.get_dict(dict_id).await?;
        update.apply_to(&mut dict)?;
        debug!("updating dlp dictionary {}", dict_id);

        let url = self.client.endpoints().dlp_dict(dict_id);
        let request = self.client.build_request(Method::PUT, &url)?.json(&dict);
        let response = self.client.execute_with_retry(request).await?;

        self.client.parse_json_response(response).await
    }

    /// Delete a DLP dictionary
    ///
    /// Returns the literal HTTP status code (204 on success) rather than
    /// a decoded body.
    pub async fn delete_dict(&self, dict_id: i64) -> Result<u16> {
        let url = self.client.endpoints().dlp_dict(dict_id);
        let request = self.client.build_request(Method::DELETE, &url)?;
        let response = self.client.execute_with_retry(request).await?;

        Ok(response.status().as_u16())
    }
}
