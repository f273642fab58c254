use crate::{requests, responses};
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the image search service.
pub struct APIClient {
    pub address: String,
    pub api_key: SecretString,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn get(&self, path: &str, query: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .get(self.format_url(path))
            .query(query)
            .query(&[("key", self.api_key.expose_secret())])
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the image search API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Fetch one page of results for `term`. Pages are 1-based and always
    /// [`crate::PAGE_SIZE`] long, except possibly the last.
    pub async fn search_images(
        &self,
        term: &str,
        page: u32,
    ) -> Result<responses::SearchResults, ClientError> {
        let details = requests::ImageSearch::new(term, page);
        let response = self.get("", &details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
