use reqwest::StatusCode;

use crate::{CheckId, requests::ChecksQuery};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_post(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self.empty_get("health_check").await?;
        ok_empty(response).await
    }

    /// Full URL for the check listing: the fixed base path plus the
    /// query string, with no `?` when every option is unset.
    pub fn checks_url(&self, query: &ChecksQuery) -> String {
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            self.format_url("vhc")
        } else {
            format!("{}?{query_string}", self.format_url("vhc"))
        }
    }

    /// Fetch one page of check reports matching the query options.
    ///
    /// Exactly one GET per call. The body is decoded into whatever the
    /// caller asks for; this layer enforces no shape of its own, and
    /// transport, status, and decode failures propagate unchanged.
    pub async fn list_checks<T: serde::de::DeserializeOwned>(
        &self,
        query: &ChecksQuery,
    ) -> Result<T, ClientError> {
        let request = self.inner_client.get(self.checks_url(query));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        let response = request.send().await?;
        ok_body(response).await
    }

    /// Mark a report as opened by the current user.
    pub async fn mark_viewed(
        &self,
        check_id: &CheckId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_post(&format!("vhc/{check_id}/viewed")).await?;
        ok_empty(response).await
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
