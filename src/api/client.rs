//! HTTP client for the remote directory service.
//!
//! This module provides the `DirectoryClient` struct for fetching pages of
//! user records and single-user detail from the directory listing endpoint.

use anyhow::{Context, Result};
use reqwest::Client;
use tracing::debug;

use crate::models::{UserDetail, UserPage};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Directory client for the remote listing endpoint.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new directory client against the given base URL
    /// (e.g. `https://dummyjson.com`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Fetch one page of users at the given offset.
    ///
    /// A successful response with zero users is the designed end-of-data
    /// signal and is returned as an ordinary `UserPage`, never an error.
    pub async fn fetch_page(&self, skip: usize, limit: usize) -> Result<UserPage> {
        let url = format!("{}/users?limit={}&skip={}", self.base_url, limit, skip);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        let page: UserPage = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        debug!(skip, limit, count = page.len(), "Page fetched");
        Ok(page)
    }

    /// Fetch the full record for a single user. Stateless one-shot request
    /// used by the detail view; not part of the pagination flow.
    pub async fn fetch_user(&self, id: i64) -> Result<UserDetail> {
        let url = format!("{}/users/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;

        let detail: UserDetail = response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))?;

        debug!(id, "User detail fetched");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_base_url() {
        let client = DirectoryClient::new("https://dummyjson.com").expect("client builds");
        assert_eq!(client.base_url, "https://dummyjson.com");
    }

    #[tokio::test]
    async fn test_fetch_page_against_unreachable_host_is_an_error() {
        // Port 0 is never routable; the transport error must surface as Err,
        // not as an empty page (empty pages mean end-of-data).
        let client = DirectoryClient::new("http://127.0.0.1:0").expect("client builds");
        let result = client.fetch_page(0, 10).await;
        assert!(result.is_err());
    }
}
