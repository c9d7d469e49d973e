//! Shared HTTP client for feed fetching and article retrieval.

use std::time::Duration;

use reqwest::Client;

use crate::error::NewsError;

/// HTTP client with configured timeouts and `User-Agent`, built once and
/// shared across the aggregation pipeline.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Creates a `FeedClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`NewsError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, NewsError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches a URL and returns the response body as text.
    ///
    /// # Errors
    ///
    /// - [`NewsError::Http`] — network failure or timeout.
    /// - [`NewsError::UnexpectedStatus`] — any non-2xx status.
    pub async fn fetch_text(&self, url: &str) -> Result<String, NewsError> {
        let response = self
            .client
            .get(url)
            .header(
                reqwest::header::ACCEPT,
                "application/rss+xml,application/xml,text/html;q=0.9,*/*;q=0.8",
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NewsError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
