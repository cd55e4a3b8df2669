//! Rate-limited page fetching.
//!
//! [`PageFetch`] is the seam between the orchestrator and the network:
//! the HTTP implementation paces requests with a fixed pre-request
//! delay, and tests substitute a synthetic corpus. Fetch failures are
//! absorbed: a timeout, a non-200 status, or a transport error all
//! yield `None` and a warning, never a pipeline-stopping error.

use std::future::Future;
use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::http;

/// A source of page text for URLs.
///
/// Implementations must be `Send + Sync`; the orchestrator holds one
/// across await points.
pub trait PageFetch: Send + Sync {
    /// Fetch the page at `url`, returning its body text, or `None` on
    /// any failure.
    fn fetch(&self, url: &str) -> impl Future<Output = Option<String>> + Send;
}

/// HTTP page fetcher with fixed-interval throttling.
///
/// Every call sleeps for the configured access interval before issuing
/// the request, so a search over n pages takes at least
/// `n × access_interval` of wall-clock time. Requests run one at a
/// time; there is no adaptive pacing.
pub struct HttpFetcher {
    client: reqwest::Client,
    interval: Duration,
}

impl HttpFetcher {
    /// Build a fetcher from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::SearchError::Http`] if the HTTP client
    /// cannot be constructed.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config)?,
            interval: Duration::from_millis(config.access_interval_ms),
        })
    }
}

impl PageFetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        tokio::time::sleep(self.interval).await;

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(url, error = %err, "page fetch failed");
                return None;
            }
        };

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(url, status = %response.status(), "page fetch returned non-200");
            return None;
        }

        match response.text().await {
            Ok(body) => {
                tracing::trace!(url, bytes = body.len(), "page fetched");
                Some(body)
            }
            Err(err) => {
                tracing::warn!(url, error = %err, "page body read failed");
                None
            }
        }
    }
}
