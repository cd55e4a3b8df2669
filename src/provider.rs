//! External search provider: query string in, ordered URLs out.
//!
//! The provider is an opaque collaborator: the pipeline has no control
//! over its ranking or relevance, it only consumes the URL sequence.
//! The bundled implementation scrapes DuckDuckGo's HTML-only endpoint,
//! which requires no JavaScript, no API key, and tolerates automated
//! requests.

use std::future::Future;

use scraper::{Html, Selector};
use url::Url;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::http;

/// An external web-search collaborator.
pub trait UrlProvider: Send + Sync {
    /// Look up `query` and return up to `limit` candidate URLs in
    /// provider order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] when the provider cannot be reached or
    /// its response cannot be parsed. The orchestrator treats any
    /// provider error as "zero URLs found".
    fn find_urls(&self, query: &str, limit: usize)
        -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// DuckDuckGo HTML-endpoint provider.
///
/// Posts the query to `https://html.duckduckgo.com/html/` with the
/// Japan region setting and collects result links, unwrapping
/// DuckDuckGo's redirect wrapper to recover the target URLs.
pub struct DuckDuckGoProvider {
    client: reqwest::Client,
}

impl DuckDuckGoProvider {
    /// Build a provider from the search configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &SearchConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config)?,
        })
    }

    /// Extract the actual URL from DuckDuckGo's redirect wrapper.
    ///
    /// Result hrefs look like
    /// `//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com&rut=…`;
    /// the `uddg` query parameter carries the destination.
    fn extract_url(href: &str) -> Option<String> {
        let full_href = if href.starts_with("//") {
            format!("https:{href}")
        } else {
            href.to_owned()
        };

        let parsed = Url::parse(&full_href).ok()?;

        if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
            parsed
                .query_pairs()
                .find(|(key, _)| key == "uddg")
                .map(|(_, value)| value.into_owned())
        } else {
            Some(full_href)
        }
    }
}

impl UrlProvider for DuckDuckGoProvider {
    async fn find_urls(&self, query: &str, limit: usize) -> Result<Vec<String>> {
        tracing::trace!(query, "provider lookup");

        let params = [("q", query), ("kl", "jp-jp")];
        let response = self
            .client
            .post("https://html.duckduckgo.com/html/")
            .form(&params)
            .header("Accept-Language", "ja,en-US;q=0.8,en;q=0.6")
            .send()
            .await
            .map_err(|e| SearchError::Provider(format!("request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Provider(format!("HTTP error: {e}")))?;

        let html = response
            .text()
            .await
            .map_err(|e| SearchError::Provider(format!("response read failed: {e}")))?;

        tracing::trace!(bytes = html.len(), "provider response received");

        parse_result_urls(&html, limit)
    }
}

/// Parse provider result HTML into an ordered URL list.
///
/// Extracted as a separate function for testability with mock HTML.
pub(crate) fn parse_result_urls(html: &str, limit: usize) -> Result<Vec<String>> {
    let document = Html::parse_document(html);

    let link_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("invalid link selector: {e:?}")))?;

    let mut urls = Vec::new();
    for element in document.select(&link_sel) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(url) = DuckDuckGoProvider::extract_url(href) else {
            continue;
        };
        urls.push(url);
        if urls.len() >= limit {
            break;
        }
    }

    Ok(urls)
}
