//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] controls page limits, request pacing, timeouts, and
//! result caching. The defaults match polite-scraping practice for the
//! small official sites this crate targets: one request at a time, a
//! fixed 1.5 second gap between requests, and a 10 second per-page
//! timeout.

use crate::error::SearchError;

/// Configuration for an officer search.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of provider URLs to fetch per search.
    pub max_pages: usize,
    /// Fixed delay in milliseconds before each page request.
    pub access_interval_ms: u64,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum number of cached search results.
    pub cache_capacity: usize,
    /// How long a cached result stays valid, in minutes.
    pub cache_ttl_minutes: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_pages: 20,
            access_interval_ms: 1500,
            timeout_seconds: 10,
            cache_capacity: 100,
            cache_ttl_minutes: 60,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `max_pages` must be greater than 0
    /// - `timeout_seconds` must be greater than 0
    /// - `cache_capacity` must be greater than 0
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_pages == 0 {
            return Err(SearchError::Config(
                "max_pages must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.cache_capacity == 0 {
            return Err(SearchError::Config(
                "cache_capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
