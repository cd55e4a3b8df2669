//! Error types for the officer-search crate.
//!
//! Expected runtime failures (a page that times out, a provider lookup
//! that returns nothing, malformed HTML) are absorbed inside the pipeline
//! and never surface here. [`SearchError`] covers configuration mistakes,
//! HTTP client construction, and parse-infrastructure failures only.

/// Errors that can occur during officer search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The search provider could not be queried at all.
    #[error("provider error: {0}")]
    Provider(String),

    /// An HTTP client could not be constructed or a request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Failed to parse a provider response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid search configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for officer-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
