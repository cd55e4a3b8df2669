//! # jc-officer-search
//!
//! Web discovery of officer holders in Junior Chamber (青年会議所)
//! regional chapters, with confidence-ranked candidates.
//!
//! This crate answers questions like "who chaired the 関東地区協議会 in
//! 2024?" by scraping public search results directly, with no API keys
//! and no external services. It builds a Japanese search query from the year,
//! region, and position, fetches each result page politely, extracts
//! name/position mentions with a fixed pattern set, and aggregates them
//! into candidates scored by source trust, record completeness, and
//! cross-source corroboration.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo HTML results using CSS selectors, then fetches
//!   each hit sequentially with a fixed inter-request delay
//! - Normalizes person names (whitespace removal, old-form kanji
//!   folding) so variant spellings aggregate into one candidate
//! - Weighted confidence score: 0.5 source trust, 0.3 completeness,
//!   0.2 corroboration across distinct URLs
//! - Deterministic in-memory LRU cache with configurable TTL
//! - User-Agent rotation for reliability
//! - Graceful degradation: failed pages are skipped, a failed provider
//!   lookup yields an empty result rather than an error
//!
//! ## Usage
//!
//! ```no_run
//! # async fn example() -> jc_officer_search::Result<()> {
//! use jc_officer_search::{OfficerSearch, SearchConfig, SearchQuery};
//!
//! let service = OfficerSearch::with_defaults(SearchConfig::default())?;
//! let result = service
//!     .search(SearchQuery::new(2024, "関東地区協議会", "会長"))
//!     .await?;
//! for candidate in &result.results {
//!     println!("#{} {} ({:.2})", candidate.rank, candidate.name, candidate.confidence_score);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod http;
pub mod normalize;
pub mod orchestrator;
pub mod provider;
pub mod service;
pub mod types;
pub mod vocab;

pub use cache::ResultCache;
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use fetcher::{HttpFetcher, PageFetch};
pub use provider::{DuckDuckGoProvider, UrlProvider};
pub use service::OfficerSearch;
pub use types::{Candidate, SearchMetadata, SearchQuery, SearchResult};
pub use vocab::OrgLevel;
