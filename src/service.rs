//! The top-level search service: cache lookup, scrape, rank, cache fill.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;
use uuid::Uuid;

use crate::cache::ResultCache;
use crate::config::SearchConfig;
use crate::error::Result;
use crate::fetcher::{HttpFetcher, PageFetch};
use crate::orchestrator::{ranking, scrape};
use crate::provider::{DuckDuckGoProvider, UrlProvider};
use crate::types::{SearchMetadata, SearchQuery, SearchResult};

/// Officer search service, generic over the URL provider and page
/// fetcher so tests can substitute in-memory implementations.
///
/// Cheap to share behind an `Arc`; the result cache is the only mutable
/// state and is guarded by an async mutex.
pub struct OfficerSearch<P, F> {
    config: SearchConfig,
    provider: P,
    fetcher: F,
    cache: Mutex<ResultCache>,
}

impl OfficerSearch<DuckDuckGoProvider, HttpFetcher> {
    /// Build a service with the production provider and fetcher.
    pub fn with_defaults(config: SearchConfig) -> Result<Self> {
        let provider = DuckDuckGoProvider::new(&config)?;
        let fetcher = HttpFetcher::new(&config)?;
        Self::new(config, provider, fetcher)
    }
}

impl<P, F> OfficerSearch<P, F>
where
    P: UrlProvider,
    F: PageFetch,
{
    /// Build a service from a validated configuration and explicit
    /// provider and fetcher implementations.
    pub fn new(config: SearchConfig, provider: P, fetcher: F) -> Result<Self> {
        config.validate()?;
        let cache = ResultCache::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_minutes * 60),
        );
        Ok(Self {
            config,
            provider,
            fetcher,
            cache: Mutex::new(cache),
        })
    }

    /// Run one officer search.
    ///
    /// A cache hit returns the stored result with `metadata.cached` set;
    /// otherwise the full scrape pipeline runs and the fresh result is
    /// stored before being returned.
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResult> {
        let started = Instant::now();

        if let Some(mut hit) = self.cache.lock().await.get(&query) {
            tracing::debug!(
                year = query.year,
                region = %query.region_name,
                position = %query.position,
                "serving search from cache"
            );
            hit.metadata.cached = true;
            return Ok(hit);
        }

        tracing::info!(
            year = query.year,
            region = %query.region_name,
            position = %query.position,
            "starting officer search"
        );

        let candidates = scrape::scrape(&self.provider, &self.fetcher, &query, &self.config).await;
        let sources_searched = distinct_sources(&candidates);
        let ranked = ranking::rank_candidates(candidates, &query);

        let result = SearchResult {
            search_id: Uuid::new_v4().to_string(),
            metadata: SearchMetadata {
                total_results: ranked.len(),
                duration_ms: started.elapsed().as_millis() as u64,
                sources_searched,
                target_years: [query.year - 1, query.year, query.year + 1],
                cached: false,
            },
            results: ranked,
            query,
        };

        tracing::info!(
            results = result.metadata.total_results,
            sources = result.metadata.sources_searched,
            duration_ms = result.metadata.duration_ms,
            "officer search complete"
        );

        self.cache.lock().await.set(&result.query, result.clone());
        Ok(result)
    }

    /// Number of results currently cached.
    pub async fn cache_size(&self) -> usize {
        self.cache.lock().await.size()
    }

    /// Drop all cached results.
    pub async fn clear_cache(&self) {
        self.cache.lock().await.clear();
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Count distinct source URLs across all candidates, before the
/// confidence filter removes any of them.
fn distinct_sources(candidates: &[crate::types::Candidate]) -> usize {
    candidates
        .iter()
        .flat_map(|c| c.evidence_sources.iter())
        .collect::<HashSet<_>>()
        .len()
}
