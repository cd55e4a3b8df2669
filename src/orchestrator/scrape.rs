//! Scrape orchestration: query → URLs → fetch → extract → aggregate.
//!
//! Drives one search end to end, producing unscored candidates. Pages
//! are fetched sequentially in provider order (the fetcher enforces the
//! inter-request delay); individual failures skip the page, a provider
//! failure yields zero URLs, and either way the search completes with
//! whatever evidence was found.

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::content;
use crate::extract;
use crate::fetcher::PageFetch;
use crate::provider::UrlProvider;
use crate::types::{Candidate, SearchQuery};

use super::query::build_search_query;

/// Run the scrape pipeline for a query, returning deduplicated but
/// unscored candidates (confidence 0, rank 0) in no particular order.
///
/// Matches are aggregated by normalized name: the first occurrence
/// initializes the candidate, and every occurrence (including repeats
/// from the same page) appends its source URL and context snippet to
/// the evidence lists.
pub async fn scrape<P, F>(
    provider: &P,
    fetcher: &F,
    query: &SearchQuery,
    config: &SearchConfig,
) -> Vec<Candidate>
where
    P: UrlProvider,
    F: PageFetch,
{
    let provider_query = build_search_query(query);
    let urls = match provider.find_urls(&provider_query, config.max_pages).await {
        Ok(urls) => urls,
        Err(err) => {
            tracing::warn!(error = %err, "provider lookup failed; continuing with no URLs");
            Vec::new()
        }
    };

    let total = urls.len().min(config.max_pages);
    let mut by_name: HashMap<String, Candidate> = HashMap::new();

    for (index, url) in urls.iter().take(config.max_pages).enumerate() {
        tracing::debug!(page = index + 1, total, url, "scraping page");

        let Some(html) = fetcher.fetch(url).await else {
            continue;
        };
        let text = content::html_to_text(&html);
        if text.is_empty() {
            continue;
        }

        for m in extract::extract_matches(&text, query, url) {
            let candidate = by_name
                .entry(m.name.clone())
                .or_insert_with(|| Candidate::from_match(&m));
            candidate.evidence_sources.push(m.source_url);
            candidate.context_snippets.push(m.context_snippet);
        }
    }

    tracing::debug!(candidates = by_name.len(), "scrape complete");
    by_name.into_values().collect()
}
