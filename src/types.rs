//! Core data types for officer search queries, candidates, and results.

use serde::{Deserialize, Serialize};

/// A single officer search: which position, in which regional chapter,
/// for which year.
///
/// Immutable once constructed; identifies one search and (through its
/// identity fields) one cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// The fiscal year to search, e.g. 2024.
    pub year: i32,
    /// Region or chapter name, e.g. "関東地区協議会".
    pub region_name: String,
    /// Position name, e.g. "会長".
    pub position: String,
    /// Optional free-text keywords appended to the provider query.
    pub keywords: Option<String>,
    /// Candidates scoring strictly below this confidence are dropped.
    pub min_confidence: f64,
    /// Maximum number of ranked candidates to return.
    pub max_results: usize,
}

impl SearchQuery {
    /// Create a query with the default confidence floor (0.6) and
    /// result limit (20).
    pub fn new(year: i32, region_name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            year,
            region_name: region_name.into(),
            position: position.into(),
            keywords: None,
            min_confidence: 0.6,
            max_results: 20,
        }
    }
}

/// One pattern match against a single page, before aggregation.
///
/// Transient: produced by the extractor and folded into a [`Candidate`]
/// within the same scrape pass.
#[derive(Debug, Clone)]
pub struct RawMatch {
    /// Normalized person name.
    pub name: String,
    /// Position captured by the pattern, or the query's position.
    pub position: String,
    /// Year captured by the pattern, or the query's year.
    pub year: i32,
    /// Region captured by the pattern, or the query's region.
    pub region: String,
    /// URL of the page this match came from.
    pub source_url: String,
    /// Surrounding text window for provenance.
    pub context_snippet: String,
}

/// An aggregated person+position+year record built from one or more
/// evidence fragments, keyed by normalized name.
///
/// `confidence_score` and `rank` start at zero and are filled in by the
/// ranking stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Normalized person name (aggregation key).
    pub name: String,
    /// Region the candidate was matched for.
    pub region_name: String,
    /// Organization the position belongs to.
    pub organization_name: String,
    /// Position held.
    pub position: String,
    /// Year the position was held.
    pub year: i32,
    /// Confidence in `[0, 1]`, computed by the scorer.
    pub confidence_score: f64,
    /// 1-based rank in the final ordering; 0 until ranked.
    pub rank: u32,
    /// Source URLs in discovery order. A URL may appear more than once
    /// when a page reinforces the same name repeatedly; corroboration
    /// scoring de-duplicates, but the raw list is kept as-is.
    pub evidence_sources: Vec<String>,
    /// Context excerpts, parallel to `evidence_sources`.
    pub context_snippets: Vec<String>,
    /// Full title text, when a source provides one.
    pub full_title: String,
    /// Whether the record has been manually verified.
    pub verified: bool,
}

impl Candidate {
    /// Create an unscored candidate shell from the first match for a name.
    pub fn from_match(m: &RawMatch) -> Self {
        Self {
            name: m.name.clone(),
            region_name: m.region.clone(),
            organization_name: m.region.clone(),
            position: m.position.clone(),
            year: m.year,
            confidence_score: 0.0,
            rank: 0,
            evidence_sources: Vec::new(),
            context_snippets: Vec::new(),
            full_title: String::new(),
            verified: false,
        }
    }
}

/// Metadata describing one completed search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetadata {
    /// Number of candidates returned after filtering and truncation.
    pub total_results: usize,
    /// Wall-clock duration of the search in milliseconds.
    pub duration_ms: u64,
    /// Distinct source URLs across all candidates, counted before
    /// confidence filtering.
    pub sources_searched: usize,
    /// The ±1-year window actually searched.
    pub target_years: [i32; 3],
    /// Whether this result was served from the cache.
    pub cached: bool,
}

/// A completed, ranked officer search.
///
/// Created once per search, stored in the result cache, and returned
/// read-only thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Unique identifier for this search.
    pub search_id: String,
    /// The query that produced this result.
    pub query: SearchQuery,
    /// Ranked candidates, best first.
    pub results: Vec<Candidate>,
    /// Search statistics.
    pub metadata: SearchMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_constructor_applies_defaults() {
        let query = SearchQuery::new(2024, "関東地区協議会", "会長");
        assert_eq!(query.year, 2024);
        assert_eq!(query.region_name, "関東地区協議会");
        assert_eq!(query.position, "会長");
        assert!(query.keywords.is_none());
        assert!((query.min_confidence - 0.6).abs() < f64::EPSILON);
        assert_eq!(query.max_results, 20);
    }

    #[test]
    fn candidate_from_match_starts_unscored() {
        let m = RawMatch {
            name: "山田太郎".into(),
            position: "会長".into(),
            year: 2024,
            region: "関東地区協議会".into(),
            source_url: "https://example.com".into(),
            context_snippet: "…".into(),
        };
        let candidate = Candidate::from_match(&m);
        assert_eq!(candidate.name, "山田太郎");
        assert_eq!(candidate.organization_name, "関東地区協議会");
        assert_eq!(candidate.confidence_score, 0.0);
        assert_eq!(candidate.rank, 0);
        assert!(candidate.evidence_sources.is_empty());
        assert!(candidate.context_snippets.is_empty());
        assert!(!candidate.verified);
    }

    #[test]
    fn query_serde_round_trip() {
        let query = SearchQuery {
            keywords: Some("新年度".into()),
            ..SearchQuery::new(2023, "東北地区協議会", "副会長")
        };
        let json = serde_json::to_string(&query).expect("serialize");
        let decoded: SearchQuery = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.year, 2023);
        assert_eq!(decoded.keywords.as_deref(), Some("新年度"));
    }

    #[test]
    fn search_result_serde_round_trip() {
        let result = SearchResult {
            search_id: "abc".into(),
            query: SearchQuery::new(2024, "関東地区協議会", "会長"),
            results: vec![],
            metadata: SearchMetadata {
                total_results: 0,
                duration_ms: 12,
                sources_searched: 0,
                target_years: [2023, 2024, 2025],
                cached: false,
            },
        };
        let json = serde_json::to_string(&result).expect("serialize");
        let decoded: SearchResult = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.search_id, "abc");
        assert_eq!(decoded.metadata.target_years, [2023, 2024, 2025]);
    }
}
