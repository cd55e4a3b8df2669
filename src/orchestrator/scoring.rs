//! Confidence scoring: source trust, completeness, corroboration.
//!
//! Each candidate gets a deterministic score in `[0, 1]`:
//!
//! ```text
//! confidence = min(1.0, 0.5 * trust + 0.3 * completeness + 0.2 * corroboration)
//! ```
//!
//! - **Trust** is the maximum tier across all evidence URLs, and the
//!   maximum over all rules that match a single URL (a government page
//!   that also looks like a chapter site scores as the chapter site).
//! - **Completeness** rewards a plausible year, a region, and a position.
//! - **Corroboration** counts *distinct* evidence URLs; duplicates in
//!   the raw evidence list are collapsed here (and only here).

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::types::Candidate;

/// Weight of the source-trust factor.
const TRUST_WEIGHT: f64 = 0.5;
/// Weight of the field-completeness factor.
const COMPLETENESS_WEIGHT: f64 = 0.3;
/// Weight of the corroboration factor.
const CORROBORATION_WEIGHT: f64 = 0.2;

/// Host patterns identifying a regional chapter's official site.
static CHAPTER_HOST_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"jc\.or\.jp",
        r"-jc\.(org|com|jp|net)",
        r"^jc-[^.]+\.(org|com|jp)",
        r"jci.*\.(org|com|jp)",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("host pattern compiles"))
    .collect()
});

/// Alias terms identifying a chapter site anywhere in the URL.
const CHAPTER_ALIAS_TERMS: &[&str] = &["jaycee", "junior.chamber", "青年会議所"];

/// Compute the confidence score for a candidate.
///
/// Pure function of the candidate's current fields; clamped to 1.0.
pub fn confidence(candidate: &Candidate) -> f64 {
    let score = TRUST_WEIGHT * source_trust(&candidate.evidence_sources)
        + COMPLETENESS_WEIGHT * completeness(candidate)
        + CORROBORATION_WEIGHT * corroboration(&candidate.evidence_sources);
    score.min(1.0)
}

/// Highest trust tier across all evidence URLs.
///
/// A candidate with no evidence scores 0.0 on this factor.
pub fn source_trust(sources: &[String]) -> f64 {
    sources
        .iter()
        .map(|source| url_trust(source))
        .fold(0.0, f64::max)
}

/// Trust tier for a single URL: the maximum over all matching rules.
fn url_trust(url: &str) -> f64 {
    let lower = url.to_lowercase();
    let mut tier: f64 = 0.3;
    if lower.contains("jaycee.or.jp") {
        // National organization's own domain.
        tier = tier.max(1.0);
    }
    if is_chapter_site(&lower) {
        tier = tier.max(0.8);
    }
    if lower.contains(".go.jp") || lower.contains(".lg.jp") {
        tier = tier.max(0.7);
    }
    if lower.contains("wikipedia") {
        tier = tier.max(0.5);
    }
    if lower.contains("facebook.com") || lower.contains("twitter.com") {
        tier = tier.max(0.4);
    }
    tier
}

/// Whether a (lowercased) URL looks like a chapter's official site.
///
/// Branded host patterns are matched against the host; alias terms are
/// matched anywhere in the URL, since chapter names often appear in
/// paths on shared hosting.
fn is_chapter_site(lower_url: &str) -> bool {
    if CHAPTER_ALIAS_TERMS.iter().any(|term| lower_url.contains(term)) {
        return true;
    }
    let host = extract_host(lower_url);
    !host.is_empty()
        && CHAPTER_HOST_PATTERNS
            .iter()
            .any(|pattern| pattern.is_match(&host))
}

/// Host portion of a URL, or empty string when unparseable.
fn extract_host(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| parsed.host_str().map(str::to_owned))
        .unwrap_or_default()
}

/// Field-completeness factor.
///
/// 0.33 for a year inside `[1990, 2030]`, 0.33 for a non-empty region,
/// 0.34 for a non-empty position. The uneven split makes the three sum
/// to exactly 1.0.
pub fn completeness(candidate: &Candidate) -> f64 {
    let mut score = 0.0;
    if (1990..=2030).contains(&candidate.year) {
        score += 0.33;
    }
    if !candidate.region_name.is_empty() {
        score += 0.33;
    }
    if !candidate.position.is_empty() {
        score += 0.34;
    }
    score
}

/// Corroboration factor from the count of distinct evidence URLs.
pub fn corroboration(sources: &[String]) -> f64 {
    let distinct: HashSet<&str> = sources.iter().map(String::as_str).collect();
    match distinct.len() {
        0 => 0.0,
        1 => 0.3,
        2 => 0.6,
        3 | 4 => 0.8,
        _ => 1.0,
    }
}
