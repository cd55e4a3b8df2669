//! Pattern-based extraction of name/position/year/region tuples.
//!
//! A fixed, ordered list of structural patterns is applied to
//! whitespace-collapsed page text. The patterns cover the layouts that
//! dominate officer rosters in practice: "year region position name"
//! lines, committee listings, secretariat titles, and "name (position)"
//! forms. Captures a pattern does not provide (year, region, position)
//! default to the query's own values.
//!
//! Within a single page, the first pattern to match a name wins: later
//! patterns do not re-emit a name already seen on that page.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::normalize::normalize_name;
use crate::types::{RawMatch, SearchQuery};

/// Characters of context captured on each side of a match.
const CONTEXT_CHARS: usize = 50;

/// Organization wording that disqualifies a captured name.
///
/// The name-first patterns would otherwise capture the organization
/// standing to the left of a title ("関東地区協議会 会長" reads as
/// name=関東地区協議会, position=会長).
const ORG_TERMS: &[&str] = &["協議会", "委員会", "青年会議所", "ブロック", "事務局", "年度"];

/// Ordered extraction patterns, most structured first.
static EXTRACTION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 2024年度 関東地区協議会 会長 山田太郎
        r"(?i)(?P<year>\d{4})年度?\s*(?P<region>[^　\s]+(?:地区協議会|ブロック|JC|青年会議所))\s*(?P<position>会長|理事長|会頭|副会長|副理事長|専務理事|常務理事|運営専務|理事|監事|顧問)\s*(?P<name>[一-龯ぁ-んァ-ヶー\w]{2,8})",
        // 広報委員会 委員長 佐藤花子
        r"(?i)(?P<committee>[^　\s]*委員会)\s*(?P<position>委員長|副委員長|委員)\s*(?P<name>[一-龯ぁ-んァ-ヶー\w]{2,8})",
        // 事務局長 鈴木次郎
        r"(?i)(?P<position>事務局長|財政局長|総括幹事|会計幹事|庶務幹事|企画幹事|幹事|副幹事)\s*(?P<name>[一-龯ぁ-んァ-ヶー\w]{2,8})",
        // 山田太郎 会長
        r"(?i)(?P<name>[一-龯ぁ-んァ-ヶー\w]{2,8})\s*(?P<position>会長|理事長|委員長|事務局長)",
        // 山田太郎（会長）
        r"(?i)(?P<name>[一-龯ぁ-んァ-ヶー\w]{2,8})\s*[（(]\s*(?P<position>会長|理事長|委員長)\s*[）)]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("extraction pattern compiles"))
    .collect()
});

/// Apply all extraction patterns to one page's text.
///
/// `text` must already be whitespace-collapsed (see
/// [`crate::content::html_to_text`]). Matches are filtered:
///
/// - the name must normalize to 2–8 characters
/// - a captured year may differ from the query year by at most 1
/// - a name already emitted by an earlier pattern on this page is skipped
///
/// Each surviving match carries a trimmed context window of
/// [`CONTEXT_CHARS`] characters on each side for provenance.
pub fn extract_matches(text: &str, query: &SearchQuery, source_url: &str) -> Vec<RawMatch> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut found_names: HashSet<String> = HashSet::new();

    for pattern in EXTRACTION_PATTERNS.iter() {
        for caps in pattern.captures_iter(text) {
            let Some(raw_name) = caps.name("name") else {
                continue;
            };
            let name = normalize_name(raw_name.as_str());
            let name_len = name.chars().count();
            if !(2..=8).contains(&name_len) {
                continue;
            }
            if ORG_TERMS.iter().any(|term| name.contains(term)) {
                continue;
            }
            if found_names.contains(&name) {
                continue;
            }

            let year = caps
                .name("year")
                .and_then(|m| m.as_str().parse::<i32>().ok())
                .unwrap_or(query.year);
            if (year - query.year).abs() > 1 {
                continue;
            }

            let position = caps
                .name("position")
                .map_or_else(|| query.position.clone(), |m| m.as_str().to_owned());
            let region = caps
                .name("region")
                .map_or_else(|| query.region_name.clone(), |m| m.as_str().to_owned());

            let whole = caps.get(0).map_or(raw_name, |m| m);
            let context = context_window(text, whole.start(), whole.end());

            found_names.insert(name.clone());
            matches.push(RawMatch {
                name,
                position,
                year,
                region,
                source_url: source_url.to_owned(),
                context_snippet: context,
            });
        }
    }

    matches
}

/// Take a window of [`CONTEXT_CHARS`] characters either side of a byte
/// range, honouring char boundaries, and trim surrounding whitespace.
fn context_window(text: &str, start: usize, end: usize) -> String {
    let window_start = text[..start]
        .char_indices()
        .rev()
        .map(|(i, _)| i)
        .nth(CONTEXT_CHARS - 1)
        .unwrap_or(0);
    let window_end = text[end..]
        .char_indices()
        .nth(CONTEXT_CHARS)
        .map_or(text.len(), |(i, _)| end + i);
    text[window_start..window_end].trim().to_owned()
}
