//! Provider query-string construction.
//!
//! Builds the text query handed to the external search provider: a
//! year/fiscal-year alternation, the quoted region and position, a
//! council-tier qualifier inferred from the region wording, a fixed
//! organization alternation, and any free-text keywords verbatim.

use crate::types::SearchQuery;
use crate::vocab::OrgLevel;

/// Build the provider query string for a search.
///
/// # Examples
///
/// ```
/// use jc_officer_search::orchestrator::query::build_search_query;
/// use jc_officer_search::types::SearchQuery;
///
/// let query = SearchQuery::new(2024, "関東地区協議会", "会長");
/// let text = build_search_query(&query);
/// assert!(text.contains("\"2024年\" OR \"2024年度\""));
/// assert!(text.contains("\"地区協議会\""));
/// ```
pub fn build_search_query(query: &SearchQuery) -> String {
    let mut terms: Vec<String> = Vec::new();

    terms.push(format!("\"{0}年\" OR \"{0}年度\"", query.year));
    terms.push(format!("\"{}\"", query.region_name));
    terms.push(format!("\"{}\"", query.position));

    match OrgLevel::detect(&query.region_name) {
        OrgLevel::Block => terms.push("\"ブロック協議会\"".to_owned()),
        OrgLevel::District => terms.push("\"地区協議会\"".to_owned()),
        OrgLevel::National | OrgLevel::Lom => {}
    }

    terms.push("\"青年会議所\" OR \"JC\"".to_owned());

    if let Some(keywords) = &query.keywords {
        terms.push(keywords.clone());
    }

    terms.join(" ")
}
