//! Candidate ranking: score, filter, sort, assign ranks, truncate.

use std::cmp::Ordering;

use crate::types::{Candidate, SearchQuery};

use super::scoring;

/// Rank candidates for a query.
///
/// Scores every candidate, drops those strictly below
/// `query.min_confidence`, sorts descending by confidence with ties
/// broken by evidence count (more evidence wins; equal candidates keep
/// their relative order), assigns contiguous 1-based ranks, and
/// truncates to `query.max_results`.
pub fn rank_candidates(mut candidates: Vec<Candidate>, query: &SearchQuery) -> Vec<Candidate> {
    for candidate in &mut candidates {
        candidate.confidence_score = scoring::confidence(candidate);
    }

    candidates.retain(|c| c.confidence_score >= query.min_confidence);

    // sort_by is stable, so score-and-evidence ties keep discovery order.
    candidates.sort_by(|a, b| {
        b.confidence_score
            .partial_cmp(&a.confidence_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| b.evidence_sources.len().cmp(&a.evidence_sources.len()))
    });

    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = index as u32 + 1;
    }

    candidates.truncate(query.max_results);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RawMatch;

    fn make_candidate(name: &str, sources: &[&str]) -> Candidate {
        let m = RawMatch {
            name: name.into(),
            position: "会長".into(),
            year: 2024,
            region: "関東地区協議会".into(),
            source_url: String::new(),
            context_snippet: String::new(),
        };
        let mut candidate = Candidate::from_match(&m);
        candidate.evidence_sources = sources.iter().map(|s| (*s).to_owned()).collect();
        candidate
    }

    fn query_with(min_confidence: f64, max_results: usize) -> SearchQuery {
        SearchQuery {
            min_confidence,
            max_results,
            ..SearchQuery::new(2024, "関東地区協議会", "会長")
        }
    }

    #[test]
    fn low_confidence_candidates_filtered() {
        let strong = make_candidate("山田太郎", &["https://www.jaycee.or.jp/a", "https://b.example"]);
        let weak = make_candidate("佐藤花子", &["https://random.example/p"]);
        let ranked = rank_candidates(vec![weak, strong], &query_with(0.6, 20));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].name, "山田太郎");
    }

    #[test]
    fn candidates_sorted_by_score_descending() {
        let official = make_candidate("山田太郎", &["https://www.jaycee.or.jp/a"]);
        let chapter = make_candidate("佐藤花子", &["https://kanto.jc.or.jp/b"]);
        let ranked = rank_candidates(vec![chapter, official], &query_with(0.0, 20));
        assert_eq!(ranked[0].name, "山田太郎");
        assert_eq!(ranked[1].name, "佐藤花子");
        assert!(ranked[0].confidence_score > ranked[1].confidence_score);
    }

    #[test]
    fn score_tie_broken_by_evidence_count() {
        // Same distinct-source profile but one candidate has a duplicate
        // evidence entry: scores tie, more raw evidence wins.
        let reinforced = make_candidate(
            "山田太郎",
            &["https://www.jaycee.or.jp/a", "https://www.jaycee.or.jp/a"],
        );
        let single = make_candidate("佐藤花子", &["https://www.jaycee.or.jp/a"]);
        let ranked = rank_candidates(vec![single, reinforced], &query_with(0.0, 20));
        assert!(
            (ranked[0].confidence_score - ranked[1].confidence_score).abs() < 1e-9,
            "scores should tie"
        );
        assert_eq!(ranked[0].name, "山田太郎");
    }

    #[test]
    fn full_tie_preserves_input_order() {
        let first = make_candidate("山田太郎", &["https://www.jaycee.or.jp/a"]);
        let second = make_candidate("佐藤花子", &["https://www.jaycee.or.jp/b"]);
        let ranked = rank_candidates(vec![first, second], &query_with(0.0, 20));
        assert_eq!(ranked[0].name, "山田太郎");
        assert_eq!(ranked[1].name, "佐藤花子");
    }

    #[test]
    fn ranks_are_contiguous_from_one() {
        let candidates: Vec<Candidate> = (0..4)
            .map(|i| make_candidate(&format!("候補者{i}"), &["https://www.jaycee.or.jp/a"]))
            .collect();
        let ranked = rank_candidates(candidates, &query_with(0.0, 20));
        let ranks: Vec<u32> = ranked.iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4]);
    }

    #[test]
    fn truncation_happens_after_rank_assignment() {
        let candidates: Vec<Candidate> = (0..5)
            .map(|i| make_candidate(&format!("候補者{i}"), &["https://www.jaycee.or.jp/a"]))
            .collect();
        let ranked = rank_candidates(candidates, &query_with(0.0, 2));
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].rank, 1);
        assert_eq!(ranked[1].rank, 2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let ranked = rank_candidates(vec![], &query_with(0.6, 20));
        assert!(ranked.is_empty());
    }

    #[test]
    fn floor_is_strictly_less_than() {
        // min_confidence drops only candidates strictly below the floor.
        let at_floor = make_candidate("山田太郎", &["https://www.jaycee.or.jp/a"]);
        let score = crate::orchestrator::scoring::confidence(&at_floor);
        let ranked = rank_candidates(vec![at_floor], &query_with(score, 20));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].rank, 1);
    }
}
