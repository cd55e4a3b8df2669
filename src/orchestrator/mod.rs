//! Search orchestration: provider query construction, the scrape
//! pipeline, confidence scoring, and ranking.

pub mod query;
pub mod ranking;
pub mod scoring;
pub mod scrape;
