//! Bounded, time-expiring LRU cache for completed search results.
//!
//! Keys are a SHA-256 digest of the query's identity fields (year,
//! region, position, keywords) serialized as sorted-key JSON, so two
//! queries with the same field values always collide regardless of how
//! they were built. `min_confidence` and `max_results` are deliberately
//! not part of the key: two searches differing only in those fields
//! share a cache entry.
//!
//! Recency is refreshed by both reads and writes. Expiry is checked
//! lazily on read; there is no background sweep. The cache itself does
//! no locking; callers that share it across tasks wrap it in a mutex
//! and treat each `get`/`set` as a critical section.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::time::{Duration, Instant};

use sha2::{Digest, Sha256};

use crate::types::{SearchQuery, SearchResult};

/// A stored result with its insertion timestamp.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: SearchResult,
    stored_at: Instant,
}

/// Bounded LRU store of [`SearchResult`]s with a fixed TTL.
///
/// Explicitly constructed and injected rather than process-global, so
/// tests can instantiate independent instances.
#[derive(Debug)]
pub struct ResultCache {
    entries: HashMap<String, CacheEntry>,
    /// Keys ordered least- to most-recently used.
    recency: VecDeque<String>,
    capacity: usize,
    ttl: Duration,
}

impl ResultCache {
    /// Create a cache holding at most `capacity` entries, each valid
    /// for `ttl` after insertion.
    pub fn new(capacity: usize, ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            recency: VecDeque::new(),
            capacity,
            ttl,
        }
    }

    /// Look up the cached result for a query.
    ///
    /// On hit the entry is promoted to most-recently-used. An entry
    /// older than the TTL is evicted and reported as a miss.
    pub fn get(&mut self, query: &SearchQuery) -> Option<SearchResult> {
        let key = cache_key(query);
        let expired = self.entries.get(&key)?.stored_at.elapsed() >= self.ttl;
        if expired {
            self.entries.remove(&key);
            self.recency.retain(|k| k != &key);
            return None;
        }
        self.touch(&key);
        self.entries.get(&key).map(|entry| entry.value.clone())
    }

    /// Store a result for a query.
    ///
    /// An existing entry for the same key is replaced and re-inserted
    /// at the most-recent position. If the store then exceeds capacity,
    /// the least-recently-used entry is evicted (capacity can only be
    /// exceeded by one entry at a time, so a single eviction suffices).
    pub fn set(&mut self, query: &SearchQuery, value: SearchResult) {
        let key = cache_key(query);
        if self.entries.remove(&key).is_some() {
            self.recency.retain(|k| k != &key);
        }
        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        self.recency.push_back(key);
        if self.entries.len() > self.capacity {
            if let Some(oldest) = self.recency.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.recency.clear();
    }

    /// Number of live entries (expired entries not yet read still count).
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move a key to the most-recently-used position.
    fn touch(&mut self, key: &str) {
        self.recency.retain(|k| k != key);
        self.recency.push_back(key.to_owned());
    }
}

/// Derive the cache key for a query.
///
/// The identity fields are placed in a sorted-key map, serialized as
/// JSON, and hashed, so equal field sets always produce the same digest
/// regardless of construction order.
pub fn cache_key(query: &SearchQuery) -> String {
    let mut fields = BTreeMap::new();
    fields.insert("keywords", serde_json::json!(query.keywords));
    fields.insert("position", serde_json::json!(query.position));
    fields.insert("region_name", serde_json::json!(query.region_name));
    fields.insert("year", serde_json::json!(query.year));
    let canonical = serde_json::to_string(&fields).unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchMetadata;

    fn make_result(id: &str, query: &SearchQuery) -> SearchResult {
        SearchResult {
            search_id: id.to_string(),
            query: query.clone(),
            results: vec![],
            metadata: SearchMetadata {
                total_results: 0,
                duration_ms: 1,
                sources_searched: 0,
                target_years: [query.year - 1, query.year, query.year + 1],
                cached: false,
            },
        }
    }

    fn query(region: &str) -> SearchQuery {
        SearchQuery::new(2024, region, "会長")
    }

    #[test]
    fn key_deterministic_for_equal_fields() {
        let a = query("関東地区協議会");
        let b = query("関東地区協議会");
        assert_eq!(cache_key(&a), cache_key(&b));
    }

    #[test]
    fn key_ignores_non_identity_fields() {
        let a = query("関東地区協議会");
        let b = SearchQuery {
            min_confidence: 0.9,
            max_results: 5,
            ..query("関東地区協議会")
        };
        assert_eq!(cache_key(&a), cache_key(&b));
    }

    #[test]
    fn key_differs_per_identity_field() {
        let base = query("関東地区協議会");
        let other_year = SearchQuery {
            year: 2023,
            ..base.clone()
        };
        let other_region = query("東北地区協議会");
        let other_position = SearchQuery {
            position: "副会長".into(),
            ..base.clone()
        };
        let other_keywords = SearchQuery {
            keywords: Some("新年度".into()),
            ..base.clone()
        };
        assert_ne!(cache_key(&base), cache_key(&other_year));
        assert_ne!(cache_key(&base), cache_key(&other_region));
        assert_ne!(cache_key(&base), cache_key(&other_position));
        assert_ne!(cache_key(&base), cache_key(&other_keywords));
    }

    #[test]
    fn key_is_fixed_length_hex() {
        let key = cache_key(&query("関東地区協議会"));
        assert_eq!(key.len(), 64);
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn miss_on_empty_cache() {
        let mut cache = ResultCache::new(10, Duration::from_secs(60));
        assert!(cache.get(&query("関東地区協議会")).is_none());
    }

    #[test]
    fn set_then_get_round_trip() {
        let mut cache = ResultCache::new(10, Duration::from_secs(60));
        let q = query("関東地区協議会");
        cache.set(&q, make_result("first", &q));
        let hit = cache.get(&q).expect("should hit");
        assert_eq!(hit.search_id, "first");
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn overwrite_replaces_value() {
        let mut cache = ResultCache::new(10, Duration::from_secs(60));
        let q = query("関東地区協議会");
        cache.set(&q, make_result("old", &q));
        cache.set(&q, make_result("new", &q));
        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get(&q).expect("hit").search_id, "new");
    }

    #[test]
    fn exceeding_capacity_evicts_least_recently_used() {
        let mut cache = ResultCache::new(2, Duration::from_secs(60));
        let a = query("北海道地区協議会");
        let b = query("東北地区協議会");
        let c = query("関東地区協議会");
        cache.set(&a, make_result("a", &a));
        cache.set(&b, make_result("b", &b));
        cache.set(&c, make_result("c", &c));
        assert_eq!(cache.size(), 2);
        assert!(cache.get(&a).is_none(), "oldest entry should be evicted");
        assert!(cache.get(&b).is_some());
        assert!(cache.get(&c).is_some());
    }

    #[test]
    fn read_promotes_entry_to_most_recent() {
        let mut cache = ResultCache::new(2, Duration::from_secs(60));
        let a = query("北海道地区協議会");
        let b = query("東北地区協議会");
        let c = query("関東地区協議会");
        cache.set(&a, make_result("a", &a));
        cache.set(&b, make_result("b", &b));
        // Touch `a` so `b` becomes least-recently-used.
        assert!(cache.get(&a).is_some());
        cache.set(&c, make_result("c", &c));
        assert!(cache.get(&a).is_some(), "promoted entry should survive");
        assert!(cache.get(&b).is_none(), "unread entry should be evicted");
    }

    #[test]
    fn overwrite_refreshes_recency() {
        let mut cache = ResultCache::new(2, Duration::from_secs(60));
        let a = query("北海道地区協議会");
        let b = query("東北地区協議会");
        let c = query("関東地区協議会");
        cache.set(&a, make_result("a1", &a));
        cache.set(&b, make_result("b", &b));
        // Re-inserting `a` moves it to most-recent.
        cache.set(&a, make_result("a2", &a));
        cache.set(&c, make_result("c", &c));
        assert!(cache.get(&b).is_none());
        assert_eq!(cache.get(&a).expect("hit").search_id, "a2");
    }

    #[test]
    fn expired_entry_is_a_miss_and_removed() {
        let mut cache = ResultCache::new(10, Duration::from_millis(10));
        let q = query("関東地区協議会");
        cache.set(&q, make_result("stale", &q));
        std::thread::sleep(Duration::from_millis(25));
        assert!(cache.get(&q).is_none());
        assert_eq!(cache.size(), 0, "expired entry should be evicted on read");
    }

    #[test]
    fn entry_read_before_ttl_is_retained() {
        let mut cache = ResultCache::new(10, Duration::from_secs(60));
        let q = query("関東地区協議会");
        cache.set(&q, make_result("fresh", &q));
        assert!(cache.get(&q).is_some());
        assert!(cache.get(&q).is_some());
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn clear_empties_cache() {
        let mut cache = ResultCache::new(10, Duration::from_secs(60));
        let q = query("関東地区協議会");
        cache.set(&q, make_result("x", &q));
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.size(), 0);
        assert!(cache.get(&q).is_none());
    }
}
