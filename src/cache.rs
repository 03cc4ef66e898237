//! Prefix-keyed cache for provider range responses.
//!
//! Keys are hash prefixes, never plaintext or full hashes. Entries expire
//! lazily on read once their TTL elapses; a capacity bound triggers
//! least-recently-used eviction on insert.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::client::SuffixTable;

struct CacheEntry {
    table: SuffixTable,
    fetched_at: Instant,
    ttl: Duration,
    last_used: Instant,
}

/// Counters for cache diagnostics.
///
/// `expired` counts reads that found an entry past its TTL; those are a
/// distinct flavor of miss and are not included in `misses`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub expired: u64,
    pub evictions: u64,
}

/// Shared, process-wide cache of range responses.
///
/// Safe for concurrent `get`/`put` from simultaneous evaluation requests.
/// Initialized empty at startup; never explicitly torn down.
pub struct BreachCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    expired: AtomicU64,
    evictions: AtomicU64,
}

impl BreachCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            expired: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Returns the cached table for `key` if present and fresh.
    pub fn get(&self, key: &str) -> Option<SuffixTable> {
        self.get_at(key, Instant::now())
    }

    /// Stores or overwrites the entry for `key` with a fresh timestamp.
    pub fn put(&self, key: &str, table: SuffixTable, ttl: Duration) {
        self.put_at(key, table, ttl, Instant::now());
    }

    pub(crate) fn get_at(&self, key: &str, now: Instant) -> Option<SuffixTable> {
        let mut entries = self.entries.write().unwrap();
        match entries.get_mut(key) {
            Some(entry) if now.duration_since(entry.fetched_at) <= entry.ttl => {
                entry.last_used = now;
                self.hits.fetch_add(1, Ordering::Relaxed);
                trace!(%key, "range cache hit");
                Some(entry.table.clone())
            }
            Some(_) => {
                entries.remove(key);
                self.expired.fetch_add(1, Ordering::Relaxed);
                trace!(%key, "range cache entry expired");
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                trace!(%key, "range cache miss");
                None
            }
        }
    }

    pub(crate) fn put_at(&self, key: &str, table: SuffixTable, ttl: Duration, now: Instant) {
        let mut entries = self.entries.write().unwrap();
        entries.insert(
            key.to_string(),
            CacheEntry {
                table,
                fetched_at: now,
                ttl,
                last_used: now,
            },
        );
        if entries.len() > self.capacity {
            let oldest = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                entries.remove(&oldest);
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(key = %oldest, "evicted least-recently-used range entry");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            expired: self.expired.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(suffix: &str, count: u64) -> SuffixTable {
        let mut table = SuffixTable::new();
        table.insert(suffix.to_string(), count);
        table
    }

    #[test]
    fn test_get_returns_stored_table_until_ttl() {
        let cache = BreachCache::new(16);
        let ttl = Duration::from_secs(5);
        let t0 = Instant::now();

        cache.put_at("5BAA6", table_with("AAAA", 3), ttl, t0);

        let fresh = cache.get_at("5BAA6", t0 + Duration::from_secs(1));
        assert_eq!(fresh.unwrap().get("AAAA"), Some(&3));

        // Exactly at the TTL boundary the entry is still fresh.
        assert!(cache.get_at("5BAA6", t0 + ttl).is_some());

        // Past the TTL it reads as a miss and is removed.
        assert!(cache.get_at("5BAA6", t0 + ttl + Duration::from_secs(1)).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_expired_counted_separately_from_misses() {
        let cache = BreachCache::new(16);
        let t0 = Instant::now();

        assert!(cache.get_at("NOKEY", t0).is_none());
        cache.put_at("5BAA6", table_with("AAAA", 1), Duration::from_secs(1), t0);
        assert!(cache.get_at("5BAA6", t0 + Duration::from_secs(2)).is_none());

        let stats = cache.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.hits, 0);
    }

    #[test]
    fn test_put_overwrites_existing_entry() {
        let cache = BreachCache::new(16);
        let ttl = Duration::from_secs(60);
        let t0 = Instant::now();

        cache.put_at("5BAA6", table_with("AAAA", 1), ttl, t0);
        cache.put_at("5BAA6", table_with("AAAA", 9), ttl, t0 + Duration::from_secs(1));

        let table = cache.get_at("5BAA6", t0 + Duration::from_secs(2)).unwrap();
        assert_eq!(table.get("AAAA"), Some(&9));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let cache = BreachCache::new(2);
        let ttl = Duration::from_secs(60);
        let t0 = Instant::now();

        cache.put_at("AAAAA", table_with("A", 1), ttl, t0);
        cache.put_at("BBBBB", table_with("B", 1), ttl, t0 + Duration::from_secs(1));

        // Touch AAAAA so BBBBB becomes the least recently used.
        assert!(cache.get_at("AAAAA", t0 + Duration::from_secs(2)).is_some());

        cache.put_at("CCCCC", table_with("C", 1), ttl, t0 + Duration::from_secs(3));

        assert_eq!(cache.len(), 2);
        assert!(cache.get_at("BBBBB", t0 + Duration::from_secs(4)).is_none());
        assert!(cache.get_at("AAAAA", t0 + Duration::from_secs(4)).is_some());
        assert!(cache.get_at("CCCCC", t0 + Duration::from_secs(4)).is_some());
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_hit_counter() {
        let cache = BreachCache::new(16);
        cache.put("5BAA6", table_with("AAAA", 1), Duration::from_secs(60));
        assert!(cache.get("5BAA6").is_some());
        assert!(cache.get("5BAA6").is_some());
        assert_eq!(cache.stats().hits, 2);
    }

    #[test]
    fn test_concurrent_get_put() {
        use std::sync::Arc;

        let cache = Arc::new(BreachCache::new(64));
        let mut handles = Vec::new();
        for i in 0u64..8 {
            let cache = Arc::clone(&cache);
            handles.push(std::thread::spawn(move || {
                let key = format!("KEY{:02}", i % 4);
                for _ in 0..100 {
                    cache.put(&key, table_with("S", i), Duration::from_secs(60));
                    let _ = cache.get(&key);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.len() <= 4);
    }
}
