use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
const DEFAULT_MAX_ENTRIES: usize = 1000;

/// Cache key with a source prefix and normalized query.
pub fn cache_key(source: &str, query: &str) -> String {
    format!("{}:{}", source, query.trim().to_lowercase())
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: Vec<T>,
    created_at: Instant,
}

/// TTL cache for content-search responses.
///
/// Expired entries are swept out lazily, on lookup misses and on inserts
/// once the cache is full; there is no background task.
#[derive(Debug)]
pub struct ResponseCache<T> {
    entries: DashMap<String, CacheEntry<T>>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<T: Clone> ResponseCache<T> {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_MAX_ENTRIES)
    }

    pub fn get(&self, key: &str) -> Option<Vec<T>> {
        let fresh = self.entries.get(key).and_then(|entry| {
            if entry.created_at.elapsed() <= self.ttl {
                Some(entry.data.clone())
            } else {
                None
            }
        });

        match fresh {
            Some(data) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(data)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                self.entries
                    .remove_if(key, |_, entry| entry.created_at.elapsed() > self.ttl);
                None
            }
        }
    }

    pub fn insert(&self, key: String, data: Vec<T>) {
        if self.entries.len() >= self.max_entries {
            self.evict_expired();
        }
        if self.entries.len() >= self.max_entries {
            // Still full after the sweep: make room by dropping one entry.
            let victim = self.entries.iter().next().map(|e| e.key().clone());
            if let Some(key) = victim {
                self.entries.remove(&key);
            }
        }

        self.entries.insert(
            key,
            CacheEntry {
                data,
                created_at: Instant::now(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hit_count(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn miss_count(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    fn evict_expired(&self) {
        self.entries
            .retain(|_, entry| entry.created_at.elapsed() <= self.ttl);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        assert_eq!(cache_key("anilist", "  Naruto "), "anilist:naruto");
    }

    #[test]
    fn hit_after_insert() {
        let cache: ResponseCache<String> = ResponseCache::with_defaults();
        cache.insert("anilist:naruto".to_string(), vec!["hit".to_string()]);

        assert_eq!(
            cache.get("anilist:naruto"),
            Some(vec!["hit".to_string()])
        );
        assert_eq!(cache.hit_count(), 1);
        assert_eq!(cache.get("anilist:bleach"), None);
        assert_eq!(cache.miss_count(), 1);
    }

    #[test]
    fn expired_entries_are_dropped() {
        let cache: ResponseCache<String> = ResponseCache::new(Duration::from_millis(0), 10);
        cache.insert("gogoanime:naruto".to_string(), vec!["stale".to_string()]);

        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(cache.get("gogoanime:naruto"), None);
        assert!(cache.is_empty());
    }

    #[test]
    fn full_cache_makes_room() {
        let cache: ResponseCache<u32> = ResponseCache::new(Duration::from_secs(60), 2);
        cache.insert("a".to_string(), vec![1]);
        cache.insert("b".to_string(), vec![2]);
        cache.insert("c".to_string(), vec![3]);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("c"), Some(vec![3]));
    }
}
