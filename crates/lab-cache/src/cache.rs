//! TTL cache with lazy expiry

use std::time::Duration;

use dashmap::DashMap;
use tokio::time::Instant;

use crate::key::CacheKey;

struct CacheEntry<V> {
    payload: V,
    stored_at: Instant,
    ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Valid while `now - stored_at <= ttl`
    fn is_valid(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) <= self.ttl
    }
}

/// Key/value store whose entries expire after a per-entry TTL
///
/// Expired entries are never returned; they are dropped on the next read of
/// the same key or by [`TtlCache::purge_expired`]. Writes are last-write-wins.
pub struct TtlCache<V> {
    entries: DashMap<CacheKey, CacheEntry<V>>,
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Insert or overwrite `key`, restarting its TTL
    pub fn set(&self, key: CacheKey, value: V, ttl: Duration) {
        self.entries.insert(
            key,
            CacheEntry {
                payload: value,
                stored_at: Instant::now(),
                ttl,
            },
        );
    }

    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let now = Instant::now();

        match self.entries.get(key) {
            None => return None,
            Some(entry) if entry.is_valid(now) => return Some(entry.payload.clone()),
            Some(_) => {}
        }

        // Only drop it if nobody refreshed the entry in between
        if self
            .entries
            .remove_if(key, |_, entry| !entry.is_valid(now))
            .is_some()
        {
            tracing::trace!(key = %key, "evicted expired cache entry");
        }
        None
    }

    pub fn delete(&self, key: &CacheKey) {
        self.entries.remove(key);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Stored entries, including expired ones not yet read
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.is_valid(now));
        before.saturating_sub(self.entries.len())
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
