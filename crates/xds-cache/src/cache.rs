//! Cache trait and the generic keyed cache.
//!
//! [`KeyedCache`] stores opaque configuration messages under a string key.
//! It uses `DashMap` for concurrent access and makes no ordering or
//! validation promise beyond per-key last-write-wins.

use std::collections::HashMap;

use dashmap::DashMap;
use tracing::trace;
use xds_core::Resource;

use crate::stats::CacheStats;

/// Common interface over the resource caches.
///
/// The discovery server only needs to read and prune a cache; this trait lets
/// it do so without knowing which cache flavour backs a resource type.
pub trait Cache: Send + Sync {
    /// Value type held by the cache.
    type Value;

    /// Remove the entry for `key`, if present.
    fn remove(&self, key: &str);

    /// Return an owned copy of every value.
    fn values(&self) -> Vec<Self::Value>;

    /// Get the number of entries.
    fn len(&self) -> usize;

    /// Check if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A concurrent key/value cache for resource types where identity alone
/// matters (clusters keyed by name, endpoints keyed by cluster name).
///
/// ## Thread Safety
///
/// All operations are thread-safe. `DashMap` provides fine-grained locking at
/// the shard level rather than a global lock, so only writes to the same
/// shard contend. [`KeyedCache::values`] visits shards one at a time and is
/// not a point-in-time view across keys.
#[derive(Debug)]
pub struct KeyedCache<V> {
    /// Values keyed by name.
    entries: DashMap<String, V>,
    /// Statistics.
    stats: CacheStats,
}

impl<V> Default for KeyedCache<V> {
    fn default() -> Self {
        Self::with_capacity(64)
    }
}

impl<V> KeyedCache<V> {
    /// Create a new keyed cache with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new keyed cache with a specific initial capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_map(DashMap::with_capacity(capacity))
    }

    pub(crate) fn from_map(entries: DashMap<String, V>) -> Self {
        Self {
            entries,
            stats: CacheStats::new(),
        }
    }

    /// Get cache statistics.
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Insert `value` under `key`, replacing any previous value.
    pub fn insert(&self, key: impl Into<String>, value: V) {
        let key = key.into();
        trace!(key = %key, "insert");
        self.entries.insert(key, value);
        self.stats.record_accept();
    }

    /// Remove the entry for `key`. Absent keys are ignored.
    pub fn remove(&self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.stats.record_remove();
            trace!(key = %key, "remove");
        }
    }

    /// Check if an entry exists for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all keys, in no particular order.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|r| r.key().clone()).collect()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl<V: Clone> KeyedCache<V> {
    /// Get a copy of the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<V> {
        // Clone out of the Ref so the shard lock is released immediately.
        self.entries.get(key).map(|r| r.value().clone())
    }

    /// Get an owned copy of every value, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.stats.record_snapshot();
        self.entries.iter().map(|r| r.value().clone()).collect()
    }

    /// Get an owned copy of the whole mapping.
    pub fn to_map(&self) -> HashMap<String, V> {
        self.stats.record_snapshot();
        self.entries
            .iter()
            .map(|r| (r.key().clone(), r.value().clone()))
            .collect()
    }
}

impl<V: Resource> KeyedCache<V> {
    /// Insert a resource under its own name.
    pub fn insert_resource(&self, resource: V) {
        self.insert(resource.name().to_owned(), resource);
    }
}

impl<V: Clone + Send + Sync> Cache for KeyedCache<V> {
    type Value = V;

    fn remove(&self, key: &str) {
        KeyedCache::remove(self, key)
    }

    fn values(&self) -> Vec<V> {
        KeyedCache::values(self)
    }

    fn len(&self) -> usize {
        KeyedCache::len(self)
    }
}
