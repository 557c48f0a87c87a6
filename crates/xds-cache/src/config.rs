//! Cache configuration.

use dashmap::DashMap;
use tracing::debug;
use xds_core::{Resource, XdsError, XdsResult};

use crate::cache::KeyedCache;
use crate::collection::SortedCollection;

/// Configuration for a resource cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Initial number of entries to reserve room for.
    pub initial_capacity: usize,
    /// Number of `DashMap` shards for keyed caches. `None` lets `dashmap`
    /// pick based on the number of CPUs. Must be a power of two above one.
    pub shard_amount: Option<usize>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            shard_amount: None,
        }
    }
}

impl CacheConfig {
    /// Check the configuration for values the caches cannot use.
    pub fn validate(&self) -> XdsResult<()> {
        if let Some(shards) = self.shard_amount {
            if shards < 2 || !shards.is_power_of_two() {
                return Err(XdsError::Configuration(format!(
                    "shard amount must be a power of two greater than one, got {shards}"
                )));
            }
        }
        Ok(())
    }
}

/// Builder for creating configured caches.
///
/// # Example
///
/// ```rust
/// use xds_cache::CacheBuilder;
/// use xds_types::{Cluster, VirtualHost};
///
/// let clusters = CacheBuilder::new()
///     .capacity(256)
///     .shard_amount(8)
///     .build_keyed::<Cluster>()
///     .unwrap();
/// assert!(clusters.is_empty());
///
/// let vhosts = CacheBuilder::new().build_sorted::<VirtualHost>().unwrap();
/// assert!(vhosts.values().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CacheBuilder {
    capacity: Option<usize>,
    shard_amount: Option<usize>,
}

impl CacheBuilder {
    /// Create a new cache builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: CacheConfig) -> Self {
        Self {
            capacity: Some(config.initial_capacity),
            shard_amount: config.shard_amount,
        }
    }

    /// Set the initial capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Set the shard amount for keyed caches.
    pub fn shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }

    /// Resolve the builder into a configuration.
    pub fn config(&self) -> CacheConfig {
        let defaults = CacheConfig::default();
        CacheConfig {
            initial_capacity: self.capacity.unwrap_or(defaults.initial_capacity),
            shard_amount: self.shard_amount.or(defaults.shard_amount),
        }
    }

    /// Build a [`KeyedCache`].
    pub fn build_keyed<V>(self) -> XdsResult<KeyedCache<V>> {
        let config = self.config();
        config.validate()?;

        let entries = match config.shard_amount {
            Some(shards) => DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards),
            None => DashMap::with_capacity(config.initial_capacity),
        };

        debug!(
            capacity = config.initial_capacity,
            shard_amount = ?config.shard_amount,
            "built keyed cache"
        );
        Ok(KeyedCache::from_map(entries))
    }

    /// Build a [`SortedCollection`].
    ///
    /// The shard amount does not apply (the collection sits behind a single
    /// lock) but is still validated.
    pub fn build_sorted<R: Resource>(self) -> XdsResult<SortedCollection<R>> {
        let config = self.config();
        config.validate()?;

        debug!(
            type_url = R::TYPE_URL,
            capacity = config.initial_capacity,
            "built sorted collection"
        );
        Ok(SortedCollection::with_capacity(config.initial_capacity))
    }
}
