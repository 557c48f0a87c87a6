//! Sorted, validated, copy-on-write resource collection.
//!
//! [`SortedCollection`] keeps one entry per resource name behind a single
//! read/write lock. Writers validate before taking the lock; readers copy the
//! entries out under the read lock and sort after releasing it, so every
//! snapshot is an independent `Vec` that later writes cannot touch.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::trace;
use xds_core::{Resource, XdsResult};

use crate::cache::Cache;
use crate::snapshot::Snapshot;
use crate::stats::CacheStats;

/// The authoritative, validated view of one resource type.
///
/// - `add` drops resources that fail [`Resource::validate`] without telling
///   the caller; use [`SortedCollection::try_add`] to see the reason.
/// - A later `add` with the same name replaces the stored resource.
/// - `values` returns a freshly allocated copy sorted by name.
#[derive(Debug)]
pub struct SortedCollection<R> {
    /// Accepted resources keyed by name.
    entries: RwLock<HashMap<String, R>>,
    /// Statistics.
    stats: CacheStats,
}

impl<R> Default for SortedCollection<R> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<R: Resource> SortedCollection<R> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R> SortedCollection<R> {
    /// Create an empty collection with room for `capacity` resources.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(capacity)),
            stats: CacheStats::new(),
        }
    }

    /// Get collection statistics.
    #[inline]
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Get the number of stored resources.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Check if a resource named `name` is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Remove every resource.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl<R: Resource> SortedCollection<R> {
    /// Store `resource` if it is valid; silently drop it otherwise.
    pub fn add(&self, resource: R) {
        // Rejections are counted in stats but never reported to the writer.
        let _ = self.try_add(resource);
    }

    /// Store `resource` if it is valid, returning the validation error if not.
    ///
    /// On error the collection is unchanged.
    pub fn try_add(&self, resource: R) -> XdsResult<()> {
        if let Err(err) = resource.validate() {
            self.stats.record_reject();
            return Err(err);
        }

        trace!(type_url = R::TYPE_URL, name = resource.name(), "add");
        self.entries
            .write()
            .insert(resource.name().to_owned(), resource);
        self.stats.record_accept();
        Ok(())
    }

    /// Remove the resource named `name`. Absent names are ignored.
    pub fn remove(&self, name: &str) {
        let removed = self.entries.write().remove(name).is_some();
        if removed {
            self.stats.record_remove();
            trace!(type_url = R::TYPE_URL, name = %name, "remove");
        }
    }

    /// Replace the whole collection in one write.
    ///
    /// Each resource is validated individually; invalid ones are dropped and
    /// duplicates resolve to the last occurrence. Returns the number of
    /// resources stored.
    pub fn replace_all(&self, resources: impl IntoIterator<Item = R>) -> usize {
        let mut fresh = HashMap::new();
        for resource in resources {
            if resource.is_valid() {
                self.stats.record_accept();
                fresh.insert(resource.name().to_owned(), resource);
            } else {
                self.stats.record_reject();
            }
        }

        let stored = fresh.len();
        *self.entries.write() = fresh;
        trace!(type_url = R::TYPE_URL, count = stored, "replace all");
        stored
    }

    /// Get a copy of the resource named `name`.
    pub fn get(&self, name: &str) -> Option<R> {
        self.entries.read().get(name).cloned()
    }

    /// Stored resource names in ascending order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Return a new `Vec` holding a copy of every stored resource, sorted by
    /// name.
    ///
    /// Every call allocates; no two calls share backing storage.
    pub fn values(&self) -> Vec<R> {
        let mut values: Vec<R> = {
            let entries = self.entries.read();
            entries.values().cloned().collect()
        };
        values.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        self.stats.record_snapshot();
        trace!(type_url = R::TYPE_URL, count = values.len(), "values");
        values
    }

    /// Same as [`SortedCollection::values`], wrapped in a [`Snapshot`].
    pub fn snapshot(&self) -> Snapshot<R> {
        Snapshot::from_sorted(self.values())
    }
}

impl<R: Resource> Cache for SortedCollection<R> {
    type Value = R;

    fn remove(&self, key: &str) {
        SortedCollection::remove(self, key)
    }

    fn values(&self) -> Vec<R> {
        SortedCollection::values(self)
    }

    fn len(&self) -> usize {
        SortedCollection::len(self)
    }
}
