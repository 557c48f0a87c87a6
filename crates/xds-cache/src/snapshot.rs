//! Snapshot: an owned, name-sorted copy of a collection.
//!
//! A snapshot is what the discovery server serializes. Snapshots are:
//!
//! - **Owned**: the backing `Vec` belongs to the caller; the cache keeps no
//!   reference to it
//! - **Sorted**: resources are in ascending byte order of their names
//! - **Detached**: later writes to the collection never change it

use std::time::Instant;

use prost_types::Any;
use xds_core::{Resource, TypeUrl};

/// An owned, name-sorted sequence of resources taken from a
/// [`SortedCollection`](crate::SortedCollection).
#[derive(Debug, Clone)]
pub struct Snapshot<R> {
    /// Resources, sorted by name.
    resources: Vec<R>,
    /// Creation timestamp.
    created_at: Instant,
}

impl<R: Resource> Snapshot<R> {
    /// Wrap resources that are already sorted by name.
    pub(crate) fn from_sorted(resources: Vec<R>) -> Self {
        debug_assert!(resources.windows(2).all(|w| w[0].name() < w[1].name()));
        Self {
            resources,
            created_at: Instant::now(),
        }
    }

    /// Type URL of the resources in this snapshot.
    #[inline]
    pub fn type_url(&self) -> TypeUrl {
        TypeUrl::new(R::TYPE_URL)
    }

    /// Get the creation timestamp.
    #[inline]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Get the number of resources.
    #[inline]
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if there are no resources.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Look up a resource by name.
    pub fn get(&self, name: &str) -> Option<&R> {
        self.resources
            .binary_search_by(|r| r.name().cmp(name))
            .ok()
            .map(|idx| &self.resources[idx])
    }

    /// Iterate over resources in name order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, R> {
        self.resources.iter()
    }

    /// Resource names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resources.iter().map(Resource::name)
    }

    /// Borrow the resources as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[R] {
        &self.resources
    }

    /// Take ownership of the sorted resources.
    #[inline]
    pub fn into_vec(self) -> Vec<R> {
        self.resources
    }

    /// Encode every resource, preserving name order.
    pub fn to_any(&self) -> Vec<Any> {
        self.resources.iter().map(Resource::to_any).collect()
    }
}

impl<R> IntoIterator for Snapshot<R> {
    type Item = R;
    type IntoIter = std::vec::IntoIter<R>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

impl<'a, R> IntoIterator for &'a Snapshot<R> {
    type Item = &'a R;
    type IntoIter = std::slice::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.iter()
    }
}
