//! # xds-cache
//!
//! Resource caches sitting between the translation layer and the discovery
//! server of an xDS control plane.
//!
//! - [`KeyedCache`] - DashMap-based key/value cache for kinds where identity
//!   alone matters
//! - [`SortedCollection`] - validated, name-deduplicated, name-sorted
//!   collection with copy-on-write snapshots
//! - [`Snapshot`] - Owned, sorted copy of a collection
//! - [`CacheBuilder`] - Configured construction of either cache
//!
//! ## Key Design Decisions
//!
//! - Validation runs once, on write; the read path only copies and sorts
//! - Invalid resources are dropped silently by `add`; `try_add` reports why
//! - Every `values()` call allocates a fresh `Vec`; nothing returned to a
//!   caller aliases cache storage
//! - All operations are synchronous and never hold a lock while sorting
//!
//! ## Example
//!
//! ```rust
//! use xds_cache::SortedCollection;
//! use xds_types::VirtualHost;
//!
//! let vhosts = SortedCollection::new();
//! vhosts.add(VirtualHost::new("beta", ["beta.example.com"]));
//! vhosts.add(VirtualHost::new("alpha", ["alpha.example.com"]));
//! vhosts.add(VirtualHost::new("broken", [""]));
//!
//! let names: Vec<_> = vhosts.values().into_iter().map(|vh| vh.name).collect();
//! assert_eq!(names, ["alpha", "beta"]);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

mod cache;
mod collection;
mod config;
mod snapshot;
mod stats;

pub use cache::{Cache, KeyedCache};
pub use collection::SortedCollection;
pub use config::{CacheBuilder, CacheConfig};
pub use snapshot::Snapshot;
pub use stats::CacheStats;
