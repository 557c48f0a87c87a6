//! # xds-resource-cache
//!
//! Resource caches for xDS control planes.
//!
//! The translation layer writes configuration objects into these caches as
//! upstream state changes; the discovery server reads sorted, validated,
//! copy-on-write snapshots from them to build responses.
//!
//! ## Quick Start
//!
//! ```rust
//! use xds_resource_cache::prelude::*;
//!
//! let vhosts = VirtualHostCache::new();
//! vhosts.add(VirtualHost::new("beta", ["beta"]));
//! vhosts.add(VirtualHost::new("alpha", ["alpha"]));
//!
//! let snapshot = vhosts.values();
//! assert_eq!(snapshot[0].name, "alpha");
//! assert_eq!(snapshot[1].name, "beta");
//!
//! let clusters = ClusterCache::new();
//! clusters.insert_resource(Cluster::new("default/kuard/80"));
//! assert!(clusters.contains_key("default/kuard/80"));
//! ```
//!
//! ## Architecture
//!
//! - `xds-core` - Error type, type URLs and the `Resource` capability trait
//! - `xds-types` - Configuration messages and their validation rules
//! - `xds-cache` - `KeyedCache`, `SortedCollection` and `Snapshot`
//!
//! This crate re-exports all public APIs and names one cache per resource kind.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub use xds_cache as cache;
pub use xds_core as core;
pub use xds_types as types;

use xds_cache::{KeyedCache, SortedCollection};
use xds_types::{Cluster, ClusterLoadAssignment, Listener, VirtualHost};

/// Virtual hosts, sorted by name and validated on write.
pub type VirtualHostCache = SortedCollection<VirtualHost>;

/// Listeners, sorted by name and validated on write.
pub type ListenerCache = SortedCollection<Listener>;

/// Clusters keyed by name.
pub type ClusterCache = KeyedCache<Cluster>;

/// Endpoint assignments keyed by cluster name.
pub type ClusterLoadAssignmentCache = KeyedCache<ClusterLoadAssignment>;

/// Prelude module for convenient imports.
///
/// ```rust
/// use xds_resource_cache::prelude::*;
/// ```
pub mod prelude {
    pub use xds_core::{Resource, TypeUrl, XdsError, XdsResult};

    pub use xds_cache::{
        Cache, CacheBuilder, CacheConfig, CacheStats, KeyedCache, Snapshot, SortedCollection,
    };

    pub use xds_types::{
        Cluster, ClusterLoadAssignment, LbEndpoint, LbPolicy, Listener, Route, SocketAddress,
        VirtualHost,
    };

    pub use crate::{ClusterCache, ClusterLoadAssignmentCache, ListenerCache, VirtualHostCache};
}

/// Version information for this crate.
pub mod version {
    /// Crate version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Minimum supported Rust version.
    pub const MSRV: &str = env!("CARGO_PKG_RUST_VERSION");

    /// Get version info as a string.
    pub fn version_string() -> String {
        format!("xds-resource-cache {} (MSRV {})", VERSION, MSRV)
    }
}
