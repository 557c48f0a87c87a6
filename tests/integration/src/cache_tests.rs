//! Cache integration tests.

use std::sync::Arc;
use std::thread;

use integration_tests::{init_tracing, vhost};
use proptest::prelude::*;
use xds_resource_cache::prelude::*;

#[test]
fn virtual_hosts_sorted_by_name() {
    init_tracing();
    let cache = VirtualHostCache::new();

    cache.add(vhost("beta", &["beta"]));
    cache.add(vhost("alpha", &["alpha"]));

    assert_eq!(
        cache.values(),
        vec![vhost("alpha", &["alpha"]), vhost("beta", &["beta"])]
    );
}

#[test]
fn virtual_host_last_write_wins() {
    let cache = VirtualHostCache::new();

    cache.add(vhost("alpha", &["example.com"]));
    cache.add(vhost("alpha", &["heptio.com"]));

    assert_eq!(cache.values(), vec![vhost("alpha", &["heptio.com"])]);
}

#[test]
fn virtual_host_blank_domain_rejected() {
    let cache = VirtualHostCache::new();

    cache.add(vhost("foo", &["foo.example.com", "", "bar.example.com"]));

    assert!(cache.values().is_empty());
    assert_eq!(cache.stats().rejected(), 1);
    assert_eq!(cache.stats().accepted(), 0);
}

#[test]
fn virtual_host_remove() {
    let cache = VirtualHostCache::new();

    cache.add(vhost("alpha", &["alpha"]));
    cache.remove("alpha");

    assert!(cache.values().is_empty());
}

#[test]
fn cluster_cache_upsert_and_remove() {
    init_tracing();
    let clusters = ClusterCache::new();

    clusters.insert_resource(Cluster::new("default/kuard/80"));
    clusters.insert_resource(
        Cluster::new("default/kuard/80").with_lb_policy(LbPolicy::LeastRequest),
    );
    clusters.insert_resource(Cluster::new("default/httpbin/8080"));

    assert_eq!(clusters.len(), 2);
    assert_eq!(
        clusters.get("default/kuard/80").unwrap().lb_policy(),
        LbPolicy::LeastRequest
    );

    clusters.remove("default/kuard/80");
    clusters.remove("default/kuard/80");
    assert_eq!(clusters.keys(), ["default/httpbin/8080"]);
    assert_eq!(clusters.stats().removed(), 1);
}

#[test]
fn keyed_cache_accepts_anything() {
    // No validation on the keyed path: an unnamed cluster is stored as-is.
    let clusters = ClusterCache::new();
    clusters.insert("unnamed", Cluster::default());

    assert_eq!(clusters.get("unnamed"), Some(Cluster::default()));
    assert_eq!(clusters.stats().rejected(), 0);
}

#[test]
fn endpoint_assignments_keyed_by_cluster() {
    let endpoints = ClusterLoadAssignmentCache::new();

    endpoints.insert_resource(ClusterLoadAssignment::new(
        "default/kuard",
        [LbEndpoint::new("10.0.0.1", 8080)],
    ));
    endpoints.insert_resource(ClusterLoadAssignment::new(
        "default/kuard",
        [
            LbEndpoint::new("10.0.0.2", 8080),
            LbEndpoint::new("10.0.0.3", 8080),
        ],
    ));

    let assignment = endpoints.get("default/kuard").unwrap();
    assert_eq!(assignment.endpoints.len(), 2);
}

#[test]
fn listener_cache_validation() {
    let listeners = ListenerCache::new();

    listeners.add(Listener::new("ingress_https", "0.0.0.0", 8443));
    listeners.add(Listener::new("ingress_http", "0.0.0.0", 8080));

    let err = listeners
        .try_add(Listener::new("ingress_admin", "127.0.0.1", 0))
        .unwrap_err();
    assert!(err.is_invalid_resource());

    assert_eq!(listeners.names(), ["ingress_http", "ingress_https"]);
}

#[test]
fn builder_produces_working_caches() {
    let vhosts: VirtualHostCache = CacheBuilder::new().capacity(16).build_sorted().unwrap();
    let clusters: ClusterCache = CacheBuilder::new()
        .capacity(16)
        .shard_amount(4)
        .build_keyed()
        .unwrap();

    vhosts.add(vhost("alpha", &["alpha"]));
    clusters.insert_resource(Cluster::new("alpha"));

    assert_eq!(vhosts.len(), 1);
    assert_eq!(clusters.len(), 1);
}

#[test]
fn cache_concurrent_access() {
    let cache = Arc::new(VirtualHostCache::new());
    let mut handles = vec![];

    for i in 0..10 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for j in 0..100 {
                let name = format!("vh-{:02}-{:03}", i, j);
                let domain = format!("{name}.example.com");
                cache.add(vhost(&name, &[domain.as_str()]));
                let values = cache.values();
                assert!(values.windows(2).all(|w| w[0].name < w[1].name));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.len(), 1000);
    assert_eq!(cache.stats().accepted(), 1000);
}

#[test]
fn same_name_concurrent_writes_leave_one_entry() {
    let cache = Arc::new(VirtualHostCache::new());
    let mut handles = vec![];

    for i in 0..8 {
        let cache = Arc::clone(&cache);
        handles.push(thread::spawn(move || {
            for j in 0..50 {
                let domain = format!("writer-{}-{}.example.com", i, j);
                cache.add(vhost("shared", &[domain.as_str()]));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    let values = cache.values();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0].name, "shared");
    assert_eq!(values[0].domains.len(), 1);
}

proptest! {
    #[test]
    fn keyed_insert_replaces_only_its_key(
        keys in prop::collection::vec("[a-c]{1,2}", 1..20),
        target in "[a-c]{1,2}",
    ) {
        let clusters = ClusterCache::new();
        for key in &keys {
            clusters.insert(key.as_str(), Cluster::new(key.as_str()));
        }
        let before = clusters.to_map();

        clusters.insert(target.as_str(), Cluster::new("replacement"));
        let after = clusters.to_map();

        prop_assert_eq!(&after[&target], &Cluster::new("replacement"));
        for (key, value) in &before {
            if key != &target {
                prop_assert_eq!(after.get(key), Some(value));
            }
        }
    }

    #[test]
    fn keyed_remove_is_idempotent(
        keys in prop::collection::vec("[a-c]{1,2}", 0..10),
        target in "[a-c]{1,2}",
    ) {
        let clusters = ClusterCache::new();
        for key in &keys {
            clusters.insert(key.as_str(), Cluster::new(key.as_str()));
        }

        clusters.remove(&target);
        let once = clusters.to_map();
        clusters.remove(&target);

        prop_assert_eq!(once, clusters.to_map());
    }
}
