//! Load tests for the resource caches.
//!
//! These tests verify behaviour with many resources and many threads:
//! - 10,000 virtual hosts in one collection
//! - Parallel writers with concurrent snapshot readers
//! - Snapshot cost with a large collection
//!
//! Run with: `cargo test --package integration-tests --test load_tests -- --nocapture`

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Instant;

use integration_tests::{app_vhost, init_tracing};
use xds_resource_cache::prelude::*;

/// The collection handles 10,000 virtual hosts.
#[test]
fn test_10000_virtual_hosts() {
    let cache = VirtualHostCache::new();
    let num_resources = 10_000;

    let start = Instant::now();
    // Insert in reverse so the sort has work to do.
    for i in (0..num_resources).rev() {
        cache.add(app_vhost(i));
    }
    let add_duration = start.elapsed();
    println!(
        "Added {} virtual hosts in {:?} ({:.2} µs/op)",
        num_resources,
        add_duration,
        add_duration.as_micros() as f64 / num_resources as f64
    );

    let start = Instant::now();
    let values = cache.values();
    println!("Snapshot of {} resources in {:?}", values.len(), start.elapsed());

    assert_eq!(values.len(), num_resources);
    assert!(values.windows(2).all(|w| w[0].name < w[1].name));
    assert_eq!(values[0].name, "default/app-00000");
    assert_eq!(values[num_resources - 1].name, "default/app-09999");
}

/// Writers and readers run in parallel; every snapshot is sorted, valid and
/// never changes after it was taken.
#[test]
fn test_parallel_writers_and_readers() {
    init_tracing();
    let cache = Arc::new(VirtualHostCache::new());
    let num_writers = 8;
    let per_writer = 250;
    let barrier = Arc::new(Barrier::new(num_writers + 4));
    let done = Arc::new(AtomicBool::new(false));
    let snapshots_taken = Arc::new(AtomicU64::new(0));

    let mut writers = vec![];
    for w in 0..num_writers {
        let cache = Arc::clone(&cache);
        let barrier = Arc::clone(&barrier);
        writers.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..per_writer {
                let idx = w * per_writer + i;
                cache.add(app_vhost(idx));
                if i % 5 == 0 {
                    // Invalid writes must never show up.
                    cache.add(VirtualHost::new(format!("bad-{}", idx), [""]));
                }
                if i % 10 == 9 {
                    cache.remove(&app_vhost(idx - 1).name);
                }
            }
        }));
    }

    let mut readers = vec![];
    for _ in 0..4 {
        let cache = Arc::clone(&cache);
        let barrier = Arc::clone(&barrier);
        let done = Arc::clone(&done);
        let snapshots_taken = Arc::clone(&snapshots_taken);
        readers.push(thread::spawn(move || {
            barrier.wait();
            while !done.load(Ordering::Relaxed) {
                let snapshot = cache.values();
                let copy = snapshot.clone();

                assert!(snapshot.windows(2).all(|w| w[0].name < w[1].name));
                assert!(snapshot.iter().all(|vh| !vh.name.starts_with("bad-")));

                // Let writers make progress, then check the snapshot held.
                thread::yield_now();
                assert_eq!(snapshot, copy);
                snapshots_taken.fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    for writer in writers {
        writer.join().expect("writer panicked");
    }
    done.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().expect("reader panicked");
    }

    let removed_per_writer = per_writer / 10;
    assert_eq!(cache.len(), num_writers * (per_writer - removed_per_writer));
    assert_eq!(cache.stats().removed(), (num_writers * removed_per_writer) as u64);
    assert_eq!(cache.stats().rejected(), (num_writers * per_writer / 5) as u64);
    println!(
        "{} snapshots taken during {} writes",
        snapshots_taken.load(Ordering::Relaxed),
        num_writers * per_writer
    );
}

/// Keyed cache under parallel upserts of overlapping keys.
#[test]
fn test_keyed_cache_parallel_upserts() {
    let clusters = Arc::new(ClusterCache::new());
    let mut handles = vec![];

    for t in 0..8 {
        let clusters = Arc::clone(&clusters);
        handles.push(thread::spawn(move || {
            for i in 0..1000 {
                let name = format!("cluster-{}", i % 100);
                let policy = if t % 2 == 0 {
                    LbPolicy::RoundRobin
                } else {
                    LbPolicy::Random
                };
                clusters.insert(name.clone(), Cluster::new(name).with_lb_policy(policy));
            }
        }));
    }

    for handle in handles {
        handle.join().expect("thread panicked");
    }

    assert_eq!(clusters.len(), 100);
    assert_eq!(clusters.stats().accepted(), 8000);
}
