//! Cache statistics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Statistics for cache operations.
///
/// All counters are atomic and can be safely accessed from multiple threads.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Number of writes that were stored.
    accepted: AtomicU64,
    /// Number of writes dropped by validation.
    rejected: AtomicU64,
    /// Number of removals that deleted an entry.
    removed: AtomicU64,
    /// Number of snapshots handed out.
    snapshots: AtomicU64,
}

impl CacheStats {
    /// Create new cache statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a stored write.
    #[inline]
    pub fn record_accept(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a write dropped by validation.
    #[inline]
    pub fn record_reject(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a removal that deleted an entry.
    #[inline]
    pub fn record_remove(&self) {
        self.removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a snapshot.
    #[inline]
    pub fn record_snapshot(&self) {
        self.snapshots.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total accepted writes.
    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    /// Get total rejected writes.
    #[inline]
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::Relaxed)
    }

    /// Get total removals.
    #[inline]
    pub fn removed(&self) -> u64 {
        self.removed.load(Ordering::Relaxed)
    }

    /// Get total snapshots handed out.
    #[inline]
    pub fn snapshots(&self) -> u64 {
        self.snapshots.load(Ordering::Relaxed)
    }

    /// Fraction of writes that were rejected (0.0 to 1.0).
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.rejected() as f64;
        let total = rejected + self.accepted() as f64;
        if total == 0.0 {
            0.0
        } else {
            rejected / total
        }
    }

    /// Reset all statistics.
    pub fn reset(&self) {
        self.accepted.store(0, Ordering::Relaxed);
        self.rejected.store(0, Ordering::Relaxed);
        self.removed.store(0, Ordering::Relaxed);
        self.snapshots.store(0, Ordering::Relaxed);
    }
}
