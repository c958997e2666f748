use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Counters shared by both tiers. Read-only for callers; the cache updates
/// them on every access.
#[derive(Default)]
pub struct CacheMetrics {
    pub memory_hits: AtomicU64,
    pub disk_hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub evictions: AtomicU64,
    pub disk_errors: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = (self.memory_hits.load(AtomicOrdering::Relaxed)
            + self.disk_hits.load(AtomicOrdering::Relaxed)) as f64;
        let total = hits + self.misses.load(AtomicOrdering::Relaxed) as f64;

        if total > 0.0 {
            (hits / total) * 100.0
        } else {
            0.0
        }
    }
}
