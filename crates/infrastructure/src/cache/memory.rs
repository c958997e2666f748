use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bytes::Bytes;
use lru::LruCache;
use tracing::debug;

use super::CacheMetrics;

struct MemoryEntry {
    payload: Bytes,
    stored_at: Instant,
}

struct MemoryState {
    entries: LruCache<String, MemoryEntry>,
    total_bytes: usize,
}

/// In-memory tier: recency-ordered entries whose summed payload sizes stay
/// under a byte budget. Entries can disappear under memory pressure before
/// they expire; that only costs a disk read.
///
/// The lock is held for map operations only, never across I/O.
pub struct MemoryTier {
    state: Mutex<MemoryState>,
    budget_bytes: usize,
    expiration: Duration,
    metrics: Arc<CacheMetrics>,
}

impl MemoryTier {
    pub fn new(budget_bytes: usize, expiration: Duration, metrics: Arc<CacheMetrics>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                entries: LruCache::unbounded(),
                total_bytes: 0,
            }),
            budget_bytes,
            expiration,
            metrics,
        }
    }

    pub fn get(&self, key: &str) -> Option<Bytes> {
        let mut state = self.lock();

        match state.entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() <= self.expiration => {
                return Some(entry.payload.clone());
            }
            Some(_) => {}
            None => return None,
        }

        // Expired in place: drop it so the budget is released.
        if let Some(entry) = state.entries.pop(key) {
            state.total_bytes = state.total_bytes.saturating_sub(entry.payload.len());
        }
        None
    }

    pub fn put(&self, key: String, payload: Bytes) {
        let cost = payload.len();
        let mut state = self.lock();

        if let Some(previous) = state.entries.put(
            key,
            MemoryEntry {
                payload,
                stored_at: Instant::now(),
            },
        ) {
            state.total_bytes = state.total_bytes.saturating_sub(previous.payload.len());
        }
        state.total_bytes += cost;

        let mut evicted = 0u64;
        while state.total_bytes > self.budget_bytes {
            match state.entries.pop_lru() {
                Some((_, entry)) => {
                    state.total_bytes = state.total_bytes.saturating_sub(entry.payload.len());
                    evicted += 1;
                }
                None => break,
            }
        }
        if evicted > 0 {
            self.metrics
                .evictions
                .fetch_add(evicted, AtomicOrdering::Relaxed);
            debug!(evicted, total_bytes = state.total_bytes, "memory tier over budget");
        }
    }

    pub fn remove(&self, key: &str) {
        let mut state = self.lock();
        if let Some(entry) = state.entries.pop(key) {
            state.total_bytes = state.total_bytes.saturating_sub(entry.payload.len());
        }
    }

    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.total_bytes = 0;
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn total_bytes(&self) -> usize {
        self.lock().total_bytes
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // A panic while holding the guard leaves plain data behind; the
        // cache keeps serving rather than propagating the poison.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
