mod disk;
mod memory;
mod metrics;

pub use disk::DiskTier;
pub use memory::MemoryTier;
pub use metrics::CacheMetrics;

use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use ktour_application::ports::ResponseCache;
use ktour_domain::config::CacheConfig;

/// Memory-over-disk response cache. Reads check memory first and fall back
/// to disk, promoting what they find; writes land in memory and are then
/// persisted. A disk-tier fault costs a hit, never an error.
pub struct TwoTierCache {
    memory: MemoryTier,
    disk: DiskTier,
    metrics: Arc<CacheMetrics>,
}

impl TwoTierCache {
    /// Builds the cache and detaches a one-shot sweep of expired disk files.
    /// Must be called from within a Tokio runtime; the sweep runs on it and
    /// stops early if `shutdown` fires first.
    pub fn new(config: &CacheConfig, shutdown: CancellationToken) -> Arc<Self> {
        let metrics = Arc::new(CacheMetrics::default());
        let cache = Arc::new(Self {
            memory: MemoryTier::new(
                config.memory_budget_bytes,
                config.expiration(),
                Arc::clone(&metrics),
            ),
            disk: DiskTier::new(
                config.directory.clone(),
                config.expiration(),
                Arc::clone(&metrics),
            ),
            metrics,
        });

        info!(
            directory = %config.directory.display(),
            memory_budget_bytes = config.memory_budget_bytes,
            expiration_hours = config.expiration_hours,
            "Initializing response cache"
        );

        let sweeper = Arc::clone(&cache);
        tokio::spawn(async move {
            tokio::select! {
                _ = shutdown.cancelled() => {
                    debug!("cache sweep cancelled before completion");
                }
                removed = sweeper.disk.sweep_expired() => {
                    if removed > 0 {
                        info!(removed, "swept expired cache files");
                    }
                }
            }
        });

        cache
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }
}

#[async_trait]
impl ResponseCache for TwoTierCache {
    async fn get(&self, key: &str) -> Option<Bytes> {
        if let Some(payload) = self.memory.get(key) {
            self.metrics.memory_hits.fetch_add(1, AtomicOrdering::Relaxed);
            return Some(payload);
        }

        if let Some(payload) = self.disk.read(key).await {
            self.metrics.disk_hits.fetch_add(1, AtomicOrdering::Relaxed);
            self.memory.put(key.to_string(), payload.clone());
            debug!(key, bytes = payload.len(), "disk hit promoted to memory");
            return Some(payload);
        }

        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        None
    }

    async fn put(&self, key: &str, payload: Bytes) {
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        self.memory.put(key.to_string(), payload.clone());
        self.disk.write(key, &payload).await;
    }

    async fn remove(&self, key: &str) {
        self.memory.remove(key);
        self.disk.remove(key).await;
    }

    async fn clear(&self) {
        self.memory.clear();
        self.disk.clear().await;
        info!("response cache cleared");
    }
}
