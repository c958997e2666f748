use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use bytes::Bytes;
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, warn};

use super::CacheMetrics;

/// Disk tier: one file per key, named by the sha256 of the key. The file's
/// modification time is the entry's write timestamp, so freshness is checked
/// on every read; nothing evicts proactively between sweeps.
///
/// Every filesystem error here is absorbed: logged, counted, and turned into
/// a miss or a no-op. Same-key write races resolve last-writer-wins.
pub struct DiskTier {
    directory: PathBuf,
    expiration: Duration,
    metrics: Arc<CacheMetrics>,
}

impl DiskTier {
    pub fn new(directory: PathBuf, expiration: Duration, metrics: Arc<CacheMetrics>) -> Self {
        if let Err(e) = std::fs::create_dir_all(&directory) {
            warn!(directory = %directory.display(), error = %e, "cache directory unavailable");
            metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
        }
        Self {
            directory,
            expiration,
            metrics,
        }
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        let digest = Sha256::digest(key.as_bytes());
        let name: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        self.directory.join(format!("{}.bin", name))
    }

    pub async fn read(&self, key: &str) -> Option<Bytes> {
        let path = self.entry_path(key);

        let meta = match fs::metadata(&path).await {
            Ok(meta) => meta,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file stat failed");
                self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
                return None;
            }
        };

        if self.is_stale(meta.modified().ok()) {
            debug!(path = %path.display(), "removing stale cache file");
            self.remove_file(&path).await;
            return None;
        }

        match fs::read(&path).await {
            Ok(payload) => Some(Bytes::from(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file read failed");
                self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
                None
            }
        }
    }

    pub async fn write(&self, key: &str, payload: &Bytes) {
        let path = self.entry_path(key);
        if let Err(e) = fs::write(&path, payload).await {
            warn!(path = %path.display(), error = %e, "cache file write failed");
            self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
        }
    }

    pub async fn remove(&self, key: &str) {
        let path = self.entry_path(key);
        self.remove_file(&path).await;
    }

    pub async fn clear(&self) {
        self.for_each_file(|_| true).await;
    }

    /// Deletes every file older than the expiration window. Returns how many
    /// files were removed.
    pub async fn sweep_expired(&self) -> usize {
        self.for_each_file(|modified| self.is_stale(modified)).await
    }

    fn is_stale(&self, modified: Option<SystemTime>) -> bool {
        // An unreadable mtime counts as fresh; the sweep will retry later.
        let Some(modified) = modified else {
            return false;
        };
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        age > self.expiration
    }

    async fn for_each_file<F>(&self, should_remove: F) -> usize
    where
        F: Fn(Option<SystemTime>) -> bool,
    {
        let mut dir = match fs::read_dir(&self.directory).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return 0,
            Err(e) => {
                warn!(directory = %self.directory.display(), error = %e, "cache directory walk failed");
                self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
                return 0;
            }
        };

        let mut removed = 0usize;
        loop {
            let entry = match dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    warn!(directory = %self.directory.display(), error = %e, "cache directory walk failed");
                    self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
                    break;
                }
            };

            let Ok(meta) = entry.metadata().await else {
                continue;
            };
            if !meta.is_file() {
                continue;
            }
            if should_remove(meta.modified().ok()) && self.remove_file(&entry.path()).await {
                removed += 1;
            }
        }
        removed
    }

    async fn remove_file(&self, path: &Path) -> bool {
        match fs::remove_file(path).await {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => true,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cache file removal failed");
                self.metrics.disk_errors.fetch_add(1, AtomicOrdering::Relaxed);
                false
            }
        }
    }
}
