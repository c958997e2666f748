use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Directory for the disk tier; one file per cache key.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Upper bound on the summed payload sizes held by the memory tier.
    #[serde(default = "default_memory_budget_bytes")]
    pub memory_budget_bytes: usize,

    /// Entries older than this are treated as absent and removed.
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: u64,
}

impl CacheConfig {
    pub fn expiration(&self) -> Duration {
        Duration::from_secs(self.expiration_hours.saturating_mul(3600))
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            directory: default_directory(),
            memory_budget_bytes: default_memory_budget_bytes(),
            expiration_hours: default_expiration_hours(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_directory() -> PathBuf {
    std::env::temp_dir().join("ktour-cache")
}

fn default_memory_budget_bytes() -> usize {
    50 * 1024 * 1024
}

fn default_expiration_hours() -> u64 {
    24
}
