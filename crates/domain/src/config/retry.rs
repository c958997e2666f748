use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetryConfig {
    /// Re-attempts after the first try; total attempts = max_retries + 1.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Linear backoff step. The sleep before re-attempt n (1-based) is
    /// `backoff_step_ms * n`, so 500ms yields 0.5s then 1.0s.
    #[serde(default = "default_backoff_step_ms")]
    pub backoff_step_ms: u64,
}

impl RetryConfig {
    pub fn backoff_delay(&self, retry_no: u32) -> Duration {
        Duration::from_millis(self.backoff_step_ms.saturating_mul(retry_no as u64))
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            backoff_step_ms: default_backoff_step_ms(),
        }
    }
}

fn default_max_retries() -> u32 {
    2
}

fn default_backoff_step_ms() -> u64 {
    500
}
