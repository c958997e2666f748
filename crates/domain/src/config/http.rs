use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Transport timeouts. Fixed per process; operations cannot tune these per
/// call.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Cap on a single request, connect through body end.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Outer cap on one whole attempt, including retries of reads on a
    /// stalled body. Always at least the request timeout in practice.
    #[serde(default = "default_resource_timeout_secs")]
    pub resource_timeout_secs: u64,

    #[serde(default = "default_pool_max_idle_per_host")]
    pub pool_max_idle_per_host: usize,
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn resource_timeout(&self) -> Duration {
        Duration::from_secs(self.resource_timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_request_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            resource_timeout_secs: default_resource_timeout_secs(),
            pool_max_idle_per_host: default_pool_max_idle_per_host(),
        }
    }
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_connect_timeout_secs() -> u64 {
    5
}

fn default_resource_timeout_secs() -> u64 {
    30
}

fn default_pool_max_idle_per_host() -> usize {
    8
}
