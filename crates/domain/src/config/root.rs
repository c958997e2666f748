use serde::{Deserialize, Serialize};

use super::api::ApiConfig;
use super::cache::CacheConfig;
use super::errors::ConfigError;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::retry::RetryConfig;

/// Main configuration structure for the ktour client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct KtourConfig {
    /// Upstream service identity (base URL, credential, client tags)
    #[serde(default)]
    pub api: ApiConfig,

    /// Transport timeouts
    #[serde(default)]
    pub http: HttpConfig,

    /// Retry policy for transport-level failures
    #[serde(default)]
    pub retry: RetryConfig,

    /// Two-tier response cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl KtourConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ktour.toml in current directory
    /// 3. Default configuration
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            Self::from_file(path)
        } else if std::path::Path::new("ktour.toml").exists() {
            Self::from_file("ktour.toml")
        } else {
            Ok(Self::default())
        }
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values the client cannot operate with. Called by the
    /// composition root rather than by `load`, so a default config can be
    /// built first and filled in programmatically.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.service_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "api.service_key must be set".to_string(),
            ));
        }
        if self.api.default_page_size == 0 {
            return Err(ConfigError::Validation(
                "api.default_page_size must be at least 1".to_string(),
            ));
        }
        if self.retry.backoff_step_ms == 0 {
            return Err(ConfigError::Validation(
                "retry.backoff_step_ms must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
