//! Ktour Infrastructure Layer

pub mod cache;
pub mod http;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ktour_application::ports::ResponseCache;
use ktour_application::{NoopCache, TourDataClient};
use ktour_domain::config::{KtourConfig, LoggingConfig};
use ktour_domain::KtourError;

pub use cache::{CacheMetrics, DiskTier, MemoryTier, TwoTierCache};
pub use http::{HttpExecutor, ReqwestExecutor, RetryingTransport};

/// Installs the process-wide tracing subscriber. `RUST_LOG` wins over the
/// configured level; calling this more than once is a no-op.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// Wires the executor, retry policy, and cache into a ready client.
///
/// Must run inside a Tokio runtime: the cache detaches its startup sweep
/// onto it. Cancelling the returned token stops a sweep still in flight;
/// nothing else listens to it.
pub fn build_client(
    config: &KtourConfig,
) -> Result<(TourDataClient, CancellationToken), KtourError> {
    config
        .validate()
        .map_err(|e| KtourError::InvalidParameter(e.to_string()))?;

    let shutdown = CancellationToken::new();

    let executor = Arc::new(ReqwestExecutor::new(&config.http)?);
    let transport = Arc::new(RetryingTransport::new(executor, config.retry.clone()));

    let cache: Arc<dyn ResponseCache> = if config.cache.enabled {
        TwoTierCache::new(&config.cache, shutdown.clone())
    } else {
        Arc::new(NoopCache)
    };

    let client = TourDataClient::new(&config.api, transport, cache);
    Ok((client, shutdown))
}
