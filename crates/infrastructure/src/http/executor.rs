use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use ktour_application::ports::TransportReply;
use ktour_domain::config::HttpConfig;
use ktour_domain::KtourError;

/// One physical GET of a fully-built URL. `RetryingTransport` drives an
/// implementation of this seam; tests substitute a scripted one.
#[async_trait]
pub trait HttpExecutor: Send + Sync {
    async fn execute(&self, url: &str) -> Result<TransportReply, KtourError>;
}

/// reqwest-backed executor. Timeouts come from `HttpConfig` and are fixed
/// for the life of the process; the connection pool is shared by every
/// operation.
pub struct ReqwestExecutor {
    client: Client,
    resource_timeout: Duration,
}

impl ReqwestExecutor {
    pub fn new(config: &HttpConfig) -> Result<Self, KtourError> {
        let client = Client::builder()
            .use_rustls_tls()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .build()
            .map_err(|e| KtourError::Network(format!("HTTP client construction failed: {e}")))?;

        Ok(Self {
            client,
            resource_timeout: config.resource_timeout(),
        })
    }
}

#[async_trait]
impl HttpExecutor for ReqwestExecutor {
    async fn execute(&self, url: &str) -> Result<TransportReply, KtourError> {
        let exchange = async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(map_reqwest_error)?;
            let status = response.status().as_u16();
            let body = response.bytes().await.map_err(map_reqwest_error)?;
            Ok(TransportReply { status, body })
        };

        // Outer cap over connect, send, and the whole body read.
        tokio::time::timeout(self.resource_timeout, exchange)
            .await
            .map_err(|_| {
                KtourError::Network(format!(
                    "request exceeded resource timeout of {}s",
                    self.resource_timeout.as_secs()
                ))
            })?
    }
}

fn map_reqwest_error(e: reqwest::Error) -> KtourError {
    if e.is_builder() {
        KtourError::InvalidUrl(e.to_string())
    } else {
        KtourError::Network(e.to_string())
    }
}
