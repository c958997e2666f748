use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use ktour_application::ports::{TourTransport, TransportReply};
use ktour_domain::config::RetryConfig;
use ktour_domain::KtourError;

use super::executor::HttpExecutor;
use super::preview;

/// Bounded retry around one logical GET. Only transport-level failures are
/// re-attempted; a formed HTTP reply of any status ends the loop, as does
/// any non-network error. Attempts run strictly sequentially with a linear
/// backoff between them.
///
/// Dropping the returned future aborts the in-flight attempt and schedules
/// no further backoff or retry.
pub struct RetryingTransport {
    executor: Arc<dyn HttpExecutor>,
    policy: RetryConfig,
}

impl RetryingTransport {
    pub fn new(executor: Arc<dyn HttpExecutor>, policy: RetryConfig) -> Self {
        Self { executor, policy }
    }
}

#[async_trait]
impl TourTransport for RetryingTransport {
    async fn fetch(&self, url: &str) -> Result<TransportReply, KtourError> {
        let attempts = self.policy.max_retries.saturating_add(1);
        let mut last_error: Option<KtourError> = None;

        for attempt in 1..=attempts {
            debug!(method = "GET", url, attempt, attempts, "dispatching request");
            let started = Instant::now();

            match self.executor.execute(url).await {
                Ok(reply) => {
                    log_reply(url, attempt, started.elapsed(), &reply);
                    return Ok(reply);
                }
                Err(e @ KtourError::Network(_)) => {
                    warn!(
                        url,
                        attempt,
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        error = %e,
                        "attempt failed"
                    );
                    last_error = Some(e);
                    if attempt < attempts {
                        let delay = self.policy.backoff_delay(attempt);
                        debug!(delay_ms = delay.as_millis() as u64, "backing off before retry");
                        sleep(delay).await;
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error
            .unwrap_or_else(|| KtourError::Network("no attempts were made".to_string())))
    }
}

fn log_reply(url: &str, attempt: u32, elapsed: Duration, reply: &TransportReply) {
    let rendered = preview::render(&reply.body);
    if rendered.looks_like_markup {
        warn!(
            url,
            attempt,
            status = reply.status,
            elapsed_ms = elapsed.as_millis() as u64,
            body = %rendered.text,
            "response body looks like markup, not JSON"
        );
    } else {
        debug!(
            url,
            attempt,
            status = reply.status,
            elapsed_ms = elapsed.as_millis() as u64,
            body = %rendered.text,
            "response received"
        );
    }
}
