use async_trait::async_trait;
use bytes::Bytes;

/// Byte-level response cache keyed by the canonical request URL.
///
/// Implementations absorb their own faults: a broken tier may cost a hit,
/// never an error on the request path. Callers always receive an owned copy
/// of the payload.
#[async_trait]
pub trait ResponseCache: Send + Sync {
    /// Cached payload for `key`, absent on miss or expiry.
    async fn get(&self, key: &str) -> Option<Bytes>;

    /// Stores `payload` under `key`, overwriting any previous entry.
    async fn put(&self, key: &str, payload: Bytes);

    /// Drops `key` from every tier; idempotent.
    async fn remove(&self, key: &str);

    /// Drops everything; idempotent. Never called on the request path.
    async fn clear(&self);
}

/// Cache that stores nothing; wired in when caching is disabled.
#[derive(Debug, Default)]
pub struct NoopCache;

#[async_trait]
impl ResponseCache for NoopCache {
    async fn get(&self, _key: &str) -> Option<Bytes> {
        None
    }

    async fn put(&self, _key: &str, _payload: Bytes) {}

    async fn remove(&self, _key: &str) {}

    async fn clear(&self) {}
}
