use async_trait::async_trait;
use bytes::Bytes;
use ktour_domain::KtourError;

/// A completed HTTP exchange. A non-2xx status is a formed reply, not a
/// transport failure; the validation step turns it into `KtourError::Http`.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub status: u16,
    pub body: Bytes,
}

impl TransportReply {
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[async_trait]
pub trait TourTransport: Send + Sync {
    /// One logical GET of `url`. Implementations may attempt the wire call
    /// several times before giving up with `KtourError::Network`.
    async fn fetch(&self, url: &str) -> Result<TransportReply, KtourError>;
}
