use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum KtourError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("HTTP status {0}")]
    Http(u16),

    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl KtourError {
    /// Transport-class failures are worth a user-triggered retry; the rest
    /// indicate a caller or upstream defect and are terminal for the request.
    pub fn is_retryable(&self) -> bool {
        matches!(self, KtourError::Network(_) | KtourError::Http(_))
    }
}
