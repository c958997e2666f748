pub mod api;
pub mod cache;
pub mod errors;
pub mod http;
pub mod logging;
pub mod retry;
pub mod root;

pub use api::ApiConfig;
pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::LoggingConfig;
pub use retry::RetryConfig;
pub use root::KtourConfig;
