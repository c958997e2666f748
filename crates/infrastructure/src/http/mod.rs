mod executor;
mod preview;
mod retry;

pub use executor::{HttpExecutor, ReqwestExecutor};
pub use retry::RetryingTransport;
