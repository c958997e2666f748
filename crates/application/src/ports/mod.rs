mod response_cache;
mod transport;

pub use response_cache::{NoopCache, ResponseCache};
pub use transport::{TourTransport, TransportReply};
