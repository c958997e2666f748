mod builder;
mod endpoint;

pub use builder::RequestBuilder;
pub use endpoint::Endpoint;
