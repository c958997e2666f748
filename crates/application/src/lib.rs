//! Ktour Application Layer
pub mod client;
pub mod envelope;
pub mod params;
pub mod ports;
pub mod request;

pub use client::TourDataClient;
pub use params::{
    AreaCodeParams, AreaListParams, CategoryCodeParams, DetailParams, ImageParams,
    KeywordSearchParams, LdongCodeParams, LocationListParams, Paging, SyncListParams,
};
pub use ports::{NoopCache, ResponseCache, TourTransport, TransportReply};
pub use request::{Endpoint, RequestBuilder};
