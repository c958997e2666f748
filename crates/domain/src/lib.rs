//! Ktour Domain Layer
pub mod arrange;
pub mod config;
pub mod content_type;
pub mod errors;
pub mod models;

pub use arrange::Arrange;
pub use config::KtourConfig;
pub use content_type::ContentTypeId;
pub use errors::KtourError;
pub use models::{CodeEntry, Page, TourDetail, TourImage, TourItem};
