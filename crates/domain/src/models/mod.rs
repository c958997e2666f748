pub mod code;
pub mod de;
pub mod detail;
pub mod image;
pub mod item;
pub mod page;

pub use code::CodeEntry;
pub use detail::TourDetail;
pub use image::TourImage;
pub use item::TourItem;
pub use page::Page;
