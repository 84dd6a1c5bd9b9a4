pub mod carousel;
pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod media;

pub use carousel::{CarouselSnapshot, HeroDto, SlideDto};
pub use cart::{CartDto, CartLineDto};
pub use catalog::{CatalogSnapshot, CategoryDto, ProductDto, ReviewDto};
pub use dashboard::DashboardStatsDto;
pub use media::UploadedImageDto;
