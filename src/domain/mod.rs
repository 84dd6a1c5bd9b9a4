pub mod cart;
pub mod carousel;
pub mod category;
pub mod errors;
pub mod media;
pub mod product;
pub mod review;
pub mod slug;
