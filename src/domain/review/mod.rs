pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewReview, Review, ReviewListing};
pub use repository::ReviewRepository;
pub use value_objects::{Rating, ReviewComment, ReviewId, ReviewerName};
