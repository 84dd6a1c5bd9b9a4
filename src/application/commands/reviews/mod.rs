// src/application/commands/reviews/mod.rs
mod delete;
mod service;
mod submit;

pub use delete::DeleteReviewCommand;
pub use service::ReviewCommandService;
pub use submit::SubmitReviewCommand;
