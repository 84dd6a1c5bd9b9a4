// src/application/commands/products/mod.rs
mod delete;
mod save;
mod service;

pub use delete::DeleteProductCommand;
pub use save::ProductForm;
pub use service::ProductCommandService;
