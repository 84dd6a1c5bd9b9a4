// src/application/commands/categories/mod.rs
mod delete;
mod save;
mod service;

pub use delete::DeleteCategoryCommand;
pub use save::CategoryForm;
pub use service::CategoryCommandService;
