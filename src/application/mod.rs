pub mod carousel;
pub mod cart;
pub mod commands;
pub mod dto;
pub mod editor;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
pub mod snapshot;
pub mod uploads;

pub use error::ApplicationResult;
