// src/application/ports/mod.rs
pub mod cart;
pub mod storage;
pub mod time;
