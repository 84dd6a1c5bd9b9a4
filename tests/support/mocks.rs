// tests/support/mocks.rs
pub mod catalog;
pub mod media;
pub mod time;

pub use catalog::MemoryCatalog;
pub use media::MemoryBlobStore;
pub use time::{FixedClock, fixed_now};
