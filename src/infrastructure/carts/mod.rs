mod memory;

pub use memory::{CartLimits, InMemoryCartStore};
