//! Driver and rider registry adapters.

pub mod memory;

pub use memory::{InMemoryDriverRegistry, InMemoryRiderRegistry};
