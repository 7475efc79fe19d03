//! Infrastructure adapters for Ridebook.
//!
//! This crate implements the ports defined in `ridebook-core::application::ports`.
//! Everything is held in process memory and lost on exit.

pub mod registry;
pub mod ride_store;

// Re-export commonly used adapters
pub use registry::{InMemoryDriverRegistry, InMemoryRiderRegistry};
pub use ride_store::InMemoryRideStore;
