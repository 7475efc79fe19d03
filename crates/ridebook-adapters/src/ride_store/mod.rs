//! Ride store adapters.

pub mod memory;

pub use memory::InMemoryRideStore;
