//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ridebook-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RideStore`: the ride ledger
//!   - `DriverStore`: the driver registry
//!   - `RiderStore`: the rider registry
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (The interactive session in the CLI layer calls the services directly)

pub mod output;

pub use output::{DriverStore, RideStore, RiderStore};

#[cfg(test)]
pub use output::MockRideStore;
