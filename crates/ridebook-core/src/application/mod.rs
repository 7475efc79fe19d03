//! Application layer for Ridebook.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (RideService, PeopleService)
//! - **Ports**: Interface definitions (traits) for the stores
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. All rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PeopleService, RideService, UpdateOutcome};

// Re-export port traits (for adapter implementation)
pub use ports::{DriverStore, RideStore, RiderStore};

pub use error::ApplicationError;
