//! Ridebook Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Ridebook
//! console application, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ridebook-cli (CLI)             │
//! │   (Interactive menu, drives services)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (RideService, PeopleService)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (RideStore, DriverStore, RiderStore)    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     ridebook-adapters (In-memory)       │
//! │ (InMemoryRideStore, InMemoryDrivers...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │  (Person, Driver, Rider, Ride, Ledger)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use ridebook_adapters::InMemoryRideStore;
//! use ridebook_core::{
//!     application::RideService,
//!     domain::Ride,
//! };
//!
//! let mut service = RideService::new(Box::new(InMemoryRideStore::new()));
//! service.add(Ride::new("Downtown", "Airport", "Bia", "Ana")).unwrap();
//! let found = service.find_by_origin(" downtown ").unwrap();
//! assert_eq!(found.len(), 1);
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PeopleService, RideService, UpdateOutcome,
        ports::{DriverStore, RideStore, RiderStore},
    };
    pub use crate::domain::{
        DomainError, Driver, DriverEvent, Fare, Person, Ride, RideLedger, RideListing, Rider,
    };
    pub use crate::error::{RidebookError, RidebookResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
