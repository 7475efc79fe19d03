//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from storage.
//! The `ridebook-adapters` crate provides in-memory implementations.
//!
//! ## Design Notes
//!
//! - One owner, one thread: mutation takes `&mut self`, there is no locking
//! - Lookups by origin use the trimmed, case-insensitive rule of
//!   [`crate::domain::Ride::origin_matches`]
//! - Driver lookup by name is exact and case-sensitive

use crate::domain::{Driver, Ride, Rider};
use crate::error::RidebookResult;

/// Port for the ride ledger.
///
/// Implemented by:
/// - `ridebook_adapters::ride_store::InMemoryRideStore`
#[cfg_attr(test, mockall::automock)]
pub trait RideStore {
    /// Append a ride. Duplicates are allowed.
    fn add(&mut self, ride: Ride) -> RidebookResult<()>;

    /// Every ride, in insertion order.
    fn list(&self) -> RidebookResult<Vec<Ride>>;

    /// Every ride whose origin matches.
    fn find_by_origin(&self, origin: &str) -> RidebookResult<Vec<Ride>>;

    /// Remove every ride whose origin matches; returns how many were removed.
    fn remove_by_origin(&mut self, origin: &str) -> RidebookResult<usize>;

    /// Number of stored rides.
    fn len(&self) -> RidebookResult<usize>;
}

/// Port for the driver registry.
///
/// Implemented by:
/// - `ridebook_adapters::registry::InMemoryDriverRegistry`
pub trait DriverStore {
    /// Add a driver. Names are not required to be unique.
    fn register(&mut self, driver: Driver) -> RidebookResult<()>;

    /// The driver with exactly this name. With duplicates, the most
    /// recently registered one wins.
    fn find_by_name_mut(&mut self, name: &str) -> RidebookResult<Option<&mut Driver>>;

    /// Every driver, in registration order.
    fn list(&self) -> RidebookResult<Vec<Driver>>;
}

/// Port for the rider registry.
///
/// Implemented by:
/// - `ridebook_adapters::registry::InMemoryRiderRegistry`
pub trait RiderStore {
    /// Add a rider. Names are not required to be unique.
    fn register(&mut self, rider: Rider) -> RidebookResult<()>;

    /// Every rider, in registration order.
    fn list(&self) -> RidebookResult<Vec<Rider>>;
}
