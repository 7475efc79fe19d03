// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Ridebook.
//!
//! Pure business logic: people, rides, the ride ledger and fares.
//!
//! - **No I/O**: storage and console access go through ports
//! - **Fallible constructors**: invalid people never exist as values
//! - **Plain-name references**: rides hold names, not handles, so there is
//!   no consistency check against the registries

pub mod entities;
pub mod error;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{Driver, DriverEvent, Person, Ride, RideLedger, RideListing, Rider};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{Distance, Fare, RATE_PER_KM};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Scenario tests across entities
    // ========================================================================

    #[test]
    fn ride_names_are_not_checked_against_people() {
        let driver = Driver::new("Ana", "ana@x.com", "11999999999", "CNH1", "car").unwrap();
        let ride = Ride::new("A", "B", "Nobody", "Someone Else");

        assert_ne!(ride.driver_name(), driver.name());
        assert!(ride.validate().is_ok());
    }

    #[test]
    fn finishing_a_ride_leaves_the_ledger_alone() {
        let mut driver = Driver::new("Ana", "ana@x.com", "11999999999", "CNH1", "car").unwrap();
        let mut ledger = RideLedger::new();
        ledger.add(Ride::new("A", "B", "Bia", "Ana"));

        driver.finish_ride();

        assert_eq!(driver.completed_rides(), 1);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn ledger_scenario_from_two_rides() {
        let mut ledger = RideLedger::new();
        ledger.add(Ride::new("A", "B", "Rider1", "Driver1"));
        ledger.add(Ride::new("a ", " Z", "Rider2", "Driver2"));

        assert_eq!(ledger.find_by_origin("A").len(), 2);

        let before = ledger.len();
        assert!(ledger.remove_by_origin("A"));
        assert_eq!(before - ledger.len(), 2);
    }

    #[test]
    fn fare_through_distance_and_ride_agree() {
        let ride = Ride::new("X", "Y", "R", "D");
        let distance = Distance::parse("10").unwrap();
        assert_eq!(ride.calculate_fare(distance.km()), distance.fare().amount());
        assert_eq!(RATE_PER_KM, 2.5);
    }
}
