use std::fmt;

use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator, value_objects::Fare};

/// A single trip record.
///
/// Rider and driver are plain names, not links into the registries: a ride
/// may name people that were never registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ride {
    origin: String,
    destination: String,
    rider_name: String,
    driver_name: String,
}

impl Ride {
    /// Store the four fields as given. No validation happens here; see
    /// [`Ride::validate`].
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        rider_name: impl Into<String>,
        driver_name: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            rider_name: rider_name.into(),
            driver_name: driver_name.into(),
        }
    }

    /// Check that every field is non-empty.
    ///
    /// Only called by the application layer when strict validation is
    /// enabled.
    pub fn validate(&self) -> Result<(), DomainError> {
        DomainValidator::require_non_empty(&self.origin, DomainError::EmptyOrigin)?;
        DomainValidator::require_non_empty(&self.destination, DomainError::EmptyDestination)?;
        DomainValidator::require_non_empty(&self.rider_name, DomainError::EmptyRider)?;
        DomainValidator::require_non_empty(&self.driver_name, DomainError::EmptyDriver)?;
        Ok(())
    }

    /// `distance_km * 2.5`. Negative distances give negative fares.
    pub fn calculate_fare(&self, distance_km: f64) -> f64 {
        Fare::for_distance(distance_km).amount()
    }

    /// `"Origin: {o}, Destination: {d}, Rider: {r}, Driver: {dr}"`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Trimmed, case-insensitive comparison against `query`.
    pub fn origin_matches(&self, query: &str) -> bool {
        normalize(&self.origin) == normalize(query)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn rider_name(&self) -> &str {
        &self.rider_name
    }

    pub fn driver_name(&self) -> &str {
        &self.driver_name
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Origin: {}, Destination: {}, Rider: {}, Driver: {}",
            self.origin, self.destination, self.rider_name, self.driver_name
        )
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
