use std::fmt;

use serde::Serialize;

use super::person::Person;
use crate::domain::{error::DomainError, validation::DomainValidator};

/// A registered driver.
///
/// `completed_rides` is the only mutable field and only grows, one step per
/// [`Driver::finish_ride`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Driver {
    person: Person,
    license_id: String,
    vehicle_type: String,
    completed_rides: u32,
}

impl Driver {
    /// Validate the person fields, then the license. `vehicle_type` is free text.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        license_id: impl Into<String>,
        vehicle_type: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let person = Person::new(name, email, phone)?;
        let license_id = license_id.into();
        DomainValidator::validate_license(&license_id)?;

        Ok(Self {
            person,
            license_id,
            vehicle_type: vehicle_type.into(),
            completed_rides: 0,
        })
    }

    /// Announce the start of a trip. Does not change any state.
    pub fn start_ride(&self) -> DriverEvent {
        let event = DriverEvent::Started {
            driver: self.person.name().to_owned(),
        };
        tracing::info!(driver = %self.person.name(), "Ride started");
        event
    }

    /// Count one more completed ride and announce it.
    ///
    /// Not linked to any ride record; only the counter moves.
    pub fn finish_ride(&mut self) -> DriverEvent {
        self.completed_rides += 1;
        tracing::info!(
            driver = %self.person.name(),
            completed = self.completed_rides,
            "Ride finished"
        );
        DriverEvent::Finished {
            driver: self.person.name().to_owned(),
            completed_rides: self.completed_rides,
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn license_id(&self) -> &str {
        &self.license_id
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn completed_rides(&self) -> u32 {
        self.completed_rides
    }
}

/// Notification produced by a driver action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverEvent {
    Started { driver: String },
    Finished { driver: String, completed_rides: u32 },
}

impl fmt::Display for DriverEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Started { driver } => write!(f, "Driver {driver} started the ride"),
            Self::Finished { driver, .. } => write!(f, "Driver {driver} finished the ride"),
        }
    }
}
