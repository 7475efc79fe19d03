//! People Service - driver and rider registries.
//!
//! Registries only grow. Drivers are looked up by exact name for the
//! start/finish actions; an unknown name is an ordinary `None`, not an error.

use tracing::{debug, info};

use crate::{
    application::ports::{DriverStore, RiderStore},
    domain::{Driver, DriverEvent, Rider},
    error::RidebookResult,
};

/// Service for registering people and running driver actions.
pub struct PeopleService {
    drivers: Box<dyn DriverStore>,
    riders: Box<dyn RiderStore>,
}

impl PeopleService {
    pub fn new(drivers: Box<dyn DriverStore>, riders: Box<dyn RiderStore>) -> Self {
        Self { drivers, riders }
    }

    pub fn register_driver(&mut self, driver: Driver) -> RidebookResult<()> {
        info!(driver = %driver.name(), vehicle = %driver.vehicle_type(), "Driver registered");
        self.drivers.register(driver)
    }

    pub fn register_rider(&mut self, rider: Rider) -> RidebookResult<()> {
        info!(rider = %rider.name(), "Rider registered");
        self.riders.register(rider)
    }

    /// Start a ride for the named driver. `None` if no such driver.
    pub fn start_ride(&mut self, driver_name: &str) -> RidebookResult<Option<DriverEvent>> {
        let event = self
            .drivers
            .find_by_name_mut(driver_name)?
            .map(|driver| driver.start_ride());
        if event.is_none() {
            debug!(driver = %driver_name, "Driver not found");
        }
        Ok(event)
    }

    /// Finish a ride for the named driver. `None` if no such driver.
    pub fn finish_ride(&mut self, driver_name: &str) -> RidebookResult<Option<DriverEvent>> {
        let event = self
            .drivers
            .find_by_name_mut(driver_name)?
            .map(|driver| driver.finish_ride());
        if event.is_none() {
            debug!(driver = %driver_name, "Driver not found");
        }
        Ok(event)
    }

    pub fn drivers(&self) -> RidebookResult<Vec<Driver>> {
        self.drivers.list()
    }

    pub fn riders(&self) -> RidebookResult<Vec<Rider>> {
        self.riders.list()
    }
}
