//! In-memory driver and rider registries.
//!
//! Plain vectors in registration order. Nothing is ever removed.

use ridebook_core::{
    application::ports::{DriverStore, RiderStore},
    domain::{Driver, Rider},
    error::RidebookResult,
};

/// In-memory driver registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDriverRegistry {
    drivers: Vec<Driver>,
}

impl InMemoryDriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl DriverStore for InMemoryDriverRegistry {
    fn register(&mut self, driver: Driver) -> RidebookResult<()> {
        self.drivers.push(driver);
        Ok(())
    }

    fn find_by_name_mut(&mut self, name: &str) -> RidebookResult<Option<&mut Driver>> {
        // Last registration wins when names repeat.
        Ok(self.drivers.iter_mut().rev().find(|d| d.name() == name))
    }

    fn list(&self) -> RidebookResult<Vec<Driver>> {
        Ok(self.drivers.clone())
    }
}

/// In-memory rider registry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRiderRegistry {
    riders: Vec<Rider>,
}

impl InMemoryRiderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.riders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.riders.is_empty()
    }
}

impl RiderStore for InMemoryRiderRegistry {
    fn register(&mut self, rider: Rider) -> RidebookResult<()> {
        self.riders.push(rider);
        Ok(())
    }

    fn list(&self) -> RidebookResult<Vec<Rider>> {
        Ok(self.riders.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(name: &str, license: &str) -> Driver {
        Driver::new(name, "d@x.com", "11999999999", license, "car").unwrap()
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let mut registry = InMemoryDriverRegistry::new();
        registry.register(driver("Ana", "CNH1")).unwrap();

        assert!(registry.find_by_name_mut("Ana").unwrap().is_some());
        assert!(registry.find_by_name_mut("ana").unwrap().is_none());
        assert!(registry.find_by_name_mut(" Ana").unwrap().is_none());
    }

    #[test]
    fn latest_registration_wins() {
        let mut registry = InMemoryDriverRegistry::new();
        registry.register(driver("Ana", "OLD")).unwrap();
        registry.register(driver("Ana", "NEW")).unwrap();

        let found = registry.find_by_name_mut("Ana").unwrap().unwrap();
        assert_eq!(found.license_id(), "NEW");
    }

    #[test]
    fn mutation_through_lookup_sticks() {
        let mut registry = InMemoryDriverRegistry::new();
        registry.register(driver("Ana", "CNH1")).unwrap();

        if let Some(d) = registry.find_by_name_mut("Ana").unwrap() {
            d.finish_ride();
        }
        assert_eq!(registry.list().unwrap()[0].completed_rides(), 1);
    }

    #[test]
    fn riders_kept_in_order() {
        let mut registry = InMemoryRiderRegistry::new();
        registry
            .register(Rider::new("Bia", "bia@x.com", "1188887777", "pix").unwrap())
            .unwrap();
        registry
            .register(Rider::new("Caio", "caio@x.com", "1177776666", "card").unwrap())
            .unwrap();

        assert_eq!(registry.len(), 2);
        let names: Vec<_> = registry
            .list()
            .unwrap()
            .iter()
            .map(|r| r.name().to_owned())
            .collect();
        assert_eq!(names, ["Bia", "Caio"]);
    }
}
