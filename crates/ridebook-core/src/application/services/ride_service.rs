//! Ride Service - ledger operations and fares.
//!
//! ## Update ordering
//!
//! `update_by_origin` is a replace, not an in-place edit:
//!
//! 1. Validate the replacement (strict mode only). Nothing is touched on failure.
//! 2. Snapshot and remove every ride with the old origin.
//! 3. Add the replacement. If that fails, put the snapshot back.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::RideStore},
    domain::{Distance, Fare, Ride},
    error::RidebookResult,
};

/// Result of [`RideService::update_by_origin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No ride had the old origin; the replacement was not added.
    NotFound,
    /// `removed` rides were replaced by the new one.
    Replaced { removed: usize },
}

/// Service for ride ledger operations.
pub struct RideService {
    store: Box<dyn RideStore>,
    strict_validation: bool,
}

impl RideService {
    /// Create a ride service. Rides are accepted as-is.
    pub fn new(store: Box<dyn RideStore>) -> Self {
        Self {
            store,
            strict_validation: false,
        }
    }

    /// Require non-empty ride fields on add and update.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict_validation
    }

    /// Add a ride to the end of the ledger.
    #[instrument(skip_all, fields(origin = %ride.origin()))]
    pub fn add(&mut self, ride: Ride) -> RidebookResult<()> {
        self.check(&ride)?;
        self.store.add(ride)?;
        debug!("Ride added");
        Ok(())
    }

    /// Every ride, in insertion order.
    pub fn list_all(&self) -> RidebookResult<Vec<Ride>> {
        self.store.list()
    }

    /// Every ride whose origin matches (trimmed, case-insensitive).
    pub fn find_by_origin(&self, origin: &str) -> RidebookResult<Vec<Ride>> {
        self.store.find_by_origin(origin)
    }

    /// Remove every matching ride. `true` if at least one was removed.
    #[instrument(skip(self))]
    pub fn remove_by_origin(&mut self, origin: &str) -> RidebookResult<bool> {
        let removed = self.store.remove_by_origin(origin)?;
        info!(removed, "Rides removed");
        Ok(removed > 0)
    }

    /// Replace every ride from `old_origin` with `replacement`.
    #[instrument(skip(self, replacement))]
    pub fn update_by_origin(
        &mut self,
        old_origin: &str,
        replacement: Ride,
    ) -> RidebookResult<UpdateOutcome> {
        self.check(&replacement)?;

        let previous = self.store.find_by_origin(old_origin)?;
        if previous.is_empty() {
            debug!("No ride to update");
            return Ok(UpdateOutcome::NotFound);
        }

        let removed = self.store.remove_by_origin(old_origin)?;

        if let Err(err) = self.store.add(replacement) {
            warn!(error = %err, "Insert failed, restoring previous rides");
            for ride in previous {
                self.store
                    .add(ride)
                    .map_err(|e| ApplicationError::RollbackFailed {
                        origin: old_origin.to_owned(),
                        reason: e.to_string(),
                    })?;
            }
            return Err(err);
        }

        info!(removed, "Rides updated");
        Ok(UpdateOutcome::Replaced { removed })
    }

    /// Number of rides in the ledger.
    pub fn len(&self) -> RidebookResult<usize> {
        self.store.len()
    }

    pub fn is_empty(&self) -> RidebookResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Fare for an already-validated distance.
    pub fn quote(&self, distance: Distance) -> Fare {
        distance.fare()
    }

    fn check(&self, ride: &Ride) -> RidebookResult<()> {
        if self.strict_validation {
            ride.validate()?;
        }
        Ok(())
    }
}
