//! In-memory ride store backed by the domain [`RideLedger`].

use ridebook_core::{
    application::ports::RideStore,
    domain::{Ride, RideLedger},
    error::RidebookResult,
};

/// Single-owner in-memory ride ledger.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRideStore {
    ledger: RideLedger,
}

impl InMemoryRideStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with `rides`, in order.
    pub fn with_rides(rides: impl IntoIterator<Item = Ride>) -> Self {
        let mut store = Self::new();
        for ride in rides {
            store.ledger.add(ride);
        }
        store
    }

    /// Borrow the underlying ledger.
    pub fn ledger(&self) -> &RideLedger {
        &self.ledger
    }
}

impl RideStore for InMemoryRideStore {
    fn add(&mut self, ride: Ride) -> RidebookResult<()> {
        self.ledger.add(ride);
        tracing::trace!(len = self.ledger.len(), "Ledger grew");
        Ok(())
    }

    fn list(&self) -> RidebookResult<Vec<Ride>> {
        Ok(self.ledger.iter().cloned().collect())
    }

    fn find_by_origin(&self, origin: &str) -> RidebookResult<Vec<Ride>> {
        Ok(self.ledger.find_by_origin(origin))
    }

    fn remove_by_origin(&mut self, origin: &str) -> RidebookResult<usize> {
        Ok(self.ledger.remove_matching(origin))
    }

    fn len(&self) -> RidebookResult<usize> {
        Ok(self.ledger.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = InMemoryRideStore::new();
        assert_eq!(store.len().unwrap(), 0);
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.ledger().list_all().to_string(), "No rides registered.");
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = InMemoryRideStore::new();
        store.add(Ride::new("C", "D", "R", "D")).unwrap();
        store.add(Ride::new("A", "B", "R", "D")).unwrap();

        let origins: Vec<_> = store
            .list()
            .unwrap()
            .iter()
            .map(|r| r.origin().to_owned())
            .collect();
        assert_eq!(origins, ["C", "A"]);
    }

    #[test]
    fn remove_counts_all_matches() {
        let mut store = InMemoryRideStore::with_rides([
            Ride::new("A", "B", "R1", "D1"),
            Ride::new(" a", "C", "R2", "D2"),
            Ride::new("B", "C", "R3", "D3"),
        ]);

        assert_eq!(store.remove_by_origin("A").unwrap(), 2);
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.find_by_origin("a").unwrap().is_empty());
    }
}
