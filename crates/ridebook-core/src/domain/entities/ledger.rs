use std::fmt;

use super::ride::Ride;

/// Ordered, in-memory collection of rides.
///
/// Insertion order is preserved and duplicates are kept as separate entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RideLedger {
    rides: Vec<Ride>,
}

impl RideLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the end. Always succeeds.
    pub fn add(&mut self, ride: Ride) {
        self.rides.push(ride);
    }

    /// Numbered listing of every ride, in insertion order.
    pub fn list_all(&self) -> RideListing<'_> {
        RideListing::new(&self.rides)
    }

    /// Every ride whose origin matches `origin` (trimmed, case-insensitive).
    pub fn find_by_origin(&self, origin: &str) -> Vec<Ride> {
        self.rides
            .iter()
            .filter(|r| r.origin_matches(origin))
            .cloned()
            .collect()
    }

    /// Remove every matching ride. `true` if at least one was removed.
    pub fn remove_by_origin(&mut self, origin: &str) -> bool {
        self.remove_matching(origin) > 0
    }

    /// Same as [`RideLedger::remove_by_origin`], returning how many went.
    pub fn remove_matching(&mut self, origin: &str) -> usize {
        let before = self.rides.len();
        self.rides.retain(|r| !r.origin_matches(origin));
        before - self.rides.len()
    }

    pub fn len(&self) -> usize {
        self.rides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ride> {
        self.rides.iter()
    }
}

/// Display adapter for a list of rides.
///
/// Renders `"{n}. {ride}"` per line, 1-based, or the empty-state message
/// when there is nothing to show.
#[derive(Debug, Clone, Copy)]
pub struct RideListing<'a> {
    rides: &'a [Ride],
}

impl<'a> RideListing<'a> {
    pub const EMPTY_MESSAGE: &'static str = "No rides registered.";

    pub fn new(rides: &'a [Ride]) -> Self {
        Self { rides }
    }

    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }

    /// One string per output line.
    pub fn lines(&self) -> Vec<String> {
        if self.rides.is_empty() {
            return vec![Self::EMPTY_MESSAGE.to_owned()];
        }
        self.rides
            .iter()
            .enumerate()
            .map(|(i, ride)| format!("{}. {}", i + 1, ride))
            .collect()
    }
}

impl fmt::Display for RideListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
