//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! the operator's actions: managing rides, registering people,
//! and driving the start/finish notifications.

pub mod people_service;
pub mod ride_service;

pub use people_service::PeopleService;
pub use ride_service::{RideService, UpdateOutcome};
