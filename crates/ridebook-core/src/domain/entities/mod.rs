pub mod driver;
pub mod ledger;
pub mod person;
pub mod ride;
pub mod rider;

pub use driver::{Driver, DriverEvent};
pub use ledger::{RideLedger, RideListing};
pub use person::Person;
pub use ride::Ride;
pub use rider::Rider;
