use serde::Serialize;

use super::person::Person;
use crate::domain::error::DomainError;

/// A registered passenger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rider {
    person: Person,
    payment_method: String,
}

impl Rider {
    /// Validate the person fields. `payment_method` is stored verbatim.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        payment_method: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            person: Person::new(name, email, phone)?,
            payment_method: payment_method.into(),
        })
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }
}
