use serde::Serialize;

use crate::domain::{error::DomainError, validation::DomainValidator};

/// Identity shared by drivers and riders.
///
/// Invariant: every field passed validation at construction. There are no
/// setters, so the invariant holds for the lifetime of the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    name: String,
    email: String,
    phone: String,
}

impl Person {
    /// Validate name, email and phone (in that order) and build a person.
    ///
    /// The first failing rule is returned and no value is produced.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let email = email.into();
        let phone = phone.into();

        DomainValidator::validate_name(&name)?;
        DomainValidator::validate_email(&email)?;
        DomainValidator::validate_phone(&phone)?;

        Ok(Self { name, email, phone })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_person_keeps_fields_verbatim() {
        let p = Person::new("Ana", "ana@x.com", "11999999999").unwrap();
        assert_eq!(p.name(), "Ana");
        assert_eq!(p.email(), "ana@x.com");
        assert_eq!(p.phone(), "11999999999");
    }

    #[test]
    fn name_is_checked_first() {
        // All three fields are bad; the name rule wins.
        assert_eq!(Person::new("", "bad", "1"), Err(DomainError::EmptyName));
    }

    #[test]
    fn email_is_checked_before_phone() {
        assert_eq!(
            Person::new("Ana", "bad", "1"),
            Err(DomainError::InvalidEmail)
        );
    }

    #[test]
    fn bad_phone_is_rejected() {
        assert_eq!(
            Person::new("Ana", "ana@x.com", "123"),
            Err(DomainError::InvalidPhone)
        );
    }
}
