use crate::domain::error::DomainError;

/// Centralized field validation.
///
/// All rules live here so that `Person`, `Driver` and `Ride` share one
/// definition of "valid".
pub struct DomainValidator;

impl DomainValidator {
    /// Non-empty. Whitespace counts as content.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }

    /// `local@domain.tld`.
    ///
    /// - local: ASCII word characters, `.` and `-`
    /// - domain: ASCII alphanumerics, `.` and `-`
    /// - tld: at least two ASCII letters after the last `.`
    pub fn validate_email(email: &str) -> Result<(), DomainError> {
        let (local, host) = email.split_once('@').ok_or(DomainError::InvalidEmail)?;

        let local_ok = !local.is_empty()
            && local
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'));

        let host_ok = host
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-'));

        let tld_ok = host.rsplit_once('.').is_some_and(|(domain, tld)| {
            !domain.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
        });

        if local_ok && host_ok && tld_ok {
            Ok(())
        } else {
            Err(DomainError::InvalidEmail)
        }
    }

    /// Exactly 10 or 11 ASCII digits, no formatting characters.
    pub fn validate_phone(phone: &str) -> Result<(), DomainError> {
        let digits_only = phone.chars().all(|c| c.is_ascii_digit());
        if digits_only && (10..=11).contains(&phone.len()) {
            Ok(())
        } else {
            Err(DomainError::InvalidPhone)
        }
    }

    pub fn validate_license(license_id: &str) -> Result<(), DomainError> {
        if license_id.is_empty() {
            return Err(DomainError::EmptyLicense);
        }
        Ok(())
    }

    /// Helper for the four ride fields, which share the same rule.
    pub(crate) fn require_non_empty(value: &str, err: DomainError) -> Result<(), DomainError> {
        if value.is_empty() { Err(err) } else { Ok(()) }
    }
}
