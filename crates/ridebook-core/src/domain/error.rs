// ============================================================================
// domain/error.rs - VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Every variant is a rule violation detected while building a domain value.
/// The `Display` text is the short message shown to the operator.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Person rules
    // ========================================================================
    #[error("empty name")]
    EmptyName,

    #[error("invalid email")]
    InvalidEmail,

    #[error("invalid phone")]
    InvalidPhone,

    // ========================================================================
    // Driver rules
    // ========================================================================
    #[error("empty license")]
    EmptyLicense,

    // ========================================================================
    // Ride rules (only enforced in strict mode)
    // ========================================================================
    #[error("empty origin")]
    EmptyOrigin,

    #[error("empty destination")]
    EmptyDestination,

    #[error("empty rider")]
    EmptyRider,

    #[error("empty driver")]
    EmptyDriver,

    // ========================================================================
    // Operator input
    // ========================================================================
    #[error("invalid distance")]
    InvalidDistance,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec!["Enter a non-empty name".into()],
            Self::InvalidEmail => vec![
                "Use the form local@domain.tld".into(),
                "Example: ana@example.com".into(),
            ],
            Self::InvalidPhone => vec![
                "Use 10 or 11 digits, without spaces or symbols".into(),
                "Example: 11999999999".into(),
            ],
            Self::EmptyLicense => vec!["Enter the driver's license id".into()],
            Self::InvalidDistance => vec![
                "Enter a positive number of kilometres".into(),
                "Example: 12.5".into(),
            ],
            Self::EmptyOrigin | Self::EmptyDestination | Self::EmptyRider | Self::EmptyDriver => {
                vec!["Ride fields cannot be empty when strict validation is on".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDistance => ErrorCategory::Input,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// A constructor rejected a field.
    Validation,
    /// Free-form operator input could not be interpreted.
    Input,
}
