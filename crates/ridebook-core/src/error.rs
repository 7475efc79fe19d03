//! Unified error handling for Ridebook Core.
//!
//! Wraps domain and application errors behind one type so callers in the
//! CLI only have to match on [`RidebookError`].

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Ridebook Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RidebookError {
    /// A field failed its validation rule.
    ///
    /// Displayed as the bare rule message ("empty name", "invalid email")
    /// because the menu prints it right after its own failure line.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (store failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl RidebookError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Input => ErrorCategory::Validation,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

/// Convenient result type alias.
pub type RidebookResult<T> = Result<T, RidebookError>;
