//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A store adapter could not complete an operation.
    #[error("{store} store failed: {reason}")]
    StoreFailure { store: &'static str, reason: String },

    /// Restoring the previous rides after a failed update also failed.
    #[error("could not restore rides from '{origin}': {reason}")]
    RollbackFailed { origin: String, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreFailure { store, .. } => vec![
                format!("The {store} store rejected the operation"),
                "Try the action again".into(),
            ],
            Self::RollbackFailed { origin, .. } => vec![
                format!("Rides from '{origin}' may have been lost"),
                "List the rides to check the current state".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::StoreFailure { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
        }
    }
}
