//! Application layer errors.
//!
//! These errors represent failures in storage and orchestration, not
//! business rules. Business rule errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the storage side of a port.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// Store access failed (lock poisoned, etc.).
    #[error("Product store error")]
    StoreLockError,

    /// A stored record could not be translated back into a product.
    #[error("Stored record '{id}' is corrupt: {reason}")]
    CorruptRecord { id: String, reason: String },

    /// Any other failure reported by a storage driver.
    #[error("Storage failure: {reason}")]
    Storage { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::StoreLockError => vec![
                "The product store is locked".into(),
                "Try again in a moment".into(),
            ],
            Self::CorruptRecord { id, .. } => vec![
                format!("Record '{}' could not be read back", id),
                "Delete and re-create the product".into(),
            ],
            Self::Storage { .. } => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
