//! Unified error handling for Catalog Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Catalog Core operations.
///
/// Absence of a product is never an error: lookups return `Option`. Only
/// rule violations and infrastructure failures end up here.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (storage and orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CatalogError {
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
            },
            Self::Application(e) => e.category(),
        }
    }

    /// The message a caller may show to the end user.
    ///
    /// Validation errors expose the violated rule verbatim; everything else
    /// is collapsed so that internal details never leave the process.
    pub fn public_message(&self) -> Option<String> {
        match self {
            Self::Domain(e) => Some(e.to_string()),
            _ => None,
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
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_are_validation() {
        let err = CatalogError::from(DomainError::NegativeStock { stock: -1 });
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.public_message().unwrap().contains("Stock cannot be negative"));
    }

    #[test]
    fn store_errors_are_internal_and_hidden() {
        let err = CatalogError::from(ApplicationError::StoreLockError);
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(err.public_message().is_none());
    }
}
