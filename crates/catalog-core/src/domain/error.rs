// ============================================================================
// domain/error.rs - PRODUCT RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the controller logs and maps the same value)
/// - Categorizable (for status/exit-code mapping)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Business Rules (400-level equivalent)
    // ========================================================================
    #[error("Price cannot be negative (got {price})")]
    NegativePrice { price: f64 },

    #[error("Price must be a finite number")]
    NonFinitePrice,

    #[error("Stock cannot be negative (got {stock})")]
    NegativeStock { stock: i64 },

    // ========================================================================
    // Input Shape
    // ========================================================================
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingRequiredFields { fields: Vec<&'static str> },

    #[error("Name cannot be empty")]
    BlankName,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NegativePrice { .. } | Self::NonFinitePrice => vec![
                "Use a price of 0 or more".into(),
                "Example: --price 29.99".into(),
            ],
            Self::NegativeStock { .. } => vec![
                "Use a stock count of 0 or more".into(),
                "Example: --stock 50".into(),
            ],
            Self::MissingRequiredFields { fields } => vec![
                format!("Provide: {}", fields.join(", ")),
                "A product needs at least a name, a price and a stock count".into(),
            ],
            Self::BlankName => vec![
                "Give the product a name with at least one visible character".into(),
                "Leave --name out to keep the current name".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}
