//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                              │
//! │  ├── Validation(ValidationError)  - bad product / offer / price list   │
//! │  ├── NotConfigured                - scan or total before configure     │
//! │  ├── InvalidPriceList             - malformed price list JSON          │
//! │  ├── Overflow                     - total exceeds the decimal range    │
//! │  └── LockPoisoned                 - shared terminal mutex poisoned     │
//! │                                                                         │
//! │  NOT an error: scanning an unknown product code.                       │
//! │  That is logged and ignored so a checkout is never interrupted.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending code)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Errors surfaced by the checkout terminal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The terminal was used before a price list was configured.
    ///
    /// ## When This Occurs
    /// ```text
    /// Terminal::new()
    ///      │
    ///      ▼
    /// scan("A") / calculate_total()   ← no configure() yet
    ///      │
    ///      ▼
    /// NotConfigured
    /// ```
    #[error("Terminal has no price list; call configure first")]
    NotConfigured,

    /// The price list document could not be parsed.
    ///
    /// Record-level validation failures (empty code, zero price) also land
    /// here when they happen during deserialization.
    #[error("Invalid price list: {0}")]
    InvalidPriceList(#[from] serde_json::Error),

    /// A line total or the grand total does not fit in a `Money`.
    ///
    /// Prices only have to be positive, so a catalog with absurdly large
    /// prices is valid until something multiplies or adds them.
    #[error("Amount out of range while pricing {context}")]
    Overflow { context: String },

    /// Another thread panicked while holding the shared terminal.
    #[error("Terminal lock poisoned")]
    LockPoisoned,
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the `Product` / `Offer` constructors and by `configure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// A collection that needs at least one entry was empty.
    #[error("at least one {field} required")]
    Empty { field: String },

    /// Invalid format (e.g., unparseable decimal).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate product code in a catalog).
    #[error("{field} '{value}' is duplicated")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::Empty {
            field: "product".to_string(),
        };
        assert_eq!(err.to_string(), "at least one product required");

        let err = ValidationError::Duplicate {
            field: "product code".to_string(),
            value: "A".to_string(),
        };
        assert_eq!(err.to_string(), "product code 'A' is duplicated");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(core_err.to_string(), "Validation error: price must be positive");
    }

    #[test]
    fn test_overflow_message_names_context() {
        let err = CoreError::Overflow {
            context: "line A".to_string(),
        };
        assert_eq!(err.to_string(), "Amount out of range while pricing line A");
    }

    #[test]
    fn test_json_error_converts_to_core_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let core_err: CoreError = json_err.into();
        assert!(matches!(core_err, CoreError::InvalidPriceList(_)));
    }
}
