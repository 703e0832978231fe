//! # Validation Module
//!
//! Input validation used by the value-type constructors and by
//! `Terminal::configure`.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Points                                  │
//! │                                                                         │
//! │  Product::new / Offer::new                                              │
//! │  ├── validate_code        (non-empty)                                  │
//! │  ├── validate_price       (> 0)                                        │
//! │  └── validate_amount      (> 0, offers only)                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Terminal::configure                                                    │
//! │  ├── validate_not_empty   (at least one product)                       │
//! │  └── validate_unique_codes (no duplicate product code)                 │
//! │                                                                         │
//! │  Nothing past this point re-validates: a PriceList is valid by         │
//! │  construction.                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::validation::{validate_amount, validate_code};
//!
//! assert!(validate_code("code", "A").is_ok());
//! assert!(validate_amount(0).is_err());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product code.
///
/// ## Rules
/// - Must not be empty
///
/// Codes are matched byte-for-byte at scan time, so surrounding whitespace
/// is kept as given rather than trimmed away.
pub fn validate_code(field: &str, code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be strictly positive; free items are not sellable here
///
/// ## Example
/// ```rust
/// use checkout_core::money::Money;
/// use checkout_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(125)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates an offer's bundle size and returns it as an unsigned count.
pub fn validate_amount(amount: i64) -> ValidationResult<u64> {
    if amount <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(amount as u64)
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Fails when a collection that must hold at least one entry is empty.
pub fn validate_not_empty<T>(field: &str, items: &[T]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Empty {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Fails on the first code that appears twice, naming it.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_unique_codes;
///
/// assert!(validate_unique_codes(["A", "B"]).is_ok());
///
/// let err = validate_unique_codes(["A", "B", "A"]).unwrap_err();
/// assert_eq!(err.to_string(), "product code 'A' is duplicated");
/// ```
pub fn validate_unique_codes<'a, I>(codes: I) -> ValidationResult<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for code in codes {
        if !seen.insert(code) {
            return Err(ValidationError::Duplicate {
                field: "product code".to_string(),
                value: code.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
