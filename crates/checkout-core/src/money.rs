//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Scan 10,000 items at 0.10 and the float total drifts off by cents.    │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    1.25 is stored as 125 × 10^-2, exactly                              │
//! │    Sums and integer multiples stay exact, nothing is ever rounded      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! // Create from cents or from a decimal string
//! let price = Money::from_cents(125);          // 1.25
//! let bundle: Money = "5.00".parse().unwrap(); // 5.00
//!
//! // Arithmetic operations
//! let three = price * 3u64;                    // 3.75
//! let total = three + bundle;                  // 8.75
//! assert_eq!(total, Money::from_cents(875));
//!
//! // Pricing code uses the checked forms, which report overflow as None
//! assert!(Money::new(rust_decimal::Decimal::MAX).checked_add(price).is_none());
//!
//! // NEVER do this:
//! // let bad = Money::from_float(1.25); // NO SUCH METHOD EXISTS!
//! ```

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// An exact monetary amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: base-10, so catalog prices like 0.75 are exact
/// - **Single field tuple struct**: zero-cost wrapper, keeps money apart from counts
/// - **Serialized as a string**: `"1.25"`, never a JSON float
/// - **Parsed exactly**: a string that would need rounding is rejected,
///   whether it comes through `FromStr` or serde
/// - **Checked arithmetic**: the `checked_*` methods return `None` past
///   `Decimal::MAX`; the operator impls panic there, like `Decimal`'s own
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.price ──┬──► price × remainder ──┐                             │
/// │                  │                         ├──► line total ──► total    │
/// │  Offer.price ────┴──► price × bundles ────┘                             │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "string")] Decimal);

impl Money {
    /// Wraps a decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (two decimal places).
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let price = Money::from_cents(425);
    /// assert_eq!(price.to_string(), "4.25");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    ///
    /// Zero is neither positive nor negative, so `0.00` fails a price check.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(75);
    /// assert_eq!(unit_price.multiply_quantity(4), Money::from_cents(300));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: u64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Multiplies by a unit count, or `None` if the result is out of range.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::money::Money;
    ///
    /// let huge: Money = "50000000000000000000000000000".parse().unwrap();
    /// assert!(huge.checked_multiply_quantity(2).is_none());
    /// assert_eq!(huge.checked_multiply_quantity(1), Some(huge));
    /// ```
    #[inline]
    pub fn checked_multiply_quantity(&self, qty: u64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, or `None` if the result is out of range.
    #[inline]
    pub fn checked_add(&self, other: Money) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }

    /// Subtracts, or `None` if the result is out of range.
    #[inline]
    pub fn checked_sub(&self, other: Money) -> Option<Self> {
        self.0.checked_sub(other.0).map(Money)
    }

    /// Sums amounts, stopping with `None` at the first overflow.
    ///
    /// An empty iterator sums to zero.
    pub fn checked_sum<I>(amounts: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(), |total, amount| total.checked_add(amount))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with at least two decimal places, no currency symbol.
///
/// Extra precision is kept: `0.125` prints as `0.125`, never rounded.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut amount = self.0;
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        write!(f, "{}", amount)
    }
}

/// Parses an exact decimal string such as `"1.25"`.
///
/// Strings that cannot be represented without rounding are rejected.
impl FromStr for Money {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str_exact(s.trim())
            .map(Money)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "price".to_string(),
                reason: e.to_string(),
            })
    }
}

/// Accepts a decimal string (`"1.25"`) or a JSON integer.
///
/// Strings go through the same exact parser as `FromStr`. Floats are refused:
/// by the time serde hands one over it has already been rounded to binary.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string such as \"1.25\" or an integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Err(E::invalid_type(de::Unexpected::Float(v), &self))
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a unit count.
impl Mul<u64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u64) -> Self {
        self.multiply_quantity(qty)
    }
}


// =============================================================================
// Unit Tests
// =============================================================================
