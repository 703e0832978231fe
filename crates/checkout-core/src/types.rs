//! # Domain Types
//!
//! The two value types a price list is made of.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────────┐                  │
//! │  │    Product      │          │       Offer         │                  │
//! │  │  ─────────────  │  code    │  ─────────────────  │                  │
//! │  │  code           │◄─────────│  product_code       │                  │
//! │  │  price (Money)  │  (loose) │  amount  (N units)  │                  │
//! │  └─────────────────┘          │  price   (for P)    │                  │
//! │                               └─────────────────────┘                  │
//! │                                                                         │
//! │  "loose": an offer may name a code that no catalog contains.           │
//! │  Such an offer is valid, it just never matches anything.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Construction
//! Fields are private. The only ways in are `Product::new` / `Offer::new`
//! and serde deserialization, which is routed through those constructors,
//! so every value in memory has already passed validation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::validation::{validate_amount, validate_code, validate_price, ValidationResult};

// =============================================================================
// Product
// =============================================================================

/// A sellable item: a code and a unit price.
///
/// Two products are equal when both code and price are equal. The scan
/// tally keys on this, so a price change produces a distinct product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(try_from = "ProductRecord")]
#[ts(export)]
pub struct Product {
    /// Business identifier, unique within a catalog.
    code: String,

    /// Unit price.
    price: Money,
}

impl Product {
    /// Creates a validated product.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Money, Product};
    ///
    /// let a = Product::new("A", Money::from_cents(125)).unwrap();
    /// assert_eq!(a.code(), "A");
    ///
    /// assert!(Product::new("", Money::from_cents(125)).is_err());
    /// assert!(Product::new("A", Money::zero()).is_err());
    /// ```
    pub fn new(code: impl Into<String>, price: Money) -> ValidationResult<Self> {
        let code = code.into();
        validate_code("code", &code)?;
        validate_price(price)?;

        Ok(Product { code, price })
    }

    /// Returns the product code.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

/// Unvalidated wire shape of a [`Product`].
#[derive(Deserialize)]
struct ProductRecord {
    code: String,
    price: Money,
}

impl TryFrom<ProductRecord> for Product {
    type Error = crate::error::ValidationError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        Product::new(record.code, record.price)
    }
}

// =============================================================================
// Offer
// =============================================================================

/// A "buy `amount` units of `product_code` for `price`" promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(try_from = "OfferRecord")]
#[ts(export)]
pub struct Offer {
    /// Code of the product the offer applies to.
    product_code: String,

    /// Units per bundle.
    amount: u64,

    /// Price charged for one full bundle.
    price: Money,
}

impl Offer {
    /// Creates a validated offer.
    ///
    /// `amount` is signed so that a zero or negative bundle size coming from
    /// a caller is reported as a validation error instead of wrapping.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::{Money, Offer};
    ///
    /// let six_for_five = Offer::new("C", 6, Money::from_cents(500)).unwrap();
    /// assert_eq!(six_for_five.amount(), 6);
    ///
    /// assert!(Offer::new("C", 0, Money::from_cents(500)).is_err());
    /// ```
    pub fn new(product_code: impl Into<String>, amount: i64, price: Money) -> ValidationResult<Self> {
        let product_code = product_code.into();
        validate_code("product_code", &product_code)?;
        let amount = validate_amount(amount)?;
        validate_price(price)?;

        Ok(Offer {
            product_code,
            amount,
            price,
        })
    }

    /// Returns the code this offer targets.
    #[inline]
    pub fn product_code(&self) -> &str {
        &self.product_code
    }

    /// Returns the bundle size.
    #[inline]
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Returns the bundle price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }
}

#[derive(Deserialize)]
struct OfferRecord {
    product_code: String,
    amount: i64,
    price: Money,
}

impl TryFrom<OfferRecord> for Offer {
    type Error = crate::error::ValidationError;

    fn try_from(record: OfferRecord) -> Result<Self, Self::Error> {
        Offer::new(record.product_code, record.amount, record.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use proptest::prelude::*;

    #[test]
    fn test_product_new() {
        let product = Product::new("A", Money::from_cents(125)).unwrap();
        assert_eq!(product.code(), "A");
        assert_eq!(product.price(), Money::from_cents(125));
    }

    #[test]
    fn test_product_rejects_empty_code() {
        let err = Product::new("", Money::from_cents(125)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "code".to_string()
            }
        );
    }

    #[test]
    fn test_product_rejects_non_positive_price() {
        assert!(Product::new("A", Money::zero()).is_err());
        assert!(Product::new("A", Money::from_cents(-125)).is_err());
    }

    #[test]
    fn test_product_equality_uses_code_and_price() {
        let a = Product::new("A", Money::from_cents(125)).unwrap();
        let same = Product::new("A", Money::from_cents(125)).unwrap();
        let repriced = Product::new("A", Money::from_cents(150)).unwrap();
        let other = Product::new("B", Money::from_cents(125)).unwrap();

        assert_eq!(a, same);
        assert_ne!(a, repriced);
        assert_ne!(a, other);
    }

    #[test]
    fn test_offer_new() {
        let offer = Offer::new("C", 6, Money::from_cents(500)).unwrap();
        assert_eq!(offer.product_code(), "C");
        assert_eq!(offer.amount(), 6);
        assert_eq!(offer.price(), Money::from_cents(500));
    }

    #[test]
    fn test_offer_validation() {
        assert!(matches!(
            Offer::new("", 6, Money::from_cents(500)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            Offer::new("C", 0, Money::from_cents(500)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Offer::new("C", -1, Money::from_cents(500)),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            Offer::new("C", 6, Money::zero()),
            Err(ValidationError::MustBePositive { .. })
        ));
    }

    #[test]
    fn test_product_json_goes_through_validation() {
        let product: Product = serde_json::from_str(r#"{"code":"B","price":"4.25"}"#).unwrap();
        assert_eq!(product, Product::new("B", Money::from_cents(425)).unwrap());

        let err = serde_json::from_str::<Product>(r#"{"code":"","price":"4.25"}"#).unwrap_err();
        assert!(err.to_string().contains("code is required"));

        let err = serde_json::from_str::<Product>(r#"{"code":"B","price":"0"}"#).unwrap_err();
        assert!(err.to_string().contains("price must be positive"));
    }

    #[test]
    fn test_offer_json_goes_through_validation() {
        let offer: Offer =
            serde_json::from_str(r#"{"product_code":"A","amount":3,"price":"3.00"}"#).unwrap();
        assert_eq!(offer.amount(), 3);

        let err = serde_json::from_str::<Offer>(r#"{"product_code":"A","amount":0,"price":"3.00"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("amount must be positive"));
    }

    proptest! {
        /// Property: any non-empty code with a positive price is accepted verbatim.
        #[test]
        fn valid_products_keep_their_values(
            code in "[A-Za-z0-9-]{1,20}",
            cents in 1i64..10_000_000
        ) {
            let product = Product::new(code.clone(), Money::from_cents(cents)).unwrap();
            prop_assert_eq!(product.code(), code.as_str());
            prop_assert_eq!(product.price(), Money::from_cents(cents));
        }

        /// Property: any non-positive bundle size is rejected.
        #[test]
        fn non_positive_offer_amounts_fail(amount in i64::MIN..=0) {
            prop_assert!(Offer::new("C", amount, Money::from_cents(500)).is_err());
        }
    }
}
