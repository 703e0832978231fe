//! # Pricing
//!
//! Offer resolution and the itemized receipt.
//!
//! ## Bundle Math
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product C at 1.00, offer "6 for 5.00", 14 scanned                      │
//! │                                                                         │
//! │    bundles   = 14 / 6 = 2        → 2 × 5.00 = 10.00                     │
//! │    remainder = 14 % 6 = 2        → 2 × 1.00 =  2.00                     │
//! │                                    ─────────────────                    │
//! │                                    line total  12.00                    │
//! │                                                                         │
//! │  No offer for the code → quantity × unit price                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every line is priced independently, so the total does not depend on the
//! order items were scanned in.
//!
//! All arithmetic is checked: a total beyond the decimal range comes back as
//! `CoreError::Overflow` instead of a panic.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Offer, Product};

// =============================================================================
// Offer Lookup
// =============================================================================

/// Returns the offer honored for `code`: the first one in list order.
///
/// Later offers on the same code are shadowed, even when they would be
/// cheaper for the customer.
pub fn find_offer<'a>(offers: &'a [Offer], code: &str) -> Option<&'a Offer> {
    offers.iter().find(|offer| offer.product_code() == code)
}

// =============================================================================
// Receipt Line
// =============================================================================

/// An offer as it was applied to one receipt line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedOffer {
    /// Units per bundle.
    pub amount: u64,
    /// Price per bundle.
    pub price: Money,
    /// Complete bundles charged at the offer price (may be 0).
    pub bundles: u64,
}

/// One priced tally entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptLine {
    pub code: String,
    /// Unit price the units were scanned at.
    pub unit_price: Money,
    pub quantity: u64,
    /// `None` when no offer targets this code.
    pub offer: Option<AppliedOffer>,
    pub line_total: Money,
}

impl ReceiptLine {
    /// Prices `quantity` units of `product`, applying `offer` when given.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::pricing::ReceiptLine;
    /// use checkout_core::{Money, Offer, Product};
    ///
    /// let c = Product::new("C", Money::from_cents(100)).unwrap();
    /// let offer = Offer::new("C", 6, Money::from_cents(500)).unwrap();
    ///
    /// let line = ReceiptLine::price(&c, 7, Some(&offer)).unwrap();
    /// assert_eq!(line.line_total, Money::from_cents(600));
    /// ```
    pub fn price(product: &Product, quantity: u64, offer: Option<&Offer>) -> CoreResult<Self> {
        let overflow = || line_overflow(product.code());

        let (applied, line_total) = match offer {
            Some(offer) => {
                let bundles = quantity / offer.amount();
                let remainder = quantity % offer.amount();
                let total = offer
                    .price()
                    .checked_multiply_quantity(bundles)
                    .zip(product.price().checked_multiply_quantity(remainder))
                    .and_then(|(bundled, loose)| bundled.checked_add(loose))
                    .ok_or_else(overflow)?;
                let applied = AppliedOffer {
                    amount: offer.amount(),
                    price: offer.price(),
                    bundles,
                };
                (Some(applied), total)
            }
            None => (
                None,
                product
                    .price()
                    .checked_multiply_quantity(quantity)
                    .ok_or_else(overflow)?,
            ),
        };

        Ok(ReceiptLine {
            code: product.code().to_string(),
            unit_price: product.price(),
            quantity,
            offer: applied,
            line_total,
        })
    }

    /// What the line would cost without any offer.
    pub fn undiscounted_total(&self) -> CoreResult<Money> {
        self.unit_price
            .checked_multiply_quantity(self.quantity)
            .ok_or_else(|| line_overflow(&self.code))
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Itemized breakdown of a terminal's total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Receipt {
    /// Sorted by code, then unit price.
    pub lines: Vec<ReceiptLine>,
    pub total_quantity: u64,
    pub total: Money,
}

impl Receipt {
    /// Builds a receipt, sorting the lines into a stable order.
    pub fn from_lines(mut lines: Vec<ReceiptLine>) -> CoreResult<Self> {
        lines.sort_by(|a, b| a.code.cmp(&b.code).then(a.unit_price.cmp(&b.unit_price)));

        let total_quantity = lines
            .iter()
            .try_fold(0u64, |sum, line| sum.checked_add(line.quantity))
            .ok_or_else(|| total_overflow("quantity"))?;
        let total = Money::checked_sum(lines.iter().map(|line| line.line_total))
            .ok_or_else(|| total_overflow("total"))?;

        Ok(Receipt {
            lines,
            total_quantity,
            total,
        })
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Amount saved by offers compared to pricing every unit individually.
    pub fn savings(&self) -> CoreResult<Money> {
        let undiscounted = self
            .lines
            .iter()
            .map(ReceiptLine::undiscounted_total)
            .collect::<CoreResult<Vec<_>>>()?;

        Money::checked_sum(undiscounted)
            .and_then(|full| full.checked_sub(self.total))
            .ok_or_else(|| total_overflow("savings"))
    }

    /// Checks if nothing has been scanned.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub(crate) fn line_overflow(code: &str) -> CoreError {
    CoreError::Overflow {
        context: format!("line {code}"),
    }
}

pub(crate) fn total_overflow(what: &str) -> CoreError {
    CoreError::Overflow {
        context: format!("receipt {what}"),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(code: &str, cents: i64) -> Product {
        Product::new(code, Money::from_cents(cents)).unwrap()
    }

    fn offer(code: &str, amount: i64, cents: i64) -> Offer {
        Offer::new(code, amount, Money::from_cents(cents)).unwrap()
    }

    #[test]
    fn test_find_offer_honors_first_match() {
        let offers = vec![offer("C", 6, 500), offer("A", 3, 300), offer("C", 2, 100)];

        let found = find_offer(&offers, "C").unwrap();
        assert_eq!(found.amount(), 6);
        assert!(find_offer(&offers, "B").is_none());
        assert!(find_offer(&[], "C").is_none());
    }

    #[test]
    fn test_line_without_offer() {
        let line = ReceiptLine::price(&product("B", 425), 3, None).unwrap();
        assert_eq!(line.line_total, Money::from_cents(1275));
        assert!(line.offer.is_none());
    }

    #[test]
    fn test_line_with_offer_and_remainder() {
        let c = product("C", 100);
        let six_for_five = offer("C", 6, 500);

        let line = ReceiptLine::price(&c, 7, Some(&six_for_five)).unwrap();
        assert_eq!(line.line_total, Money::from_cents(600));
        assert_eq!(line.offer.as_ref().unwrap().bundles, 1);

        let line = ReceiptLine::price(&c, 14, Some(&six_for_five)).unwrap();
        assert_eq!(line.line_total, Money::from_cents(1200));
        assert_eq!(line.offer.as_ref().unwrap().bundles, 2);
    }

    #[test]
    fn test_line_below_threshold_pays_unit_price() {
        let line = ReceiptLine::price(&product("A", 125), 2, Some(&offer("A", 3, 300))).unwrap();
        assert_eq!(line.line_total, Money::from_cents(250));
        assert_eq!(line.offer.unwrap().bundles, 0);
    }

    #[test]
    fn test_receipt_sorted_and_totaled() {
        let offers = vec![offer("A", 3, 300)];
        let a = product("A", 125);
        let d = product("D", 75);

        let receipt = Receipt::from_lines(vec![
            ReceiptLine::price(&d, 1, None).unwrap(),
            ReceiptLine::price(&a, 4, find_offer(&offers, "A")).unwrap(),
        ])
        .unwrap();

        assert_eq!(receipt.line_count(), 2);
        assert_eq!(receipt.lines[0].code, "A");
        assert_eq!(receipt.total_quantity, 5);
        // 3.00 + 1.25 + 0.75
        assert_eq!(receipt.total, Money::from_cents(500));
        // 4 × 1.25 = 5.00 vs 4.25 charged for A
        assert_eq!(receipt.savings().unwrap(), Money::from_cents(75));
    }

    #[test]
    fn test_empty_receipt() {
        let receipt = Receipt::from_lines(Vec::new()).unwrap();
        assert!(receipt.is_empty());
        assert!(receipt.total.is_zero());
        assert!(receipt.savings().unwrap().is_zero());
    }

    #[test]
    fn test_line_overflow_is_an_error() {
        let huge = Product::new("A", "50000000000000000000000000000".parse().unwrap()).unwrap();

        assert!(ReceiptLine::price(&huge, 1, None).is_ok());
        match ReceiptLine::price(&huge, 2, None) {
            Err(CoreError::Overflow { context }) => assert_eq!(context, "line A"),
            other => panic!("expected overflow, got {other:?}"),
        }

        // One bundle at the huge offer price plus one loose unit.
        let bundle = Offer::new("A", 2, "60000000000000000000000000000".parse().unwrap()).unwrap();
        assert!(matches!(
            ReceiptLine::price(&huge, 3, Some(&bundle)),
            Err(CoreError::Overflow { .. })
        ));
    }

    #[test]
    fn test_receipt_total_overflow_is_an_error() {
        let huge = Product::new("A", "50000000000000000000000000000".parse().unwrap()).unwrap();
        let also_huge = Product::new("B", "50000000000000000000000000000".parse().unwrap()).unwrap();

        let lines = vec![
            ReceiptLine::price(&huge, 1, None).unwrap(),
            ReceiptLine::price(&also_huge, 1, None).unwrap(),
        ];
        match Receipt::from_lines(lines) {
            Err(CoreError::Overflow { context }) => assert_eq!(context, "receipt total"),
            other => panic!("expected overflow, got {other:?}"),
        }
    }
}
