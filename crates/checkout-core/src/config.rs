//! # Price List Configuration
//!
//! A serde-loadable bundle of products and offers that can be handed to
//! `Terminal::configure_from`.
//!
//! ## Format
//! ```json
//! {
//!   "products": [
//!     { "code": "A", "price": "1.25" },
//!     { "code": "C", "price": "1.00" }
//!   ],
//!   "offers": [
//!     { "product_code": "C", "amount": 6, "price": "5.00" }
//!   ]
//! }
//! ```
//!
//! Prices are decimal strings so they parse exactly. `offers` may be left
//! out or set to `null`. Each record is validated while it is parsed; the
//! catalog-level checks (at least one product, unique codes) run in
//! `Terminal::configure_from`, same as for a hand-built list.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{Offer, Product};

/// Products and offers as read from a price list document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    pub products: Vec<Product>,

    #[serde(default)]
    pub offers: Option<Vec<Offer>>,
}

impl PricingConfig {
    /// Parses a price list from a JSON string.
    ///
    /// ## Example
    /// ```rust
    /// use checkout_core::config::PricingConfig;
    ///
    /// let config = PricingConfig::from_json_str(
    ///     r#"{ "products": [ { "code": "A", "price": "1.25" } ] }"#,
    /// ).unwrap();
    /// assert_eq!(config.products.len(), 1);
    /// assert!(config.offers.is_none());
    /// ```
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a price list from any reader (file, socket, in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> CoreResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the price list back to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Number of offers, treating an absent list as empty.
    pub fn offer_count(&self) -> usize {
        self.offers.as_ref().map_or(0, Vec::len)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::money::Money;

    const PRICE_LIST: &str = r#"{
        "products": [
            { "code": "A", "price": "1.25" },
            { "code": "B", "price": "4.25" },
            { "code": "C", "price": "1.00" },
            { "code": "D", "price": "0.75" }
        ],
        "offers": [
            { "product_code": "A", "amount": 3, "price": "3.00" },
            { "product_code": "C", "amount": 6, "price": "5.00" }
        ]
    }"#;

    #[test]
    fn test_parse_price_list() {
        let config = PricingConfig::from_json_str(PRICE_LIST).unwrap();

        assert_eq!(config.products.len(), 4);
        assert_eq!(config.products[3].code(), "D");
        assert_eq!(config.products[3].price(), Money::from_cents(75));
        assert_eq!(config.offer_count(), 2);
        assert_eq!(config.offers.as_ref().unwrap()[1].amount(), 6);
    }

    #[test]
    fn test_offers_may_be_absent_or_null() {
        let omitted =
            PricingConfig::from_json_str(r#"{ "products": [ { "code": "C", "price": "1" } ] }"#)
                .unwrap();
        assert!(omitted.offers.is_none());
        assert_eq!(omitted.offer_count(), 0);

        let null = PricingConfig::from_json_str(
            r#"{ "products": [ { "code": "C", "price": "1" } ], "offers": null }"#,
        )
        .unwrap();
        assert!(null.offers.is_none());
    }

    #[test]
    fn test_from_reader() {
        let config = PricingConfig::from_reader(PRICE_LIST.as_bytes()).unwrap();
        assert_eq!(config.products.len(), 4);
    }

    #[test]
    fn test_invalid_record_rejected() {
        let err = PricingConfig::from_json_str(
            r#"{ "products": [ { "code": "A", "price": "-1.25" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPriceList(_)));
        assert!(err.to_string().contains("price must be positive"));
    }

    #[test]
    fn test_over_precise_price_rejected() {
        let err = PricingConfig::from_json_str(
            r#"{ "products": [ { "code": "A", "price": "0.12345678901234567890123456789" } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPriceList(_)));
        assert!(err.to_string().contains("price has invalid format"));
    }

    #[test]
    fn test_float_price_rejected() {
        let err = PricingConfig::from_json_str(
            r#"{ "products": [ { "code": "A", "price": 1.25 } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::InvalidPriceList(_)));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(matches!(
            PricingConfig::from_json_str("{ \"products\": ["),
            Err(CoreError::InvalidPriceList(_))
        ));
        assert!(PricingConfig::from_json_str("{}").is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_exact_prices() {
        let config = PricingConfig::from_json_str(PRICE_LIST).unwrap();
        let json = config.to_json_pretty().unwrap();
        assert!(json.contains("\"0.75\""));
        assert_eq!(PricingConfig::from_json_str(&json).unwrap(), config);
    }
}
