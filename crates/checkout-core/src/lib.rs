//! # checkout-core: Checkout Pricing Terminal
//!
//! Scans product codes, keeps a running tally, and prices it against a
//! product catalog with "buy N for a fixed price" offers. Pure logic with
//! zero I/O: the crate emits `tracing` events but never installs a
//! subscriber, and parses price lists from readers it is handed.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Checkout Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │          Caller (POS front end, scanner driver, tests)          │   │
//! │  │     load price list ──► scan codes ──► request total            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ checkout-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ terminal  │  │   │
//! │  │   │  Product  │  │   Money   │  │ bundles   │  │  scan     │  │   │
//! │  │   │   Offer   │  │ (decimal) │  │ Receipt   │  │  total    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │validation │  │  config   │  │   error   │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK                             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product and Offer value types
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`pricing`] - Offer resolution and itemized receipts
//! - [`terminal`] - The checkout session: configure, scan, calculate total
//! - [`config`] - JSON price list loading
//! - [`error`] - Domain error types
//! - [`validation`] - Field and catalog validation
//!
//! ## Design Principles
//!
//! 1. **Valid by Construction**: Products, offers and price lists are checked once, on the way in
//! 2. **Decimal Money**: No binary floats anywhere near a price
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Never Block a Checkout**: An unknown code is logged and skipped
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Money, Offer, Product, Terminal};
//!
//! let mut terminal = Terminal::new();
//! terminal.configure(
//!     vec![
//!         Product::new("A", Money::from_cents(125)).unwrap(),
//!         Product::new("B", Money::from_cents(425)).unwrap(),
//!         Product::new("C", Money::from_cents(100)).unwrap(),
//!         Product::new("D", Money::from_cents(75)).unwrap(),
//!     ],
//!     Some(vec![
//!         Offer::new("A", 3, Money::from_cents(300)).unwrap(),
//!         Offer::new("C", 6, Money::from_cents(500)).unwrap(),
//!     ]),
//! ).unwrap();
//!
//! for code in ["A", "B", "C", "D", "A", "B", "A"] {
//!     terminal.scan(code).unwrap();
//! }
//!
//! assert_eq!(terminal.calculate_total().unwrap().to_string(), "13.25");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod money;
pub mod pricing;
pub mod terminal;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use checkout_core::Money` instead of
// `use checkout_core::money::Money`

pub use config::PricingConfig;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use pricing::{AppliedOffer, Receipt, ReceiptLine};
pub use terminal::{PriceList, ScanOutcome, SharedTerminal, Terminal};
pub use types::*;
