//! # Checkout Terminal
//!
//! The stateful session: a price list, plus a tally of what has been scanned.
//!
//! ## Session Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Terminal State Machine                               │
//! │                                                                         │
//! │   Terminal::new()                                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌──────────────┐   configure() ok    ┌──────────────┐                  │
//! │  │ Unconfigured │ ──────────────────► │  Configured  │ ◄──┐             │
//! │  └──────────────┘                     └──────┬───────┘    │             │
//! │        │                                     │            │             │
//! │        │ scan / calculate_total              │ configure()│             │
//! │        ▼                                     └────────────┘             │
//! │   NotConfigured                          (replaces price list,          │
//! │                                           keeps the tally)              │
//! │                                                                         │
//! │  Configured operations:                                                 │
//! │    scan("A")          → tally[A] += 1   (unknown code: logged, ignored) │
//! │    calculate_total()  → Σ line totals with offers applied               │
//! │    receipt()          → same, itemized                                  │
//! │    clear()            → empty tally, price list kept                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tally Keys and Price Freezing
//! The tally is keyed by `Product` value (code + price). If a product is
//! repriced by a later `configure`, units already scanned stay at the old
//! price and new scans start a second entry at the new price. Offers are
//! always looked up in the current price list.
//!
//! ## Thread Safety
//! `Terminal` mutates through `&mut self` and has no internal locking.
//! Wrap it in [`SharedTerminal`] to use it from several threads.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::PricingConfig;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{find_offer, line_overflow, total_overflow, Receipt, ReceiptLine};
use crate::types::{Offer, Product};
use crate::validation::{validate_not_empty, validate_unique_codes, ValidationResult};

// =============================================================================
// Price List
// =============================================================================

/// A validated catalog plus the offers that go with it.
///
/// ## Invariants
/// - At least one product
/// - Product codes are unique
/// - Offers keep the order they were given in (first match wins)
#[derive(Debug, Clone)]
pub struct PriceList {
    catalog: HashMap<String, Product>,
    offers: Vec<Offer>,
}

impl PriceList {
    /// Builds a price list, rejecting an empty catalog or duplicate codes.
    ///
    /// `None` for offers means no offers apply.
    pub fn new(products: Vec<Product>, offers: Option<Vec<Offer>>) -> ValidationResult<Self> {
        validate_not_empty("product", &products)?;
        validate_unique_codes(products.iter().map(Product::code))?;

        let catalog = products
            .into_iter()
            .map(|product| (product.code().to_string(), product))
            .collect();

        Ok(PriceList {
            catalog,
            offers: offers.unwrap_or_default(),
        })
    }

    /// Looks up a product by code.
    pub fn product(&self, code: &str) -> Option<&Product> {
        self.catalog.get(code)
    }

    /// Returns the offer honored for `code`, if any.
    pub fn offer_for(&self, code: &str) -> Option<&Offer> {
        find_offer(&self.offers, code)
    }

    /// Returns all offers in list order.
    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Number of products in the catalog.
    pub fn product_count(&self) -> usize {
        self.catalog.len()
    }

    /// Records offers that can never apply.
    ///
    /// Neither case is an error: an offer for an unknown code is simply
    /// unreachable, and a second offer for a code is shadowed by the first.
    fn log_unreachable_offers(&self) {
        for (index, offer) in self.offers.iter().enumerate() {
            let code = offer.product_code();

            if !self.catalog.contains_key(code) {
                debug!(code = %code, "Offer targets a code missing from the catalog");
            } else if self.offers[..index].iter().any(|o| o.product_code() == code) {
                warn!(
                    code = %code,
                    amount = offer.amount(),
                    price = %offer.price(),
                    "Offer shadowed by an earlier offer for the same code"
                );
            }
        }
    }
}

// =============================================================================
// Scan Outcome
// =============================================================================

/// What a single scan did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The code was in the catalog; `quantity` is the new tally count.
    Counted { quantity: u64 },
    /// The code was not in the catalog and was ignored.
    Unknown,
}

// =============================================================================
// Terminal
// =============================================================================

/// A checkout session.
///
/// ## Example
/// ```rust
/// use checkout_core::{Money, Offer, Product, Terminal};
///
/// let mut terminal = Terminal::new();
/// terminal.configure(
///     vec![Product::new("C", Money::from_cents(100)).unwrap()],
///     Some(vec![Offer::new("C", 6, Money::from_cents(500)).unwrap()]),
/// ).unwrap();
///
/// for _ in 0..7 {
///     terminal.scan("C").unwrap();
/// }
///
/// assert_eq!(terminal.calculate_total().unwrap(), Money::from_cents(600));
/// ```
#[derive(Debug)]
pub struct Terminal {
    price_list: Option<PriceList>,
    tally: HashMap<Product, u64>,
    started_at: DateTime<Utc>,
}

impl Terminal {
    /// Creates an unconfigured terminal with an empty tally.
    pub fn new() -> Self {
        Terminal {
            price_list: None,
            tally: HashMap::new(),
            started_at: Utc::now(),
        }
    }

    /// Installs a new price list.
    ///
    /// ## Behavior
    /// - Empty `products` → `ValidationError::Empty`
    /// - Duplicate product code → `ValidationError::Duplicate` naming the code
    /// - `offers` of `None` or empty → no offers apply
    /// - On error the previous price list stays active
    /// - The tally is kept; call [`Terminal::clear`] for a fresh session
    pub fn configure(&mut self, products: Vec<Product>, offers: Option<Vec<Offer>>) -> CoreResult<()> {
        let price_list = PriceList::new(products, offers)?;
        price_list.log_unreachable_offers();

        debug!(
            products = price_list.product_count(),
            offers = price_list.offers().len(),
            "Price list configured"
        );
        self.price_list = Some(price_list);
        Ok(())
    }

    /// Installs a price list loaded from a [`PricingConfig`].
    pub fn configure_from(&mut self, config: PricingConfig) -> CoreResult<()> {
        self.configure(config.products, config.offers)
    }

    /// Scans one unit of `product_code`.
    ///
    /// Unknown codes are not an error: they are logged at info level and
    /// leave the tally untouched, so a bad barcode never stops a checkout.
    pub fn scan(&mut self, product_code: &str) -> CoreResult<ScanOutcome> {
        let price_list = self.price_list.as_ref().ok_or(CoreError::NotConfigured)?;

        let Some(product) = price_list.product(product_code) else {
            info!(code = %product_code, "Ignoring scan of unknown product code");
            return Ok(ScanOutcome::Unknown);
        };

        let quantity = self.tally.entry(product.clone()).or_insert(0);
        *quantity = quantity
            .checked_add(1)
            .ok_or_else(|| line_overflow(product_code))?;

        Ok(ScanOutcome::Counted {
            quantity: *quantity,
        })
    }

    /// Calculates the total for everything scanned so far.
    ///
    /// An empty tally totals zero. A total beyond the decimal range is
    /// `CoreError::Overflow`.
    pub fn calculate_total(&self) -> CoreResult<Money> {
        let price_list = self.configured()?;

        self.tally
            .iter()
            .try_fold(Money::zero(), |total, (product, &quantity)| {
                let line =
                    ReceiptLine::price(product, quantity, price_list.offer_for(product.code()))?;
                total
                    .checked_add(line.line_total)
                    .ok_or_else(|| total_overflow("total"))
            })
    }

    /// Builds the itemized receipt. Its `total` equals [`Terminal::calculate_total`].
    pub fn receipt(&self) -> CoreResult<Receipt> {
        let price_list = self.configured()?;

        let lines = self
            .tally
            .iter()
            .map(|(product, &quantity)| {
                ReceiptLine::price(product, quantity, price_list.offer_for(product.code()))
            })
            .collect::<CoreResult<Vec<_>>>()?;

        Receipt::from_lines(lines)
    }

    /// Units of `code` in the tally, across every price it was scanned at.
    pub fn quantity_of(&self, code: &str) -> u64 {
        self.tally
            .iter()
            .filter(|(product, _)| product.code() == code)
            .fold(0u64, |sum, (_, &quantity)| sum.saturating_add(quantity))
    }

    /// Empties the tally and restarts the session clock.
    pub fn clear(&mut self) {
        self.tally.clear();
        self.started_at = Utc::now();
    }

    /// Checks if a price list has been installed.
    pub fn is_configured(&self) -> bool {
        self.price_list.is_some()
    }

    /// Returns the active price list.
    pub fn price_list(&self) -> Option<&PriceList> {
        self.price_list.as_ref()
    }

    /// When the current session began (construction or last `clear`).
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    fn configured(&self) -> CoreResult<&PriceList> {
        self.price_list.as_ref().ok_or(CoreError::NotConfigured)
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Shared Terminal
// =============================================================================

/// A terminal that can be shared between threads.
///
/// Every operation takes the lock exclusively; pricing is quick, so a
/// `RwLock` would not buy anything.
#[derive(Debug, Clone, Default)]
pub struct SharedTerminal {
    terminal: Arc<Mutex<Terminal>>,
}

impl SharedTerminal {
    /// Wraps a fresh, unconfigured terminal.
    pub fn new() -> Self {
        Self::from_terminal(Terminal::new())
    }

    /// Wraps an existing terminal.
    pub fn from_terminal(terminal: Terminal) -> Self {
        SharedTerminal {
            terminal: Arc::new(Mutex::new(terminal)),
        }
    }

    /// Executes a function with read access to the terminal.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = shared.with_terminal(|t| t.calculate_total())??;
    /// ```
    pub fn with_terminal<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&Terminal) -> R,
    {
        let terminal = self.terminal.lock().map_err(|_| CoreError::LockPoisoned)?;
        Ok(f(&terminal))
    }

    /// Executes a function with write access to the terminal.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// shared.with_terminal_mut(|t| t.scan("A"))??;
    /// ```
    pub fn with_terminal_mut<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&mut Terminal) -> R,
    {
        let mut terminal = self.terminal.lock().map_err(|_| CoreError::LockPoisoned)?;
        Ok(f(&mut terminal))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
