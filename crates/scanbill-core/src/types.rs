//! # Domain Types
//!
//! Core domain types used throughout Scan & Bill.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    LineItem     │   │   ManualEntry   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  code           │──►│  product_name   │◄──│  name           │       │
//! │  │  name, brand    │   │  quantity       │   │  unit_price     │       │
//! │  │  price (rule)   │   │  line_total     │   │  quantity       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │    TaxRate      │   whole percent 0-28, stored as basis points      │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::validation::{validate_tax_percent, ValidationResult};

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// The counter only offers whole percents between 0 and 28, so the public
/// constructor takes a percent and validates it. Basis points keep the
/// rounding arithmetic in [`Money::calculate_tax`] integer-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from a whole percent in `0..=28`.
    ///
    /// ## Example
    /// ```rust
    /// use scanbill_core::types::TaxRate;
    ///
    /// assert_eq!(TaxRate::from_percent(5).unwrap().bps(), 500);
    /// assert!(TaxRate::from_percent(29).is_err());
    /// ```
    pub fn from_percent(percent: u32) -> ValidationResult<Self> {
        validate_tax_percent(percent)?;
        Ok(TaxRate(percent * 100))
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate in whole percent.
    #[inline]
    pub const fn percent(&self) -> u32 {
        self.0 / 100
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    /// The rate a fresh session starts with.
    fn default() -> Self {
        TaxRate(crate::DEFAULT_TAX_PERCENT * 100)
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product resolved from the catalog.
///
/// Created fresh per successful lookup and never persisted. The price is not
/// catalog data; see [`crate::pricing::derive_price`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// The numeric code this product was looked up by.
    pub code: String,

    /// Display name; `"Unknown"` when the catalog has none.
    pub name: String,

    /// Brand list as the catalog spells it (may be empty).
    pub brand: String,

    /// Category list as the catalog spells it (may be empty).
    pub category: String,

    /// Ingredient text (may be empty).
    pub ingredients: String,

    /// Unit price derived from the code.
    pub price: Money,
}

// =============================================================================
// Line Item
// =============================================================================

/// One row of the cart.
///
/// ## Invariant
/// `line_total == unit_price × quantity`, fixed at construction. Fields are
/// private so the total can never drift from its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    product_name: String,
    quantity: u32,
    unit_price: Money,
    line_total: Money,
}

impl LineItem {
    /// Builds a line item and computes its total.
    pub fn new(product_name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        LineItem {
            product_name: product_name.into(),
            quantity,
            unit_price,
            line_total: unit_price.multiply_quantity(quantity),
        }
    }

    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// Manual Entry
// =============================================================================

/// A product typed in by the cashier when scanning or lookup failed.
///
/// Must pass [`crate::validation::validate_manual_entry`] before it may be
/// appended to the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualEntry {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
