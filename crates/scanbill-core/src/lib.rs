//! # scanbill-core: Pure Business Logic for Scan & Bill
//!
//! Everything between "a barcode was read" and "here is the invoice text",
//! written as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Scan & Bill Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/counter (Session)                       │   │
//! │  │    scan ──► lookup ──► add / manual ──► tax ──► invoice         │   │
//! │  └───────────────┬─────────────────────────────┬───────────────────┘   │
//! │                  │                             │                        │
//! │  ┌───────────────▼──────────────┐              │                        │
//! │  │  scanbill-catalog (network)  │              │                        │
//! │  │  code ──► Product            │              │                        │
//! │  └───────────────┬──────────────┘              │                        │
//! │                  │                             │                        │
//! │  ┌───────────────▼─────────────────────────────▼───────────────────┐   │
//! │  │              ★ scanbill-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │ pricing │ │  cart   │ │ billing │ │ invoice │ │  scan   │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (cents)
//! - [`types`] - Product, LineItem, TaxRate, BillSummary, ManualEntry
//! - [`pricing`] - Code format check and the barcode-suffix price rule
//! - [`validation`] - Manual entry, quantity and tax rate rules
//! - [`cart`] - The append-only cart ledger
//! - [`billing`] - Tax and grand total
//! - [`invoice`] - Receipt text rendering
//! - [`scan`] - Barcode decoder capability interface
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use scanbill_core::{billing, pricing, Cart, TaxRate};
//!
//! let price = pricing::derive_price("0123456789012").unwrap();
//! assert_eq!(price.cents(), 700); // $7.00
//!
//! let mut cart = Cart::new();
//! cart.add("Milk", price, 2);
//! assert_eq!(cart.subtotal().cents(), 1400);
//!
//! let bill = billing::compute(cart.subtotal(), TaxRate::from_percent(5).unwrap());
//! assert_eq!(bill.total.cents(), 1470);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod cart;
pub mod error;
pub mod invoice;
pub mod money;
pub mod pricing;
pub mod scan;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billing::BillSummary;
pub use cart::Cart;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use scan::{BarcodeDecoder, ScanImage};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest quantity a line item can carry.
pub const MIN_ITEM_QUANTITY: u32 = 1;

/// Largest quantity a line item can carry.
///
/// ## Business Reason
/// Mirrors the bound on the quantity picker at the counter.
pub const MAX_ITEM_QUANTITY: u32 = 100;

/// Highest selectable tax rate, in whole percent.
pub const MAX_TAX_PERCENT: u32 = 28;

/// Tax rate a fresh session starts with, in whole percent.
pub const DEFAULT_TAX_PERCENT: u32 = 5;

/// Highest unit price accepted from manual entry ($10,000.00).
pub const MAX_MANUAL_PRICE_CENTS: i64 = 1_000_000;

/// Name used when the catalog does not provide one.
pub const UNKNOWN_PRODUCT_NAME: &str = "Unknown";
