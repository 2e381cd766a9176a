//! # Cart Ledger
//!
//! The in-memory, append-only list of line items for one session.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Ledger Operations                               │
//! │                                                                         │
//! │  Session Action           Ledger Call            State Change           │
//! │  ──────────────           ───────────            ────────────           │
//! │                                                                         │
//! │  Add scanned product ───► add() ───────────────► items.push(item)      │
//! │  Add manual entry ──────► add() ───────────────► items.push(item)      │
//! │  View cart / invoice ───► items(), subtotal() ─► (read only)           │
//! │                                                                         │
//! │  NOTE: no remove, edit, merge or clear. The cart lives exactly as      │
//! │        long as its session.                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::billing::{self, BillSummary};
use crate::money::Money;
use crate::types::{LineItem, TaxRate};

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order (the invoice lists them in that order)
/// - Every item satisfies `line_total == unit_price × quantity`
#[derive(Debug, Clone, Serialize)]
pub struct Cart {
    items: Vec<LineItem>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Appends a line item.
    ///
    /// The ledger trusts its inputs: callers validate name, price and
    /// quantity first (see [`crate::validation`]).
    pub fn add(&mut self, name: impl Into<String>, unit_price: Money, quantity: u32) -> &LineItem {
        let index = self.items.len();
        self.items.push(LineItem::new(name, unit_price, quantity));
        &self.items[index]
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Sum of all line totals; zero when empty.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(LineItem::line_total).sum()
    }

    /// Subtotal, tax and grand total at the given rate.
    pub fn summary(&self, tax_rate: TaxRate) -> BillSummary {
        billing::compute(self.subtotal(), tax_rate)
    }

    /// Number of line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total quantity across all line items.
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| i.quantity() as u64).sum()
    }

    /// When the cart (and so the session) started.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert!(cart.subtotal().is_zero());
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();

        let item = cart.add("Milk", Money::from_cents(700), 2);
        assert_eq!(item.line_total().cents(), 1400);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.subtotal().cents(), 1400);
    }

    #[test]
    fn test_same_product_is_not_merged() {
        let mut cart = Cart::new();
        cart.add("Milk", Money::from_cents(700), 1);
        cart.add("Milk", Money::from_cents(700), 1);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal().cents(), 1400);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = Cart::new();
        cart.add("Bread", Money::from_cents(250), 1);
        cart.add("Apples", Money::from_cents(99), 6);
        cart.add("Cheese", Money::from_cents(1299), 1);

        let names: Vec<&str> = cart.items().iter().map(|i| i.product_name()).collect();
        assert_eq!(names, ["Bread", "Apples", "Cheese"]);
    }

    #[test]
    fn test_subtotal_independent_of_order() {
        let lines = [(333_i64, 3_u32), (1999, 1), (5, 100), (4550, 7)];

        let mut forward = Cart::new();
        for (cents, qty) in lines {
            forward.add("x", Money::from_cents(cents), qty);
        }
        let mut backward = Cart::new();
        for (cents, qty) in lines.iter().rev() {
            backward.add("x", Money::from_cents(*cents), *qty);
        }

        let expected: i64 = lines.iter().map(|(c, q)| c * *q as i64).sum();
        assert_eq!(forward.subtotal().cents(), expected);
        assert_eq!(backward.subtotal(), forward.subtotal());
    }

    #[test]
    fn test_subtotal_matches_float_reference() {
        // 0.1 × 3 + 0.2 × 1 drifts in floats; cents stay exact
        let mut cart = Cart::new();
        cart.add("a", Money::from_cents(10), 3);
        cart.add("b", Money::from_cents(20), 1);

        let reference: f64 = 0.1 * 3.0 + 0.2 * 1.0;
        assert_eq!(cart.subtotal().cents(), 50);
        assert_eq!(cart.subtotal().cents(), (reference * 100.0).round() as i64);
    }

    #[test]
    fn test_summary_uses_subtotal() {
        let mut cart = Cart::new();
        cart.add("Rice", Money::from_cents(5000), 2);

        let bill = cart.summary(TaxRate::from_percent(5).unwrap());
        assert_eq!(bill.subtotal.cents(), 10000);
        assert_eq!(bill.tax_amount.cents(), 500);
        assert_eq!(bill.total.cents(), 10500);
    }
}
