//! # Billing Calculator
//!
//! Tax and grand total from a subtotal and a whole-percent tax rate.
//!
//! ```text
//! Subtotal: $100.00
//!      │
//!      ▼
//! compute(subtotal, 5%) ← THIS MODULE
//!      │
//!      ├── tax_amount = subtotal × 5 / 100 = $5.00
//!      └── total      = subtotal + tax     = $105.00
//! ```
//!
//! The subtotal is always whole cents, so rounding the tax half-up to the
//! cent here shows exactly what rounding the raw product at display time
//! would show.

use serde::Serialize;

use crate::money::Money;
use crate::types::TaxRate;

/// Totals for the current cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillSummary {
    /// Sum of all line totals.
    pub subtotal: Money,

    /// Rate applied to the subtotal.
    pub tax_rate: TaxRate,

    /// `subtotal × tax_rate / 100`.
    pub tax_amount: Money,

    /// `subtotal + tax_amount`.
    pub total: Money,
}

/// Computes tax and grand total for a subtotal.
///
/// ## Example
/// ```rust
/// use scanbill_core::{billing, Money, TaxRate};
///
/// let bill = billing::compute(Money::from_cents(10000), TaxRate::from_percent(5).unwrap());
/// assert_eq!(bill.tax_amount.cents(), 500);
/// assert_eq!(bill.total.cents(), 10500);
/// ```
pub fn compute(subtotal: Money, tax_rate: TaxRate) -> BillSummary {
    let tax_amount = subtotal.calculate_tax(tax_rate);

    BillSummary {
        subtotal,
        tax_rate,
        tax_amount,
        total: subtotal + tax_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(percent: u32) -> TaxRate {
        TaxRate::from_percent(percent).unwrap()
    }

    /// `round(subtotal + subtotal * rate / 100, 2)` in float arithmetic.
    fn reference_total(subtotal_cents: i64, percent: u32) -> f64 {
        let subtotal = subtotal_cents as f64 / 100.0;
        let total = subtotal + subtotal * percent as f64 / 100.0;
        (total * 100.0).round() / 100.0
    }

    #[test]
    fn test_hundred_at_five_percent() {
        let bill = compute(Money::from_cents(10000), rate(5));
        assert_eq!(bill.tax_amount.cents(), 500);
        assert_eq!(bill.total.cents(), 10500);
    }

    #[test]
    fn test_boundary_rates() {
        let subtotal = Money::from_cents(4321);
        for percent in [0, 5, 28] {
            let bill = compute(subtotal, rate(percent));
            assert_eq!(bill.subtotal, subtotal);
            assert_eq!(bill.tax_rate.percent(), percent);
            assert_eq!(bill.total, bill.subtotal + bill.tax_amount);
            assert_eq!(
                bill.total.cents(),
                (reference_total(4321, percent) * 100.0).round() as i64,
                "rate {percent}%: got {}",
                bill.total
            );
        }
    }

    #[test]
    fn test_zero_rate_adds_nothing() {
        let bill = compute(Money::from_cents(1999), TaxRate::zero());
        assert!(bill.tax_amount.is_zero());
        assert_eq!(bill.total.cents(), 1999);
    }

    #[test]
    fn test_empty_cart_totals() {
        let bill = compute(Money::zero(), rate(28));
        assert!(bill.total.is_zero());
    }

    #[test]
    fn test_fractional_tax_display() {
        // $14.00 at 5% = $0.70; $14.10 at 28% = $3.948 → $3.95
        assert_eq!(compute(Money::from_cents(1400), rate(5)).total.cents(), 1470);
        let bill = compute(Money::from_cents(1410), rate(28));
        assert_eq!(bill.tax_amount.cents(), 395);
        assert_eq!(bill.total.cents(), 1805);
    }
}
