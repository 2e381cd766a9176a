//! # Invoice Renderer
//!
//! Formats the cart and its totals as a plain-text receipt.
//!
//! ## Layout
//! ````text
//! ### Invoice
//! Date: 18-10-2026 14:05
//! ```
//!    Product  Qty  Price  Total
//! 0  Milk       2   7.00  14.00
//! ```
//! Subtotal: $14.00
//! Tax: 5%
//! **Grand Total: $14.70**
//! ````
//!
//! Display only: nothing here is persisted or read back.

use chrono::NaiveDateTime;

use crate::billing::BillSummary;
use crate::money::Money;
use crate::types::LineItem;

/// Date format printed on the invoice (day-month-year hour:minute).
pub const DATE_FORMAT: &str = "%d-%m-%Y %H:%M";

const HEADERS: [&str; 5] = ["", "Product", "Qty", "Price", "Total"];

/// Renders the full invoice.
pub fn render(items: &[LineItem], summary: &BillSummary, timestamp: NaiveDateTime) -> String {
    format!(
        "### Invoice\nDate: {}\n```\n{}```\nSubtotal: {}\nTax: {}\n**Grand Total: {}**\n",
        timestamp.format(DATE_FORMAT),
        render_table(items),
        summary.subtotal,
        summary.tax_rate,
        summary.total,
    )
}

/// Renders the running cart view: the item table, subtotal and total.
pub fn render_cart(items: &[LineItem], summary: &BillSummary) -> String {
    format!(
        "{}Subtotal: {}\nTotal: {}\n",
        render_table(items),
        summary.subtotal,
        summary.total
    )
}

/// Renders line items as an aligned table with a row index column.
///
/// Text columns are left aligned, numbers right aligned. Every line ends in
/// `\n`; trailing spaces are trimmed.
pub fn render_table(items: &[LineItem]) -> String {
    let header: [String; 5] = HEADERS.map(String::from);
    let rows: Vec<[String; 5]> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            [
                index.to_string(),
                item.product_name().to_string(),
                item.quantity().to_string(),
                plain_amount(item.unit_price()),
                plain_amount(item.line_total()),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for row in std::iter::once(&header).chain(rows.iter()) {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(rows.iter()) {
        let line = format!(
            "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}  {:>w4$}",
            row[0],
            row[1],
            row[2],
            row[3],
            row[4],
            w0 = widths[0],
            w1 = widths[1],
            w2 = widths[2],
            w3 = widths[3],
            w4 = widths[4],
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Amount without the currency prefix, e.g. `14.00`.
fn plain_amount(amount: Money) -> String {
    amount.to_string().replacen('$', "", 1)
}
