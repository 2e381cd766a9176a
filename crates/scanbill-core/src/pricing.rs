//! # Pricing
//!
//! The catalog carries no price field, so the counter derives one from the
//! code itself. This is a **stand-in rule**, kept bit-for-bit so totals match
//! earlier deployments; replace it once a real price source exists.
//!
//! ```text
//! code "0123456789012"
//!              └┬┘
//!             "012" ──► n = 12 ──► (12 % 90) / 2 + 1 = 7.00
//! ```
//!
//! In cents the rule is `(n % 90) * 50 + 100`, which spans `[100, 4550]`
//! ($1.00 to $45.50) and always lands on a multiple of 50 cents.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// How many trailing characters of the code feed the price rule.
const PRICE_SUFFIX_LEN: usize = 3;

/// Returns true when `code` is a non-empty run of ASCII digits.
///
/// QR payloads (URLs, free text) and garbled reads fail this check and are
/// never sent to the catalog.
///
/// ## Example
/// ```rust
/// use scanbill_core::pricing::is_catalog_code;
///
/// assert!(is_catalog_code("0123456789012"));
/// assert!(!is_catalog_code("ABC123"));
/// assert!(!is_catalog_code(""));
/// ```
pub fn is_catalog_code(code: &str) -> bool {
    !code.is_empty() && code.bytes().all(|b| b.is_ascii_digit())
}

/// Derives the unit price for a catalog code.
///
/// Codes shorter than three digits use all of their digits.
pub fn derive_price(code: &str) -> CoreResult<Money> {
    if !is_catalog_code(code) {
        return Err(CoreError::InvalidCode(code.to_string()));
    }

    // ASCII-only, so byte slicing is on char boundaries
    let suffix = &code[code.len().saturating_sub(PRICE_SUFFIX_LEN)..];
    let n: i64 = suffix
        .parse()
        .map_err(|_| CoreError::InvalidCode(code.to_string()))?;

    Ok(Money::from_cents((n % 90) * 50 + 100))
}
