//! # Validation Module
//!
//! Input validation for everything the cashier types.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Manual entry / quantity / tax input (counter app)                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  THIS MODULE: business rule validation                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Cart::add ── trusts its inputs, performs no checks                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scanbill_core::validation::{validate_quantity, validate_tax_percent};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_tax_percent(30).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::ManualEntry;
use crate::{MAX_ITEM_QUANTITY, MAX_MANUAL_PRICE_CENTS, MAX_TAX_PERCENT, MIN_ITEM_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted from manual entry.
const MAX_NAME_LEN: usize = 200;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace only
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use scanbill_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Soap").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Between 1 and 100 inclusive
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if !(MIN_ITEM_QUANTITY..=MAX_ITEM_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: MIN_ITEM_QUANTITY as i64,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a manually entered unit price.
///
/// ## Rules
/// - Must be strictly positive (a zero price is a typing mistake here)
/// - Must not exceed $10,000.00
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    if price.cents() > MAX_MANUAL_PRICE_CENTS {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: MAX_MANUAL_PRICE_CENTS / 100,
        });
    }

    Ok(())
}

/// Validates a tax rate in whole percent.
///
/// ## Rules
/// - Between 0 and 28 inclusive
pub fn validate_tax_percent(percent: u32) -> ValidationResult<()> {
    if percent > MAX_TAX_PERCENT {
        return Err(ValidationError::OutOfRange {
            field: "tax".to_string(),
            min: 0,
            max: MAX_TAX_PERCENT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a manual entry before it is appended to the cart.
///
/// ## User Workflow
/// ```text
/// Cashier types: name="Soap", price=0, qty=1
///      │
///      ▼
/// validate_manual_entry ← THIS FUNCTION
///      │
///      ├── name empty?   → Error, cart untouched
///      ├── price <= 0?   → Error, cart untouched
///      ├── qty not 1-100 → Error, cart untouched
///      │
///      └── OK → Cart::add
/// ```
pub fn validate_manual_entry(entry: &ManualEntry) -> ValidationResult<()> {
    validate_product_name(&entry.name)?;
    validate_unit_price(entry.unit_price)?;
    validate_quantity(entry.quantity)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
