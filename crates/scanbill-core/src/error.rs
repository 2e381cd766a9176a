//! # Error Types
//!
//! Domain-specific error types for scanbill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scanbill-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  scanbill-catalog errors (separate crate)                              │
//! │  └── CatalogError     - Lookup failures (collapsed to "not found")     │
//! │                                                                         │
//! │  counter app errors                                                    │
//! │  └── CommandError     - What the cashier sees                          │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CommandError → terminal           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The scanned payload is not a numeric catalog code.
    ///
    /// ## When This Occurs
    /// - A QR code carrying a URL or free text was scanned
    /// - The decoder returned a partial / garbled read
    #[error("Not a catalog code: {0}")]
    InvalidCode(String),

    /// An operation needs at least one line item.
    #[error("Cart empty")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when typed input (manual entry, quantity, tax slider) does not
/// meet requirements. Nothing reaches the cart when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
