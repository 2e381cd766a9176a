//! # Command Error Type
//!
//! Unified error type for counter commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow at the Counter                            │
//! │                                                                         │
//! │  Cashier types            Rust Backend                                  │
//! │  ─────────────            ────────────                                  │
//! │                                                                         │
//! │  scan photo.png                                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function: Result<String, CommandError>                  │  │
//! │  │                                                                  │  │
//! │  │  No decoder?      ──► CapabilityUnavailable ──┐                  │  │
//! │  │  Nothing decoded? ──► DecodeFailure ──────────┤                  │  │
//! │  │  Catalog miss?    ──► LookupMiss ─────────────┼──► message ─────►│  │
//! │  │  Bad typed input? ──► ValidationError ────────┘                  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  None of these end the session; the next command runs normally.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::Path;

use scanbill_core::{CoreError, ValidationError};

/// Error returned from counter commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "LOOKUP_MISS",
///   "message": "Product not found – use manual entry"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No barcode decoder on this host; manual entry still works
    CapabilityUnavailable,

    /// The image held no readable code
    DecodeFailure,

    /// Malformed code, catalog miss, or catalog unreachable
    LookupMiss,

    /// Typed input rejected
    ValidationError,

    /// `add` without a resolved product
    NoPendingProduct,

    /// `invoice` on an empty cart
    EmptyCart,

    /// The image file could not be read
    CaptureFailed,

    /// Unrecognized command line
    UnknownCommand,
}

/// Shown when a manual entry has a bad name or price.
pub const MANUAL_ENTRY_MESSAGE: &str = "Enter valid product name & price";

impl CommandError {
    /// Creates a new command error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        CommandError {
            code,
            message: message.into(),
        }
    }

    pub fn capability_unavailable() -> Self {
        CommandError::new(
            ErrorCode::CapabilityUnavailable,
            "Barcode scanner not available – use manual entry",
        )
    }

    pub fn decode_failure() -> Self {
        CommandError::new(ErrorCode::DecodeFailure, "No barcode detected")
    }

    /// Every lookup failure reads the same to the cashier.
    pub fn lookup_miss(code: &str) -> Self {
        CommandError::new(
            ErrorCode::LookupMiss,
            format!("Product {} not found – use manual entry", code),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        CommandError::new(ErrorCode::ValidationError, message)
    }

    pub fn no_pending_product() -> Self {
        CommandError::new(
            ErrorCode::NoPendingProduct,
            "Nothing scanned yet – scan or look up a product first",
        )
    }

    pub fn capture(path: &Path, err: std::io::Error) -> Self {
        CommandError::new(
            ErrorCode::CaptureFailed,
            format!("Could not read image {}: {}", path.display(), err),
        )
    }

    pub fn unknown_command(line: &str) -> Self {
        CommandError::new(
            ErrorCode::UnknownCommand,
            format!("Unknown command '{}' – type `help`", line),
        )
    }
}

/// Converts validation errors to command errors.
impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::validation(err.to_string())
    }
}

/// Converts core errors to command errors.
impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidCode(code) => CommandError::lookup_miss(&code),
            CoreError::EmptyCart => CommandError::new(ErrorCode::EmptyCart, "Cart empty"),
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for CommandError {}
