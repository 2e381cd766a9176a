//! # Catalog Error Types
//!
//! Why a lookup failed.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Error Categories                            │
//! │                                                                         │
//! │  Before the request     Transport            Catalog answer             │
//! │  ──────────────────     ─────────            ──────────────             │
//! │  InvalidCode            Timeout              NotFound (status != 1)     │
//! │  ClientBuild            Transport            MissingProduct             │
//! │                         Decode                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cashier never sees these: [`ProductResolver::resolve`] logs the cause
//! and collapses every variant to "not found".
//!
//! [`ProductResolver::resolve`]: crate::ProductResolver::resolve

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The code is not a run of decimal digits; no request was made.
    #[error("Not a catalog code: {0}")]
    InvalidCode(String),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The catalog did not answer within the configured timeout.
    #[error("Catalog request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// Connection refused, DNS failure, TLS failure...
    #[error("Catalog request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The body was not the JSON we expect.
    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error),

    /// The catalog answered with a status other than 1.
    #[error("Product {code} not found in catalog")]
    NotFound { code: String },

    /// Status 1 but no product object.
    #[error("Catalog reported {code} as found but sent no product")]
    MissingProduct { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::NotFound {
                code: "123".to_string()
            }
            .to_string(),
            "Product 123 not found in catalog"
        );
        assert_eq!(
            CatalogError::Timeout { secs: 10 }.to_string(),
            "Catalog request timed out after 10s"
        );
    }
}
