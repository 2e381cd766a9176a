//! # Scan Commands
//!
//! `scan <image-path>` and `lookup <code>`.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan photo.png                                                         │
//! │       │                                                                 │
//! │       ├── no decoder on this host ──► "Barcode scanner not available"   │
//! │       ├── file unreadable ──────────► "Could not read image ..."        │
//! │       ▼                                                                 │
//! │  Session::scan ──► decode ──► resolve                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Scanned: 0123456789012                                                 │
//! │  { "code": ..., "name": "Milk", ..., "price": "$7.00" }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::path::Path;
use tracing::debug;

use scanbill_catalog::ProductResolver;
use scanbill_core::{Product, ScanImage};

use crate::error::CommandError;
use crate::state::Session;

/// Product details as shown after a successful lookup.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub brand: &'a str,
    pub category: &'a str,
    pub ingredients: &'a str,
    pub price: String,
}

impl<'a> From<&'a Product> for ProductDetails<'a> {
    fn from(product: &'a Product) -> Self {
        ProductDetails {
            code: &product.code,
            name: &product.name,
            brand: &product.brand,
            category: &product.category,
            ingredients: &product.ingredients,
            price: product.price.to_string(),
        }
    }
}

/// Reads an image file and scans it.
///
/// The capability is checked before the file is touched.
pub async fn scan_image(
    session: &mut Session,
    resolver: &ProductResolver,
    path: &Path,
) -> Result<String, CommandError> {
    if !session.decoder_available() {
        return Err(CommandError::capability_unavailable());
    }

    let bytes = std::fs::read(path).map_err(|e| CommandError::capture(path, e))?;
    debug!(path = %path.display(), bytes = bytes.len(), "Captured image");

    let product = session.scan(resolver, &ScanImage::from_bytes(bytes)).await?;
    Ok(describe(product))
}

/// Looks up a code typed at the prompt.
pub async fn lookup_code(
    session: &mut Session,
    resolver: &ProductResolver,
    code: &str,
) -> Result<String, CommandError> {
    let product = session.lookup(resolver, code).await?;
    Ok(describe(product))
}

fn describe(product: &Product) -> String {
    let details = serde_json::to_string_pretty(&ProductDetails::from(product))
        .unwrap_or_else(|_| product.name.clone());

    format!(
        "Scanned: {}\n{}\nUse `add [qty]` to add it to the cart\n",
        product.code, details
    )
}
