//! # Product Resolver
//!
//! One best-effort catalog request per scanned code.
//!
//! ## Lookup Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  resolve("0123456789012")                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  derive_price(code) ── not digits ──► None, no request                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  GET {base}/api/v0/product/0123456789012.json                          │
//! │       │                                                                 │
//! │       ├── timeout / transport / bad JSON ──► None                      │
//! │       ├── status != 1 ─────────────────────► None                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Product { name: "Milk", brand: "", ..., price: $7.00 }                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry: a failed lookup sends the cashier to manual entry,
//! which is faster than waiting on a second attempt.

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use scanbill_core::pricing::derive_price;
use scanbill_core::{Product, UNKNOWN_PRODUCT_NAME};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, CatalogResult};

// =============================================================================
// Wire Format
// =============================================================================

/// Top-level catalog body. Both fields are optional on the wire.
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    #[serde(default)]
    status: Option<Value>,

    /// Kept loose: only four string fields are read from it.
    #[serde(default)]
    product: Option<Map<String, Value>>,
}

impl CatalogResponse {
    /// The catalog signals a hit with the number 1.
    fn is_found(&self) -> bool {
        matches!(self.status.as_ref().and_then(Value::as_f64), Some(s) if s == 1.0)
    }
}

/// Reads a text field, treating `null` and missing the same way.
fn text_field(product: &Map<String, Value>, key: &str) -> Option<String> {
    match product.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Client for the remote product catalog.
#[derive(Debug, Clone)]
pub struct ProductResolver {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl ProductResolver {
    /// Builds a resolver with the configured timeout and user agent.
    pub fn new(config: CatalogConfig) -> CatalogResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(CatalogError::ClientBuild)?;

        Ok(ProductResolver { client, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Looks up a code, returning `None` on any failure.
    ///
    /// Malformed codes, misses, timeouts and broken responses all look the
    /// same to the caller. The cause is logged.
    pub async fn resolve(&self, code: &str) -> Option<Product> {
        match self.fetch(code).await {
            Ok(product) => {
                info!(code, name = %product.name, price = %product.price, "Product resolved");
                Some(product)
            }
            Err(err @ CatalogError::InvalidCode(_)) => {
                debug!(code, error = %err, "Skipping catalog lookup");
                None
            }
            Err(err @ CatalogError::NotFound { .. }) => {
                info!(code, error = %err, "Catalog miss");
                None
            }
            Err(err) => {
                warn!(code, error = %err, "Catalog lookup failed");
                None
            }
        }
    }

    /// Looks up a code and reports why it failed.
    ///
    /// Makes at most one HTTP request, and none when `code` is not numeric.
    pub async fn fetch(&self, code: &str) -> CatalogResult<Product> {
        let price = derive_price(code).map_err(|_| CatalogError::InvalidCode(code.to_string()))?;

        let url = self.config.product_url(code);
        debug!(%url, "Querying catalog");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.classify(e, CatalogError::Transport))?;

        let http_status = response.status();
        let body: CatalogResponse = response
            .json()
            .await
            .map_err(|e| self.classify(e, CatalogError::Decode))?;

        debug!(%http_status, status = ?body.status, "Catalog responded");

        if !body.is_found() {
            return Err(CatalogError::NotFound {
                code: code.to_string(),
            });
        }

        let product = body.product.ok_or_else(|| CatalogError::MissingProduct {
            code: code.to_string(),
        })?;

        let name = text_field(&product, "product_name")
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string());

        Ok(Product {
            code: code.to_string(),
            name,
            brand: text_field(&product, "brands").unwrap_or_default(),
            category: text_field(&product, "categories").unwrap_or_default(),
            ingredients: text_field(&product, "ingredients_text").unwrap_or_default(),
            price,
        })
    }

    /// Timeouts get their own variant; everything else goes to `fallback`.
    fn classify(
        &self,
        err: reqwest::Error,
        fallback: fn(reqwest::Error) -> CatalogError,
    ) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout {
                secs: self.config.timeout_secs,
            }
        } else {
            fallback(err)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    const MILK_CODE: &str = "0123456789012";
    const MILK_PATH: &str = "/api/v0/product/0123456789012.json";

    fn resolver_for(server: &MockServer) -> ProductResolver {
        ProductResolver::new(CatalogConfig::default().with_base_url(server.base_url())).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_success() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "status": 1,
                    "product": {
                        "product_name": "Milk",
                        "brands": "Dairy Co",
                        "categories": "Dairies, Milks",
                        "ingredients_text": "Whole milk"
                    }
                }));
        });

        let product = resolver_for(&server).resolve(MILK_CODE).await.unwrap();

        assert_eq!(product.code, MILK_CODE);
        assert_eq!(product.name, "Milk");
        assert_eq!(product.brand, "Dairy Co");
        assert_eq!(product.category, "Dairies, Milks");
        assert_eq!(product.ingredients, "Whole milk");
        assert_eq!(product.price.cents(), 700);

        mock.assert();
    }

    #[tokio::test]
    async fn test_missing_fields_take_defaults() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200).json_body(json!({
                "status": 1,
                "product": { "brands": null }
            }));
        });

        let product = resolver_for(&server).resolve(MILK_CODE).await.unwrap();

        assert_eq!(product.name, "Unknown");
        assert_eq!(product.brand, "");
        assert_eq!(product.category, "");
        assert_eq!(product.ingredients, "");
    }

    #[tokio::test]
    async fn test_null_name_becomes_unknown() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200).json_body(json!({
                "status": 1,
                "product": { "product_name": null, "brands": "Dairy Co" }
            }));
        });

        let product = resolver_for(&server).resolve(MILK_CODE).await.unwrap();
        assert_eq!(product.name, "Unknown");
        assert_eq!(product.brand, "Dairy Co");
        assert_eq!(product.price.cents(), 700);
    }

    #[tokio::test]
    async fn test_blank_name_becomes_unknown() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200).json_body(json!({
                "status": 1,
                "product": { "product_name": "   " }
            }));
        });

        let product = resolver_for(&server).resolve(MILK_CODE).await.unwrap();
        assert_eq!(product.name, "Unknown");
    }

    #[tokio::test]
    async fn test_non_digit_code_makes_no_request() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200).json_body(json!({ "status": 1, "product": {} }));
        });

        let resolver = resolver_for(&server);
        assert!(resolver.resolve("ABC123").await.is_none());
        assert!(resolver.resolve("https://example.com/p/42").await.is_none());
        assert!(resolver.resolve("").await.is_none());
        assert!(matches!(
            resolver.fetch("12-34").await,
            Err(CatalogError::InvalidCode(_))
        ));

        assert_eq!(mock.calls(), 0, "non-numeric codes must never reach the catalog");
    }

    #[tokio::test]
    async fn test_status_zero_is_not_found() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(404).json_body(json!({
                "status": 0,
                "status_verbose": "product not found"
            }));
        });

        let resolver = resolver_for(&server);
        assert!(matches!(
            resolver.fetch(MILK_CODE).await,
            Err(CatalogError::NotFound { .. })
        ));
        assert!(resolver.resolve(MILK_CODE).await.is_none());

        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn test_missing_status_is_not_found() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200)
                .json_body(json!({ "product": { "product_name": "Milk" } }));
        });

        assert!(matches!(
            resolver_for(&server).fetch(MILK_CODE).await,
            Err(CatalogError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_string_status_is_not_success() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200)
                .json_body(json!({ "status": "1", "product": { "product_name": "Milk" } }));
        });

        assert!(resolver_for(&server).resolve(MILK_CODE).await.is_none());
    }

    #[tokio::test]
    async fn test_found_without_product() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200).json_body(json!({ "status": 1 }));
        });

        assert!(matches!(
            resolver_for(&server).fetch(MILK_CODE).await,
            Err(CatalogError::MissingProduct { .. })
        ));
    }

    #[tokio::test]
    async fn test_garbage_body_is_decode_error() {
        let server = MockServer::start();

        server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(502).body("<html>Bad Gateway</html>");
        });

        let resolver = resolver_for(&server);
        assert!(matches!(
            resolver.fetch(MILK_CODE).await,
            Err(CatalogError::Decode(_))
        ));
        assert!(resolver.resolve(MILK_CODE).await.is_none());
    }

    #[tokio::test]
    async fn test_timeout_is_single_attempt() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET).path(MILK_PATH);
            then.status(200)
                .delay(Duration::from_secs(3))
                .json_body(json!({ "status": 1, "product": {} }));
        });

        let config = CatalogConfig::default()
            .with_base_url(server.base_url())
            .with_timeout_secs(1);
        let resolver = ProductResolver::new(config).unwrap();

        assert!(matches!(
            resolver.fetch(MILK_CODE).await,
            Err(CatalogError::Timeout { secs: 1 })
        ));
        assert_eq!(mock.calls(), 1, "a timed out lookup must not be retried");
    }

    #[tokio::test]
    async fn test_unreachable_catalog() {
        // Nothing listens on the discard port in test environments
        let config = CatalogConfig::default().with_base_url("http://127.0.0.1:9");
        let resolver = ProductResolver::new(config).unwrap();

        assert!(resolver.resolve(MILK_CODE).await.is_none());
    }
}
