//! # Catalog Configuration
//!
//! Where the catalog lives and how long to wait for it.
//!
//! Built in code and handed to [`ProductResolver::new`](crate::ProductResolver::new);
//! nothing is read from files or the environment.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Public Open Food Facts instance.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Upper bound on a single lookup, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Catalog client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Scheme and host of the catalog, without the API path.
    pub base_url: String,

    /// Request timeout covering connect, send and body read.
    pub timeout_secs: u64,

    /// Sent as `User-Agent`; the public catalog asks clients to identify.
    pub user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("scanbill/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CatalogConfig {
    /// Points the client at a different catalog host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Product endpoint for a code.
    ///
    /// ## Example
    /// ```rust
    /// use scanbill_catalog::CatalogConfig;
    ///
    /// let config = CatalogConfig::default().with_base_url("http://localhost:8080/");
    /// assert_eq!(
    ///     config.product_url("0123456789012"),
    ///     "http://localhost:8080/api/v0/product/0123456789012.json"
    /// );
    /// ```
    pub fn product_url(&self, code: &str) -> String {
        format!(
            "{}/api/v0/product/{}.json",
            self.base_url.trim_end_matches('/'),
            code
        )
    }
}
