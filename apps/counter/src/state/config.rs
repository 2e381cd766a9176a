//! # Configuration State
//!
//! Application configuration, built once at startup.
//!
//! Values come from [`AppConfig::default`]; an embedding application may
//! deserialize one instead. Read-only after startup.

use serde::{Deserialize, Serialize};

use scanbill_catalog::CatalogConfig;
use scanbill_core::validation::ValidationResult;
use scanbill_core::{TaxRate, DEFAULT_TAX_PERCENT};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    /// Banner printed when the counter starts
    pub title: String,

    /// Tax rate a new session starts with, in whole percent (0-28)
    pub default_tax_percent: u32,

    /// Product catalog endpoint
    pub catalog: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            title: "Universal Barcode Scanner & Billing".to_string(),
            default_tax_percent: DEFAULT_TAX_PERCENT,
            catalog: CatalogConfig::default(),
        }
    }
}

impl AppConfig {
    /// The configured starting tax rate, validated.
    pub fn default_tax_rate(&self) -> ValidationResult<TaxRate> {
        TaxRate::from_percent(self.default_tax_percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tax_rate() {
        let config = AppConfig::default();
        assert_eq!(config.default_tax_rate().unwrap().percent(), 5);
    }

    #[test]
    fn test_out_of_range_tax_is_rejected() {
        let config = AppConfig {
            default_tax_percent: 40,
            ..AppConfig::default()
        };
        assert!(config.default_tax_rate().is_err());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig =
            serde_json::from_str(r#"{ "defaultTaxPercent": 18, "catalog": { "timeoutSecs": 3 } }"#)
                .unwrap();
        assert_eq!(config.default_tax_percent, 18);
        assert_eq!(config.catalog.timeout_secs, 3);
        assert_eq!(config.title, "Universal Barcode Scanner & Billing");
    }
}
