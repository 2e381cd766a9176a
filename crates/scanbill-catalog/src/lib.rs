//! # scanbill-catalog: Product Lookup for Scan & Bill
//!
//! Turns a scanned code into a [`Product`](scanbill_core::Product) by asking a
//! remote product catalog. This is the only crate in the workspace that talks
//! to the network, and it does so exactly once per lookup.
//!
//! ## Modules
//!
//! - [`config`] - Catalog endpoint and timeout
//! - [`resolver`] - The lookup itself
//! - [`error`] - Why a lookup failed (for logs; callers only see `None`)
//!
//! ## Example
//! ```rust,no_run
//! use scanbill_catalog::{CatalogConfig, ProductResolver};
//!
//! # async fn demo() -> scanbill_catalog::CatalogResult<()> {
//! let resolver = ProductResolver::new(CatalogConfig::default())?;
//! match resolver.resolve("3017620422003").await {
//!     Some(product) => println!("{} at {}", product.name, product.price),
//!     None => println!("Product not found – use manual entry"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod resolver;

pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use resolver::ProductResolver;
