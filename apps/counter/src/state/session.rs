//! # Session State
//!
//! One cashier session: the cart, the tax rate, and the product currently
//! waiting to be added.
//!
//! ## Scan Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ──scan/lookup──► Scanning ──┬──► Resolved ──add──────► Idle     │
//! │    ▲                               │                                    │
//! │    │                               └──► Unresolved ──manual─► Idle     │
//! │    │                                                                    │
//! │    └──────────── manual entry is accepted from any phase ──────────────│
//! │                                                                         │
//! │   A new scan while a product is Resolved abandons that product.        │
//! │   The cart survives every cycle until the session ends.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use scanbill_catalog::ProductResolver;
use scanbill_core::validation::{validate_manual_entry, validate_quantity};
use scanbill_core::{
    invoice, BarcodeDecoder, BillSummary, Cart, CoreError, LineItem, ManualEntry, Product,
    ScanImage, TaxRate, ValidationError,
};

use crate::error::{CommandError, MANUAL_ENTRY_MESSAGE};
use crate::state::AppConfig;

/// Where the session is in the scan cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Waiting for a scan or a manual entry.
    Idle,
    /// A scan or lookup is in flight.
    Scanning,
    /// A product is pending and can be added.
    Resolved,
    /// The last scan produced nothing; manual entry is the way forward.
    Unresolved,
}

/// Per-session state.
///
/// ## Isolation
/// Each session owns its cart outright. Nothing is shared between sessions
/// and nothing outlives the session.
pub struct Session {
    id: Uuid,
    cart: Cart,
    tax_rate: TaxRate,
    pending: Option<Product>,
    phase: SessionPhase,
    decoder: Option<Box<dyn BarcodeDecoder>>,
}

impl Session {
    /// Starts a session.
    ///
    /// `decoder` is the barcode capability found on this host, if any. It is
    /// decided here, once, and never re-probed.
    pub fn new(
        config: &AppConfig,
        decoder: Option<Box<dyn BarcodeDecoder>>,
    ) -> Result<Self, ValidationError> {
        let session = Session {
            id: Uuid::new_v4(),
            cart: Cart::new(),
            tax_rate: config.default_tax_rate()?,
            pending: None,
            phase: SessionPhase::Idle,
            decoder,
        };

        match &session.decoder {
            Some(decoder) => info!(session_id = %session.id, decoder = decoder.name(), "Session started"),
            None => warn!(
                session_id = %session.id,
                "Session started without a barcode decoder; manual entry only"
            ),
        }

        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// The resolved product waiting for `add`.
    pub fn pending(&self) -> Option<&Product> {
        self.pending.as_ref()
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn decoder_available(&self) -> bool {
        self.decoder.is_some()
    }

    /// How long the session has been open at `now`.
    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        now.signed_duration_since(self.cart.created_at())
    }

    // =========================================================================
    // Scanning
    // =========================================================================

    /// Reads the code out of an image.
    pub fn decode(&self, image: &ScanImage) -> Result<String, CommandError> {
        let decoder = self
            .decoder
            .as_ref()
            .ok_or_else(CommandError::capability_unavailable)?;

        match decoder.decode(image) {
            Some(code) => {
                debug!(%code, "Decoded payload");
                Ok(code)
            }
            None => {
                debug!(bytes = image.len(), "No payload in image");
                Err(CommandError::decode_failure())
            }
        }
    }

    /// Decodes an image and looks the code up.
    pub async fn scan(
        &mut self,
        resolver: &ProductResolver,
        image: &ScanImage,
    ) -> Result<&Product, CommandError> {
        self.begin_scan();

        let code = match self.decode(image) {
            Ok(code) => code,
            Err(err) => {
                self.phase = SessionPhase::Unresolved;
                return Err(err);
            }
        };

        self.resolve(resolver, &code).await
    }

    /// Looks up a code typed or wedged in by a handheld scanner.
    pub async fn lookup(
        &mut self,
        resolver: &ProductResolver,
        code: &str,
    ) -> Result<&Product, CommandError> {
        self.begin_scan();
        self.resolve(resolver, code.trim()).await
    }

    fn begin_scan(&mut self) {
        if let Some(abandoned) = self.pending.take() {
            debug!(code = %abandoned.code, "Abandoning pending product");
        }
        self.phase = SessionPhase::Scanning;
    }

    async fn resolve(
        &mut self,
        resolver: &ProductResolver,
        code: &str,
    ) -> Result<&Product, CommandError> {
        match resolver.resolve(code).await {
            Some(product) => {
                self.phase = SessionPhase::Resolved;
                Ok(self.pending.insert(product))
            }
            None => {
                self.phase = SessionPhase::Unresolved;
                Err(CommandError::lookup_miss(code))
            }
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds the pending product at its derived price.
    ///
    /// A rejected quantity keeps the product pending.
    pub fn add_pending(&mut self, quantity: u32) -> Result<&LineItem, CommandError> {
        validate_quantity(quantity)?;

        let product = self
            .pending
            .take()
            .ok_or_else(CommandError::no_pending_product)?;
        self.phase = SessionPhase::Idle;

        info!(code = %product.code, name = %product.name, quantity, "Added scanned product");
        Ok(self.cart.add(product.name, product.price, quantity))
    }

    /// Adds a typed-in product. Nothing changes if the entry is invalid.
    pub fn add_manual(&mut self, entry: ManualEntry) -> Result<&LineItem, CommandError> {
        if let Err(err) = validate_manual_entry(&entry) {
            debug!(error = %err, "Manual entry rejected");
            let bad_quantity =
                matches!(&err, ValidationError::OutOfRange { field, .. } if field == "quantity");
            return Err(if bad_quantity {
                err.into()
            } else {
                CommandError::validation(MANUAL_ENTRY_MESSAGE)
            });
        }

        if self.phase == SessionPhase::Unresolved {
            self.phase = SessionPhase::Idle;
        }

        let name = entry.name.trim();
        info!(name, price = %entry.unit_price, quantity = entry.quantity, "Added manual item");
        Ok(self.cart.add(name, entry.unit_price, entry.quantity))
    }

    pub fn set_tax_percent(&mut self, percent: u32) -> Result<TaxRate, CommandError> {
        self.tax_rate = TaxRate::from_percent(percent)?;
        debug!(tax = %self.tax_rate, "Tax rate changed");
        Ok(self.tax_rate)
    }

    // =========================================================================
    // Billing
    // =========================================================================

    pub fn summary(&self) -> BillSummary {
        self.cart.summary(self.tax_rate)
    }

    /// The cart table with running totals, or "Cart empty".
    pub fn cart_view(&self) -> String {
        if self.cart.is_empty() {
            return "Cart empty\n".to_string();
        }
        invoice::render_cart(self.cart.items(), &self.summary())
    }

    /// Renders the invoice stamped with `now`.
    pub fn invoice(&self, now: NaiveDateTime) -> Result<String, CommandError> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }
        Ok(invoice::render(self.cart.items(), &self.summary(), now))
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("items", &self.cart.len())
            .field("tax_rate", &self.tax_rate)
            .field("phase", &self.phase)
            .field("decoder", &self.decoder.as_ref().map(|d| d.name()))
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
