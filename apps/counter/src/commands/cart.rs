//! # Cart Commands
//!
//! `add`, `manual`, `tax` and `cart`.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐   add / manual   ┌──────────┐   invoice   ┌──────────┐    │
//! │  │  Empty   │─────────────────►│ In Cart  │────────────►│ Printed  │    │
//! │  │  Cart    │                  │          │◄────────────│          │    │
//! │  └──────────┘                  └──────────┘  add more   └──────────┘    │
//! │                                                                         │
//! │  No remove, no edit, no clear: the cart ends with the session.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use scanbill_core::{LineItem, ManualEntry};

use crate::error::CommandError;
use crate::state::Session;

/// Adds the pending product.
pub fn add(session: &mut Session, quantity: u32) -> Result<String, CommandError> {
    let item = session.add_pending(quantity)?;
    Ok(added(item))
}

/// Adds a typed-in product.
pub fn manual(session: &mut Session, entry: ManualEntry) -> Result<String, CommandError> {
    let item = session.add_manual(entry)?;
    Ok(added(item))
}

pub fn tax(session: &mut Session, percent: u32) -> Result<String, CommandError> {
    let rate = session.set_tax_percent(percent)?;
    Ok(format!("Tax set to {}\n", rate))
}

pub fn view(session: &Session) -> String {
    session.cart_view()
}

fn added(item: &LineItem) -> String {
    format!(
        "Added {} x {} ({})\n",
        item.quantity(),
        item.product_name(),
        item.line_total()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use scanbill_core::Money;

    fn session() -> Session {
        Session::new(&AppConfig::default(), None).unwrap()
    }

    #[test]
    fn test_manual_then_view() {
        let mut session = session();
        let entry = ManualEntry {
            name: "Soap".to_string(),
            unit_price: Money::from_cents(199),
            quantity: 2,
        };

        assert_eq!(manual(&mut session, entry).unwrap(), "Added 2 x Soap ($3.98)\n");

        let text = view(&session);
        assert!(text.contains("Soap"));
        assert!(text.contains("Subtotal: $3.98"));
        assert!(text.contains("Total: $4.18"));
    }

    #[test]
    fn test_add_without_pending() {
        let err = add(&mut session(), 1).unwrap_err();
        assert_eq!(err.code, ErrorCode::NoPendingProduct);
    }

    #[test]
    fn test_tax_bounds() {
        let mut session = session();
        assert_eq!(tax(&mut session, 28).unwrap(), "Tax set to 28%\n");

        let err = tax(&mut session, 30).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "tax must be between 0 and 28");
    }

    #[test]
    fn test_empty_cart_view() {
        assert_eq!(view(&session()), "Cart empty\n");
    }
}
