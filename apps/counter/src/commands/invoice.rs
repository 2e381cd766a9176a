//! # Invoice Command
//!
//! Prints the invoice, stamped with local wall-clock time. The cart is left
//! as it is; printing twice prints the same lines.

use chrono::Local;

use crate::error::CommandError;
use crate::state::Session;

pub fn invoice(session: &Session) -> Result<String, CommandError> {
    session.invoice(Local::now().naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::state::AppConfig;
    use scanbill_core::{ManualEntry, Money};

    #[test]
    fn test_invoice_on_empty_cart() {
        let session = Session::new(&AppConfig::default(), None).unwrap();
        let err = invoice(&session).unwrap_err();
        assert_eq!(err.code, ErrorCode::EmptyCart);
        assert_eq!(err.message, "Cart empty");
    }

    #[test]
    fn test_invoice_keeps_cart() {
        let mut session = Session::new(&AppConfig::default(), None).unwrap();
        session
            .add_manual(ManualEntry {
                name: "Rice".to_string(),
                unit_price: Money::from_cents(5000),
                quantity: 2,
            })
            .unwrap();

        let text = invoice(&session).unwrap();
        assert!(text.starts_with("### Invoice\nDate: "));
        assert!(text.contains("Subtotal: $100.00"));
        assert!(text.ends_with("**Grand Total: $105.00**\n"));
        assert_eq!(session.cart().len(), 1);
    }
}
