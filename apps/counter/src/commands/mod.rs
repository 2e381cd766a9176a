//! # Counter Commands
//!
//! The line commands a cashier types, and how each maps onto the session.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (parsing + dispatch)
//! ├── scan.rs     ◄─── scan, lookup
//! ├── cart.rs     ◄─── add, manual, tax, cart
//! └── invoice.rs  ◄─── invoice
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  stdin: "manual 2 1.99 Soap"                                            │
//! │         │                                                               │
//! │         │ Command::from_str                                             │
//! │         ▼                                                               │
//! │  Command::Manual(ManualEntry { name: "Soap", $1.99, 2 })                │
//! │         │                                                               │
//! │         │ execute(&mut session, &resolver, command)                     │
//! │         ▼                                                               │
//! │  Result<String, CommandError>                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  stdout: "Added 2 x Soap ($3.98)"   or   "Error: ..."                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod invoice;
pub mod scan;

use std::path::PathBuf;
use std::str::FromStr;

use scanbill_catalog::ProductResolver;
use scanbill_core::{ManualEntry, Money, ValidationError};

use crate::error::{CommandError, MANUAL_ENTRY_MESSAGE};
use crate::state::Session;

/// Printed by `help`.
pub const HELP: &str = "\
Commands:
  scan <image-path>             decode a barcode photo and look it up
  lookup <code>                 look up a typed or wedge-scanned code
  add [qty]                     add the looked-up product (default qty 1)
  manual <qty> <price> <name>   add a product by hand
  tax <percent>                 set the tax rate (0-28)
  cart                          show the cart
  invoice                       print the invoice
  help                          show this text
  quit                          end the session
";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Scan(PathBuf),
    Lookup(String),
    Add(u32),
    Manual(ManualEntry),
    Tax(u32),
    Cart,
    Invoice,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "scan" if !rest.is_empty() => Ok(Command::Scan(PathBuf::from(rest))),
            "lookup" if !rest.is_empty() => Ok(Command::Lookup(rest.to_string())),
            "add" if rest.is_empty() => Ok(Command::Add(1)),
            "add" => parse_quantity(rest).map(Command::Add),
            "manual" => parse_manual(rest).map(Command::Manual),
            "tax" => parse_percent(rest).map(Command::Tax),
            "cart" => Ok(Command::Cart),
            "invoice" => Ok(Command::Invoice),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::unknown_command(line)),
        }
    }
}

fn parse_quantity(text: &str) -> Result<u32, CommandError> {
    text.parse().map_err(|_| {
        ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "expected a whole number".to_string(),
        }
        .into()
    })
}

fn parse_percent(text: &str) -> Result<u32, CommandError> {
    text.trim_end_matches('%').trim().parse().map_err(|_| {
        ValidationError::InvalidFormat {
            field: "tax".to_string(),
            reason: "expected a whole percent".to_string(),
        }
        .into()
    })
}

/// Splits off the first whitespace-delimited token.
fn next_token(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    Some(text.split_once(char::is_whitespace).unwrap_or((text, "")))
}

/// `<qty> <price> <name...>`; the name may contain spaces.
fn parse_manual(rest: &str) -> Result<ManualEntry, CommandError> {
    let Some((qty, rest)) = next_token(rest) else {
        return Err(CommandError::validation(MANUAL_ENTRY_MESSAGE));
    };
    let Some((price, name)) = next_token(rest) else {
        return Err(CommandError::validation(MANUAL_ENTRY_MESSAGE));
    };
    if name.trim().is_empty() {
        return Err(CommandError::validation(MANUAL_ENTRY_MESSAGE));
    }

    let quantity = parse_quantity(qty)?;
    let unit_price =
        Money::from_str(price).map_err(|_| CommandError::validation(MANUAL_ENTRY_MESSAGE))?;

    Ok(ManualEntry {
        name: name.trim().to_string(),
        unit_price,
        quantity,
    })
}

/// Runs one command against the session.
///
/// `Quit` is the caller's business; here it only says goodbye.
pub async fn execute(
    session: &mut Session,
    resolver: &ProductResolver,
    command: Command,
) -> Result<String, CommandError> {
    match command {
        Command::Scan(path) => scan::scan_image(session, resolver, &path).await,
        Command::Lookup(code) => scan::lookup_code(session, resolver, &code).await,
        Command::Add(quantity) => cart::add(session, quantity),
        Command::Manual(entry) => cart::manual(session, entry),
        Command::Tax(percent) => cart::tax(session, percent),
        Command::Cart => Ok(cart::view(session)),
        Command::Invoice => invoice::invoice(session),
        Command::Help => Ok(HELP.to_string()),
        Command::Quit => Ok("Session closed".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!("cart".parse::<Command>().unwrap(), Command::Cart);
        assert_eq!("  INVOICE ".parse::<Command>().unwrap(), Command::Invoice);
        assert_eq!("add".parse::<Command>().unwrap(), Command::Add(1));
        assert_eq!("add 3".parse::<Command>().unwrap(), Command::Add(3));
        assert_eq!("tax 28%".parse::<Command>().unwrap(), Command::Tax(28));
        assert_eq!(
            "lookup 0123456789012".parse::<Command>().unwrap(),
            Command::Lookup("0123456789012".to_string())
        );
        assert_eq!(
            "scan shelf photo.png".parse::<Command>().unwrap(),
            Command::Scan(PathBuf::from("shelf photo.png"))
        );
    }

    #[test]
    fn test_parse_manual_keeps_spaces_in_name() {
        let command: Command = "manual 2 1.99 Coca-Cola 330ml".parse().unwrap();
        assert_eq!(
            command,
            Command::Manual(ManualEntry {
                name: "Coca-Cola 330ml".to_string(),
                unit_price: Money::from_cents(199),
                quantity: 2,
            })
        );
    }

    #[test]
    fn test_parse_manual_tolerates_repeated_spaces() {
        let command: Command = "manual 1  2.50\tSoap   Bar ".parse().unwrap();
        assert_eq!(
            command,
            Command::Manual(ManualEntry {
                name: "Soap   Bar".to_string(),
                unit_price: Money::from_cents(250),
                quantity: 1,
            })
        );
    }

    #[test]
    fn test_parse_manual_errors() {
        let err = "manual 1 abc Soap".parse::<Command>().unwrap_err();
        assert_eq!(err.message, MANUAL_ENTRY_MESSAGE);

        let err = "manual 1 2.50".parse::<Command>().unwrap_err();
        assert_eq!(err.message, MANUAL_ENTRY_MESSAGE);

        let err = "manual x 2.50 Soap".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_unknown_command() {
        let err = "refund 3".parse::<Command>().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownCommand);

        // Arguments are required for these
        assert!("scan".parse::<Command>().is_err());
        assert!("lookup".parse::<Command>().is_err());
    }
}
