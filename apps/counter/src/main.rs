//! # Scan & Bill Counter Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stdin (cashier) ──► commands ──► Session ──► stdout (results)          │
//! │                                      │                                  │
//! │                                      └──► catalog (HTTP, 10 s timeout)  │
//! │                                                                         │
//! │  logs ──► stderr                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs for testability.

fn main() {
    if let Err(err) = scanbill_counter_lib::run() {
        eprintln!("scanbill-counter: {}", err);
        std::process::exit(1);
    }
}
