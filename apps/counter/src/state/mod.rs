//! # State Management
//!
//! Everything a counter session needs, passed explicitly to every command.
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────────────────────────┐
//! │     AppConfig        │   │               Session                    │
//! │                      │   │                                          │
//! │  • Title             │──►│  • Cart (append-only)                    │
//! │  • Default tax       │   │  • Tax rate                              │
//! │  • Catalog endpoint  │   │  • Pending product + phase               │
//! │                      │   │  • Decoder capability (fixed at start)   │
//! └──────────────────────┘   └──────────────────────────────────────────┘
//! ```

mod config;
mod session;

pub use config::AppConfig;
pub use session::{Session, SessionPhase};
