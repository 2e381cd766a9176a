//! # Scan & Bill Counter Library
//!
//! The terminal front end: reads commands from stdin, runs them against one
//! session, and writes the results to stdout.
//!
//! ## Module Organization
//! ```text
//! scanbill_counter_lib/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── config.rs   ◄─── AppConfig
//! │   └── session.rs  ◄─── Session (cart, tax, pending product)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command parsing & dispatch
//! │   ├── scan.rs     ◄─── scan / lookup
//! │   ├── cart.rs     ◄─── add / manual / tax / cart
//! │   └── invoice.rs  ◄─── invoice
//! └── error.rs        ◄─── CommandError for command results
//! ```
//!
//! ## Output Streams
//! Command output goes to stdout. Logs go to stderr, so piping stdout
//! captures only what the cashier sees.

pub mod commands;
pub mod error;
pub mod state;

use std::error::Error;
use std::io::{BufRead, Write};

use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

use commands::Command;
use scanbill_catalog::ProductResolver;
use scanbill_core::BarcodeDecoder;
use state::{AppConfig, Session};

/// Runs the counter on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,scanbill=debug,reqwest=warn; override with RUST_LOG │
/// │                                                                         │
/// │  2. Build Configuration ──────────────────────────────────────────────► │
/// │     • AppConfig::default(): catalog host, timeout, 5% tax               │
/// │                                                                         │
/// │  3. Probe Decoder Capability ─────────────────────────────────────────► │
/// │     • Decided once; this build ships no image decoder, so `scan`        │
/// │       reports "not available" and `lookup` / `manual` carry the work    │
/// │                                                                         │
/// │  4. Command Loop ─────────────────────────────────────────────────────► │
/// │     • One session until `quit` or end of input                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Starting Scan & Bill counter");

    let config = AppConfig::default();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    run_with(config, None, stdin.lock(), &mut stdout)
}

/// Runs one session over the given streams.
///
/// Command failures are printed and the loop continues; only I/O errors on
/// the streams and a bad configuration end the session early.
pub fn run_with<R, W>(
    config: AppConfig,
    decoder: Option<Box<dyn BarcodeDecoder>>,
    input: R,
    output: &mut W,
) -> Result<(), Box<dyn Error>>
where
    R: BufRead,
    W: Write,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let resolver = ProductResolver::new(config.catalog.clone())?;
    let mut session = Session::new(&config, decoder)?;

    let span = info_span!("session", id = %session.id());
    let _guard = span.enter();

    writeln!(output, "{}", config.title)?;
    if !session.decoder_available() {
        writeln!(
            output,
            "Barcode scanner not available – use `lookup` or `manual`"
        )?;
    }
    writeln!(output, "Type `help` for commands")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let result = match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(command) => {
                debug!(?command, "Running command");
                runtime.block_on(commands::execute(&mut session, &resolver, command))
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(text) => write!(output, "{}", text)?,
            Err(err) => writeln!(output, "Error: {}", err.message)?,
        }
        output.flush()?;
    }

    info!(
        items = session.cart().len(),
        subtotal = %session.cart().subtotal(),
        opened_at = %session.cart().created_at(),
        elapsed_secs = session.elapsed(chrono::Utc::now()).num_seconds(),
        "Session ended"
    );
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=scanbill_catalog=trace` - Trace the catalog client only
/// - Default: INFO, DEBUG for scanbill crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,scanbill=debug,reqwest=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
