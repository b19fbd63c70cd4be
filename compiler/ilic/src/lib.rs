//! Ithilios driver library.
//!
//! Ties the pipeline together: [`Session`] lexes, parses and evaluates
//! source against one persistent interpreter, rendering lexical, syntax and
//! fatal runtime errors through a [`TerminalEmitter`]. The `ili` binary and
//! the end-to-end tests both go through it.
//!
//! [`TerminalEmitter`]: ili_diagnostic::emitter::TerminalEmitter

pub mod commands;
mod session;

pub use session::{RunOutcome, Session, SessionConfig};

use std::sync::Once;

/// Language version shown by `ili --version` and the REPL banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for the interpreter crates.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ili_eval=trace`; set `ILI_LOG_TREE=1` for
/// indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        if std::env::var("ILI_LOG_TREE").is_ok_and(|v| v == "1") {
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_bracketed_fields(true),
                )
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
