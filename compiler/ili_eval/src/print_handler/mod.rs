//! Print handler for configurable output.
//!
//! `print` statements and recovered runtime diagnostics both go through the
//! handler, so they come out in the order they happen:
//! - Stdout: program output to stdout, diagnostics to stderr (default)
//! - Buffer: captured in memory for tests and embedding
//! - Silent: discarded
//!
//! Uses enum dispatch instead of trait objects.

use std::sync::Arc;

use ili_diagnostic::Diagnostic;
use parking_lot::Mutex;

/// Default print handler that writes to stdout.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        println!("{msg}");
    }

    /// Diagnostics go to stderr, one line each.
    pub fn report(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}

/// Print handler that captures output and diagnostics in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    pub fn report(&self, diagnostic: &Diagnostic) {
        self.diagnostics.lock().push(diagnostic.clone());
    }

    /// Get all captured output.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Get all captured diagnostics, oldest first.
    pub fn get_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.lock().clone()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout/stderr (default).
    Stdout(StdoutPrintHandler),
    /// Captures to memory.
    Buffer(BufferPrintHandler),
    /// Discards everything.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Report a recovered runtime diagnostic.
    pub fn report(&self, diagnostic: &Diagnostic) {
        match self {
            Self::Stdout(h) => h.report(diagnostic),
            Self::Buffer(h) => h.report(diagnostic),
            Self::Silent => {}
        }
    }

    /// Get all captured output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Get all captured diagnostics.
    pub fn get_diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Self::Buffer(h) => h.get_diagnostics(),
            Self::Stdout(_) | Self::Silent => Vec::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a default stdout print handler.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout(StdoutPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
