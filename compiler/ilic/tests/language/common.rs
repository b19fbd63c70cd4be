//! Shared helpers: run source through a fresh session and capture results.

use ili_diagnostic::emitter::ColorMode;
use ili_diagnostic::{Diagnostic, ErrorCode};
use ili_eval::buffer_handler;
use ilic::{RunOutcome, Session, SessionConfig};

/// Everything one run produced.
pub struct Run {
    pub outcome: RunOutcome,
    /// Program output (`print` and echoed values).
    pub output: String,
    /// Runtime diagnostics recovered during evaluation, in order.
    pub runtime: Vec<Diagnostic>,
    /// Lexical, syntax and fatal errors as rendered by the emitter.
    pub rendered: String,
}

impl Run {
    pub fn runtime_codes(&self) -> Vec<ErrorCode> {
        self.runtime.iter().map(|d| d.code).collect()
    }
}

pub fn config() -> SessionConfig {
    SessionConfig {
        color: ColorMode::Never,
        ..SessionConfig::default()
    }
}

pub fn run_with(config: SessionConfig, source: &str) -> Run {
    let handler = buffer_handler();
    let mut session = Session::new(config, handler.clone(), Vec::new(), false);
    let outcome = session.run_source(source);
    Run {
        outcome,
        output: handler.get_output(),
        runtime: handler.get_diagnostics(),
        rendered: String::from_utf8(session.into_writer()).unwrap(),
    }
}

pub fn run(source: &str) -> Run {
    run_with(config(), source)
}

/// Run a program expected to be free of errors and warnings; return its output.
pub fn output_of(source: &str) -> String {
    let run = run(source);
    assert_eq!(
        (run.outcome.errors, run.outcome.warnings),
        (0, 0),
        "unexpected diagnostics:\n{}{:?}",
        run.rendered,
        run.runtime
    );
    run.output
}
