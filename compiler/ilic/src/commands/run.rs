//! The `run` command: lex, parse and evaluate an Ithilios source file.

use crate::{Session, SessionConfig};

use super::read_source;

/// Run an Ithilios source file.
///
/// Program output goes to stdout and diagnostics to stderr, followed by an
/// error and warning count when there were any. Exits with status 1 if any
/// error diagnostic was produced; warnings alone do not change the exit
/// status.
pub fn run_file(path: &str, config: SessionConfig) {
    let content = read_source(path);
    let mut session = Session::stderr(config);

    let outcome = session.run_source(&content);
    session.emit_summary();
    if outcome.has_errors() {
        std::process::exit(1);
    }
}
