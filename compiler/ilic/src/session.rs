//! One interpreter session: the lex, parse and evaluate pipeline.
//!
//! A session outlives any single piece of source. Each `run_source` call
//! appends its text to the session buffer and lexes it at that position, so
//! spans, line numbers and source snippets stay correct across REPL lines.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;

use ili_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use ili_eval::{stdout_handler, Interpreter, InterpreterBuilder, SharedPrintHandler, Value};
use ili_ir::SharedInterner;
use ili_lexer::{LexError, LexOrigin};
use tracing::debug;

/// Driver settings taken from the command line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    pub color: ColorMode,
    /// Nesting limit for function calls; `None` uses
    /// [`DEFAULT_MAX_CALL_DEPTH`](ili_eval::DEFAULT_MAX_CALL_DEPTH).
    pub max_call_depth: Option<usize>,
    /// Print the value of every top-level statement that has one (REPL).
    pub echo_values: bool,
}

/// What running one piece of source produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// Value of the last top-level statement. `None` when parsing failed or
    /// a fatal runtime error stopped evaluation.
    pub value: Option<Value>,
    pub errors: usize,
    pub warnings: usize,
}

impl RunOutcome {
    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

pub struct Session<W: Write> {
    interner: SharedInterner,
    interpreter: Interpreter,
    emitter: TerminalEmitter<W>,
    /// Everything run so far, newline terminated.
    source: String,
    next_line: u32,
    echo_values: bool,
    error_count: usize,
    warning_count: usize,
}

impl Session<io::Stderr> {
    /// Session printing program output to stdout and diagnostics to stderr.
    pub fn stderr(config: SessionConfig) -> Self {
        let is_tty = io::stderr().is_terminal();
        Session::new(config, stdout_handler(), io::stderr(), is_tty)
    }
}

impl<W: Write> Session<W> {
    /// Create a session.
    ///
    /// `print_handler` receives program output and recovered runtime
    /// diagnostics; `writer` receives rendered lexical, syntax and fatal
    /// runtime errors.
    pub fn new(
        config: SessionConfig,
        print_handler: SharedPrintHandler,
        writer: W,
        is_tty: bool,
    ) -> Self {
        let interner = SharedInterner::new();
        let mut builder = InterpreterBuilder::new(interner.clone()).print_handler(print_handler);
        if let Some(limit) = config.max_call_depth {
            builder = builder.max_call_depth(limit);
        }
        let interpreter = builder.build();
        Session {
            interner,
            interpreter,
            emitter: TerminalEmitter::with_color_mode(writer, config.color, is_tty),
            source: String::new(),
            next_line: 1,
            echo_values: config.echo_values,
            error_count: 0,
            warning_count: 0,
        }
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Errors reported over the whole session.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Lex, parse and evaluate `source` against the session's interpreter.
    ///
    /// Lexical errors are reported and the remaining tokens still parsed.
    /// A syntax error skips evaluation of the whole input.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run_source(&mut self, source: &str) -> RunOutcome {
        let mut outcome = RunOutcome::default();
        let origin = match self.append_source(source) {
            Ok(origin) => origin,
            Err(err) => {
                self.emitter.emit(&err.to_diagnostic());
                outcome.errors += 1;
                return self.finish(outcome);
            }
        };

        let lexed = ili_lexer::lex_with_origin(source, &self.interner, origin);
        for err in &lexed.errors {
            self.emitter.emit(&err.to_diagnostic());
            outcome.errors += 1;
        }

        let program = match ili_parse::parse(&lexed.tokens, &self.interner) {
            Ok(program) => program,
            Err(err) => {
                self.emitter.emit(&err.to_diagnostic());
                outcome.errors += 1;
                return self.finish(outcome);
            }
        };

        let handler = Arc::clone(self.interpreter.print_handler());
        let echo = self.echo_values;
        let result = self.interpreter.eval_program_with(&program, |value| {
            if echo && !value.is_void() {
                handler.println(&value.to_string());
            }
        });

        for err in self.interpreter.take_errors() {
            if err.is_warning() {
                outcome.warnings += 1;
            } else {
                outcome.errors += 1;
            }
        }

        match result {
            Ok(value) => outcome.value = Some(value),
            Err(err) => {
                self.emitter.emit(&err.to_diagnostic());
                outcome.errors += 1;
            }
        }

        self.finish(outcome)
    }

    /// Print the session's error and warning totals, if any.
    pub fn emit_summary(&mut self) {
        self.emitter.emit_summary(self.error_count, self.warning_count);
        self.emitter.flush();
    }

    /// Consume the session and return the diagnostic writer.
    pub fn into_writer(self) -> W {
        self.emitter.into_inner()
    }

    /// Append `source` to the session buffer and return where it starts.
    ///
    /// Source that would push the buffer past what spans can address is
    /// rejected and the buffer is left unchanged.
    fn append_source(&mut self, source: &str) -> Result<LexOrigin, LexError> {
        let start = self.source.len();
        // One more byte for the newline that may be appended.
        let len = source.len().saturating_add(1);
        let origin = LexOrigin {
            offset: ili_lexer::check_source_len(start, len, self.next_line)?,
            line: self.next_line,
        };

        self.source.push_str(source);
        if !self.source.ends_with('\n') {
            self.source.push('\n');
        }
        let newlines = self.source[start..].bytes().filter(|&b| b == b'\n').count();
        self.next_line = self
            .next_line
            .saturating_add(u32::try_from(newlines).unwrap_or(u32::MAX));

        self.emitter.set_source(self.source.as_str());
        Ok(origin)
    }

    fn finish(&mut self, outcome: RunOutcome) -> RunOutcome {
        self.emitter.flush();
        self.error_count += outcome.errors;
        self.warning_count += outcome.warnings;
        debug!(
            errors = outcome.errors,
            warnings = outcome.warnings,
            "ran source"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ili_eval::buffer_handler;
    use pretty_assertions::assert_eq;

    fn session() -> Session<Vec<u8>> {
        let config = SessionConfig {
            color: ColorMode::Never,
            ..SessionConfig::default()
        };
        Session::new(config, buffer_handler(), Vec::new(), false)
    }

    #[test]
    fn test_lines_continue_across_runs() {
        let mut session = session();
        let line_of = |origin: Result<LexOrigin, LexError>| origin.map(|o| o.line);
        assert_eq!(line_of(session.append_source("a = 1;")), Ok(1));
        assert_eq!(line_of(session.append_source("b = 2;\nc = 3;\n")), Ok(2));
        assert_eq!(
            session.append_source("d = 4;"),
            Ok(LexOrigin {
                offset: 21,
                line: 4
            })
        );
        assert_eq!(session.source, "a = 1;\nb = 2;\nc = 3;\nd = 4;\n");
    }

    #[test]
    fn test_totals_accumulate() {
        let mut session = session();
        session.run_source("print y;");
        session.run_source("print 1 / 0;");
        session.run_source("print (;");
        assert_eq!(session.warning_count(), 1);
        assert_eq!(session.error_count(), 2);
    }

    #[test]
    fn test_summary_counts_the_whole_session() {
        let mut session = session();
        session.run_source("print y;");
        session.run_source("x = 1 / 0;");
        session.emit_summary();
        let rendered = String::from_utf8_lossy(&session.into_writer()).into_owned();
        assert_eq!(rendered, "error: 1 error and 1 warning reported\n");
    }

    #[test]
    fn test_session_survives_runaway_recursion() {
        let mut session = session();
        let outcome = session.run_source("func f(n) { return f(n + 1); } f(0);");
        assert_eq!(outcome.errors, 1);
        assert_eq!(outcome.value, None);

        let outcome = session.run_source("print \"survived\";");
        assert!(!outcome.has_errors());
        let output = session.interpreter().print_handler().get_output();
        assert_eq!(output, "survived\n");
    }

    #[test]
    fn test_diagnostic_points_at_later_line() {
        let mut session = session();
        session.run_source("x = 1;");
        session.run_source("x = $;");
        let rendered = String::from_utf8_lossy(&session.into_writer()).into_owned();
        assert!(rendered.contains("--> 2:5"), "got:\n{rendered}");
        assert!(rendered.contains("2 | x = $;"), "got:\n{rendered}");
    }
}
