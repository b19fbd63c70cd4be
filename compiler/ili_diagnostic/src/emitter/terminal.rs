//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//! When given the source text, labels are rendered as an underlined
//! snippet; otherwise only the line number is shown.

use std::io::Write;

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, FooterKind, Label, Severity};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn parse(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Source text attached to an emitter for snippet rendering.
struct SnippetSource {
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SnippetSource>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// * `is_tty` - Whether output is a TTY (used for `ColorMode::Auto`)
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach the source text that diagnostic spans point into.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.set_source(source);
        self
    }

    /// Replace the attached source text.
    pub fn set_source(&mut self, source: impl Into<String>) {
        let text = source.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SnippetSource { text, lines });
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write text with optional ANSI color codes.
    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self, severity: Severity) {
        let color = match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(severity.as_str(), color);
    }

    fn write_code(&mut self, code: &str) {
        self.write_colored(&format!("[{code}]"), colors::BOLD);
    }

    fn write_label(&mut self, label: &Label) {
        let color = if label.is_primary() {
            colors::ERROR
        } else {
            colors::SECONDARY
        };

        let snippet = self.source.as_ref().and_then(|src| {
            if label.span.start as usize > src.text.len() {
                return None;
            }
            let (line, col) = src.lines.offset_to_line_col(&src.text, label.span.start);
            let text = src.lines.line_text(&src.text, line)?;
            Some((line, col, text.to_string()))
        });

        let Some((line, col, text)) = snippet else {
            let _ = write!(self.writer, "  --> line {}: ", label.span.line);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let gutter = line.to_string().len();
        let pad = " ".repeat(gutter);
        let _ = writeln!(self.writer, "{pad}--> {line}:{col}");
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {text}");

        let indent = " ".repeat(col.saturating_sub(1) as usize);
        let remaining = text.chars().count().saturating_sub(indent.len()).max(1);
        let width = (label.span.len() as usize).clamp(1, remaining);
        let marker = if label.is_primary() { "^" } else { "-" };
        let _ = write!(self.writer, "{pad} | {indent}");
        self.write_colored(&format!("{} {}", marker.repeat(width), label.message), color);
        let _ = writeln!(self.writer);
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        self.write_severity(diagnostic.severity);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }

        for footer in &diagnostic.footers {
            let color = match footer.kind {
                FooterKind::Note => colors::BOLD,
                FooterKind::Help => colors::HELP,
            };
            let _ = write!(self.writer, "  = ");
            self.write_colored(footer.kind.as_str(), color);
            let _ = writeln!(self.writer, ": {}", footer.text);
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let warnings = format!("{warning_count} warning{}", plural_s(warning_count));
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let errors = format!("{error_count} error{}", plural_s(error_count));
            if warning_count > 0 {
                let _ = writeln!(self.writer, ": {errors} and {warnings} reported");
            } else {
                let _ = writeln!(self.writer, ": {errors} reported");
            }
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(self.writer, ": {warnings} reported");
        }
    }
}
