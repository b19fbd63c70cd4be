//! The [`Diagnostic`] record shared by the lexer, parser and evaluator.

use ili_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// How serious a diagnostic is. Only errors affect the exit status.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a label marks the fault itself or related context.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum LabelStyle {
    /// Rendered with `^` carets.
    Primary,
    /// Rendered with `-` underlines, e.g. the definition a call disagrees with.
    Secondary,
}

/// A message attached to a span of source.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    pub style: LabelStyle,
}

impl Label {
    pub fn is_primary(&self) -> bool {
        self.style == LabelStyle::Primary
    }
}

/// Kind of trailing line printed after the labels.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum FooterKind {
    /// Extra context, e.g. what value was substituted.
    Note,
    /// How to fix it.
    Help,
}

impl FooterKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FooterKind::Note => "note",
            FooterKind::Help => "help",
        }
    }
}

/// A `= note:` or `= help:` line.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Footer {
    pub kind: FooterKind,
    pub text: String,
}

/// One reportable problem: code, severity, message, source labels and footers.
///
/// Built with the `with_*` methods, e.g.
/// `Diagnostic::error(ErrorCode::E6002).with_message("division by zero")`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    /// Notes and help lines, in the order they were added.
    pub footers: Vec<Footer>,
}

impl Diagnostic {
    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::with_severity(code, Severity::Warning)
    }

    fn with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            footers: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Mark where the problem is.
    pub fn with_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), LabelStyle::Primary)
    }

    /// Point at related source, such as a definition.
    pub fn with_secondary_label(self, span: Span, message: impl Into<String>) -> Self {
        self.push_label(span, message.into(), LabelStyle::Secondary)
    }

    pub fn with_note(self, text: impl Into<String>) -> Self {
        self.push_footer(FooterKind::Note, text.into())
    }

    pub fn with_suggestion(self, text: impl Into<String>) -> Self {
        self.push_footer(FooterKind::Help, text.into())
    }

    fn push_label(mut self, span: Span, message: String, style: LabelStyle) -> Self {
        self.labels.push(Label {
            span,
            message,
            style,
        });
        self
    }

    fn push_footer(mut self, kind: FooterKind, text: String) -> Self {
        self.footers.push(Footer { kind, text });
        self
    }

    /// Span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary()).map(|l| l.span)
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Compact form used when diagnostics are printed without source:
/// `error[E6002]: division by zero (line 4)` plus any footers.
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)?;
        if let Some(span) = self.primary_span() {
            write!(f, " ({span})")?;
        }
        for footer in &self.footers {
            write!(f, "\n  = {}: {}", footer.kind.as_str(), footer.text)?;
        }
        Ok(())
    }
}
