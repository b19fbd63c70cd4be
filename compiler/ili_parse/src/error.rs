//! Parse error types.

use ili_diagnostic::{Diagnostic, ErrorCode};
use ili_ir::Span;

/// A syntax error. Parsing of the current unit stops at the first one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct ParseError {
    /// Span of the offending token.
    pub span: Span,
    pub kind: ParseErrorKind,
}

/// What the parser ran into.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A token that does not fit the grammar here.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    /// Input ended in the middle of a statement.
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { span, kind }
    }

    /// 1-based line of the offending token.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Whether more input could have completed the statement.
    ///
    /// An interactive session may use this to tell a truncated line apart
    /// from a malformed one.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ParseErrorKind::UnexpectedEof { .. })
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, .. } => {
                Diagnostic::error(ErrorCode::E1001)
                    .with_message(self.kind.to_string())
                    .with_label(self.span, format!("expected {expected}"))
            }
            ParseErrorKind::UnexpectedEof { expected } => Diagnostic::error(ErrorCode::E1002)
                .with_message(self.kind.to_string())
                .with_label(self.span, format!("expected {expected} here")),
        }
    }
}
