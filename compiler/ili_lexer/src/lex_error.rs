//! Lexer error types.

use ili_diagnostic::{Diagnostic, ErrorCode};
use ili_ir::Span;

/// A lexer error. Lexing always continues past one.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct LexError {
    /// WHERE the error occurred.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token. Exactly that character is skipped.
    #[error("illegal character {0:?}")]
    IllegalChar(char),
    /// A digit run that does not fit in `i64`. The whole run is skipped.
    #[error("integer literal `{0}` is too large")]
    IntOverflow(String),
    /// The buffer would extend past the last offset a span can hold.
    /// Nothing of it is lexed.
    #[error("source of {len} bytes does not fit in the {max}-byte buffer limit")]
    SourceTooLarge { len: usize, max: usize },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { span, kind }
    }

    /// 1-based line of the error.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match &self.kind {
            LexErrorKind::IllegalChar(ch) => Diagnostic::error(ErrorCode::E0001)
                .with_message(self.kind.to_string())
                .with_label(self.span, format!("{ch:?} is not part of any token")),
            LexErrorKind::IntOverflow(_) => Diagnostic::error(ErrorCode::E0002)
                .with_message(self.kind.to_string())
                .with_label(self.span, "does not fit in a 64-bit integer")
                .with_note(format!("the largest integer literal is {}", i64::MAX)),
            LexErrorKind::SourceTooLarge { .. } => Diagnostic::error(ErrorCode::E0003)
                .with_message(self.kind.to_string()),
        }
    }
}
