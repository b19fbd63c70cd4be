//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use std::mem;

use super::{ParseError, ParseErrorKind};
use ili_ir::{Name, Span, StringInterner, Token, TokenKind, TokenList};
use tracing::trace;

/// Stand-in for a token list that is missing its terminating `Eof`.
static EOF_TOKEN: Token = Token {
    kind: TokenKind::Eof,
    span: Span::DUMMY,
};

/// Cursor for navigating tokens.
///
/// The cursor never moves past the final `Eof` token, so `current()` is
/// always valid.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    interner: &'a StringInterner,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Cursor {
            tokens,
            interner,
            pos: 0,
        }
    }

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &'a Token {
        self.tokens.get(self.pos).unwrap_or(&EOF_TOKEN)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Get the previous token's span, or `Span::DUMMY` at the start.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|prev| self.tokens.get(prev)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Check if at end of input.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token has the same kind as `kind`.
    ///
    /// Payloads are ignored: `check(&TokenKind::Int(0))` matches any integer.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        mem::discriminant(self.current_kind()) == mem::discriminant(kind)
    }

    /// Peek at the next token's kind (one-token lookahead).
    /// Returns `TokenKind::Eof` if at the end of the stream.
    #[inline]
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        match self.tokens.get(self.pos + 1) {
            Some(token) => &token.kind,
            None => &EOF_TOKEN.kind,
        }
    }

    /// Consume the current token and return it.
    ///
    /// At `Eof` the cursor stays put.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        trace!(
            pos = self.pos,
            kind = %token.kind.display_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            line = token.span.line,
            "advance"
        );
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it has the given kind.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Expect and consume a token of the given kind.
    ///
    /// Returns an error if the token kind doesn't match.
    #[inline]
    pub fn expect(&mut self, kind: &TokenKind) -> Result<&'a Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.make_expect_error(kind))
        }
    }

    #[cold]
    #[inline(never)]
    fn make_expect_error(&self, kind: &TokenKind) -> ParseError {
        self.unexpected(&format!("`{}`", kind.display_name()))
    }

    /// Expect and consume an identifier, returning its interned name.
    #[inline]
    pub fn expect_ident(&mut self) -> Result<Name, ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    /// Build an error for the current token, given what was expected.
    ///
    /// At end of input this is an `UnexpectedEof` rather than an
    /// `UnexpectedToken`.
    #[cold]
    #[inline(never)]
    pub fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        let kind = if self.is_at_end() {
            ParseErrorKind::UnexpectedEof {
                expected: expected.to_string(),
            }
        } else {
            ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind.describe(self.interner),
            }
        };
        ParseError::new(kind, token.span)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
