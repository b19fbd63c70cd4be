//! Lexer for Ithilios using logos with string interning.
//!
//! Produces a [`TokenList`] terminated by `Eof`, plus the lexical errors
//! met along the way. Errors never stop lexing: an illegal character is
//! reported and skipped, and scanning resumes right after it.

mod lex_error;
mod raw_token;

use ili_ir::{Span, StringInterner, Token, TokenKind, TokenList};
use logos::Logos;
use tracing::debug;

pub use lex_error::{LexError, LexErrorKind};
use raw_token::RawToken;

/// Where a piece of source starts within a larger buffer.
///
/// An interactive session keeps every entered line in one buffer so that
/// spans stay meaningful across lines; each new line is lexed with the
/// origin of its first byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexOrigin {
    /// Byte offset of the source's first byte.
    pub offset: u32,
    /// 1-based line number of the source's first line.
    pub line: u32,
}

impl LexOrigin {
    /// Start of a standalone source.
    pub const START: LexOrigin = LexOrigin { offset: 0, line: 1 };
}

impl Default for LexOrigin {
    fn default() -> Self {
        Self::START
    }
}

/// Largest buffer, in bytes, whose offsets fit in a [`Span`].
pub const MAX_SOURCE_LEN: usize = u32::MAX as usize;

/// Check that `len` bytes placed at byte `offset` of a buffer stay within
/// [`MAX_SOURCE_LEN`], returning the offset as a span offset.
///
/// `line` is where the error is reported when they do not.
pub fn check_source_len(offset: usize, len: usize, line: u32) -> Result<u32, LexError> {
    let at = match u32::try_from(offset) {
        Ok(start) if len <= MAX_SOURCE_LEN - offset => return Ok(start),
        Ok(start) => start,
        Err(_) => u32::MAX,
    };
    let kind = LexErrorKind::SourceTooLarge {
        len,
        max: MAX_SOURCE_LEN,
    };
    Err(LexError::new(kind, Span::new(at, at, line)))
}

/// Result of lexing: tokens (always ending in `Eof`) and errors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

impl LexOutput {
    /// Check if any lexical errors were reported.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex source code into tokens.
pub fn lex(source: &str, interner: &StringInterner) -> LexOutput {
    lex_with_origin(source, interner, LexOrigin::START)
}

/// Lex source code whose first byte sits at `origin` in a larger buffer.
///
/// A source that would run past [`MAX_SOURCE_LEN`] is not lexed: the output
/// is a single `SourceTooLarge` error and the `Eof` token.
pub fn lex_with_origin(source: &str, interner: &StringInterner, origin: LexOrigin) -> LexOutput {
    if let Err(err) = check_source_len(origin.offset as usize, source.len(), origin.line) {
        let mut tokens = TokenList::new();
        tokens.push(Token::new(TokenKind::Eof, err.span));
        return LexOutput {
            tokens,
            errors: vec![err],
        };
    }

    let mut tokens = TokenList::with_capacity(source.len() / 3 + 1);
    let mut errors = Vec::new();
    let mut line = origin.line;
    // Byte offset (within `source`) where the current logos pass started.
    let mut resume = 0usize;

    'passes: loop {
        let mut raw = RawToken::lexer(&source[resume..]);

        while let Some(result) = raw.next() {
            let range = raw.span();
            let start = resume + range.start;
            let end = resume + range.end;

            match result {
                Ok(RawToken::LineComment) => {}
                Ok(RawToken::Newline) => line += 1,
                Ok(kind) => {
                    let span = make_span(origin, start, end, line);
                    match convert_token(kind, raw.slice(), interner) {
                        Ok(kind) => tokens.push(Token::new(kind, span)),
                        Err(kind) => errors.push(LexError::new(kind, span)),
                    }
                }
                Err(()) => {
                    let Some(ch) = source.get(start..).and_then(|rest| rest.chars().next()) else {
                        continue;
                    };
                    let ch_end = start + ch.len_utf8();
                    errors.push(LexError::new(
                        LexErrorKind::IllegalChar(ch),
                        make_span(origin, start, ch_end, line),
                    ));
                    // The error span may cover more or less than the one
                    // offending character; rescan from just after it.
                    if end != ch_end {
                        resume = ch_end;
                        continue 'passes;
                    }
                }
            }
        }

        break;
    }

    let eof = make_span(origin, source.len(), source.len(), line);
    tokens.push(Token::new(TokenKind::Eof, eof));

    debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        lines = line - origin.line + 1,
        "lexed source"
    );

    LexOutput { tokens, errors }
}

/// Build a span for `start..end` (relative to the lexed source).
///
/// `lex_with_origin` has already checked that the whole source fits, so
/// the fallback to an empty span at the origin is never taken.
fn make_span(origin: LexOrigin, start: usize, end: usize, line: u32) -> Span {
    let base = origin.offset as usize;
    Span::try_from_range(base + start..base + end, line)
        .unwrap_or(Span::new(origin.offset, origin.offset, line))
}

/// Convert a raw token to a `TokenKind`, interning strings.
fn convert_token(
    raw: RawToken,
    slice: &str,
    interner: &StringInterner,
) -> Result<TokenKind, LexErrorKind> {
    Ok(match raw {
        // Literals
        RawToken::Int => TokenKind::Int(
            slice
                .parse()
                .map_err(|_| LexErrorKind::IntOverflow(slice.to_string()))?,
        ),
        RawToken::String => TokenKind::String(interner.intern(&slice[1..slice.len() - 1])),
        RawToken::Ident => {
            TokenKind::keyword(slice).unwrap_or_else(|| TokenKind::Ident(interner.intern(slice)))
        }

        // Operators
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,

        RawToken::LineComment | RawToken::Newline => {
            unreachable!("Trivia should be handled separately")
        }
    })
}
