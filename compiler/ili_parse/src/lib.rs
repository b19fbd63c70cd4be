//! Recursive descent parser for Ithilios.
//!
//! Produces a flat AST in an `ExprArena`. Parsing stops at the first
//! syntax error; a failed parse yields no program.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use ili_ir::{ExprArena, Program, StringInterner, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: ExprArena,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens, interner),
            arena: ExprArena::with_capacity(tokens.len()),
        }
    }

    /// Parse the whole token stream as a program.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        let body = self.arena.alloc_stmt_list(statements);
        debug!(
            statements = body.len(),
            exprs = self.arena.expr_count(),
            "parsed program"
        );
        Ok(Program::new(self.arena, body))
    }
}

/// Parse tokens into a program.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: &TokenList, interner: &StringInterner) -> Result<Program, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
