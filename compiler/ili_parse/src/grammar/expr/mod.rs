//! Expression parsing.
//!
//! One method per precedence level, lowest first:
//!
//! | Level          | Operators                     | Assoc |
//! |----------------|-------------------------------|-------|
//! | comparison     | `==` `!=` `<` `<=` `>` `>=`   | left  |
//! | additive       | `+` `-`                       | left  |
//! | multiplicative | `*` `/`                       | left  |
//! | unary          | `-`                           | right |
//!
//! Primaries (literals, names, calls, parenthesized expressions) live in
//! [`primary`].

mod operators;
mod primary;

use ili_ir::{BinaryOp, Expr, ExprId, ExprKind};
use ili_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Parenthesized and negated expressions recurse back through here,
    /// so this goes through the stack guard.
    #[inline]
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_comparison())
    }

    fn parse_comparison(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.cursor.advance();
            let right = self.parse_additive()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_additive(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.cursor.advance();
            let right = self.parse_multiplicative()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    fn parse_multiplicative(&mut self) -> Result<ExprId, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.cursor.advance();
            let right = self.parse_unary()?;
            left = self.alloc_binary(op, left, right);
        }

        Ok(left)
    }

    /// `-expr`, right-associative: `--x` is `-(-x)`.
    fn parse_unary(&mut self) -> Result<ExprId, ParseError> {
        let Some(op) = self.match_unary_op() else {
            return self.parse_primary();
        };

        let start = self.cursor.current_span();
        self.cursor.advance();
        let operand = ensure_sufficient_stack(|| self.parse_unary())?;

        let span = start.merge(self.arena.expr(operand).span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Unary { op, operand }, span)))
    }

    fn alloc_binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self
            .arena
            .expr(left)
            .span
            .merge(self.arena.expr(right).span);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Binary { op, left, right }, span))
    }
}
