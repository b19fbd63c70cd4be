//! Primary expressions: literals, variables, calls and parentheses.

use ili_ir::{Expr, ExprId, ExprKind, Name, Span, TokenKind};

use crate::{ParseError, Parser};

impl Parser<'_> {
    pub(super) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let span = self.cursor.current_span();
        let kind = match *self.cursor.current_kind() {
            TokenKind::Int(value) => {
                self.cursor.advance();
                ExprKind::Int(value)
            }
            TokenKind::String(name) => {
                self.cursor.advance();
                ExprKind::Str(name)
            }
            TokenKind::Ident(name) => {
                self.cursor.advance();
                if self.cursor.check(&TokenKind::LParen) {
                    return self.parse_call(name, span);
                }
                ExprKind::Ident(name)
            }
            TokenKind::LParen => {
                self.cursor.advance();
                let inner = self.parse_expr()?;
                self.cursor.expect(&TokenKind::RParen)?;
                // Grouping leaves no node behind; precedence is already
                // encoded in the tree shape.
                return Ok(inner);
            }
            _ => return Err(self.cursor.unexpected("expression")),
        };

        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// `name '(' (expr (',' expr)*)? ')'`, with `name` already consumed.
    fn parse_call(&mut self, func: Name, start: Span) -> Result<ExprId, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut args = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expr()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RParen)?;

        let span = start.merge(self.cursor.previous_span());
        let args = self.arena.alloc_expr_list(args);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Call { func, args }, span)))
    }
}
