//! Statement parsing.

use ili_ir::{ExprId, Name, Stmt, StmtId, StmtKind, StmtRange, TokenKind};
use ili_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Parse one statement.
    ///
    /// Blocks nest statements, so this goes through the stack guard.
    pub(crate) fn parse_statement(&mut self) -> Result<StmtId, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let kind = match *self.cursor.current_kind() {
            TokenKind::Print => {
                self.cursor.advance();
                StmtKind::Print(self.parse_terminated_expr()?)
            }
            TokenKind::Return => {
                self.cursor.advance();
                StmtKind::Return(self.parse_terminated_expr()?)
            }
            TokenKind::If => self.parse_if()?,
            TokenKind::While => self.parse_while()?,
            TokenKind::Func => self.parse_func_def()?,
            // `NAME =` is an assignment; any other `NAME ...` is an expression.
            TokenKind::Ident(name) if matches!(self.cursor.peek_next_kind(), TokenKind::Eq) => {
                self.cursor.advance();
                self.cursor.advance();
                StmtKind::Assign {
                    name,
                    value: self.parse_terminated_expr()?,
                }
            }
            _ => StmtKind::Expr(self.parse_terminated_expr()?),
        };

        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    /// `expr ';'`
    fn parse_terminated_expr(&mut self) -> Result<ExprId, ParseError> {
        let expr = self.parse_expr()?;
        self.cursor.expect(&TokenKind::Semicolon)?;
        Ok(expr)
    }

    /// `'(' expr ')'` as used by `if` and `while`.
    fn parse_condition(&mut self) -> Result<ExprId, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let cond = self.parse_expr()?;
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(cond)
    }

    /// `if (cond) { ... } else { ... }`, else optional.
    fn parse_if(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::If)?;
        let cond = self.parse_condition()?;
        let then_block = self.parse_block()?;
        let else_block = if self.cursor.eat(&TokenKind::Else) {
            self.parse_block()?
        } else {
            StmtRange::EMPTY
        };
        Ok(StmtKind::If {
            cond,
            then_block,
            else_block,
        })
    }

    /// `while (cond) { ... }`
    fn parse_while(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::While)?;
        let cond = self.parse_condition()?;
        let body = self.parse_block()?;
        Ok(StmtKind::While { cond, body })
    }

    /// `func name(a, b) { ... }`
    fn parse_func_def(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.expect(&TokenKind::Func)?;
        let name = self.cursor.expect_ident()?;
        let params = self.parse_params()?;
        let body = self.parse_block()?;
        Ok(StmtKind::FuncDef {
            name,
            params: self.arena.alloc_name_list(params),
            body,
        })
    }

    /// `'(' (NAME (',' NAME)*)? ')'`
    fn parse_params(&mut self) -> Result<Vec<Name>, ParseError> {
        self.cursor.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        if !self.cursor.check(&TokenKind::RParen) {
            loop {
                params.push(self.cursor.expect_ident()?);
                if !self.cursor.eat(&TokenKind::Comma) {
                    break;
                }
            }
        }
        self.cursor.expect(&TokenKind::RParen)?;
        Ok(params)
    }

    /// `'{' statement* '}'`
    fn parse_block(&mut self) -> Result<StmtRange, ParseError> {
        self.cursor.expect(&TokenKind::LBrace)?;
        let mut statements = Vec::new();
        while !self.cursor.check(&TokenKind::RBrace) {
            if self.cursor.is_at_end() {
                return Err(self.cursor.unexpected("`}`"));
            }
            statements.push(self.parse_statement()?);
        }
        self.cursor.expect(&TokenKind::RBrace)?;
        Ok(self.arena.alloc_stmt_list(statements))
    }
}

