//! Indented tree rendering of a parsed program.
//!
//! Output shape, two spaces per level:
//!
//! ```text
//! Program
//!   Assign x
//!     Binary +
//!       Int 1
//!       Int 2
//! ```

use std::fmt::Write;

use crate::{ExprId, ExprKind, Program, StmtId, StmtKind, StmtRange, StringInterner};

/// Renders a [`Program`] as an indented tree.
pub struct AstPrinter<'a> {
    program: &'a Program,
    interner: &'a StringInterner,
    out: String,
}

impl<'a> AstPrinter<'a> {
    pub fn new(program: &'a Program, interner: &'a StringInterner) -> Self {
        AstPrinter {
            program,
            interner,
            out: String::new(),
        }
    }

    /// Render the whole program.
    pub fn print(mut self) -> String {
        self.line(0, "Program");
        let program = self.program;
        for &stmt in program.statements() {
            self.stmt(stmt, 1);
        }
        self.out
    }

    fn line(&mut self, depth: usize, text: &str) {
        let _ = writeln!(self.out, "{:width$}{text}", "", width = depth * 2);
    }

    fn block(&mut self, label: &str, range: StmtRange, depth: usize) {
        self.line(depth, label);
        let program = self.program;
        let arena = &program.arena;
        for &stmt in arena.stmt_list(range) {
            self.stmt(stmt, depth + 1);
        }
    }

    fn stmt(&mut self, id: StmtId, depth: usize) {
        let program = self.program;
        let arena = &program.arena;
        match arena.stmt(id).kind {
            StmtKind::Assign { name, value } => {
                let text = format!("Assign {}", self.interner.lookup(name));
                self.line(depth, &text);
                self.expr(value, depth + 1);
            }
            StmtKind::Expr(expr) => {
                self.line(depth, "Expr");
                self.expr(expr, depth + 1);
            }
            StmtKind::Print(expr) => {
                self.line(depth, "Print");
                self.expr(expr, depth + 1);
            }
            StmtKind::Return(expr) => {
                self.line(depth, "Return");
                self.expr(expr, depth + 1);
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                self.line(depth, "If");
                self.expr(cond, depth + 1);
                self.block("Then", then_block, depth + 1);
                if !else_block.is_empty() {
                    self.block("Else", else_block, depth + 1);
                }
            }
            StmtKind::While { cond, body } => {
                self.line(depth, "While");
                self.expr(cond, depth + 1);
                self.block("Body", body, depth + 1);
            }
            StmtKind::FuncDef { name, params, body } => {
                let params: Vec<&str> = arena
                    .name_list(params)
                    .iter()
                    .map(|&p| self.interner.lookup(p))
                    .collect();
                let text = format!(
                    "FuncDef {}({})",
                    self.interner.lookup(name),
                    params.join(", ")
                );
                self.line(depth, &text);
                self.block("Body", body, depth + 1);
            }
        }
    }

    fn expr(&mut self, id: ExprId, depth: usize) {
        let program = self.program;
        let arena = &program.arena;
        match arena.expr(id).kind {
            ExprKind::Int(n) => self.line(depth, &format!("Int {n}")),
            ExprKind::Str(s) => {
                let text = format!("Str {:?}", self.interner.lookup(s));
                self.line(depth, &text);
            }
            ExprKind::Ident(name) => {
                let text = format!("Ident {}", self.interner.lookup(name));
                self.line(depth, &text);
            }
            ExprKind::Unary { op, operand } => {
                self.line(depth, &format!("Unary {}", op.as_symbol()));
                self.expr(operand, depth + 1);
            }
            ExprKind::Binary { op, left, right } => {
                self.line(depth, &format!("Binary {}", op.as_symbol()));
                self.expr(left, depth + 1);
                self.expr(right, depth + 1);
            }
            ExprKind::Call { func, args } => {
                let text = format!("Call {}", self.interner.lookup(func));
                self.line(depth, &text);
                for &arg in arena.expr_list(args) {
                    self.expr(arg, depth + 1);
                }
            }
        }
    }
}
