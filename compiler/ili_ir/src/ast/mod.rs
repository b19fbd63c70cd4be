//! AST node types.
//!
//! Expressions and statements are two sum types living in an
//! [`ExprArena`](crate::ExprArena); children are referenced by ID and lists
//! by range. A [`Program`] pairs the arena with the top-level statement list.

mod expr;
mod operators;
mod stmt;

pub use expr::{Expr, ExprKind};
pub use operators::{BinaryOp, UnaryOp};
pub use stmt::{Stmt, StmtKind};

use std::sync::Arc;

use crate::{ExprArena, StmtId, StmtRange};

/// A parsed program unit: one source file or one interactive line.
///
/// The arena is reference counted so function bodies defined by this
/// program can outlive it inside an interpreter's function table.
#[derive(Clone, Debug)]
pub struct Program {
    pub arena: Arc<ExprArena>,
    pub body: StmtRange,
}

impl Program {
    pub fn new(arena: ExprArena, body: StmtRange) -> Self {
        Program {
            arena: Arc::new(arena),
            body,
        }
    }

    /// Top-level statement IDs in source order.
    pub fn statements(&self) -> &[StmtId] {
        self.arena.stmt_list(self.body)
    }

    /// True if the program has no statements.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
