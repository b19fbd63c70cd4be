//! Statement nodes.

use std::fmt;

use crate::{ExprId, Name, NameRange, Span, StmtRange};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

impl Stmt {
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Stmt { kind, span }
    }
}

impl fmt::Debug for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Statement kinds.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum StmtKind {
    /// `name = value;`
    Assign { name: Name, value: ExprId },

    /// `expr;`
    Expr(ExprId),

    /// `print expr;`
    Print(ExprId),

    /// `return expr;`
    Return(ExprId),

    /// `if (cond) { ... } else { ... }`
    ///
    /// A missing else block is an empty range.
    If {
        cond: ExprId,
        then_block: StmtRange,
        else_block: StmtRange,
    },

    /// `while (cond) { ... }`
    While { cond: ExprId, body: StmtRange },

    /// `func name(params...) { ... }`
    FuncDef {
        name: Name,
        params: NameRange,
        body: StmtRange,
    },
}
