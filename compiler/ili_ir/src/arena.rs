//! Expression arena.
//!
//! Struct-of-vectors storage for the flat AST: expressions, statements,
//! and three list pools for call arguments, block bodies and parameter
//! names.

use crate::{Expr, ExprId, ExprRange, Name, NameRange, Stmt, StmtId, StmtRange};

/// Convert a pool length to `u32`.
///
/// # Panics
/// Panics if the pool exceeds `u32::MAX` entries.
#[inline]
pub(crate) fn to_u32(len: usize, what: &str) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("too many {what}: {len} exceeds u32::MAX"))
}

/// Arena for expressions and statements.
///
/// # Index Spaces
///
/// - `exprs`: indexed by [`ExprId`]
/// - `stmts`: indexed by [`StmtId`]
/// - `expr_lists`: flat `Vec<ExprId>` indexed by [`ExprRange`]
/// - `stmt_lists`: flat `Vec<StmtId>` indexed by [`StmtRange`]
/// - `names`: flat `Vec<Name>` indexed by [`NameRange`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
    expr_lists: Vec<ExprId>,
    stmt_lists: Vec<StmtId>,
    names: Vec<Name>,
}

impl ExprArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena sized for a program of `token_count` tokens.
    ///
    /// Roughly one expression per two tokens and one statement per five.
    pub fn with_capacity(token_count: usize) -> Self {
        let stmts = token_count / 5;
        ExprArena {
            exprs: Vec::with_capacity(token_count / 2),
            stmts: Vec::with_capacity(stmts),
            expr_lists: Vec::new(),
            stmt_lists: Vec::with_capacity(stmts),
            names: Vec::new(),
        }
    }

    /// Allocate an expression, returning its ID.
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(to_u32(self.exprs.len(), "expressions"));
        self.exprs.push(expr);
        id
    }

    /// Allocate a statement, returning its ID.
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(to_u32(self.stmts.len(), "statements"));
        self.stmts.push(stmt);
        id
    }

    /// Store a list of expression IDs contiguously.
    pub fn alloc_expr_list(&mut self, ids: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = to_u32(self.expr_lists.len(), "expression list entries");
        self.expr_lists.extend(ids);
        let end = to_u32(self.expr_lists.len(), "expression list entries");
        ExprRange::new(start, end - start)
    }

    /// Store a list of statement IDs contiguously.
    pub fn alloc_stmt_list(&mut self, ids: impl IntoIterator<Item = StmtId>) -> StmtRange {
        let start = to_u32(self.stmt_lists.len(), "statement list entries");
        self.stmt_lists.extend(ids);
        let end = to_u32(self.stmt_lists.len(), "statement list entries");
        StmtRange::new(start, end - start)
    }

    /// Store a list of names contiguously.
    pub fn alloc_name_list(&mut self, names: impl IntoIterator<Item = Name>) -> NameRange {
        let start = to_u32(self.names.len(), "names");
        self.names.extend(names);
        let end = to_u32(self.names.len(), "names");
        NameRange::new(start, end - start)
    }

    #[inline]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        &self.expr_lists[range.as_range()]
    }

    #[inline]
    pub fn stmt_list(&self, range: StmtRange) -> &[StmtId] {
        &self.stmt_lists[range.as_range()]
    }

    #[inline]
    pub fn name_list(&self, range: NameRange) -> &[Name] {
        &self.names[range.as_range()]
    }

    /// Number of allocated expressions.
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    /// Number of allocated statements.
    pub fn stmt_count(&self) -> usize {
        self.stmts.len()
    }
}
