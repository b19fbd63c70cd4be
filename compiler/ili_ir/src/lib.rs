//! Ithilios IR - shared data types for the interpreter pipeline.
//!
//! This crate contains the data structures every phase agrees on:
//! - Spans for source locations (byte range plus line)
//! - Names for interned identifiers and string literals
//! - Tokens and `TokenList` for lexer output
//! - AST nodes (`Expr`, `Stmt`) stored in a flat `ExprArena`
//! - `AstPrinter` for rendering a parsed program as an indented tree
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers and string literals become `Name(u32)`
//! - **Flatten Everything**: no `Box<Expr>`; children are `ExprId`/`StmtId`
//!   indices and lists are contiguous ranges in the arena

mod arena;
pub mod ast;
mod expr_id;
mod interner;
mod name;
mod printer;
mod span;
mod token;

pub use arena::ExprArena;
pub use ast::{BinaryOp, Expr, ExprKind, Program, Stmt, StmtKind, UnaryOp};
pub use expr_id::{ExprId, ExprRange, NameRange, StmtId, StmtRange};
pub use interner::{InternError, SharedInterner, StringInterner};
pub use name::Name;
pub use printer::AstPrinter;
pub use span::{Span, SpanError};
pub use token::{Token, TokenKind, TokenList};
