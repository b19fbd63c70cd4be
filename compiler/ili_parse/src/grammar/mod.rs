//! Grammar Modules
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`stmt`]: statements and `{ ... }` blocks
//! - [`expr`]: expressions, one method per precedence level
//!
//! ```text
//! program    := statement*
//! statement  := NAME '=' expr ';'
//!             | 'print' expr ';'
//!             | 'return' expr ';'
//!             | 'if' '(' expr ')' block ('else' block)?
//!             | 'while' '(' expr ')' block
//!             | 'func' NAME '(' (NAME (',' NAME)*)? ')' block
//!             | expr ';'
//! block      := '{' statement* '}'
//! ```

mod expr;
mod stmt;
