//! Diagnostics for the Ithilios interpreter.
//!
//! Lexer, parser and evaluator errors all convert to a [`Diagnostic`]
//! carrying a stable [`ErrorCode`], labeled spans and note/help footers.
//!
//! Rendering lives in [`emitter`]; [`span_utils`] maps byte offsets back to
//! line and column for snippets.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Footer, FooterKind, Label, LabelStyle, Severity};
pub use error_code::ErrorCode;
