//! Ithilios Eval - tree-walking evaluator.
//!
//! # Architecture
//!
//! - `Interpreter`: walks a [`Program`](ili_ir::Program) statement by statement
//! - `Environment`: the single live variable scope; calls swap it out
//! - `FunctionTable`: global, definitions overwrite
//! - `evaluate_binary` / `evaluate_unary`: direct enum-based operator dispatch
//! - `PrintHandlerImpl`: where `print` output and runtime diagnostics go

mod environment;
mod errors;
pub mod interpreter;
mod operators;
mod print_handler;
mod value;

pub use environment::{Environment, FunctionDef, FunctionTable};
pub use errors::{EvalError, EvalErrorKind};
pub use interpreter::{
    CallFrame, EvalResult, Flow, Interpreter, InterpreterBuilder, DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::{evaluate_binary, evaluate_unary};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use value::Value;
