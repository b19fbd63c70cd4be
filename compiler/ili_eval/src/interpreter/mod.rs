//! Tree-walking interpreter.
//!
//! Evaluation dispatches on the node's kind with an exhaustive `match`.
//! `return` travels back up as [`Flow::Return`] rather than as an error.
//! Recoverable runtime errors are reported through the print handler,
//! recorded, and replaced by their fallback value; fatal ones stop the
//! current program unit with `Err`.

mod builder;
mod call_frame;

pub use builder::InterpreterBuilder;
pub use call_frame::CallFrame;

use std::sync::Arc;

use ili_ir::{
    ExprArena, ExprId, ExprKind, Name, Program, SharedInterner, Span, StmtId, StmtKind,
    StmtRange,
};
use ili_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{
    evaluate_binary, evaluate_unary, Environment, EvalError, EvalErrorKind, FunctionDef,
    FunctionTable, SharedPrintHandler, Value,
};

/// Nesting limit for function calls when none is configured.
///
/// Exceeding it is the fatal `CallDepthExceeded`, so runaway recursion ends
/// the current program unit instead of exhausting memory.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1000;

/// Result of evaluating a statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    /// Evaluation finished normally with this value.
    Normal(Value),
    /// A `return` ran; unwind to the nearest call.
    Return(Value),
}

impl Flow {
    pub fn into_value(self) -> Value {
        match self {
            Flow::Normal(value) | Flow::Return(value) => value,
        }
    }
}

pub type EvalResult<T = Value> = Result<T, EvalError>;

/// Interpreter state: one live environment, the function table, and the
/// runtime errors recovered so far.
///
/// State persists across `eval_program` calls, so an interactive session
/// evaluates each line against the same interpreter.
pub struct Interpreter {
    pub(crate) interner: SharedInterner,
    /// The live environment: globals, or the current call's parameters.
    pub(crate) env: Environment,
    pub(crate) functions: FunctionTable,
    pub(crate) print_handler: SharedPrintHandler,
    pub(crate) max_call_depth: usize,
    pub(crate) call_depth: usize,
    pub(crate) errors: Vec<EvalError>,
}

impl Interpreter {
    /// Create an interpreter printing to stdout with the default call depth limit.
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder::new(interner).build()
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn functions(&self) -> &FunctionTable {
        &self.functions
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Look up a global by its source name.
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.env.lookup(self.interner.intern(name))
    }

    /// Runtime errors recovered since the last `take_errors`.
    pub fn errors(&self) -> &[EvalError] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<EvalError> {
        std::mem::take(&mut self.errors)
    }

    /// Evaluate a program. Returns the value of its last statement.
    pub fn eval_program(&mut self, program: &Program) -> EvalResult {
        self.eval_program_with(program, |_| {})
    }

    /// Evaluate a program, passing each top-level statement's value to
    /// `on_value` as it completes.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = program.body.len()))]
    pub fn eval_program_with(
        &mut self,
        program: &Program,
        mut on_value: impl FnMut(&Value),
    ) -> EvalResult {
        let arena = &program.arena;
        let mut last = Value::Void;
        for &stmt in program.statements() {
            let value = self.eval_stmt(arena, stmt)?.into_value();
            on_value(&value);
            last = value;
        }
        Ok(last)
    }

    /// Evaluate statements in order. The block's value is the last
    /// statement's; an empty block is `Void`.
    fn eval_block(&mut self, arena: &Arc<ExprArena>, range: StmtRange) -> EvalResult<Flow> {
        let mut last = Value::Void;
        for &stmt in arena.stmt_list(range) {
            match self.eval_stmt(arena, stmt)? {
                Flow::Normal(value) => last = value,
                ret @ Flow::Return(_) => return Ok(ret),
            }
        }
        Ok(Flow::Normal(last))
    }

    fn eval_stmt(&mut self, arena: &Arc<ExprArena>, id: StmtId) -> EvalResult<Flow> {
        ensure_sufficient_stack(|| self.eval_stmt_inner(arena, id))
    }

    fn eval_stmt_inner(&mut self, arena: &Arc<ExprArena>, id: StmtId) -> EvalResult<Flow> {
        let stmt = arena.stmt(id);
        let span = stmt.span;
        match stmt.kind {
            StmtKind::Assign { name, value } => {
                let value = self.eval_expr(arena, value)?;
                self.env.assign(name, value);
                Ok(Flow::Normal(Value::Void))
            }
            StmtKind::Expr(expr) => Ok(Flow::Normal(self.eval_expr(arena, expr)?)),
            StmtKind::Print(expr) => {
                let value = self.eval_expr(arena, expr)?;
                self.print_handler.println(&value.to_string());
                Ok(Flow::Normal(Value::Void))
            }
            StmtKind::Return(expr) => {
                if self.call_depth == 0 {
                    return Err(EvalErrorKind::ReturnOutsideFunction.at(span));
                }
                Ok(Flow::Return(self.eval_expr(arena, expr)?))
            }
            StmtKind::If {
                cond,
                then_block,
                else_block,
            } => {
                if self.eval_expr(arena, cond)?.is_truthy() {
                    self.eval_block(arena, then_block)
                } else {
                    // A missing else is an empty block, which yields `Void`.
                    self.eval_block(arena, else_block)
                }
            }
            StmtKind::While { cond, body } => {
                while self.eval_expr(arena, cond)?.is_truthy() {
                    if let ret @ Flow::Return(_) = self.eval_block(arena, body)? {
                        return Ok(ret);
                    }
                }
                Ok(Flow::Normal(Value::Void))
            }
            StmtKind::FuncDef { name, params, body } => {
                trace!(
                    function = self.interner.lookup(name),
                    params = params.len(),
                    "define"
                );
                self.functions.define(
                    name,
                    FunctionDef {
                        span,
                        params,
                        body,
                        arena: Arc::clone(arena),
                    },
                );
                Ok(Flow::Normal(Value::Void))
            }
        }
    }

    fn eval_expr(&mut self, arena: &Arc<ExprArena>, id: ExprId) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_expr_inner(arena, id))
    }

    fn eval_expr_inner(&mut self, arena: &Arc<ExprArena>, id: ExprId) -> EvalResult {
        let expr = arena.expr(id);
        let span = expr.span;
        match expr.kind {
            ExprKind::Int(n) => Ok(Value::int(n)),
            ExprKind::Str(name) => Ok(Value::string(self.interner.lookup(name))),
            ExprKind::Ident(name) => {
                if let Some(value) = self.env.lookup(name) {
                    return Ok(value.clone());
                }
                let name = self.interner.lookup(name).to_string();
                Ok(self.recover(EvalErrorKind::UndefinedVariable(name).at(span)))
            }
            ExprKind::Unary { op, operand } => {
                let operand = self.eval_expr(arena, operand)?;
                Ok(self.recover_or(evaluate_unary(op, &operand), span))
            }
            ExprKind::Binary { op, left, right } => {
                let left = self.eval_expr(arena, left)?;
                let right = self.eval_expr(arena, right)?;
                Ok(self.recover_or(evaluate_binary(&left, &right, op), span))
            }
            ExprKind::Call { func, args } => {
                let ids = arena.expr_list(args);
                let mut values = Vec::with_capacity(ids.len());
                for &arg in ids {
                    values.push(self.eval_expr(arena, arg)?);
                }
                self.call_function(func, values, span)
            }
        }
    }

    /// Call a user function with already evaluated arguments.
    ///
    /// The body runs in a fresh environment holding only the parameters.
    fn call_function(&mut self, name: Name, args: Vec<Value>, span: Span) -> EvalResult {
        let Some(def) = self.functions.get(name).cloned() else {
            let name = self.interner.lookup(name).to_string();
            return Ok(self.recover(EvalErrorKind::UndefinedFunction(name).at(span)));
        };

        if def.arity() != args.len() {
            let kind = EvalErrorKind::ArityMismatch {
                name: self.interner.lookup(name).to_string(),
                expected: def.arity(),
                found: args.len(),
            };
            return Ok(self.recover(kind.at(span).with_definition(def.span)));
        }

        if self.call_depth >= self.max_call_depth {
            let limit = self.max_call_depth;
            return Err(EvalErrorKind::CallDepthExceeded { limit }.at(span));
        }

        trace!(
            function = self.interner.lookup(name),
            args = args.len(),
            depth = self.call_depth,
            "call"
        );

        let mut callee_env = Environment::new();
        for (&param, value) in def.param_names().iter().zip(args) {
            callee_env.assign(param, value);
        }

        let mut frame = self.enter_call(callee_env);
        Ok(frame.eval_block(&def.arena, def.body)?.into_value())
    }

    fn recover_or(&mut self, result: Result<Value, EvalErrorKind>, span: Span) -> Value {
        match result {
            Ok(value) => value,
            Err(kind) => self.recover(kind.at(span)),
        }
    }

    /// Report a recoverable error and return its fallback value.
    #[cold]
    fn recover(&mut self, err: EvalError) -> Value {
        debug!(error = %err, "recovered runtime error");
        self.print_handler.report(&err.to_diagnostic());
        let fallback = err.kind.fallback();
        self.errors.push(err);
        fallback
    }
}
