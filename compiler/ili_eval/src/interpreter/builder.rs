//! Builder for [`Interpreter`].

use ili_ir::SharedInterner;

use super::{Interpreter, DEFAULT_MAX_CALL_DEPTH};
use crate::{stdout_handler, Environment, FunctionTable, SharedPrintHandler};

pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
    max_call_depth: usize,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
        }
    }

    /// Where `print` output and runtime diagnostics go. Defaults to stdout.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Limit how deeply function calls may nest.
    /// Defaults to [`DEFAULT_MAX_CALL_DEPTH`].
    #[must_use]
    pub fn max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    pub fn build(self) -> Interpreter {
        Interpreter {
            interner: self.interner,
            env: Environment::new(),
            functions: FunctionTable::new(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            max_call_depth: self.max_call_depth,
            call_depth: 0,
            errors: Vec::new(),
        }
    }
}
