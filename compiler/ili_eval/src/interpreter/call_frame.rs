//! RAII guard for function call frames.
//!
//! Entering a call swaps the caller's environment out for the callee's.
//! The [`CallFrame`] guard swaps it back when dropped, so the caller's
//! environment survives early `return`, fatal errors and unwinding alike.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! the call body is evaluated through it like through the interpreter itself.

use std::mem;
use std::ops::{Deref, DerefMut};

use super::Interpreter;
use crate::Environment;

pub struct CallFrame<'guard> {
    interpreter: &'guard mut Interpreter,
    saved: Environment,
}

impl Drop for CallFrame<'_> {
    fn drop(&mut self) {
        self.interpreter.env = mem::take(&mut self.saved);
        self.interpreter.call_depth = self.interpreter.call_depth.saturating_sub(1);
    }
}

impl Deref for CallFrame<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for CallFrame<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Install `callee_env` as the live environment until the guard drops.
    pub(crate) fn enter_call(&mut self, callee_env: Environment) -> CallFrame<'_> {
        let saved = mem::replace(&mut self.env, callee_env);
        self.call_depth = self.call_depth.saturating_add(1);
        CallFrame {
            interpreter: self,
            saved,
        }
    }
}
