//! Variable environment and function table.
//!
//! Exactly one [`Environment`] is live at a time. A function call swaps in a
//! fresh environment holding only the call's parameters and swaps the
//! caller's back when the call ends; there is no parent chain, so a function
//! body never sees its caller's variables.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use ili_ir::{ExprArena, Name, NameRange, Span, StmtRange};

use crate::Value;

/// A flat mapping from variable name to value.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a variable.
    #[inline]
    pub fn lookup(&self, name: Name) -> Option<&Value> {
        self.bindings.get(&name)
    }

    /// Bind `name`, overwriting any previous binding.
    #[inline]
    pub fn assign(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// A user-defined function.
///
/// Holds the arena of the program that defined it, so the body stays valid
/// after that program has finished evaluating.
#[derive(Clone, Debug)]
pub struct FunctionDef {
    /// Span of the `func` statement, for diagnostics at call sites.
    pub span: Span,
    pub params: NameRange,
    pub body: StmtRange,
    pub arena: Arc<ExprArena>,
}

impl FunctionDef {
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> &[Name] {
        self.arena.name_list(self.params)
    }
}

/// Global mapping from function name to definition.
///
/// Entries are never removed; redefinition overwrites.
#[derive(Clone, Debug, Default)]
pub struct FunctionTable {
    functions: FxHashMap<Name, FunctionDef>,
}

impl FunctionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn define(&mut self, name: Name, def: FunctionDef) {
        self.functions.insert(name, def);
    }

    pub fn get(&self, name: Name) -> Option<&FunctionDef> {
        self.functions.get(&name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assign_overwrites() {
        let mut env = Environment::new();
        let x = Name::from_raw(1);
        assert_eq!(env.lookup(x), None);

        env.assign(x, Value::int(1));
        env.assign(x, Value::string("two"));
        assert_eq!(env.lookup(x), Some(&Value::string("two")));
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_function_redefinition_overwrites() {
        let mut arena = ExprArena::new();
        let params = arena.alloc_name_list([Name::from_raw(2), Name::from_raw(3)]);
        let arena = Arc::new(arena);
        let f = Name::from_raw(1);

        let mut table = FunctionTable::new();
        table.define(
            f,
            FunctionDef {
                span: Span::DUMMY,
                params,
                body: StmtRange::EMPTY,
                arena: Arc::clone(&arena),
            },
        );
        assert_eq!(table.get(f).map(FunctionDef::arity), Some(2));
        assert_eq!(
            table.get(f).map(FunctionDef::param_names),
            Some(&[Name::from_raw(2), Name::from_raw(3)][..])
        );

        table.define(
            f,
            FunctionDef {
                span: Span::DUMMY,
                params: NameRange::EMPTY,
                body: StmtRange::EMPTY,
                arena,
            },
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(f).map(FunctionDef::arity), Some(0));
    }
}
