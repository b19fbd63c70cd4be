//! Runtime errors.
//!
//! Most runtime errors are recoverable: the interpreter reports them and
//! carries on with [`EvalErrorKind::fallback`] in place of the failed
//! expression. Fatal errors stop the current program unit.

use ili_diagnostic::{Diagnostic, ErrorCode};
use ili_ir::Span;

use crate::Value;

/// A runtime error with the span of the expression or statement that raised it.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{kind} at {span}")]
pub struct EvalError {
    pub span: Span,
    pub kind: EvalErrorKind,
    /// Where the function involved was defined, when known.
    pub definition: Option<Span>,
}

fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// What went wrong at runtime.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("undefined variable `{0}`")]
    UndefinedVariable(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow in {op}")]
    IntegerOverflow { op: &'static str },

    #[error("cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// An ordering comparison between values with no common order.
    #[error("cannot compare {left} and {right} with `{op}`")]
    Incomparable {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    #[error("cannot apply unary `{op}` to {operand}")]
    InvalidOperand {
        op: &'static str,
        operand: &'static str,
    },

    #[error("undefined function `{0}`")]
    UndefinedFunction(String),

    #[error("function `{name}` expects {expected} argument{}, got {found}", plural_s(*.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("`return` outside of a function")]
    ReturnOutsideFunction,

    #[error("maximum call depth of {limit} exceeded")]
    CallDepthExceeded { limit: usize },
}

impl EvalErrorKind {
    /// Fatal errors end evaluation of the current program unit.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EvalErrorKind::ReturnOutsideFunction | EvalErrorKind::CallDepthExceeded { .. }
        )
    }

    /// Value substituted for the failed expression when recovering.
    pub fn fallback(&self) -> Value {
        match self {
            EvalErrorKind::UndefinedFunction(_) | EvalErrorKind::ArityMismatch { .. } => {
                Value::Void
            }
            EvalErrorKind::Incomparable { .. } => Value::Bool(false),
            _ => Value::int(0),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UndefinedVariable(_) => ErrorCode::E6001,
            EvalErrorKind::DivisionByZero => ErrorCode::E6002,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6003,
            EvalErrorKind::TypeMismatch { .. }
            | EvalErrorKind::Incomparable { .. }
            | EvalErrorKind::InvalidOperand { .. } => ErrorCode::E6004,
            EvalErrorKind::UndefinedFunction(_) => ErrorCode::E6005,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6006,
            EvalErrorKind::ReturnOutsideFunction => ErrorCode::E6007,
            EvalErrorKind::CallDepthExceeded { .. } => ErrorCode::E6008,
        }
    }

    /// Attach the span where the error happened.
    #[cold]
    pub fn at(self, span: Span) -> EvalError {
        EvalError {
            span,
            kind: self,
            definition: None,
        }
    }
}

impl EvalError {
    #[must_use]
    pub fn with_definition(mut self, span: Span) -> Self {
        self.definition = Some(span);
        self
    }

    /// 1-based line of the error.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    pub fn is_fatal(&self) -> bool {
        self.kind.is_fatal()
    }

    /// Undefined variables are reported as warnings; everything else is an error.
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, EvalErrorKind::UndefinedVariable(_))
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let code = self.kind.code();
        let diag = if self.is_warning() {
            Diagnostic::warning(code)
        } else {
            Diagnostic::error(code)
        }
        .with_message(self.kind.to_string());

        match &self.kind {
            EvalErrorKind::UndefinedVariable(_) => diag
                .with_label(self.span, "never assigned in this scope")
                .with_note("undefined variables read as 0"),
            EvalErrorKind::DivisionByZero => diag
                .with_label(self.span, "divisor is zero")
                .with_note("the result is 0"),
            EvalErrorKind::IntegerOverflow { .. } => diag
                .with_label(self.span, "result does not fit in a 64-bit integer")
                .with_note("the result is 0"),
            EvalErrorKind::TypeMismatch { .. } | EvalErrorKind::InvalidOperand { .. } => diag
                .with_label(self.span, "unsupported operand types")
                .with_note("the result is 0"),
            EvalErrorKind::Incomparable { .. } => diag
                .with_label(self.span, "these values have no common order")
                .with_note("the comparison is false"),
            EvalErrorKind::UndefinedFunction(_) => diag
                .with_label(self.span, "no function with this name has been defined")
                .with_suggestion("define it with `func name(params) { ... }` before calling it"),
            EvalErrorKind::ArityMismatch { name, expected, .. } => {
                let diag = diag.with_label(self.span, "wrong number of arguments");
                match self.definition {
                    Some(def) => diag.with_secondary_label(
                        def,
                        format!("`{name}` takes {expected} parameter{}", plural_s(*expected)),
                    ),
                    None => diag,
                }
            }
            EvalErrorKind::ReturnOutsideFunction => diag
                .with_label(self.span, "not inside a function body")
                .with_note("evaluation of this input stopped here"),
            EvalErrorKind::CallDepthExceeded { .. } => diag
                .with_label(self.span, "call nested too deeply")
                .with_note("evaluation of this input stopped here"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ili_diagnostic::Severity;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_messages() {
        let span = Span::new(4, 9, 3);
        assert_eq!(
            EvalErrorKind::DivisionByZero.at(span).to_string(),
            "division by zero at line 3"
        );
        assert_eq!(
            EvalErrorKind::ArityMismatch {
                name: "f".into(),
                expected: 1,
                found: 2
            }
            .to_string(),
            "function `f` expects 1 argument, got 2"
        );
        assert_eq!(
            EvalErrorKind::ArityMismatch {
                name: "g".into(),
                expected: 0,
                found: 1
            }
            .to_string(),
            "function `g` expects 0 arguments, got 1"
        );
        assert_eq!(
            EvalErrorKind::TypeMismatch {
                op: "-",
                left: "string",
                right: "int"
            }
            .to_string(),
            "cannot apply `-` to string and int"
        );
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(EvalErrorKind::DivisionByZero.fallback(), Value::int(0));
        assert_eq!(
            EvalErrorKind::UndefinedVariable("y".into()).fallback(),
            Value::int(0)
        );
        assert_eq!(
            EvalErrorKind::UndefinedFunction("f".into()).fallback(),
            Value::Void
        );
        let incomparable = EvalErrorKind::Incomparable {
            op: "<",
            left: "int",
            right: "string",
        };
        assert_eq!(incomparable.fallback(), Value::Bool(false));
        assert_eq!(incomparable.code(), ErrorCode::E6004);
    }

    #[test]
    fn test_fatal_kinds() {
        assert!(EvalErrorKind::ReturnOutsideFunction.is_fatal());
        assert!(EvalErrorKind::CallDepthExceeded { limit: 10 }.is_fatal());
        assert!(!EvalErrorKind::DivisionByZero.is_fatal());
        assert!(!EvalErrorKind::UndefinedFunction("f".into()).is_fatal());
    }

    #[test]
    fn test_undefined_variable_is_a_warning() {
        let err = EvalErrorKind::UndefinedVariable("y".into()).at(Span::new(6, 7, 1));
        let diag = err.to_diagnostic();
        assert_eq!(diag.code, ErrorCode::E6001);
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.primary_span(), Some(Span::new(6, 7, 1)));

        let diag = EvalErrorKind::DivisionByZero.at(Span::DUMMY).to_diagnostic();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(diag.code, ErrorCode::E6002);
    }

    #[test]
    fn test_arity_mismatch_points_at_definition() {
        let kind = EvalErrorKind::ArityMismatch {
            name: "f".into(),
            expected: 2,
            found: 1,
        };
        let diag = kind
            .clone()
            .at(Span::new(30, 34, 2))
            .with_definition(Span::new(0, 20, 1))
            .to_diagnostic();
        assert_eq!(diag.labels.len(), 2);
        assert!(!diag.labels[1].is_primary());
        assert_eq!(diag.labels[1].span, Span::new(0, 20, 1));
        assert_eq!(diag.labels[1].message, "`f` takes 2 parameters");
        assert_eq!(diag.primary_span(), Some(Span::new(30, 34, 2)));

        let diag = kind.at(Span::new(30, 34, 2)).to_diagnostic();
        assert_eq!(diag.labels.len(), 1);
    }
}
