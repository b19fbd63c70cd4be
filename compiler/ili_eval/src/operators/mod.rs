//! Binary and unary operator implementations.
//!
//! Operators work on values alone and report failures as an
//! [`EvalErrorKind`]; the interpreter attaches the span and decides how to
//! recover.

use std::cmp::Ordering;

use ili_ir::{BinaryOp, UnaryOp};

use crate::{EvalErrorKind, Value};

/// Checked arithmetic: `None` from the `checked_*` call means overflow.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> Result<Value, EvalErrorKind> {
    result
        .map(Value::Int)
        .ok_or(EvalErrorKind::IntegerOverflow { op: op_name })
}

#[cold]
fn type_mismatch(op: BinaryOp, left: &Value, right: &Value) -> EvalErrorKind {
    EvalErrorKind::TypeMismatch {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

#[cold]
fn incomparable(op: BinaryOp, left: &Value, right: &Value) -> EvalErrorKind {
    EvalErrorKind::Incomparable {
        op: op.as_symbol(),
        left: left.type_name(),
        right: right.type_name(),
    }
}

/// Evaluate `left op right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Sub => {
            let (a, b) = int_operands(op, left, right)?;
            checked_arith(a.checked_sub(b), "subtraction")
        }
        BinaryOp::Mul => {
            let (a, b) = int_operands(op, left, right)?;
            checked_arith(a.checked_mul(b), "multiplication")
        }
        // Truncates toward zero; `i64::MIN / -1` overflows.
        BinaryOp::Div => {
            let (a, b) = int_operands(op, left, right)?;
            if b == 0 {
                return Err(EvalErrorKind::DivisionByZero);
            }
            checked_arith(a.checked_div(b), "division")
        }
        BinaryOp::Eq => Ok(Value::Bool(values_equal(left, right))),
        BinaryOp::NotEq => Ok(Value::Bool(!values_equal(left, right))),
        BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => {
            let ordering = compare(left, right).ok_or_else(|| incomparable(op, left, right))?;
            Ok(Value::Bool(match op {
                BinaryOp::Lt => ordering == Ordering::Less,
                BinaryOp::LtEq => ordering != Ordering::Greater,
                BinaryOp::Gt => ordering == Ordering::Greater,
                _ => ordering != Ordering::Less,
            }))
        }
    }
}

/// `+` concatenates when either side is a string, otherwise adds integers.
fn eval_add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => checked_arith(a.checked_add(*b), "addition"),
        (Value::Void, _) | (_, Value::Void) => Err(type_mismatch(BinaryOp::Add, left, right)),
        (Value::Str(_), _) | (_, Value::Str(_)) => Ok(Value::string(format!("{left}{right}"))),
        _ => Err(type_mismatch(BinaryOp::Add, left, right)),
    }
}

/// Both operands of `-`, `*` and `/` must be integers.
fn int_operands(op: BinaryOp, left: &Value, right: &Value) -> Result<(i64, i64), EvalErrorKind> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok((*a, *b)),
        _ => Err(type_mismatch(op, left, right)),
    }
}

/// Numeric view used by comparisons: `false` and `true` count as 0 and 1.
fn as_number(value: &Value) -> Option<i64> {
    match value {
        Value::Int(n) => Some(*n),
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Str(_) | Value::Void => None,
    }
}

/// `==`: numbers (booleans included) by value, everything else structurally.
fn values_equal(left: &Value, right: &Value) -> bool {
    match (as_number(left), as_number(right)) {
        (Some(a), Some(b)) => a == b,
        _ => left == right,
    }
}

/// Ordering for number/number and string/string pairs.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    if let (Some(a), Some(b)) = (as_number(left), as_number(right)) {
        return Some(a.cmp(&b));
    }
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Evaluate `op operand`.
pub fn evaluate_unary(op: UnaryOp, operand: &Value) -> Result<Value, EvalErrorKind> {
    match (op, operand) {
        (UnaryOp::Neg, Value::Int(n)) => checked_arith(n.checked_neg(), "negation"),
        (UnaryOp::Neg, other) => Err(EvalErrorKind::InvalidOperand {
            op: op.as_symbol(),
            operand: other.type_name(),
        }),
    }
}
