//! Numbers Package
//!
//! Functions: add, subtract, lessthan, equal
//!
//! Integer arithmetic wraps on overflow. A `Number` may hold an integer or a
//! float; mixing the two promotes the integer to float.

use crate::{
    program::{FunctionId, Program, ProgramError},
    types::{FullType, Type},
    values::{Payload, Value},
};

#[derive(Debug, Clone, Copy)]
pub struct Numbers {
    pub add: FunctionId,
    pub subtract: FunctionId,
    pub less_than: FunctionId,
    pub equal: FunctionId,
}

/// The payload of a `Number` value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[track_caller]
    pub(super) fn of(value: &Value) -> Number {
        match value.payload() {
            Payload::Int(n) => Number::Int(*n),
            Payload::Float(x) => Number::Float(*x),
            _ => Number::Int(value.as_int()),
        }
    }

    fn to_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(x) => x,
        }
    }

    /// The integer this number is exactly equal to, if any.
    pub(super) fn whole(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(x) if x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64 => {
                Some(x as i64)
            }
            Number::Float(_) => None,
        }
    }

    /// Rounds toward zero; NaN becomes 0 and infinities saturate.
    pub(super) fn truncate(self) -> i64 {
        match self {
            Number::Int(n) => n,
            Number::Float(x) => x as i64,
        }
    }
}

fn pair(args: &[Value]) -> (Number, Number) {
    (Number::of(&args[0]), Number::of(&args[1]))
}

fn number_add(args: &[Value]) -> Value {
    match pair(args) {
        (Number::Int(a), Number::Int(b)) => Value::int(a.wrapping_add(b)),
        (a, b) => Value::float(a.to_f64() + b.to_f64()),
    }
}

fn number_subtract(args: &[Value]) -> Value {
    match pair(args) {
        (Number::Int(a), Number::Int(b)) => Value::int(a.wrapping_sub(b)),
        (a, b) => Value::float(a.to_f64() - b.to_f64()),
    }
}

fn number_less_than(args: &[Value]) -> Value {
    match pair(args) {
        (Number::Int(a), Number::Int(b)) => Value::bool(a < b),
        (a, b) => Value::bool(a.to_f64() < b.to_f64()),
    }
}

fn number_equal(args: &[Value]) -> Value {
    match pair(args) {
        (Number::Int(a), Number::Int(b)) => Value::bool(a == b),
        (a, b) => Value::bool(a.to_f64() == b.to_f64()),
    }
}

pub fn numbers(program: &mut Program) -> Result<Numbers, ProgramError> {
    let number = FullType::single(Type::Number);
    let boolean = FullType::single(Type::Boolean);

    let add = super::define(
        program,
        "add",
        (number, "the sum of"),
        &[("a", number, "and"), ("b", number, "")],
        number_add,
    )?;
    let subtract = super::define(
        program,
        "subtract",
        (number, ""),
        &[("a", number, "minus"), ("b", number, "")],
        number_subtract,
    )?;
    let less_than = super::define(
        program,
        "lessthan",
        (boolean, "whether"),
        &[("a", number, "is less than"), ("b", number, "")],
        number_less_than,
    )?;
    let equal = super::define(
        program,
        "equal",
        (boolean, "whether"),
        &[("a", number, "equals"), ("b", number, "")],
        number_equal,
    )?;

    Ok(Numbers {
        add,
        subtract,
        less_than,
        equal,
    })
}
