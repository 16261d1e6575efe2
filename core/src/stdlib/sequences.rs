//! Sequences Package
//!
//! Functions over collections of one element kind: length, shorterthan,
//! element, first, skip.
//!
//! Offsets are 1-based, the way rules are read out loud ("the first position
//! in path"). Reading past either end yields an `OUT OF RANGE` error value.

use crate::{
    Vec,
    program::{FunctionId, Program, ProgramError},
    types::{FullType, Type},
    values::Value,
};

use super::{OUT_OF_RANGE, numbers::Number};

#[derive(Debug, Clone, Copy)]
pub struct Sequences {
    pub length: FunctionId,
    pub shorter_than: FunctionId,
    pub element: FunctionId,
    pub first: FunctionId,
    pub skip: FunctionId,
}

fn sequence_length(args: &[Value]) -> Value {
    Value::int(args[0].as_sequence().len() as i64)
}

/// `shorterthan(sequence, count)`
fn sequence_shorter_than(args: &[Value]) -> Value {
    let len = args[0].as_sequence().len();
    match Number::of(&args[1]) {
        Number::Int(count) => Value::bool((len as i64) < count),
        Number::Float(count) => Value::bool((len as f64) < count),
    }
}

/// `element(offset, sequence)`, 1-based. Fractional offsets are out of range.
fn sequence_element(args: &[Value]) -> Value {
    match Number::of(&args[0]).whole() {
        Some(offset) => nth(&args[1], offset),
        None => Value::error(OUT_OF_RANGE),
    }
}

fn sequence_first(args: &[Value]) -> Value {
    nth(&args[0], 1)
}

/// `skip(sequence, count)`: everything after the first `count` elements.
/// Negative counts skip nothing; fractional counts round toward zero.
fn sequence_skip(args: &[Value]) -> Value {
    let sequence = &args[0];
    let count = usize::try_from(Number::of(&args[1]).truncate()).unwrap_or(0);
    let rest: Vec<Value> = sequence.as_sequence().iter().skip(count).cloned().collect();
    Value::sequence(sequence.ty.element(), rest)
}

fn nth(sequence: &Value, offset: i64) -> Value {
    let item = usize::try_from(offset)
        .ok()
        .and_then(|offset| offset.checked_sub(1))
        .and_then(|index| sequence.as_sequence().get(index));
    match item {
        Some(item) => item.clone(),
        None => Value::error(OUT_OF_RANGE),
    }
}

pub fn sequences(program: &mut Program, element: Type) -> Result<Sequences, ProgramError> {
    let item = FullType::single(element);
    let items = FullType::collection(element);
    let number = FullType::single(Type::Number);
    let boolean = FullType::single(Type::Boolean);

    let length = super::define(
        program,
        "length",
        (number, "the number of items in"),
        &[("sequence", items, "")],
        sequence_length,
    )?;
    let shorter_than = super::define(
        program,
        "shorterthan",
        (boolean, "whether"),
        &[("sequence", items, "has fewer than"), ("count", number, "items")],
        sequence_shorter_than,
    )?;
    let element = super::define(
        program,
        "element",
        (item, "item number"),
        &[("offset", number, "in"), ("sequence", items, "")],
        sequence_element,
    )?;
    let first = super::define(
        program,
        "first",
        (item, "the first item in"),
        &[("sequence", items, "")],
        sequence_first,
    )?;
    let skip = super::define(
        program,
        "skip",
        (items, ""),
        &[("sequence", items, "after skipping"), ("count", number, "items")],
        sequence_skip,
    )?;

    Ok(Sequences {
        length,
        shorter_than,
        element,
        first,
        skip,
    })
}
