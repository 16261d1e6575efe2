//! Rulecraft Standard Library
//!
//! Native functions most rule programs need, grouped in packs:
//! - Logic: `and`, `or`, `not`
//! - Numbers: `add`, `subtract`, `lessthan`, `equal`
//! - Sequences: `length`, `shorterthan`, `element`, `first`, `skip`
//!
//! Each pack registers its functions in a [`Program`] and returns their ids.
//! All of them are pure, so they stay cacheable.

use crate::{
    program::{FunctionId, Program, ProgramError, Signature},
    types::FullType,
    values::Value,
};

pub mod logic;
pub mod numbers;
pub mod sequences;


pub use logic::{Logic, logic};
pub use numbers::{Numbers, numbers};
pub use sequences::{Sequences, sequences};

/// Message of the error value produced by out-of-range `element` offsets.
pub const OUT_OF_RANGE: &str = "OUT OF RANGE";

/// Every pack, with sequence functions over `element`.
#[derive(Debug, Clone, Copy)]
pub struct Stdlib {
    pub logic: Logic,
    pub numbers: Numbers,
    pub sequences: Sequences,
}

/// Register all packs in `program`.
///
/// Sequence packs are typed by their element kind; register more with
/// [`sequences`] when a program needs collections of several kinds.
pub fn register_stdlib(
    program: &mut Program,
    element: crate::types::Type,
) -> Result<Stdlib, ProgramError> {
    Ok(Stdlib {
        logic: logic(program)?,
        numbers: numbers(program)?,
        sequences: sequences(program, element)?,
    })
}

/// Define a native with fresh parameter slots.
///
/// `result` and each parameter are `(type, comment)` / `(name, type,
/// comment)`; the comments are what an editor prints around the slots.
fn define(
    program: &mut Program,
    name: &str,
    result: (FullType, &str),
    params: &[(&str, FullType, &str)],
    func: fn(&[Value]) -> Value,
) -> Result<FunctionId, ProgramError> {
    let (result_ty, result_comment) = result;
    let mut signature = Signature::returning(program.variable("result", result_ty), result_comment);
    for &(param, ty, comment) in params {
        signature = signature.param(program.variable(param, ty), comment);
    }
    program.define_native(name, signature, func)
}
