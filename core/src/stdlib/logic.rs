//! Logic Package
//!
//! Functions: and, or, not

use crate::{
    program::{FunctionId, Program, ProgramError},
    types::{FullType, Type},
    values::Value,
};

#[derive(Debug, Clone, Copy)]
pub struct Logic {
    pub and: FunctionId,
    pub or: FunctionId,
    pub not: FunctionId,
}

fn logic_and(args: &[Value]) -> Value {
    Value::bool(args[0].as_bool() && args[1].as_bool())
}

fn logic_or(args: &[Value]) -> Value {
    Value::bool(args[0].as_bool() || args[1].as_bool())
}

fn logic_not(args: &[Value]) -> Value {
    Value::bool(!args[0].as_bool())
}

pub fn logic(program: &mut Program) -> Result<Logic, ProgramError> {
    let boolean = FullType::single(Type::Boolean);
    let and = super::define(
        program,
        "and",
        (boolean, "whether"),
        &[("a", boolean, "and"), ("b", boolean, "")],
        logic_and,
    )?;
    let or = super::define(
        program,
        "or",
        (boolean, "whether"),
        &[("a", boolean, "or"), ("b", boolean, "")],
        logic_or,
    )?;
    let not = super::define(
        program,
        "not",
        (boolean, "whether not"),
        &[("a", boolean, "")],
        logic_not,
    )?;

    Ok(Logic { and, or, not })
}
