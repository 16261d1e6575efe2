//! Rulecraft - typed game-rule functions and a memoizing evaluator
//!
//! # Overview
//!
//! Rulecraft describes game rules as small typed functions. Each function is
//! a list of lines; a line either assigns the result of a call, returns a
//! value when a boolean call says so, or returns a value outright. An editor
//! builds these functions as data (there is no textual syntax), and the
//! evaluator runs them against concrete arguments, memoizing every cacheable
//! invocation.
//!
//! # Quick Start
//!
//! ```
//! use rulecraft::{Context, FullType, Line, Program, Signature, Type, Value, stdlib};
//!
//! let mut program = Program::new();
//! let lib = stdlib::register_stdlib(&mut program, Type::Position).unwrap();
//!
//! // tail(path) = skip(path, 1)
//! let result = program.variable("result", FullType::collection(Type::Position));
//! let path = program.variable("path", FullType::collection(Type::Position));
//! let one = program.literal("1", FullType::single(Type::Number));
//! let tail = program
//!     .declare("tail", Signature::returning(result, "").param(path, ""))
//!     .unwrap();
//! program
//!     .set_body(tail, vec![Line::assign(result, lib.sequences.skip, [path, one])])
//!     .unwrap();
//!
//! let mut context = Context::new(&program);
//! let rest = context
//!     .call(tail, [Value::handles(Type::Position, ["P0", "P1", "P2"])])
//!     .unwrap();
//! assert_eq!(rest, Value::handles(Type::Position, ["P1", "P2"]));
//! ```
//!
//! # Native Functions
//!
//! Hosts plug game logic in as native callbacks. Natives are memoized unless
//! marked uncacheable, so impure ones must be:
//!
//! ```
//! use rulecraft::{FullType, Program, Signature, Type, Value};
//!
//! let mut program = Program::new();
//! let result = program.variable("result", FullType::single(Type::Number));
//! let sides = program.variable("sides", FullType::single(Type::Number));
//! let roll = program
//!     .define_native("roll", Signature::returning(result, "a roll of").param(sides, ""), |args| {
//!         Value::int(args[0].as_int())
//!     })
//!     .unwrap();
//! program.set_uncacheable(roll, true).unwrap();
//! ```

// Re-export public API from rulecraft_core
pub use rulecraft_core::evaluator::{
    Context, DEFAULT_MAX_DEPTH, EvalError, EvaluatorOptions, Invocation,
};
pub use rulecraft_core::program::{
    Body, Function, FunctionId, Line, LineKind, LiteralError, NativeFn, Program, ProgramError,
    Reference, ReferenceId, Signature,
};
pub use rulecraft_core::types::{FullType, Type};
pub use rulecraft_core::values::{Payload, TOO_DEEP, Value};
pub use rulecraft_core::{evaluator, program, stdlib, types, values};
