//! Core of the rulecraft rule language: typed values, program graphs and the
//! memoizing evaluator that runs them.
//!
//! Programs are not parsed from text. A host (usually an editor) builds a
//! [`Program`] out of references, functions and lines, then asks a
//! [`Context`] to evaluate an [`Invocation`] of one of its functions.
//!
//! ```
//! use rulecraft_core::{Context, Program, Value, stdlib};
//!
//! let mut program = Program::new();
//! let logic = stdlib::logic(&mut program).unwrap();
//!
//! let mut context = Context::new(&program);
//! let result = context
//!     .call(logic.and, [Value::bool(true), Value::bool(false)])
//!     .unwrap();
//! assert_eq!(result, Value::bool(false));
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, rc::Rc, string::String, string::ToString, vec, vec::Vec};

pub mod evaluator;
pub mod program;
pub mod stdlib;
pub mod types;
pub mod values;

pub use evaluator::{Context, EvalError, EvaluatorOptions, Invocation};
pub use program::{
    Body, Function, FunctionId, Line, LineKind, LiteralError, NativeFn, Program, ProgramError,
    Reference, ReferenceId, Signature,
};
pub use types::{FullType, Type};
pub use values::{Payload, Value};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_recursion_guard() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
