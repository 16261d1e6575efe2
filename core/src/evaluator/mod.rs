//! Memoizing tree-walking evaluator for rule programs.
//!
//! A [`Context`] evaluates [`Invocation`]s (a function plus concrete argument
//! values) against one [`Program`](crate::program::Program). Native functions
//! run their callback; interpreted functions run their lines in order, each
//! line calling another function through a nested invocation.
//!
//! ## Design Principles
//!
//! - **Memoized**: results of cacheable functions are stored per invocation
//!   for the life of the context, so natives must be pure.
//! - **Depth-bounded**: nesting deeper than
//!   [`EvaluatorOptions::max_depth`] yields an `Error` value (`TOO DEEP`)
//!   instead of overflowing the stack. This bounds depth; it does not detect
//!   cycles.
//! - **Errors as data**: `Error` values flow through callers like any value.
//!   Malformed invocations and programs are reported as [`EvalError`].
//! - **Single owner**: contexts are neither `Send` nor `Sync`.

mod context;
mod error;
mod frame;
mod invocation;
mod options;


pub use context::Context;
pub use error::EvalError;
pub use invocation::Invocation;
pub use options::{DEFAULT_MAX_DEPTH, EvaluatorOptions};
