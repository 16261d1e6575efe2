//! Runtime values.
//!
//! A [`Value`] is a [`FullType`](crate::types::FullType) paired with a
//! [`Payload`]. Constructors keep the two consistent, and the typed accessors
//! (`as_bool`, `as_int`, ...) panic when asked for the wrong kind: reading a
//! value through the wrong accessor is a bug in the host or in a native
//! function, never a runtime condition of the rule program.

mod value;

#[cfg(test)]
mod value_test;

pub use value::{Payload, TOO_DEEP, Value};
