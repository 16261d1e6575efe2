mod types;

#[cfg(test)]
mod types_test;

pub use types::{FullType, Type};
