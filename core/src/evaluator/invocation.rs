use smallvec::SmallVec;
use static_assertions::assert_impl_all;

use crate::{
    program::{FunctionId, Program},
    values::Value,
};

/// A function applied to concrete arguments.
///
/// Equality and hashing are structural over the function identity and the
/// argument values, which makes invocations the memoization key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Invocation {
    pub function: FunctionId,
    pub arguments: SmallVec<[Value; 4]>,
}

assert_impl_all!(Invocation: Clone, Eq, core::hash::Hash);

impl Invocation {
    pub fn new(function: FunctionId, arguments: impl IntoIterator<Item = Value>) -> Self {
        Invocation {
            function,
            arguments: arguments.into_iter().collect(),
        }
    }

    /// Whether the argument count matches the function's arity.
    pub fn is_valid(&self, program: &Program) -> bool {
        program
            .get_function(self.function)
            .is_some_and(|function| function.arity() == self.arguments.len())
    }
}
