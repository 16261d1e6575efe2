use crate::Vec;

use super::{FunctionId, ReferenceId};

/// What a [`Line`] does when executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Call a function and bind its result to the target.
    Assignment,
    /// Call a boolean function; when it yields `true`, return the target.
    ConditionalReturn,
    /// Return the target.
    Return,
}

/// One statement of an interpreted function body.
///
/// `inputs[0]` is the target (destination or returned reference) and the
/// remaining inputs are the call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    inputs: Vec<ReferenceId>,
    call: Option<FunctionId>,
    is_return: bool,
}

impl Line {
    /// `destination = function(arguments...)`
    pub fn assign(
        destination: ReferenceId,
        function: FunctionId,
        arguments: impl IntoIterator<Item = ReferenceId>,
    ) -> Self {
        Line {
            inputs: core::iter::once(destination).chain(arguments).collect(),
            call: Some(function),
            is_return: false,
        }
    }

    /// `return value if gate(arguments...)`
    pub fn return_if(
        value: ReferenceId,
        gate: FunctionId,
        arguments: impl IntoIterator<Item = ReferenceId>,
    ) -> Self {
        Line {
            inputs: core::iter::once(value).chain(arguments).collect(),
            call: Some(gate),
            is_return: true,
        }
    }

    /// `return value`
    pub fn ret(value: ReferenceId) -> Self {
        Line {
            inputs: Vec::from([value]),
            call: None,
            is_return: true,
        }
    }

    pub fn kind(&self) -> LineKind {
        match (self.call, self.is_return) {
            (Some(_), false) => LineKind::Assignment,
            (Some(_), true) => LineKind::ConditionalReturn,
            (None, _) => LineKind::Return,
        }
    }

    pub fn inputs(&self) -> &[ReferenceId] {
        &self.inputs
    }

    /// Destination of an assignment, or the value of a return.
    pub fn target(&self) -> ReferenceId {
        self.inputs[0]
    }

    pub fn arguments(&self) -> &[ReferenceId] {
        &self.inputs[1..]
    }

    pub fn call(&self) -> Option<FunctionId> {
        self.call
    }

    pub fn is_return(&self) -> bool {
        self.is_return
    }
}
