//! Errors raised while building a program.
//!
//! Bodies are checked when they are installed, so a program that built
//! successfully never reads a local before assigning it.

use ecow::EcoString;

use crate::types::FullType;

use super::{FunctionId, LiteralError, ReferenceId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    #[error("unknown function {0:?}")]
    UnknownFunction(FunctionId),

    #[error("unknown reference {0:?}")]
    UnknownReference(ReferenceId),

    #[error("parameter `{name}` of `{function}` is a literal")]
    LiteralParameter { function: EcoString, name: EcoString },

    #[error("`{name}` appears more than once in the signature of `{function}`")]
    DuplicateParameter { function: EcoString, name: EcoString },

    #[error("`{function}` is native and cannot be given a body")]
    NativeBody { function: EcoString },

    #[error("line {line} of `{function}`: `{callee}` takes {expected} argument(s), got {found}")]
    ArityMismatch {
        function: EcoString,
        line: usize,
        callee: EcoString,
        expected: usize,
        found: usize,
    },

    #[error("line {line} of `{function}`: `{name}` is read before it is assigned")]
    UnboundReference {
        function: EcoString,
        line: usize,
        name: EcoString,
    },

    #[error("line {line} of `{function}`: cannot assign to literal `{name}`")]
    LiteralDestination {
        function: EcoString,
        line: usize,
        name: EcoString,
    },

    #[error("line {line} of `{function}`: {source}")]
    Literal {
        function: EcoString,
        line: usize,
        #[source]
        source: LiteralError,
    },

    #[error("line {line} of `{function}`: `{name}` is {found}, expected {expected}")]
    TypeMismatch {
        function: EcoString,
        line: usize,
        name: EcoString,
        expected: FullType,
        found: FullType,
    },

    #[error("`{function}` has no line producing its result")]
    MissingResult { function: EcoString },
}
