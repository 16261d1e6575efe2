//! Fatal evaluation errors.
//!
//! These abort the whole evaluation: they mean the program or the root
//! invocation was built wrong. Exceeding the depth limit is not one of them,
//! it produces an `Error` value instead.

use ecow::EcoString;

use crate::{
    program::{FunctionId, LiteralError},
    types::FullType,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("unknown function {0:?}")]
    UnknownFunction(FunctionId),

    #[error("`{function}` takes {expected} argument(s), got {found}")]
    ArityMismatch {
        function: EcoString,
        expected: usize,
        found: usize,
    },

    #[error("`{function}` read `{name}` before assigning it")]
    UnboundReference { function: EcoString, name: EcoString },

    #[error("in `{function}`: {source}")]
    Literal {
        function: EcoString,
        #[source]
        source: LiteralError,
    },

    #[error("gate `{gate}` in `{function}` produced {found}, expected Boolean")]
    GateNotBoolean {
        function: EcoString,
        gate: EcoString,
        found: FullType,
    },

    #[error("`{function}` finished without producing a result")]
    MissingResult { function: EcoString },
}
