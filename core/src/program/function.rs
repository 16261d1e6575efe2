use core::fmt;

use ecow::EcoString;

use crate::{Rc, Vec, values::Value};

use super::{Line, ReferenceId};

/// Handle to a [`Function`] stored in a [`Program`](super::Program).
///
/// This is the function identity used in invocation cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FunctionId(pub(crate) u32);

impl FunctionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Native implementation of a function.
///
/// Receives exactly `arity` arguments. Natives backing cacheable functions
/// must be pure: their results are memoized per argument list.
pub type NativeFn = Rc<dyn Fn(&[Value]) -> Value>;

/// How a function computes its result.
#[derive(Clone)]
pub enum Body {
    Interpreted(Vec<Line>),
    Native(NativeFn),
}

impl fmt::Debug for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Body::Interpreted(lines) => f.debug_tuple("Interpreted").field(lines).finish(),
            Body::Native(_) => f.write_str("Native(..)"),
        }
    }
}

/// Parameter list of a function, with the editor comments shown around each
/// slot.
///
/// Slot 0 is a placeholder carrying the result type; it is never bound.
/// References and comments stay aligned because they are only ever pushed in
/// pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    references: Vec<ReferenceId>,
    comments: Vec<EcoString>,
}

impl Signature {
    pub fn returning(result: ReferenceId, comment: impl Into<EcoString>) -> Self {
        Signature {
            references: Vec::from([result]),
            comments: Vec::from([comment.into()]),
        }
    }

    pub fn param(mut self, reference: ReferenceId, comment: impl Into<EcoString>) -> Self {
        self.references.push(reference);
        self.comments.push(comment.into());
        self
    }

    pub fn references(&self) -> &[ReferenceId] {
        &self.references
    }

    pub fn comments(&self) -> &[EcoString] {
        &self.comments
    }

    pub fn result(&self) -> ReferenceId {
        self.references[0]
    }

    pub fn parameters(&self) -> &[ReferenceId] {
        &self.references[1..]
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }
}

/// A named callable of a rule program.
#[derive(Debug, Clone)]
pub struct Function {
    name: EcoString,
    signature: Signature,
    body: Body,
    uncacheable: bool,
}

impl Function {
    pub(crate) fn new(name: EcoString, signature: Signature, body: Body) -> Self {
        Function {
            name,
            signature,
            body,
            uncacheable: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// Number of arguments an invocation must supply.
    pub fn arity(&self) -> usize {
        self.signature.len() - 1
    }

    pub fn is_native(&self) -> bool {
        matches!(self.body, Body::Native(_))
    }

    /// Body lines, or `None` for native functions.
    pub fn lines(&self) -> Option<&[Line]> {
        match &self.body {
            Body::Interpreted(lines) => Some(lines.as_slice()),
            Body::Native(_) => None,
        }
    }

    /// Whether invocations of this function bypass the evaluator cache.
    pub fn uncacheable(&self) -> bool {
        self.uncacheable
    }

    pub(crate) fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    pub(crate) fn set_uncacheable(&mut self, uncacheable: bool) {
        self.uncacheable = uncacheable;
    }
}
