use core::hash::{Hash, Hasher};

use ecow::EcoString;
use static_assertions::assert_impl_all;

use crate::{
    Vec,
    types::{FullType, Type},
};

/// Message carried by the error value produced when evaluation nests too deep.
pub const TOO_DEEP: &str = "TOO DEEP";

/// The data part of a [`Value`].
#[derive(Debug, Clone)]
pub enum Payload {
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Opaque object handle. Also holds the message of `Error` values.
    Handle(EcoString),
    Sequence(Vec<Value>),
}

// Floats compare by bit pattern so that `Eq` agrees with `Hash`.
impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Int(a), Payload::Int(b)) => a == b,
            (Payload::Float(a), Payload::Float(b)) => a.to_bits() == b.to_bits(),
            (Payload::Handle(a), Payload::Handle(b)) => a == b,
            (Payload::Sequence(a), Payload::Sequence(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Payload {}

impl Hash for Payload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Payload::Bool(b) => b.hash(state),
            Payload::Int(n) => n.hash(state),
            Payload::Float(x) => x.to_bits().hash(state),
            Payload::Handle(handle) => handle.hash(state),
            Payload::Sequence(items) => items.hash(state),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    pub ty: FullType,
    payload: Payload,
}

assert_impl_all!(Value: Clone, Eq, Hash);

impl Value {
    // ============================================================================
    // Construction
    // ============================================================================

    pub fn bool(value: bool) -> Self {
        Value {
            ty: FullType::single(Type::Boolean),
            payload: Payload::Bool(value),
        }
    }

    pub fn int(value: i64) -> Self {
        Value {
            ty: FullType::single(Type::Number),
            payload: Payload::Int(value),
        }
    }

    /// Create a float-backed `Number`. Literals and the standard library only
    /// produce integers; this exists for hosts whose natives need fractions.
    pub fn float(value: f64) -> Self {
        Value {
            ty: FullType::single(Type::Number),
            payload: Payload::Float(value),
        }
    }

    /// Create an opaque handle to a game object, position or action.
    ///
    /// # Panics
    ///
    /// Panics if `ty` is not a handle kind.
    #[track_caller]
    pub fn handle(ty: Type, handle: impl Into<EcoString>) -> Self {
        assert!(ty.is_handle(), "{} values are not handles", ty);
        Value {
            ty: FullType::single(ty),
            payload: Payload::Handle(handle.into()),
        }
    }

    /// Create a sequence whose elements all have type `element`.
    ///
    /// # Panics
    ///
    /// Panics if `element` is itself a collection type or if any item has a
    /// different type.
    #[track_caller]
    pub fn sequence(element: FullType, items: Vec<Value>) -> Self {
        assert!(
            !element.collection,
            "sequence elements cannot be collections ({})",
            element
        );
        if let Some(item) = items.iter().find(|item| item.ty != element) {
            panic!("{} item in a sequence of {}", item.ty, element.collection_of());
        }
        Value {
            ty: element.collection_of(),
            payload: Payload::Sequence(items),
        }
    }

    /// Empty sequence of the given collection type.
    #[track_caller]
    pub fn empty(ty: FullType) -> Self {
        assert!(ty.collection, "{} is not a collection type", ty);
        Value::sequence(ty.element(), Vec::new())
    }

    /// Convenience for building a sequence of handles of the same kind.
    #[track_caller]
    pub fn handles<I, S>(ty: Type, handles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<EcoString>,
    {
        let items = handles
            .into_iter()
            .map(|handle| Value::handle(ty, handle))
            .collect();
        Value::sequence(FullType::single(ty), items)
    }

    pub fn error(message: impl Into<EcoString>) -> Self {
        Value {
            ty: FullType::single(Type::Error),
            payload: Payload::Handle(message.into()),
        }
    }

    // ============================================================================
    // Inspection
    // ============================================================================

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn is_error(&self) -> bool {
        self.ty.is_error()
    }

    #[track_caller]
    pub fn as_bool(&self) -> bool {
        self.expect_type(FullType::single(Type::Boolean), "as_bool");
        match self.payload {
            Payload::Bool(value) => value,
            _ => self.payload_mismatch("as_bool"),
        }
    }

    #[track_caller]
    pub fn as_int(&self) -> i64 {
        self.expect_type(FullType::single(Type::Number), "as_int");
        match self.payload {
            Payload::Int(value) => value,
            _ => self.payload_mismatch("as_int"),
        }
    }

    #[track_caller]
    pub fn as_float(&self) -> f64 {
        self.expect_type(FullType::single(Type::Number), "as_float");
        match self.payload {
            Payload::Float(value) => value,
            _ => self.payload_mismatch("as_float"),
        }
    }

    /// The handle name of an `Object`, `Position` or `Action` value.
    #[track_caller]
    pub fn as_handle(&self) -> &str {
        assert!(
            !self.ty.collection && self.ty.ty.is_handle(),
            "as_handle called on a {} value",
            self.ty
        );
        match &self.payload {
            Payload::Handle(handle) => handle.as_str(),
            _ => self.payload_mismatch("as_handle"),
        }
    }

    #[track_caller]
    pub fn as_sequence(&self) -> &[Value] {
        assert!(self.ty.collection, "as_sequence called on a {} value", self.ty);
        match &self.payload {
            Payload::Sequence(items) => items.as_slice(),
            _ => self.payload_mismatch("as_sequence"),
        }
    }

    #[track_caller]
    pub fn error_message(&self) -> &str {
        self.expect_type(FullType::single(Type::Error), "error_message");
        match &self.payload {
            Payload::Handle(message) => message.as_str(),
            _ => self.payload_mismatch("error_message"),
        }
    }

    #[track_caller]
    fn expect_type(&self, expected: FullType, accessor: &str) {
        assert!(
            self.ty == expected,
            "{} called on a {} value (expected {})",
            accessor,
            self.ty,
            expected
        );
    }

    #[track_caller]
    fn payload_mismatch(&self, accessor: &str) -> ! {
        panic!("{} called on a {} value holding {:?}", accessor, self.ty, self.payload)
    }
}

impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.is_error() {
            return write!(f, "error({})", self.error_message());
        }
        match &self.payload {
            Payload::Bool(value) => write!(f, "{}", value),
            Payload::Int(value) => write!(f, "{}", value),
            Payload::Float(value) => write!(f, "{}", value),
            Payload::Handle(handle) => write!(f, "{}", handle),
            Payload::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
