use core::fmt::Display;

/// Kinds of values a rule program manipulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Type {
    /// Evaluation failure carried as data (e.g. the recursion guard tripping).
    Error = 0,
    Boolean = 1,
    Number = 2,

    // Opaque game handles.
    Object = 3,
    Position = 4,
    Action = 5,
}

impl Type {
    /// Returns true for the kinds whose values are opaque handles.
    pub fn is_handle(&self) -> bool {
        matches!(self, Type::Object | Type::Position | Type::Action)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Type::Error => "Error",
            Type::Boolean => "Boolean",
            Type::Number => "Number",
            Type::Object => "Object",
            Type::Position => "Position",
            Type::Action => "Action",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// A [`Type`] together with the collection modifier.
///
/// This is the complete type annotation of references and values; there is
/// no nesting, a collection always holds single values of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FullType {
    pub ty: Type,
    pub collection: bool,
}

impl FullType {
    pub const fn new(ty: Type, collection: bool) -> Self {
        FullType { ty, collection }
    }

    pub const fn single(ty: Type) -> Self {
        FullType::new(ty, false)
    }

    pub const fn collection(ty: Type) -> Self {
        FullType::new(ty, true)
    }

    /// The type of the elements of this collection type (or the type itself
    /// when it is not a collection).
    pub const fn element(&self) -> Self {
        FullType::single(self.ty)
    }

    pub const fn collection_of(&self) -> Self {
        FullType::collection(self.ty)
    }

    pub fn is_error(&self) -> bool {
        self.ty == Type::Error && !self.collection
    }
}

impl From<Type> for FullType {
    fn from(ty: Type) -> Self {
        FullType::single(ty)
    }
}

impl Display for FullType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.ty)?;
        if self.collection {
            write!(f, "s")?;
        }
        Ok(())
    }
}
