use core::fmt;

use ecow::EcoString;

use crate::{
    types::{FullType, Type},
    values::Value,
};

/// Handle to a [`Reference`] stored in a [`Program`](super::Program).
///
/// Two references with the same name are different slots: frames are keyed by
/// this id, never by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceId(pub(crate) u32);

impl ReferenceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A named, typed slot (parameter or local) or an inline literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub name: EcoString,
    pub ty: FullType,
    pub literal: bool,
}

impl Reference {
    pub fn variable(name: impl Into<EcoString>, ty: FullType) -> Self {
        Reference {
            name: name.into(),
            ty,
            literal: false,
        }
    }

    pub fn literal(name: impl Into<EcoString>, ty: FullType) -> Self {
        Reference {
            name: name.into(),
            ty,
            literal: true,
        }
    }

    /// Resolve a literal reference from its name and type.
    ///
    /// Collection literals always denote the empty sequence: there is no
    /// syntax for non-empty sequence literals.
    pub fn as_literal(&self) -> Result<Value, LiteralError> {
        if !self.literal {
            return Err(LiteralError::NotLiteral {
                name: self.name.clone(),
            });
        }

        if self.ty.collection {
            return Ok(Value::empty(self.ty));
        }

        match self.ty.ty {
            Type::Number => self
                .name
                .parse::<i64>()
                .map(Value::int)
                .map_err(|_| LiteralError::InvalidNumber {
                    name: self.name.clone(),
                }),
            Type::Boolean => match self.name.as_str() {
                "true" => Ok(Value::bool(true)),
                "false" => Ok(Value::bool(false)),
                _ => Err(LiteralError::InvalidBoolean {
                    name: self.name.clone(),
                }),
            },
            Type::Error | Type::Object | Type::Position | Type::Action => {
                Err(LiteralError::Unsupported {
                    name: self.name.clone(),
                    ty: self.ty,
                })
            }
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

/// Failure to resolve a literal reference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    #[error("`{name}` is not a literal")]
    NotLiteral { name: EcoString },

    #[error("`{name}` is not a valid Number literal")]
    InvalidNumber { name: EcoString },

    #[error("`{name}` is not a valid Boolean literal (expected `true` or `false`)")]
    InvalidBoolean { name: EcoString },

    #[error("{ty} literals are not supported (`{name}`)")]
    Unsupported { name: EcoString, ty: FullType },
}
