//! `Value` error definitions.
use crate::value::{Value, ValueIndex};
use thiserror::Error;

/// Type error.
#[derive(Debug, Error)]
#[error("Expected {expected:?} but found {found:?}")]
pub struct TypeError {
    /// The expected type.
    pub expected: TypeErrorType,
    /// The actual type.
    pub found: TypeErrorType,
}

impl TypeError {
    /// Creates a new type error.
    pub fn new<A: Into<TypeErrorType>, B: Into<TypeErrorType>>(expected: A, found: B) -> Self {
        Self {
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// Type error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeErrorType {
    /// Null type.
    Null,
    /// Undefined type.
    Undefined,
    /// Boolean type.
    Bool,
    /// Integer type.
    Integer,
    /// Float type.
    Float,
    /// String type.
    String,
    /// Bytes type.
    Bytes,
    /// List type.
    List,
    /// Map type.
    Map,
    /// Link type.
    Link,
    /// Tag type.
    Tag(u64),
    /// Simple value type.
    Simple,
    /// Key type.
    Key(String),
    /// Index type.
    Index(usize),
}

impl From<&Value> for TypeErrorType {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Undefined => Self::Undefined,
            Value::Bool(_) => Self::Bool,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::String(_) => Self::String,
            Value::Bytes(_) => Self::Bytes,
            Value::List(_) => Self::List,
            Value::Map(_) => Self::Map,
            Value::Link(_) => Self::Link,
            Value::Tag(tag, _) => Self::Tag(*tag),
            Value::Simple(_) => Self::Simple,
        }
    }
}

impl From<ValueIndex<'_>> for TypeErrorType {
    fn from(index: ValueIndex<'_>) -> Self {
        match index {
            ValueIndex::List(i) => Self::Index(i),
            ValueIndex::Map(s) => Self::Key(s),
            ValueIndex::MapRef(s) => Self::Key(s.into()),
        }
    }
}
