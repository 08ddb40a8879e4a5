//! # Dynamic Value Module
//!
//! A small runtime value type whose concrete variant is only known at
//! runtime, together with checked conversions out of it.
//!
//! The conversions come in two flavors:
//!
//! - **Optional**: [`Value::as_text`] / [`Value::into_text`] yield `None`
//!   when the runtime variant does not match, mirroring a safe cast
//!   (`as?` in Kotlin, `as?` in Swift).
//! - **Fallible**: `TryFrom<Value> for String` yields a [`CastError`]
//!   naming the offending runtime type, for callers that want to report
//!   the mismatch rather than swallow it.
//!
//! Neither flavor ever panics on a mismatch.
//!
//! ## Example
//!
//! ```rust
//! use nullsafe::value::Value;
//!
//! let v = Value::List(vec![Value::Int(1), Value::Int(2)]);
//! assert_eq!(v.as_text(), None);
//! assert_eq!(Value::Text("hi".into()).as_text(), Some("hi"));
//! ```

use std::fmt;
use thiserror::Error;

/// Error produced when a fallible conversion out of a [`Value`] is asked
/// to produce a type the runtime variant cannot supply.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CastError {
    #[error("cannot cast value of runtime type {found} to {target}")]
    TypeMismatch {
        found: &'static str,
        target: &'static str,
    },
}

/// A runtime value of dynamic type.
///
/// Declared broadly enough to hold any of the supported shapes; the actual
/// variant is only discoverable by inspection at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// Boolean value
    Bool(bool),
    /// Owned text
    Text(String),
    /// Heterogeneous list of values
    List(Vec<Value>),
}

impl Value {
    /// Returns the name of this value's runtime type.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Text(_) => "Text",
            Value::List(_) => "List",
        }
    }

    /// Returns `true` if the runtime variant is [`Value::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Checked conversion to text, by reference.
    ///
    /// Yields `Some` only when the runtime variant is [`Value::Text`];
    /// every other variant yields `None`. A mismatch is not an error.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Checked conversion to text, by value.
    ///
    /// The owning counterpart of [`Value::as_text`]: the original value is
    /// consumed, and a mismatch yields `None` with nothing partial left
    /// behind.
    pub fn into_text(self) -> Option<String> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = CastError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let found = value.type_name();
        value.into_text().ok_or(CastError::TypeMismatch {
            found,
            target: "Text",
        })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Text(s) => write!(f, "{}", s),
            Value::List(items) => {
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
