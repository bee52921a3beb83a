//! Conversion of cleaned secret text into typed values.
//!
//! A cast target is anything implementing [`Cast`]. The built-in targets are
//! [`Text`], [`Parse`] for any `FromStr` type, [`Bool`], and the dynamic
//! [`CastTarget`]. Plain closures also work:
//!
//! ```
//! use get_secret::Cast;
//!
//! let port = |v: &str| v.parse::<u16>();
//! assert_eq!(port.cast("5432").unwrap(), 5432);
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::core::constants::TRUE_LITERAL;
use crate::error::BoxError;

/// Strategy converting cleaned text into a `T`.
pub trait Cast<T> {
    /// Convert `value`, or report why it cannot be converted.
    fn cast(&self, value: &str) -> Result<T, BoxError>;
}

impl<T, E, F> Cast<T> for F
where
    F: Fn(&str) -> Result<T, E>,
    E: Into<BoxError>,
{
    fn cast(&self, value: &str) -> Result<T, BoxError> {
        self(value).map_err(Into::into)
    }
}

/// Identity cast to `String`. This is the default target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl Cast<String> for Text {
    fn cast(&self, value: &str) -> Result<String, BoxError> {
        Ok(value.to_string())
    }
}

/// Cast through `T::from_str`.
///
/// Accepts exactly what `FromStr` accepts for `T`. Digit separators
/// (`"1_000"`), surrounding whitespace and, for integers, a decimal point
/// are rejected and fail the cast. Use a closure for looser formats.
pub struct Parse<T>(PhantomData<fn() -> T>);

impl<T> Parse<T> {
    pub fn new() -> Self {
        Parse(PhantomData)
    }
}

impl<T> Default for Parse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Parse<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Parse<T> {}

impl<T> fmt::Debug for Parse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse<{}>", std::any::type_name::<T>())
    }
}

impl<T> Cast<T> for Parse<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn cast(&self, value: &str) -> Result<T, BoxError> {
        value.parse::<T>().map_err(Into::into)
    }
}

/// Shorthand for `Parse::<T>::new()`.
pub fn parse<T>() -> Parse<T> {
    Parse::new()
}

/// Boolean cast.
///
/// `true` only when the value equals `"true"` ignoring case. Every other
/// string, including `"1"`, `"yes"` and `""`, is `false`. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bool;

impl Cast<bool> for Bool {
    fn cast(&self, value: &str) -> Result<bool, BoxError> {
        Ok(value.to_lowercase() == TRUE_LITERAL)
    }
}

/// A cast target chosen at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CastTarget {
    #[default]
    Text,
    Integer,
    Float,
    Boolean,
}

/// Result of casting with a [`CastTarget`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl Cast<Value> for CastTarget {
    fn cast(&self, value: &str) -> Result<Value, BoxError> {
        Ok(match self {
            CastTarget::Text => Value::Text(Text.cast(value)?),
            CastTarget::Integer => Value::Integer(parse::<i64>().cast(value)?),
            CastTarget::Float => Value::Float(parse::<f64>().cast(value)?),
            CastTarget::Boolean => Value::Boolean(Bool.cast(value)?),
        })
    }
}
