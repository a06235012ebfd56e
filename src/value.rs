//! The dynamic value model shared by every operator.
//!
//! The operator surface of this crate is deliberately dynamic: a curried
//! operator can be invoked with one, two, or too many arguments, sequences
//! mix positional and named keys, and `flatten` descends into nested
//! sequences of unknown depth. [`Value`] is the small closed universe those
//! operators agree on.
//!
//! # Equality
//!
//! Equality is strict: variants never cross-compare, so `Int(1)` and
//! `Float(1.0)` are different values. Materialized sequences compare
//! pairwise; lazy sequences and functions compare by handle identity only.
//!
//! # Examples
//!
//! ```rust
//! use ramdars::value::Value;
//!
//! assert_eq!(Value::from(3), Value::Int(3));
//! assert_ne!(Value::Int(1), Value::Float(1.0));
//! assert!(Value::Str("x".into()).is_truthy());
//! assert!(!Value::Null.is_truthy());
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::callable::Callable;
use crate::error::{Error, Result};
use crate::seq::Seq;

/// A value flowing through the toolkit.
#[derive(Clone, Debug)]
pub enum Value {
    /// The absent value; also what `head` of an empty sequence returns.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// An owned string.
    Str(String),
    /// A sequence handle, materialized or lazy.
    Seq(Seq),
    /// A callable value.
    Fun(Callable),
}

impl Value {
    /// A short tag for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Seq(_) => "sequence",
            Self::Fun(_) => "function",
        }
    }

    /// Truthiness as consulted by the predicate-driven operators.
    ///
    /// `Null`, `false`, `0`, `0.0`, the empty string, and empty materialized
    /// sequences are falsy. A lazy sequence is truthy without being forced;
    /// deciding otherwise would consume it.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => *number != 0.0,
            Self::Str(text) => !text.is_empty(),
            Self::Seq(seq) => seq.known_len().is_none_or(|length| length > 0),
            Self::Fun(_) => true,
        }
    }

    /// Whether the value is an `Int` or a `Float`.
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// The numeric reading of the value, when it has one.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(number) => Some(*number as f64),
            Self::Float(number) => Some(*number),
            _ => None,
        }
    }

    /// Borrows the sequence inside a `Seq` value.
    pub fn as_seq(&self) -> Option<&Seq> {
        match self {
            Self::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    /// Borrows the callable inside a `Fun` value.
    pub fn as_fun(&self) -> Option<&Callable> {
        match self {
            Self::Fun(callable) => Some(callable),
            _ => None,
        }
    }

    /// Invokes a `Fun` value with the given arguments.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::NotInvokable`] for every other variant, and
    /// propagates whatever the callable itself raises.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        match self {
            Self::Fun(callable) => callable.invoke(arguments),
            _ => Err(Error::NotInvokable),
        }
    }

    /// Wraps a named free function into a `Fun` value.
    pub fn function(
        name: &'static str,
        arity: usize,
        run: fn(&[Value]) -> Result<Value>,
    ) -> Self {
        Self::Fun(Callable::named(name, arity, run))
    }

    /// Wraps a variadic function object into a `Fun` value.
    pub fn closure<F>(run: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self::Fun(Callable::closure(None, run))
    }

    /// Loose ordering used by the scanning operators (`max`, `min`).
    ///
    /// Integers and floats compare numerically across variants, strings
    /// lexically, booleans as `false < true`. Everything else is
    /// incomparable and yields `None`.
    pub fn loose_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => Some(left.cmp(right)),
            (Self::Str(left), Self::Str(right)) => Some(left.cmp(right)),
            (Self::Bool(left), Self::Bool(right)) => Some(left.cmp(right)),
            _ => match (self.as_number(), other.as_number()) {
                (Some(left), Some(right)) => left.partial_cmp(&right),
                _ => None,
            },
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Seq(left), Self::Seq(right)) => left == right,
            (Self::Fun(left), Self::Fun(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    /// The string coercion used by `join` and by `count_by` group labels.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Str(text) => formatter.write_str(text),
            Self::Seq(seq) => write!(formatter, "{seq:?}"),
            Self::Fun(callable) => write!(formatter, "{callable:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<Seq> for Value {
    fn from(seq: Seq) -> Self {
        Self::Seq(seq)
    }
}

impl From<Callable> for Value {
    fn from(callable: Callable) -> Self {
        Self::Fun(callable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Null, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Int(0), false)]
    #[case(Value::Float(0.0), false)]
    #[case(Value::Str(String::new()), false)]
    #[case(Value::Bool(true), true)]
    #[case(Value::Int(-1), true)]
    #[case(Value::Str("0".into()), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_strict_equality_never_crosses_variants() {
        assert_ne!(Value::Int(1), Value::Float(1.0));
        assert_ne!(Value::Int(0), Value::Bool(false));
        assert_ne!(Value::Str("1".into()), Value::Int(1));
    }

    #[rstest]
    fn test_loose_cmp_crosses_numeric_variants() {
        assert_eq!(
            Value::Int(2).loose_cmp(&Value::Float(1.5)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Str("a".into()).loose_cmp(&Value::Str("b".into())),
            Some(Ordering::Less)
        );
        assert_eq!(Value::Str("a".into()).loose_cmp(&Value::Int(1)), None);
    }

    #[rstest]
    fn test_display_coercion() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::Str("x".into()).to_string(), "x");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[rstest]
    fn test_call_on_non_function_fails() {
        assert_eq!(Value::Int(1).call(&[]), Err(Error::NotInvokable));
    }
}
