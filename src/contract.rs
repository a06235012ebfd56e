//! Argument-shape preconditions.
//!
//! Every operator consults the relevant checks here before doing any work,
//! so a contract violation aborts the call before any side effect. The
//! checks are deliberately shallow: they look at the value's shape, never
//! at its contents.

use crate::callable::Callable;
use crate::error::{Error, Result};
use crate::seq::Seq;
use crate::value::Value;

/// Requires a sequence value.
///
/// # Errors
///
/// [`Error::NotASequence`] otherwise.
pub fn assert_sequence(value: &Value) -> Result<&Seq> {
    match value {
        Value::Seq(seq) => Ok(seq),
        _ => Err(Error::NotASequence),
    }
}

/// Requires a callable value.
///
/// # Errors
///
/// [`Error::NotInvokable`] otherwise.
pub fn assert_invokable(value: &Value) -> Result<&Callable> {
    match value {
        Value::Fun(callable) => Ok(callable),
        _ => Err(Error::NotInvokable),
    }
}

/// Requires a number and returns its float reading.
///
/// # Errors
///
/// [`Error::NotANumber`] otherwise.
pub fn assert_number(value: &Value) -> Result<f64> {
    value.as_number().ok_or(Error::NotANumber)
}

/// Requires an integer.
///
/// # Errors
///
/// [`Error::NotAnInteger`] otherwise.
pub fn assert_integer(value: &Value) -> Result<i64> {
    match value {
        Value::Int(number) => Ok(*number),
        _ => Err(Error::NotAnInteger),
    }
}

/// Requires a non-zero number, as a divisor.
///
/// # Errors
///
/// [`Error::NotANumber`] for non-numbers, [`Error::ZeroDivision`] for zero.
pub fn assert_non_zero(value: &Value) -> Result<f64> {
    let number = assert_number(value)?;
    if number == 0.0 {
        Err(Error::ZeroDivision)
    } else {
        Ok(number)
    }
}

/// Requires a string.
///
/// # Errors
///
/// [`Error::NotAString`] otherwise.
pub fn assert_string(value: &Value) -> Result<&str> {
    match value {
        Value::Str(text) => Ok(text),
        _ => Err(Error::NotAString),
    }
}

/// Requires a non-negative integer usable as a position.
///
/// # Errors
///
/// [`Error::NotAnInteger`] for non-integers, [`Error::NotPositive`] for
/// negative ones.
pub fn assert_index(value: &Value) -> Result<usize> {
    let number = assert_integer(value)?;
    usize::try_from(number).map_err(|_| Error::NotPositive)
}

/// Requires a strictly positive integer, as a modulus.
///
/// # Errors
///
/// [`Error::NotAnInteger`] for non-integers, [`Error::NotPositive`] for
/// anything below one.
pub fn assert_positive_integer(value: &Value) -> Result<i64> {
    let number = assert_integer(value)?;
    if number < 1 {
        Err(Error::NotPositive)
    } else {
        Ok(number)
    }
}
