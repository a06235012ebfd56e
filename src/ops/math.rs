//! Curried arithmetic and numeric comparisons.
//!
//! Integer arithmetic stays in `Int` while it can: an operation on two
//! integers that overflows promotes to `Float` instead of wrapping or
//! panicking, and `divide` keeps exact integer quotients integral.

use std::cmp::Ordering;

use crate::contract::{
    assert_integer, assert_invokable, assert_non_zero, assert_number, assert_positive_integer,
    assert_sequence,
};
use crate::error::{Error, Result};
use crate::value::Value;

/// `a + b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
#[allow(clippy::cast_precision_loss)]
pub fn add(first: &Value, second: &Value) -> Result<Value> {
    match (first, second) {
        (Value::Int(left), Value::Int(right)) => Ok(left
            .checked_add(*right)
            .map_or(Value::Float(*left as f64 + *right as f64), Value::Int)),
        _ => Ok(Value::Float(assert_number(first)? + assert_number(second)?)),
    }
}

/// `a - b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
#[allow(clippy::cast_precision_loss)]
pub fn subtract(first: &Value, second: &Value) -> Result<Value> {
    match (first, second) {
        (Value::Int(left), Value::Int(right)) => Ok(left
            .checked_sub(*right)
            .map_or(Value::Float(*left as f64 - *right as f64), Value::Int)),
        _ => Ok(Value::Float(assert_number(first)? - assert_number(second)?)),
    }
}

/// `a * b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
#[allow(clippy::cast_precision_loss)]
pub fn multiply(first: &Value, second: &Value) -> Result<Value> {
    match (first, second) {
        (Value::Int(left), Value::Int(right)) => Ok(left
            .checked_mul(*right)
            .map_or(Value::Float(*left as f64 * *right as f64), Value::Int)),
        _ => Ok(Value::Float(assert_number(first)? * assert_number(second)?)),
    }
}

/// `a / b`, curried. An exact integer quotient stays integral.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments and
/// [`Error::ZeroDivision`] for a zero divisor.
pub fn divide(first: &Value, second: &Value) -> Result<Value> {
    let numerator = assert_number(first)?;
    let denominator = assert_non_zero(second)?;
    match (first, second) {
        (Value::Int(left), Value::Int(right)) if left % right == 0 => Ok(Value::Int(left / right)),
        _ => Ok(Value::Float(numerator / denominator)),
    }
}

/// `a % b` with the host language's sign behavior; see [`math_mod`] for
/// the mathematical one.
///
/// # Errors
///
/// Fails with [`Error::NotAnInteger`] for non-integers and
/// [`Error::ZeroDivision`] for a zero modulus.
pub fn modulo(first: &Value, second: &Value) -> Result<Value> {
    let left = assert_integer(first)?;
    let right = assert_integer(second)?;
    if right == 0 {
        return Err(Error::ZeroDivision);
    }
    Ok(Value::Int(left % right))
}

/// The mathematical modulus: `math_mod(-17, 5)` is `3`, not `-2`.
///
/// # Errors
///
/// Fails with [`Error::NotAnInteger`] for non-integers and
/// [`Error::NotPositive`] for a modulus below one.
pub fn math_mod(first: &Value, second: &Value) -> Result<Value> {
    let left = assert_integer(first)?;
    let right = assert_positive_integer(second)?;
    Ok(Value::Int(((left % right) + right) % right))
}

/// `a + 1`.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for a non-numeric argument.
pub fn inc(value: &Value) -> Result<Value> {
    add(value, &Value::Int(1))
}

/// `a - 1`.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for a non-numeric argument.
pub fn dec(value: &Value) -> Result<Value> {
    subtract(value, &Value::Int(1))
}

/// `-a`.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for a non-numeric argument.
#[allow(clippy::cast_precision_loss)]
pub fn negate(value: &Value) -> Result<Value> {
    match value {
        Value::Int(number) => Ok(number
            .checked_neg()
            .map_or(Value::Float(-(*number as f64)), Value::Int)),
        Value::Float(number) => Ok(Value::Float(-number)),
        _ => Err(Error::NotANumber),
    }
}

/// Adds together all elements; `0` for an empty sequence. Drains.
///
/// # Errors
///
/// Shape violations and non-numeric elements propagate.
pub fn sum(list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut total = Value::Int(0);
    for pair in source.iter() {
        total = add(&total, &pair?.value)?;
    }
    Ok(total)
}

/// Multiplies together all elements; `1` for an empty sequence. Drains.
///
/// # Errors
///
/// Shape violations and non-numeric elements propagate.
pub fn product(list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut total = Value::Int(1);
    for pair in source.iter() {
        total = multiply(&total, &pair?.value)?;
    }
    Ok(total)
}

/// The largest element by loose comparison, or `Null` for an empty
/// sequence. Incomparable elements are skipped.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn max(list: &Value) -> Result<Value> {
    scan_extreme(list, Ordering::Greater)
}

/// The smallest element by loose comparison, or `Null` for an empty
/// sequence.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn min(list: &Value) -> Result<Value> {
    scan_extreme(list, Ordering::Less)
}

/// The greatest element as judged by the comparator: `f(candidate,
/// current)` truthy means the candidate wins. `Null` for an empty
/// sequence.
///
/// # Errors
///
/// Shape violations and comparator failures propagate.
pub fn max_by(comparator: &Value, list: &Value) -> Result<Value> {
    let comparator = assert_invokable(comparator)?;
    let source = assert_sequence(list)?;
    let mut best: Option<Value> = None;
    for pair in source.iter() {
        let candidate = pair?.value;
        best = match best {
            None => Some(candidate),
            Some(current) => {
                if comparator
                    .invoke(&[candidate.clone(), current.clone()])?
                    .is_truthy()
                {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }
    Ok(best.unwrap_or(Value::Null))
}

/// The smallest element as judged by the comparator; the mirror of
/// [`max_by`].
///
/// # Errors
///
/// Shape violations and comparator failures propagate.
pub fn min_by(comparator: &Value, list: &Value) -> Result<Value> {
    let comparator = assert_invokable(comparator)?;
    let source = assert_sequence(list)?;
    let mut best: Option<Value> = None;
    for pair in source.iter() {
        let candidate = pair?.value;
        best = match best {
            None => Some(candidate),
            Some(current) => {
                if comparator
                    .invoke(&[candidate.clone(), current.clone()])?
                    .is_truthy()
                {
                    Some(current)
                } else {
                    Some(candidate)
                }
            }
        };
    }
    Ok(best.unwrap_or(Value::Null))
}

/// `a > b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
pub fn gt(first: &Value, second: &Value) -> Result<Value> {
    compare(first, second, |ordering| ordering == Ordering::Greater)
}

/// `a >= b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
pub fn gte(first: &Value, second: &Value) -> Result<Value> {
    compare(first, second, |ordering| ordering != Ordering::Less)
}

/// `a < b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
pub fn lt(first: &Value, second: &Value) -> Result<Value> {
    compare(first, second, |ordering| ordering == Ordering::Less)
}

/// `a <= b`, curried.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`] for non-numeric arguments.
pub fn lte(first: &Value, second: &Value) -> Result<Value> {
    compare(first, second, |ordering| ordering != Ordering::Greater)
}

fn compare(first: &Value, second: &Value, accept: fn(Ordering) -> bool) -> Result<Value> {
    let left = assert_number(first)?;
    let right = assert_number(second)?;
    // NaN compares as not-accepted for every relation.
    Ok(Value::Bool(
        left.partial_cmp(&right).is_some_and(accept),
    ))
}

fn scan_extreme(list: &Value, wanted: Ordering) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut best: Option<Value> = None;
    for pair in source.iter() {
        let candidate = pair?.value;
        best = match best {
            None => Some(candidate),
            Some(current) => {
                if candidate.loose_cmp(&current) == Some(wanted) {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }
    Ok(best.unwrap_or(Value::Null))
}
