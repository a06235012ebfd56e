//! Truthiness combinators and strict equality.

use crate::contract::{assert_invokable, assert_sequence};
use crate::error::Result;
use crate::value::Value;

/// Logical AND over truthiness, curried.
///
/// # Errors
///
/// Never fails; the `Result` keeps the operator surface uniform.
pub fn and_also(first: &Value, second: &Value) -> Result<Value> {
    Ok(Value::Bool(first.is_truthy() && second.is_truthy()))
}

/// Whether every predicate in the sequence accepts the value. Drains the
/// predicate list, breaking early on the first rejection.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence predicate list and
/// [`Error::NotInvokable`](crate::Error::NotInvokable) for a non-callable
/// entry; predicate failures propagate.
pub fn all_pass(predicates: &Value, value: &Value) -> Result<Value> {
    let source = assert_sequence(predicates)?;
    for pair in source.iter() {
        let predicate = pair?.value;
        if !predicate.call(&[value.clone()])?.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

/// Strict equality, curried. Variants never cross-compare.
///
/// # Errors
///
/// Never fails; the `Result` keeps the operator surface uniform.
pub fn eq(first: &Value, second: &Value) -> Result<Value> {
    Ok(Value::Bool(first == second))
}

/// Whether `f` maps both values to the same (strictly equal) result.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`](crate::Error::NotInvokable) for a
/// non-callable function; its failures propagate.
pub fn eq_by(function: &Value, first: &Value, second: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let left = function.invoke(&[first.clone()])?;
    let right = function.invoke(&[second.clone()])?;
    Ok(Value::Bool(left == right))
}
