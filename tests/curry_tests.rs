//! Integration tests for the curry engine.
//!
//! Covers curry totality: full, partial, and over-supplied invocation all
//! reach the same underlying function, and the failure modes are exactly
//! the zero-argument call and the unsupported arity.

use ramdars::Error;
use ramdars::curry::{curry2, curry3, curry_n};
use ramdars::value::Value;

fn sum2(arguments: &[Value]) -> ramdars::Result<Value> {
    match (&arguments[0], &arguments[1]) {
        (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
        _ => Err(Error::NotANumber),
    }
}

fn sum3(arguments: &[Value]) -> ramdars::Result<Value> {
    match (&arguments[0], &arguments[1], &arguments[2]) {
        (Value::Int(first), Value::Int(second), Value::Int(third)) => {
            Ok(Value::Int(first + second + third))
        }
        _ => Err(Error::NotANumber),
    }
}

#[test]
fn test_curry2_totality() {
    let curried = curry2(&Value::function("sum2", 2, sum2)).expect("invokable");

    let one_then_one = curried
        .call(&[Value::Int(3)])
        .expect("partial")
        .call(&[Value::Int(5)])
        .expect("full");
    let both_at_once = curried
        .call(&[Value::Int(3), Value::Int(5)])
        .expect("full");
    let over_supplied = curried
        .call(&[Value::Int(3), Value::Int(5), Value::Int(7), Value::Int(9)])
        .expect("extras dropped");

    assert_eq!(one_then_one, Value::Int(8));
    assert_eq!(both_at_once, Value::Int(8));
    assert_eq!(over_supplied, Value::Int(8));
}

#[test]
fn test_curry2_partial_is_immutable_and_reusable() {
    let curried = curry2(&Value::function("sum2", 2, sum2)).expect("invokable");
    let add_five = curried.call(&[Value::Int(5)]).expect("partial");

    assert_eq!(add_five.call(&[Value::Int(3)]), Ok(Value::Int(8)));
    assert_eq!(add_five.call(&[Value::Int(10)]), Ok(Value::Int(15)));
    // The original curried function is untouched by partial application.
    assert_eq!(
        curried.call(&[Value::Int(1), Value::Int(1)]),
        Ok(Value::Int(2))
    );
}

#[test]
fn test_curry3_every_application_shape() {
    let curried = curry3(&Value::function("sum3", 3, sum3)).expect("invokable");

    let stepwise = curried
        .call(&[Value::Int(5)])
        .expect("one bound")
        .call(&[Value::Int(10)])
        .expect("two bound")
        .call(&[Value::Int(-4)])
        .expect("full");
    assert_eq!(stepwise, Value::Int(11));

    let two_then_one = curried
        .call(&[Value::Int(5), Value::Int(10)])
        .expect("two bound")
        .call(&[Value::Int(-4)])
        .expect("full");
    assert_eq!(two_then_one, Value::Int(11));

    let one_then_two = curried
        .call(&[Value::Int(5)])
        .expect("one bound")
        .call(&[Value::Int(10), Value::Int(-4)])
        .expect("full");
    assert_eq!(one_then_two, Value::Int(11));

    assert_eq!(
        curried.call(&[Value::Int(5), Value::Int(10), Value::Int(-4)]),
        Ok(Value::Int(11))
    );
}

#[test]
fn test_zero_argument_call_is_an_arity_error() {
    let curried = curry2(&Value::function("sum2", 2, sum2)).expect("invokable");
    assert_eq!(curried.call(&[]), Err(Error::Arity));

    let partial = curried.call(&[Value::Int(1)]).expect("partial");
    assert_eq!(partial.call(&[]), Err(Error::Arity));
}

#[test]
fn test_curry_n_dispatches_and_rejects() {
    let function = Value::function("sum2", 2, sum2);
    assert!(curry_n(2, &function).is_ok());
    assert!(curry_n(3, &function).is_ok());
    assert_eq!(curry_n(1, &function), Err(Error::UnsupportedArity(1)));
    assert_eq!(curry_n(4, &function), Err(Error::UnsupportedArity(4)));
}

#[test]
fn test_currying_a_closure_value() {
    let concat = Value::closure(|arguments: &[Value]| match (&arguments[0], &arguments[1]) {
        (Value::Str(left), Value::Str(right)) => Ok(Value::Str(format!("{left}{right}"))),
        _ => Err(Error::NotAString),
    });
    let curried = curry2(&concat).expect("invokable");
    let hello = curried.call(&[Value::from("Hello, ")]).expect("partial");
    assert_eq!(
        hello.call(&[Value::from("World")]),
        Ok(Value::from("Hello, World"))
    );
    assert_eq!(
        hello.call(&[Value::from("Rust")]),
        Ok(Value::from("Hello, Rust"))
    );
}

#[test]
fn test_currying_non_invokable_fails() {
    assert_eq!(curry2(&Value::Int(1)), Err(Error::NotInvokable));
    assert_eq!(curry3(&Value::Null), Err(Error::NotInvokable));
}

#[test]
fn test_target_errors_propagate_unchanged() {
    let curried = curry2(&Value::function("sum2", 2, sum2)).expect("invokable");
    assert_eq!(
        curried.call(&[Value::Int(1), Value::from("two")]),
        Err(Error::NotANumber)
    );
}
