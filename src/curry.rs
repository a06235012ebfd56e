//! The curry engine: arity-aware partial application with over-application
//! tolerance.
//!
//! A [`Curried`] wraps a target function of declared arity 2 or 3 together
//! with the leading arguments already bound to it. Invocation follows three
//! rules:
//!
//! 1. zero arguments is a contract violation ([`Error::Arity`]);
//! 2. fewer arguments than are still missing binds them and returns a new,
//!    narrower `Curried`; the original is never mutated;
//! 3. enough (or too many) arguments invokes the target with the bound
//!    prefix followed by exactly the missing arguments; anything beyond the
//!    declared arity is silently dropped.
//!
//! Rule 3 is what lets a curried binary operator be handed to higher-order
//! operators such as [`map`](crate::ops::map) and
//! [`reduce`](crate::ops::reduce), which always supply extra context (the
//! pair's key) that the operator does not want.
//!
//! # Examples
//!
//! ```rust
//! use ramdars::curry::curry2;
//! use ramdars::value::Value;
//!
//! let add = Value::closure(|arguments: &[Value]| {
//!     match (&arguments[0], &arguments[1]) {
//!         (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
//!         _ => Err(ramdars::Error::NotANumber),
//!     }
//! });
//!
//! let curried = curry2(&add)?;
//! let add_five = curried.call(&[Value::Int(5)])?;
//!
//! assert_eq!(add_five.call(&[Value::Int(3)])?, Value::Int(8));
//! assert_eq!(curried.call(&[Value::Int(5), Value::Int(3)])?, Value::Int(8));
//! // Over-application: the trailing argument is dropped.
//! assert_eq!(
//!     curried.call(&[Value::Int(5), Value::Int(3), Value::Int(999)])?,
//!     Value::Int(8)
//! );
//! # Ok::<(), ramdars::Error>(())
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::callable::Callable;
use crate::contract::assert_invokable;
use crate::error::{Error, Result};
use crate::value::Value;

/// The target signature shared by every curried function. The engine
/// guarantees the target is only ever invoked with exactly `arity`
/// arguments.
type Target = Rc<dyn Fn(&[Value]) -> Result<Value>>;

/// An immutable curried function: a declared arity, a target, and zero or
/// more already-bound leading arguments.
#[derive(Clone)]
pub struct Curried {
    name: Option<&'static str>,
    arity: usize,
    bound: SmallVec<[Value; 2]>,
    target: Target,
}

impl Curried {
    fn new(name: Option<&'static str>, arity: usize, target: Target) -> Self {
        Self {
            name,
            arity,
            bound: SmallVec::new(),
            target,
        }
    }

    /// Curries an existing callable at the given arity.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::UnsupportedArity`] outside {2, 3}.
    pub fn over(arity: usize, callable: Callable) -> Result<Self> {
        if !matches!(arity, 2 | 3) {
            return Err(Error::UnsupportedArity(arity));
        }
        let name = callable.name();
        Ok(Self::new(
            name,
            arity,
            Rc::new(move |arguments| callable.invoke(arguments)),
        ))
    }

    /// Lifts a typed binary operator function into curried form.
    pub fn from_fn2(name: &'static str, run: fn(&Value, &Value) -> Result<Value>) -> Self {
        Self::new(
            Some(name),
            2,
            Rc::new(move |arguments| run(&arguments[0], &arguments[1])),
        )
    }

    /// Lifts a typed ternary operator function into curried form.
    pub fn from_fn3(
        name: &'static str,
        run: fn(&Value, &Value, &Value) -> Result<Value>,
    ) -> Self {
        Self::new(
            Some(name),
            3,
            Rc::new(move |arguments| run(&arguments[0], &arguments[1], &arguments[2])),
        )
    }

    /// The name of the underlying function, when known.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// The declared arity of the underlying function.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments are still missing before the target runs.
    pub fn remaining(&self) -> usize {
        self.arity - self.bound.len()
    }

    /// Applies the curried function to `arguments`.
    ///
    /// Returns either the target's result (enough arguments, extras
    /// dropped) or a new `Curried` wrapped as a [`Value::Fun`] (partial
    /// application).
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Arity`] when called with no arguments, and
    /// propagates the target's own failures.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        if arguments.is_empty() {
            return Err(Error::Arity);
        }

        let remaining = self.remaining();
        if arguments.len() < remaining {
            let mut bound = self.bound.clone();
            bound.extend(arguments.iter().cloned());
            return Ok(Value::Fun(Callable::Curried(Box::new(Self {
                name: self.name,
                arity: self.arity,
                bound,
                target: Rc::clone(&self.target),
            }))));
        }

        let mut full: SmallVec<[Value; 3]> = SmallVec::with_capacity(self.arity);
        full.extend(self.bound.iter().cloned());
        full.extend(arguments[..remaining].iter().cloned());
        (self.target)(&full)
    }
}

impl PartialEq for Curried {
    fn eq(&self, other: &Self) -> bool {
        self.arity == other.arity
            && Rc::ptr_eq(&self.target, &other.target)
            && self.bound.as_slice() == other.bound.as_slice()
    }
}

impl fmt::Debug for Curried {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Curried({}/{}, bound: {})",
            self.name.unwrap_or("<anonymous>"),
            self.arity,
            self.bound.len()
        )
    }
}

/// Curries a callable value at arity 2.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] when `function` is not callable.
pub fn curry2(function: &Value) -> Result<Value> {
    curry_n(2, function)
}

/// Curries a callable value at arity 3.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] when `function` is not callable.
pub fn curry3(function: &Value) -> Result<Value> {
    curry_n(3, function)
}

/// Dispatches to the arity-specific currying behavior.
///
/// # Errors
///
/// Fails with [`Error::UnsupportedArity`] for arities outside {2, 3} and
/// with [`Error::NotInvokable`] when `function` is not callable.
pub fn curry_n(arity: usize, function: &Value) -> Result<Value> {
    if !matches!(arity, 2 | 3) {
        return Err(Error::UnsupportedArity(arity));
    }
    let callable = assert_invokable(function)?.clone();
    Ok(Value::Fun(Callable::Curried(Box::new(Curried::over(
        arity, callable,
    )?))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sum2(arguments: &[Value]) -> Result<Value> {
        match (&arguments[0], &arguments[1]) {
            (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
            _ => Err(Error::NotANumber),
        }
    }

    fn sum3(arguments: &[Value]) -> Result<Value> {
        match (&arguments[0], &arguments[1], &arguments[2]) {
            (Value::Int(first), Value::Int(second), Value::Int(third)) => {
                Ok(Value::Int(first + second + third))
            }
            _ => Err(Error::NotANumber),
        }
    }

    fn curried_sum2() -> Value {
        curry2(&Value::function("sum2", 2, sum2)).expect("sum2 is invokable")
    }

    #[rstest]
    fn test_full_application() {
        let curried = curried_sum2();
        assert_eq!(
            curried.call(&[Value::Int(3), Value::Int(5)]),
            Ok(Value::Int(8))
        );
    }

    #[rstest]
    fn test_partial_application_is_reusable() {
        let curried = curried_sum2();
        let add_five = curried.call(&[Value::Int(5)]).expect("partial");
        assert_eq!(add_five.call(&[Value::Int(3)]), Ok(Value::Int(8)));
        assert_eq!(add_five.call(&[Value::Int(10)]), Ok(Value::Int(15)));
    }

    #[rstest]
    fn test_over_application_drops_extras() {
        let curried = curried_sum2();
        assert_eq!(
            curried.call(&[Value::Int(3), Value::Int(5), Value::Int(100), Value::Int(200)]),
            Ok(Value::Int(8))
        );
    }

    #[rstest]
    fn test_zero_arguments_fails() {
        let curried = curried_sum2();
        assert_eq!(curried.call(&[]), Err(Error::Arity));
    }

    #[rstest]
    fn test_curry3_step_by_step() {
        let curried = curry3(&Value::function("sum3", 3, sum3)).expect("invokable");
        let plus_five = curried.call(&[Value::Int(5)]).expect("partial");
        let plus_fifteen = plus_five.call(&[Value::Int(10)]).expect("partial");
        assert_eq!(plus_fifteen.call(&[Value::Int(-4)]), Ok(Value::Int(11)));
        assert_eq!(
            plus_five.call(&[Value::Int(10), Value::Int(-4)]),
            Ok(Value::Int(11))
        );
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(4)]
    fn test_unsupported_arities(#[case] arity: usize) {
        let result = curry_n(arity, &Value::function("sum2", 2, sum2));
        assert_eq!(result, Err(Error::UnsupportedArity(arity)));
    }

    #[rstest]
    fn test_currying_non_function_fails() {
        assert_eq!(curry2(&Value::Int(1)), Err(Error::NotInvokable));
    }
}
