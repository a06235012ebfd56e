//! Callable representations behind a single invoke capability.
//!
//! Instead of host-language reflection, the toolkit models callables as a
//! small closed set of representations, each carrying whatever arity
//! information it can honestly declare:
//!
//! - [`Callable::Named`]: a named free function with a known arity;
//! - [`Callable::Closure`]: a plain function object, variadic unless an
//!   arity is declared;
//! - [`Callable::Curried`]: a product of the [curry engine](crate::curry).
//!
//! Arity discovery is an explicit capability: [`Callable::arity`] returns
//! `None` when the callable cannot be introspected, and combinators that
//! need the arity (such as [`flip`](crate::combinator::flip) without an
//! explicit one) turn that `None` into [`Error::ArityDiscovery`].

use std::fmt;
use std::rc::Rc;

use crate::curry::Curried;
use crate::error::Result;
use crate::value::Value;

/// The signature of a named free function over the value model.
pub type NativeFn = fn(&[Value]) -> Result<Value>;

/// A callable value.
#[derive(Clone)]
pub enum Callable {
    /// A named free function with a declared arity.
    Named {
        /// The function's name, kept for diagnostics.
        name: &'static str,
        /// How many positional parameters the function declares.
        arity: usize,
        /// The function itself.
        run: NativeFn,
    },
    /// A plain function object. `arity` is `None` for variadic closures,
    /// which makes their arity undiscoverable.
    Closure {
        /// Declared parameter count, if any.
        arity: Option<usize>,
        /// The function object.
        run: Rc<dyn Fn(&[Value]) -> Result<Value>>,
    },
    /// A curried function produced by the curry engine. Boxed to break the
    /// `Value` -> `Callable` -> `Curried` -> `Value` layout cycle.
    Curried(Box<Curried>),
}

impl Callable {
    /// Wraps a named free function.
    pub fn named(name: &'static str, arity: usize, run: NativeFn) -> Self {
        Self::Named { name, arity, run }
    }

    /// Wraps a function object, optionally declaring its arity.
    pub fn closure<F>(arity: Option<usize>, run: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self::Closure {
            arity,
            run: Rc::new(run),
        }
    }

    /// The callable's name, when it has one.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Named { name, .. } => Some(name),
            Self::Closure { .. } => None,
            Self::Curried(curried) => curried.name(),
        }
    }

    /// How many positional parameters the callable declares, when that is
    /// discoverable. For a curried function this is the number of arguments
    /// still missing.
    pub fn arity(&self) -> Option<usize> {
        match self {
            Self::Named { arity, .. } => Some(*arity),
            Self::Closure { arity, .. } => *arity,
            Self::Curried(curried) => Some(curried.remaining()),
        }
    }

    /// Invokes the callable with the given arguments.
    ///
    /// Named functions and closures receive the arguments verbatim; a
    /// curried callable applies its partial-application rules and may hand
    /// back a narrower function instead of a final result.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying function raises.
    pub fn invoke(&self, arguments: &[Value]) -> Result<Value> {
        match self {
            Self::Named { run, .. } => run(arguments),
            Self::Closure { run, .. } => run(arguments),
            Self::Curried(curried) => curried.call(arguments),
        }
    }
}

impl PartialEq for Callable {
    /// Identity comparison: two callables are equal only when they are the
    /// same function object (or the same named function at the same arity).
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Named {
                    name: left_name,
                    arity: left_arity,
                    run: left_run,
                },
                Self::Named {
                    name: right_name,
                    arity: right_arity,
                    run: right_run,
                },
            ) => {
                left_name == right_name
                    && left_arity == right_arity
                    && std::ptr::fn_addr_eq(*left_run, *right_run)
            }
            (Self::Closure { run: left, .. }, Self::Closure { run: right, .. }) => {
                Rc::ptr_eq(left, right)
            }
            (Self::Curried(left), Self::Curried(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named { name, arity, .. } => write!(formatter, "Named({name}/{arity})"),
            Self::Closure {
                arity: Some(arity), ..
            } => write!(formatter, "Closure(/{arity})"),
            Self::Closure { arity: None, .. } => formatter.write_str("Closure(variadic)"),
            Self::Curried(curried) => curried.fmt(formatter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rstest::rstest;

    fn first(arguments: &[Value]) -> Result<Value> {
        Ok(arguments.first().cloned().unwrap_or(Value::Null))
    }

    #[rstest]
    fn test_named_invoke_and_arity() {
        let callable = Callable::named("first", 1, first);
        assert_eq!(callable.arity(), Some(1));
        assert_eq!(callable.invoke(&[Value::Int(7)]), Ok(Value::Int(7)));
    }

    #[rstest]
    fn test_variadic_closure_has_no_discoverable_arity() {
        let callable = Callable::closure(None, |arguments: &[Value]| {
            Ok(Value::Int(arguments.len() as i64))
        });
        assert_eq!(callable.arity(), None);
        assert_eq!(
            callable.invoke(&[Value::Null, Value::Null]),
            Ok(Value::Int(2))
        );
    }

    #[rstest]
    fn test_equality_is_identity() {
        let left = Callable::closure(None, |_: &[Value]| Ok(Value::Null));
        let right = Callable::closure(None, |_: &[Value]| Ok(Value::Null));
        assert_ne!(left, right);
        assert_eq!(left.clone(), left);
    }

    #[rstest]
    fn test_invoke_propagates_errors() {
        let callable = Callable::closure(Some(1), |_: &[Value]| Err(Error::NotANumber));
        assert_eq!(callable.invoke(&[Value::Null]), Err(Error::NotANumber));
    }
}
