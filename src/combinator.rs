//! Combinators: building new functions out of existing ones.
//!
//! Everything here produces or transforms [`Value::Fun`] callables without
//! forcing any sequence: `compose`/`pipe` capture their chain immutably,
//! `flip` re-curries with the first two arguments swapped, `converge` fans
//! arguments out over branch functions, and `trampoline` converts
//! re-entrant self-calls into a queue drained by a single outer loop.
//!
//! # Examples
//!
//! ```rust
//! use ramdars::combinator::{compose, pipe};
//! use ramdars::value::Value;
//!
//! fn double(arguments: &[Value]) -> ramdars::Result<Value> {
//!     match arguments.first() {
//!         Some(Value::Int(number)) => Ok(Value::Int(number * 2)),
//!         _ => Err(ramdars::Error::NotANumber),
//!     }
//! }
//! fn increment(arguments: &[Value]) -> ramdars::Result<Value> {
//!     match arguments.first() {
//!         Some(Value::Int(number)) => Ok(Value::Int(number + 1)),
//!         _ => Err(ramdars::Error::NotANumber),
//!     }
//! }
//!
//! let double = Value::function("double", 1, double);
//! let increment = Value::function("increment", 1, increment);
//!
//! // compose applies right-to-left: increment(double(5)) = 11
//! let composed = compose(&[increment.clone(), double.clone()])?;
//! assert_eq!(composed.call(&[Value::Int(5)])?, Value::Int(11));
//!
//! // pipe reads left-to-right: increment(double(5)) = 11
//! let piped = pipe(&[double, increment])?;
//! assert_eq!(piped.call(&[Value::Int(5)])?, Value::Int(11));
//! # Ok::<(), ramdars::Error>(())
//! ```

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use crate::contract::{assert_invokable, assert_sequence};
use crate::curry::curry_n;
use crate::error::{Error, Result};
use crate::seq::Seq;
use crate::value::Value;

/// Returns its argument unchanged.
///
/// # Errors
///
/// Never fails; the `Result` keeps the operator surface uniform.
pub fn identity(value: &Value) -> Result<Value> {
    Ok(value.clone())
}

/// Right-to-left function composition.
///
/// The rightmost function may take any arity; every other function is
/// applied to exactly one argument. The produced function captures the
/// chain immutably.
///
/// # Errors
///
/// Fails with [`Error::EmptyComposition`] for an empty chain and with
/// [`Error::NotInvokable`] when any link is not callable.
pub fn compose(functions: &[Value]) -> Result<Value> {
    if functions.is_empty() {
        return Err(Error::EmptyComposition);
    }
    let mut chain = Vec::with_capacity(functions.len());
    for function in functions {
        chain.push(assert_invokable(function)?.clone());
    }
    Ok(Value::closure(move |arguments: &[Value]| {
        let mut links = chain.iter().rev();
        let mut result = match links.next() {
            Some(rightmost) => rightmost.invoke(arguments)?,
            None => return Err(Error::EmptyComposition),
        };
        for link in links {
            result = link.invoke(&[result])?;
        }
        Ok(result)
    }))
}

/// Left-to-right function composition; `pipe(&[f, g])` is
/// `compose(&[g, f])`.
///
/// # Errors
///
/// Same surface as [`compose`].
pub fn pipe(functions: &[Value]) -> Result<Value> {
    let reversed: Vec<Value> = functions.iter().rev().cloned().collect();
    compose(&reversed)
}

/// Swaps the first two positional arguments of a callable; any further
/// arguments pass through unchanged. The result is re-curried at the
/// supplied arity, or at the callable's own declared arity when none is
/// given.
///
/// # Errors
///
/// Fails with [`Error::ArityDiscovery`] when no arity is supplied and the
/// callable does not declare one, and with [`Error::UnsupportedArity`] when
/// the arity falls outside the curry engine's {2, 3}.
pub fn flip(function: &Value, arity: Option<usize>) -> Result<Value> {
    let target = assert_invokable(function)?.clone();
    let arity = match arity {
        Some(arity) => arity,
        None => target.arity().ok_or(Error::ArityDiscovery)?,
    };
    let swapped = Value::closure(move |arguments: &[Value]| {
        let mut reordered = arguments.to_vec();
        if reordered.len() >= 2 {
            reordered.swap(0, 1);
        }
        target.invoke(&reordered)
    });
    curry_n(arity, &swapped)
}

/// Builds a function that applies every branch to the incoming arguments
/// and feeds the ordered branch results to the converging function.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] for a non-callable convergent or
/// branch, and with [`Error::NotASequence`] when `branches` is not a
/// sequence. Draining a lazy branch list happens here, once.
pub fn converge(convergent: &Value, branches: &Value) -> Result<Value> {
    let convergent = assert_invokable(convergent)?.clone();
    let mut branch_functions = Vec::new();
    for value in assert_sequence(branches)?.to_values()? {
        branch_functions.push(assert_invokable(&value)?.clone());
    }
    Ok(Value::closure(move |arguments: &[Value]| {
        let mut results = Vec::with_capacity(branch_functions.len());
        for branch in &branch_functions {
            results.push(branch.invoke(arguments)?);
        }
        convergent.invoke(&results)
    }))
}

/// Invokes a callable with a sequence's values as its argument list.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] / [`Error::NotASequence`] on shape
/// violations and propagates the callable's own failures.
pub fn apply(function: &Value, arguments: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let arguments = assert_sequence(arguments)?.to_values()?;
    function.invoke(&arguments)
}

/// Wraps a callable that expects a single sequence argument into a
/// variadic one that packs its arguments into a sequence.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] when `function` is not callable.
pub fn unapply(function: &Value) -> Result<Value> {
    let target = assert_invokable(function)?.clone();
    Ok(Value::closure(move |arguments: &[Value]| {
        let packed = Seq::from_values(arguments.iter().cloned());
        target.invoke(&[Value::Seq(packed)])
    }))
}

/// Wraps a callable so it receives exactly one argument: extras are
/// dropped, a missing argument becomes `Null`.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] when `function` is not callable.
pub fn unary(function: &Value) -> Result<Value> {
    let target = assert_invokable(function)?.clone();
    Ok(Value::closure(move |arguments: &[Value]| {
        let first = arguments.first().cloned().unwrap_or(Value::Null);
        target.invoke(&[first])
    }))
}

/// Converts re-entrant self-recursion into iteration.
///
/// The returned callable enqueues every call's arguments. The first,
/// outermost call drains the queue in a loop, invoking the wrapped function
/// once per entry; a re-entrant call made while the drain is in progress
/// only enqueues and returns `Null` immediately. The outermost call returns
/// the result of the *last* queued call, so a self-recursive call pattern
/// runs in constant stack depth.
///
/// # Errors
///
/// Fails with [`Error::NotInvokable`] when `function` is not callable. A
/// failure of the wrapped function aborts the drain, clears the queue, and
/// propagates.
pub fn trampoline(function: &Value) -> Result<Value> {
    let target = assert_invokable(function)?.clone();
    let queue: Rc<RefCell<VecDeque<Vec<Value>>>> = Rc::new(RefCell::new(VecDeque::new()));
    let draining = Rc::new(Cell::new(false));
    Ok(Value::closure(move |arguments: &[Value]| {
        queue.borrow_mut().push_back(arguments.to_vec());
        if draining.get() {
            return Ok(Value::Null);
        }
        draining.set(true);
        let mut result = Value::Null;
        loop {
            let next = queue.borrow_mut().pop_front();
            let Some(call_arguments) = next else {
                break;
            };
            match target.invoke(&call_arguments) {
                Ok(value) => result = value,
                Err(error) => {
                    queue.borrow_mut().clear();
                    draining.set(false);
                    return Err(error);
                }
            }
        }
        draining.set(false);
        Ok(result)
    }))
}
