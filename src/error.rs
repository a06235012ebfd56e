//! The error surface of the toolkit.
//!
//! Every failure in this crate is a programmer error signalling a contract
//! violation: an operator was handed an argument of the wrong shape, a
//! curried function was called with no arguments, an empty chain was
//! composed. Failures abort the current operator call and propagate to the
//! immediate caller; no operator recovers from or swallows another
//! operator's failure, and nothing is ever retried.
//!
//! Laziness interacts with errors in one deliberate way: a failure inside a
//! lazy operator's element-production step surfaces when that element is
//! pulled, not when the lazy sequence object is created. See
//! [`Seq`](crate::seq::Seq) for the drained-after-error rule.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The closed taxonomy of contract violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The argument is neither a materialized collection nor a lazy
    /// producer.
    #[error("argument is not a sequence")]
    NotASequence,

    /// The argument is not a callable value.
    #[error("argument is not invokable")]
    NotInvokable,

    /// The argument is neither an integer nor a float.
    #[error("argument is not a number")]
    NotANumber,

    /// The argument is not an integer.
    #[error("argument is not an integer")]
    NotAnInteger,

    /// A divisor or modulus was zero.
    #[error("division by zero")]
    ZeroDivision,

    /// The argument had to be positive (or non-negative, for index
    /// positions) and was not.
    #[error("argument is not positive")]
    NotPositive,

    /// The argument is not a string.
    #[error("argument is not a string")]
    NotAString,

    /// A curried function was invoked with zero arguments.
    #[error("invalid number of arguments")]
    Arity,

    /// [`curry_n`](crate::curry::curry_n) was asked for an arity outside
    /// the supported set {2, 3}.
    #[error("unsupported curry arity {0}")]
    UnsupportedArity(usize),

    /// [`compose`](crate::combinator::compose) or
    /// [`pipe`](crate::combinator::pipe) received no functions.
    #[error("cannot compose an empty chain of functions")]
    EmptyComposition,

    /// [`flip`](crate::combinator::flip) was given no arity and the
    /// callable does not declare one.
    #[error("arity of the callable cannot be discovered")]
    ArityDiscovery,
}
