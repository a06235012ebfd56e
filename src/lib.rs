//! # ramdars
//!
//! A point-free functional-programming toolkit: curried, composable
//! operators over finite and lazily-produced key/value sequences, plus
//! combinators for building new functions out of existing ones.
//!
//! ## Overview
//!
//! The crate is built around two mechanisms:
//!
//! - **The curry engine** ([`curry`]): every multi-argument operator can be
//!   invoked fully, partially (binding a prefix and returning a narrower
//!   function), or with too many arguments (the extras are dropped, which
//!   is what lets a curried binary operator be handed to `map` or `reduce`,
//!   which always supply the pair's key as extra context).
//! - **The sequence abstraction** ([`seq`]): indexed arrays, keyed
//!   (associative) collections, and generator-produced lazy sequences are
//!   treated interchangeably as ordered productions of key/value pairs.
//!   Each pair carries its own key tag, so named keys survive
//!   transformation while positional keys are renumbered, and a lazy
//!   producer, possibly infinite, is pulled one pair at a time and
//!   consumed exactly once.
//!
//! On top of those sit the [`ops`] operator surface (`map`, `filter`,
//! `take`, `flatten`, `reduce`, ...) and the [`combinator`] module
//! (`compose`, `pipe`, `flip`, `converge`, `trampoline`, ...).
//!
//! ## Feature Flags
//!
//! - `ops`: the operator surface (on by default)
//! - `combinator`: the function combinators (on by default)
//! - `full`: everything
//!
//! ## Example
//!
//! ```rust
//! use ramdars::value::Value;
//! use ramdars::{ops, seq};
//!
//! // Partially apply a curried operator...
//! let double = ops::curried::multiply().call(&[Value::Int(2)])?;
//!
//! // ...and map it lazily over a sequence.
//! let doubled = ops::map(&double, &Value::Seq(seq![1, 2, 3]))?;
//!
//! let Value::Seq(result) = ramdars::seq::materialize(&doubled)? else {
//!     unreachable!()
//! };
//! assert_eq!(
//!     result.to_values()?,
//!     vec![Value::Int(2), Value::Int(4), Value::Int(6)]
//! );
//! # Ok::<(), ramdars::Error>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use ramdars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::callable::Callable;
    pub use crate::curry::{Curried, curry2, curry3, curry_n};
    pub use crate::error::{Error, Result};
    pub use crate::seq::{Key, Pair, Seq, SeqKind, classify, materialize};
    pub use crate::value::Value;

    #[cfg(feature = "combinator")]
    pub use crate::combinator;

    #[cfg(feature = "ops")]
    pub use crate::ops;
}

pub mod callable;
pub mod contract;
pub mod curry;
pub mod error;
pub mod seq;
pub mod value;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "ops")]
pub mod ops;

pub use error::{Error, Result};
