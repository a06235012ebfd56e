//! The operator surface: curried, composable operators over sequences.
//!
//! Operators are grouped by category the way the toolkit documents them:
//!
//! - [`list`]: the lazy sequence operators (`map`, `filter`, `take`,
//!   `flatten`, `reduce`, ...);
//! - [`math`]: curried arithmetic and comparisons;
//! - [`logic`]: truthiness combinators and strict equality;
//! - [`object`]: keyed-sequence property access;
//! - [`string`]: string splitting.
//!
//! Every operator exists in two forms: a direct function (re-exported
//! here, e.g. [`map`]) and a curried accessor in [`curried`] that returns
//! the operator as a [`Value`](crate::value::Value) function ready for
//! partial application:
//!
//! ```rust
//! use ramdars::{ops, seq};
//! use ramdars::value::Value;
//!
//! let double = ops::curried::multiply().call(&[Value::Int(2)])?;
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

pub mod curried;
pub mod list;
pub mod logic;
pub mod math;
pub mod object;
pub mod string;

pub use list::{
    all, any, append, append_to, chain, concat, contains, count_by, each, filter, flatten, head,
    join, last, map, merge, merge_all, nth, of, partition, pluck, prepend, prepend_to, reduce,
    reverse, size, slice, sort, tail, take, take_last, take_while, uniq, unnest, values, zip,
    zip_assoc, zip_with,
};
pub use logic::{all_pass, and_also, eq, eq_by};
pub use math::{
    add, dec, divide, gt, gte, inc, lt, lte, math_mod, max, max_by, min, min_by, modulo, multiply,
    negate, product, subtract, sum,
};
pub use object::{prop, prop_of, prop_or, props, set};
pub use string::split;
