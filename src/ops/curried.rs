//! Curried operator accessors.
//!
//! Each accessor returns its operator as a curried [`Value::Fun`], ready
//! for partial application or for being handed to a higher-order operator:
//!
//! ```rust
//! use ramdars::{ops, seq};
//! use ramdars::value::Value;
//!
//! let take_two = ops::curried::take().call(&[Value::Int(2)])?;
//! let taken = take_two.call(&[Value::Seq(seq![1, 2, 3, 4])])?;
//!
//! let Value::Seq(result) = ramdars::seq::materialize(&taken)? else {
//!     unreachable!()
//! };
//! assert_eq!(result.to_values()?, vec![Value::Int(1), Value::Int(2)]);
//! # Ok::<(), ramdars::Error>(())
//! ```

use crate::callable::Callable;
use crate::curry::Curried;
use crate::value::Value;

macro_rules! curried_accessors {
    () => {};
    ($(#[$meta:meta])* fn2 $name:ident => $target:path; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $name() -> Value {
            Value::Fun(Callable::Curried(Box::new(Curried::from_fn2(
                stringify!($name),
                $target,
            ))))
        }
        curried_accessors!($($rest)*);
    };
    ($(#[$meta:meta])* fn3 $name:ident => $target:path; $($rest:tt)*) => {
        $(#[$meta])*
        pub fn $name() -> Value {
            Value::Fun(Callable::Curried(Box::new(Curried::from_fn3(
                stringify!($name),
                $target,
            ))))
        }
        curried_accessors!($($rest)*);
    };
}

curried_accessors! {
    /// Curried [`add`](super::math::add).
    fn2 add => super::math::add;
    /// Curried [`all`](super::list::all).
    fn2 all => super::list::all;
    /// Curried [`all_pass`](super::logic::all_pass).
    fn2 all_pass => super::logic::all_pass;
    /// Curried [`and_also`](super::logic::and_also).
    fn2 and_also => super::logic::and_also;
    /// Curried [`any`](super::list::any).
    fn2 any => super::list::any;
    /// Curried [`append`](super::list::append).
    fn2 append => super::list::append;
    /// Curried [`append_to`](super::list::append_to).
    fn2 append_to => super::list::append_to;
    /// Curried [`apply`](crate::combinator::apply).
    #[cfg(feature = "combinator")]
    fn2 apply => crate::combinator::apply;
    /// Curried [`chain`](super::list::chain).
    fn2 chain => super::list::chain;
    /// Curried [`concat`](super::list::concat).
    fn2 concat => super::list::concat;
    /// Curried [`contains`](super::list::contains).
    fn2 contains => super::list::contains;
    /// Curried [`converge`](crate::combinator::converge).
    #[cfg(feature = "combinator")]
    fn2 converge => crate::combinator::converge;
    /// Curried [`count_by`](super::list::count_by).
    fn2 count_by => super::list::count_by;
    /// Curried [`divide`](super::math::divide).
    fn2 divide => super::math::divide;
    /// Curried [`each`](super::list::each).
    fn2 each => super::list::each;
    /// Curried [`eq`](super::logic::eq).
    fn2 eq => super::logic::eq;
    /// Curried [`eq_by`](super::logic::eq_by).
    fn3 eq_by => super::logic::eq_by;
    /// Curried [`filter`](super::list::filter).
    fn2 filter => super::list::filter;
    /// Curried [`gt`](super::math::gt).
    fn2 gt => super::math::gt;
    /// Curried [`gte`](super::math::gte).
    fn2 gte => super::math::gte;
    /// Curried [`join`](super::list::join).
    fn2 join => super::list::join;
    /// Curried [`lt`](super::math::lt).
    fn2 lt => super::math::lt;
    /// Curried [`lte`](super::math::lte).
    fn2 lte => super::math::lte;
    /// Curried [`map`](super::list::map).
    fn2 map => super::list::map;
    /// Curried [`math_mod`](super::math::math_mod).
    fn2 math_mod => super::math::math_mod;
    /// Curried [`max_by`](super::math::max_by).
    fn2 max_by => super::math::max_by;
    /// Curried [`merge`](super::list::merge).
    fn2 merge => super::list::merge;
    /// Curried [`min_by`](super::math::min_by).
    fn2 min_by => super::math::min_by;
    /// Curried [`modulo`](super::math::modulo).
    fn2 modulo => super::math::modulo;
    /// Curried [`multiply`](super::math::multiply).
    fn2 multiply => super::math::multiply;
    /// Curried [`nth`](super::list::nth).
    fn2 nth => super::list::nth;
    /// Curried [`partition`](super::list::partition).
    fn2 partition => super::list::partition;
    /// Curried [`pluck`](super::list::pluck).
    fn2 pluck => super::list::pluck;
    /// Curried [`prepend`](super::list::prepend).
    fn2 prepend => super::list::prepend;
    /// Curried [`prepend_to`](super::list::prepend_to).
    fn2 prepend_to => super::list::prepend_to;
    /// Curried [`prop`](super::object::prop).
    fn2 prop => super::object::prop;
    /// Curried [`prop_of`](super::object::prop_of).
    fn2 prop_of => super::object::prop_of;
    /// Curried [`prop_or`](super::object::prop_or).
    fn3 prop_or => super::object::prop_or;
    /// Curried [`props`](super::object::props).
    fn2 props => super::object::props;
    /// Curried [`reduce`](super::list::reduce).
    fn3 reduce => super::list::reduce;
    /// Curried [`set`](super::object::set).
    fn3 set => super::object::set;
    /// Curried [`slice`](super::list::slice).
    fn3 slice => super::list::slice;
    /// Curried [`sort`](super::list::sort).
    fn2 sort => super::list::sort;
    /// Curried [`split`](super::string::split).
    fn2 split => super::string::split;
    /// Curried [`subtract`](super::math::subtract).
    fn2 subtract => super::math::subtract;
    /// Curried [`take`](super::list::take).
    fn2 take => super::list::take;
    /// Curried [`take_while`](super::list::take_while).
    fn2 take_while => super::list::take_while;
    /// Curried [`zip`](super::list::zip).
    fn2 zip => super::list::zip;
    /// Curried [`zip_assoc`](super::list::zip_assoc).
    fn2 zip_assoc => super::list::zip_assoc;
    /// Curried [`zip_with`](super::list::zip_with).
    fn3 zip_with => super::list::zip_with;
}
