//! Property tests for the engine's algebraic guarantees: curry totality,
//! zip truncation, sort stability, flatten depth, and take bounds.

#![cfg(feature = "ops")]

use proptest::prelude::*;
use ramdars::seq::Seq;
use ramdars::value::Value;
use ramdars::{ops, seq};

fn ints(values: &[i64]) -> Value {
    Value::Seq(Seq::from_values(values.iter().copied().map(Value::Int)))
}

fn values_of(value: &Value) -> Vec<Value> {
    value
        .as_seq()
        .expect("sequence result")
        .to_values()
        .expect("drains cleanly")
}

proptest! {
    #[test]
    fn prop_curry_totality(
        a in -1_000i64..1_000,
        b in -1_000i64..1_000,
        extra in -1_000i64..1_000,
    ) {
        let curried = ops::curried::add();
        let stepwise = curried
            .call(&[Value::Int(a)])
            .expect("partial")
            .call(&[Value::Int(b)])
            .expect("full");
        let at_once = curried
            .call(&[Value::Int(a), Value::Int(b)])
            .expect("full");
        let over = curried
            .call(&[Value::Int(a), Value::Int(b), Value::Int(extra)])
            .expect("extras dropped");

        prop_assert_eq!(&stepwise, &Value::Int(a + b));
        prop_assert_eq!(&at_once, &stepwise);
        prop_assert_eq!(&over, &stepwise);
    }

    #[test]
    fn prop_zip_truncates_to_the_shorter_input(
        left in prop::collection::vec(-100i64..100, 0..16),
        right in prop::collection::vec(-100i64..100, 0..16),
    ) {
        let zipped = ops::zip(&ints(&left), &ints(&right)).expect("zip");
        let rows = values_of(&zipped);
        prop_assert_eq!(rows.len(), left.len().min(right.len()));
        for (row, (a, b)) in rows.iter().zip(left.iter().zip(right.iter())) {
            prop_assert_eq!(values_of(row), vec![Value::Int(*a), Value::Int(*b)]);
        }
    }

    #[test]
    fn prop_sort_with_constant_key_preserves_order(
        values in prop::collection::vec(-100i64..100, 0..16),
    ) {
        let constant = Value::function("zero", 1, |_| Ok(Value::Int(0)));
        let sorted = ops::sort(&constant, &ints(&values)).expect("sort");
        prop_assert_eq!(
            values_of(&sorted),
            values.iter().copied().map(Value::Int).collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_sort_agrees_with_a_stable_std_sort(
        values in prop::collection::vec(-100i64..100, 0..16),
    ) {
        let identity = Value::function("identity", 1, |arguments| {
            Ok(arguments.first().cloned().unwrap_or(Value::Null))
        });
        let sorted = ops::sort(&identity, &ints(&values)).expect("sort");
        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(
            values_of(&sorted),
            expected.into_iter().map(Value::Int).collect::<Vec<_>>()
        );
    }

    #[test]
    fn prop_flatten_agrees_with_std_flatten(
        nested in prop::collection::vec(prop::collection::vec(-100i64..100, 0..8), 0..8),
    ) {
        let outer = Value::Seq(Seq::from_values(
            nested.iter().map(|inner| Value::Seq(Seq::from_values(
                inner.iter().copied().map(Value::Int),
            ))),
        ));
        let flat = ops::flatten(&outer).expect("flatten");
        let expected: Vec<Value> = nested
            .into_iter()
            .flatten()
            .map(Value::Int)
            .collect();
        prop_assert_eq!(values_of(&flat), expected);
    }

    #[test]
    fn prop_take_bounds_an_infinite_counter(count in 0i64..64) {
        let mut next = 0i64;
        let counter = Value::Seq(Seq::generate_values(move || {
            let value = Value::Int(next);
            next += 1;
            Ok(Some(value))
        }));
        let taken = ops::take(&Value::Int(count), &counter).expect("take");
        let expected: Vec<Value> = (0..count).map(Value::Int).collect();
        prop_assert_eq!(values_of(&taken), expected);
    }

    #[test]
    fn prop_map_identity_preserves_named_pairs(
        entries in prop::collection::vec(("[a-z]{1,6}", -100i64..100), 0..12),
    ) {
        let keyed = Value::Seq(Seq::from_pairs(
            entries
                .iter()
                .map(|(name, value)| ramdars::seq::Pair::named(name.clone(), *value))
                .collect(),
        ));
        let identity = Value::function("identity", 1, |arguments| {
            Ok(arguments.first().cloned().unwrap_or(Value::Null))
        });
        let mapped = ops::map(&identity, &keyed).expect("map");
        let pairs = mapped.as_seq().expect("seq").to_pairs().expect("drain");
        let expected: Vec<ramdars::seq::Pair> = entries
            .into_iter()
            .map(|(name, value)| ramdars::seq::Pair::named(name, value))
            .collect();
        prop_assert_eq!(pairs, expected);
    }
}

#[test]
fn test_seq_macro_and_from_values_agree() {
    let via_macro = seq![1, 2, 3];
    let via_constructor = Seq::from_values([1, 2, 3]);
    assert_eq!(via_macro, via_constructor);
}
