//! Property access over keyed sequences.
//!
//! A "property" key can be a string (matching named pairs) or a
//! non-negative integer (matching positional pairs); numeric strings reach
//! positional pairs too, so `prop("1", ...)` and `prop(1, ...)` agree.

use crate::contract::assert_sequence;
use crate::error::Result;
use crate::seq::{Key, Pair, Seq};
use crate::value::Value;

/// The property at `key`, or `Null` when the item is not a sequence or
/// has no such key.
///
/// # Errors
///
/// Production failures of a lazy item propagate.
pub fn prop(key: &Value, item: &Value) -> Result<Value> {
    match item {
        Value::Seq(seq) => Ok(lookup(key, seq)?.unwrap_or(Value::Null)),
        _ => Ok(Value::Null),
    }
}

/// [`prop`] with the arguments reversed.
///
/// # Errors
///
/// Same surface as [`prop`].
pub fn prop_of(item: &Value, key: &Value) -> Result<Value> {
    prop(key, item)
}

/// [`prop`] with a fallback instead of `Null`.
///
/// # Errors
///
/// Same surface as [`prop`].
pub fn prop_or(key: &Value, default: &Value, item: &Value) -> Result<Value> {
    let found = prop(key, item)?;
    if matches!(found, Value::Null) {
        Ok(default.clone())
    } else {
        Ok(found)
    }
}

/// Multiple [`prop`] lookups at once: one output value per key, `Null`
/// for misses. Lazy over the key list; the item is materialized up front
/// so each key scans the same realized pairs.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence key list.
pub fn props(keys: &Value, item: &Value) -> Result<Value> {
    let mut keys = assert_sequence(keys)?.iter();
    let item = match item {
        Value::Seq(seq) => Some(seq.materialize()?),
        _ => None,
    };
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        let Some(pair) = keys.next_pair()? else {
            return Ok(None);
        };
        let value = match &item {
            Some(seq) => lookup(&pair.value, seq)?.unwrap_or(Value::Null),
            None => Value::Null,
        };
        let out = Pair {
            key: Key::Index(next_index),
            value,
        };
        next_index += 1;
        Ok(Some(out))
    })))
}

/// A copy of the item with `key` set to `value`, replacing an existing
/// pair in place or appending a new one. Materializes.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence item and
/// [`Error::NotAString`](crate::Error::NotAString) for a key that is
/// neither an integer nor a string.
pub fn set(key: &Value, value: &Value, item: &Value) -> Result<Value> {
    let mut pairs = assert_sequence(item)?.to_pairs()?;
    match pairs.iter_mut().find(|pair| key_matches(&pair.key, key)) {
        Some(existing) => existing.value = value.clone(),
        None => pairs.push(Pair {
            key: Key::from_value(key)?,
            value: value.clone(),
        }),
    }
    Ok(Value::Seq(Seq::from_pairs(pairs)))
}

/// Scans the sequence for the pair whose key matches the probe.
pub(crate) fn lookup(key: &Value, item: &Seq) -> Result<Option<Value>> {
    for pair in item.iter() {
        let pair = pair?;
        if key_matches(&pair.key, key) {
            return Ok(Some(pair.value));
        }
    }
    Ok(None)
}

fn key_matches(key: &Key, probe: &Value) -> bool {
    match (key, probe) {
        (Key::Index(position), Value::Int(number)) => {
            i64::try_from(*position).is_ok_and(|converted| converted == *number)
        }
        (Key::Index(position), Value::Str(text)) => {
            text.parse::<usize>().is_ok_and(|parsed| parsed == *position)
        }
        (Key::Name(name), Value::Str(text)) => name == text,
        (Key::Name(name), Value::Int(number)) => *name == number.to_string(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_prop_on_named_and_positional_keys() {
        let record = Value::Seq(crate::assoc! { "x" => 100 });
        assert_eq!(prop(&Value::from("x"), &record), Ok(Value::Int(100)));
        assert_eq!(prop(&Value::from("y"), &record), Ok(Value::Null));

        let indexed = Value::Seq(crate::seq![100, 200]);
        assert_eq!(prop(&Value::Int(1), &indexed), Ok(Value::Int(200)));
        assert_eq!(prop(&Value::from("1"), &indexed), Ok(Value::Int(200)));
        assert_eq!(prop(&Value::from("3"), &indexed), Ok(Value::Null));
    }

    #[rstest]
    fn test_prop_on_non_sequence_is_null() {
        assert_eq!(prop(&Value::from("x"), &Value::Int(5)), Ok(Value::Null));
    }

    #[rstest]
    fn test_prop_or_falls_back() {
        let record = Value::Seq(crate::assoc! { "x" => 100 });
        assert_eq!(
            prop_or(&Value::from("y"), &Value::Int(200), &record),
            Ok(Value::Int(200))
        );
        assert_eq!(
            prop_or(&Value::from("x"), &Value::Int(200), &record),
            Ok(Value::Int(100))
        );
    }

    #[rstest]
    fn test_props_yields_null_for_misses() {
        let record = Value::Seq(crate::assoc! { "x" => 100, "z" => 300 });
        let keys = Value::Seq(crate::seq!["x", "y", "z"]);
        let picked = props(&keys, &record).expect("props");
        let values = picked.as_seq().expect("seq").to_values().expect("drain");
        assert_eq!(values, vec![Value::Int(100), Value::Null, Value::Int(300)]);
    }

    #[rstest]
    fn test_set_replaces_in_place_and_appends() {
        let record = Value::Seq(crate::assoc! { "lvl" => 1, "hp" => 10 });
        let updated = set(&Value::from("lvl"), &Value::Int(9000), &record).expect("set");
        let pairs = updated.as_seq().expect("seq").to_pairs().expect("drain");
        assert_eq!(pairs[0], Pair::named("lvl", 9000));
        assert_eq!(pairs[1], Pair::named("hp", 10));

        let grown = set(&Value::from("mp"), &Value::Int(5), &updated).expect("set");
        let pairs = grown.as_seq().expect("seq").to_pairs().expect("drain");
        assert_eq!(pairs[2], Pair::named("mp", 5));
    }
}
