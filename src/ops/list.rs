//! The lazy sequence operators.
//!
//! Operators here are lazy unless their contract forces them to drain:
//! `reduce`, `each`, `all`/`any`/`contains`, and everything needing random
//! access (`sort`, `slice`, `reverse`, `merge`) materializes first, at the
//! cost of losing streaming memory bounds for that call only.
//!
//! Key semantics follow one uniform rule, applied per pair: a named key is
//! preserved wherever that is meaningful (`map`, `filter`, `take`,
//! `take_while`, `concat`, `tail`), while positional keys are renumbered
//! from zero by any operator that changes positions. Operators that
//! fundamentally renumber (`flatten`, `chain`, `values`, `unnest`) discard
//! keys entirely.

use std::cmp::Ordering;

use crate::contract::{assert_index, assert_integer, assert_invokable, assert_sequence,
    assert_string};
use crate::error::Result;
use crate::seq::{Key, Pair, Seq, SeqIter};
use crate::value::Value;

/// Whether every element satisfies the predicate. Drains, breaking early
/// on the first miss.
///
/// # Errors
///
/// Shape violations and predicate failures propagate.
pub fn all(predicate: &Value, list: &Value) -> Result<Value> {
    let predicate = assert_invokable(predicate)?;
    let source = assert_sequence(list)?;
    for pair in source.iter() {
        if !predicate.invoke(&[pair?.value])?.is_truthy() {
            return Ok(Value::Bool(false));
        }
    }
    Ok(Value::Bool(true))
}

/// Whether at least one element satisfies the predicate. Drains, breaking
/// early on the first hit.
///
/// # Errors
///
/// Shape violations and predicate failures propagate.
pub fn any(predicate: &Value, list: &Value) -> Result<Value> {
    let predicate = assert_invokable(predicate)?;
    let source = assert_sequence(list)?;
    for pair in source.iter() {
        if predicate.invoke(&[pair?.value])?.is_truthy() {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// The sequence followed by one extra element. Lazy; source pairs pass
/// through verbatim and the new element is numbered after the highest
/// positional key seen.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence list.
pub fn append(element: &Value, list: &Value) -> Result<Value> {
    let element = element.clone();
    let mut source = assert_sequence(list)?.iter();
    let mut last_index: Option<usize> = None;
    let mut appended = false;
    Ok(Value::Seq(Seq::generate(move || {
        if let Some(pair) = source.next_pair()? {
            if let Key::Index(position) = pair.key {
                last_index = Some(last_index.map_or(position, |seen| seen.max(position)));
            }
            return Ok(Some(pair));
        }
        if appended {
            return Ok(None);
        }
        appended = true;
        let position = last_index.map_or(0, |seen| seen + 1);
        Ok(Some(Pair {
            key: Key::Index(position),
            value: element.clone(),
        }))
    })))
}

/// [`append`] with the arguments reversed.
///
/// # Errors
///
/// Same surface as [`append`].
pub fn append_to(list: &Value, element: &Value) -> Result<Value> {
    append(element, list)
}

/// Flat-map: maps the function over the values, splicing a
/// sequence-valued result into the stream and yielding anything else
/// directly. Exactly one level deep: nested sequences inside a result are
/// not descended into (that is [`flatten`]'s job). Keys are discarded.
///
/// # Errors
///
/// Shape violations fail immediately; element failures surface on pull.
pub fn chain(function: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?.clone();
    let mut source = assert_sequence(list)?.iter();
    let mut current: Option<SeqIter> = None;
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        loop {
            if let Some(inner) = current.as_mut() {
                if let Some(pair) = inner.next_pair()? {
                    let renumbered = Pair {
                        key: Key::Index(next_index),
                        value: pair.value,
                    };
                    next_index += 1;
                    return Ok(Some(renumbered));
                }
                current = None;
            }
            let Some(pair) = source.next_pair()? else {
                return Ok(None);
            };
            match function.invoke(&[pair.value])? {
                Value::Seq(inner) => current = Some(inner.iter()),
                value => {
                    let renumbered = Pair {
                        key: Key::Index(next_index),
                        value,
                    };
                    next_index += 1;
                    return Ok(Some(renumbered));
                }
            }
        }
    })))
}

/// The first sequence followed by the second. Lazy. Named keys are
/// preserved; positional keys restart their numbering on each side, since
/// consumption is stream-order rather than array-merge. (In case of a named
/// key appearing on both sides, both pairs are yielded; a later
/// materialization into a map-like view makes the second prevail.)
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) when
/// either argument is not a sequence.
pub fn concat(first: &Value, second: &Value) -> Result<Value> {
    let mut first = assert_sequence(first)?.iter();
    let mut second = assert_sequence(second)?.iter();
    let mut first_done = false;
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        if !first_done {
            if let Some(pair) = first.next_pair()? {
                return Ok(Some(reindex(pair, &mut next_index)));
            }
            first_done = true;
            next_index = 0;
        }
        Ok(second
            .next_pair()?
            .map(|pair| reindex(pair, &mut next_index)))
    })))
}

/// Whether the sequence contains the needle, by strict equality. Drains,
/// breaking early.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence list.
pub fn contains(needle: &Value, list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    for pair in source.iter() {
        if pair?.value == *needle {
            return Ok(Value::Bool(true));
        }
    }
    Ok(Value::Bool(false))
}

/// Counts elements by the string form of `f(value)`. Single pass; the
/// result is a keyed mapping from group label to count, in first-seen
/// order.
///
/// # Errors
///
/// Shape violations and grouping-function failures propagate.
pub fn count_by(function: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let source = assert_sequence(list)?;
    let mut groups: Vec<(String, i64)> = Vec::new();
    for pair in source.iter() {
        let label = function.invoke(&[pair?.value])?.to_string();
        match groups.iter_mut().find(|(name, _)| *name == label) {
            Some((_, count)) => *count += 1,
            None => groups.push((label, 1)),
        }
    }
    Ok(Value::Seq(Seq::from_pairs(
        groups
            .into_iter()
            .map(|(label, count)| Pair::named(label, count))
            .collect(),
    )))
}

/// Calls `f(value, key)` on every element for its side effects. Eager;
/// returns `Null`.
///
/// # Errors
///
/// Shape violations and callback failures propagate.
pub fn each(function: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let source = assert_sequence(list)?;
    for pair in source.iter() {
        let pair = pair?;
        function.invoke(&[pair.value, pair.key.to_value()])?;
    }
    Ok(Value::Null)
}

/// Keeps the pairs for which `pred(value, key)` is truthy. Lazy. Retained
/// pairs keep their keys verbatim; positional keys are *not* renumbered,
/// so an indexed sequence may come out with gaps; consumers derive order
/// from iteration order, never from key values.
///
/// # Errors
///
/// Shape violations fail immediately; predicate failures surface on pull.
pub fn filter(predicate: &Value, list: &Value) -> Result<Value> {
    let predicate = assert_invokable(predicate)?.clone();
    let mut source = assert_sequence(list)?.iter();
    Ok(Value::Seq(Seq::generate(move || {
        loop {
            let Some(pair) = source.next_pair()? else {
                return Ok(None);
            };
            let keep = predicate.invoke(&[pair.value.clone(), pair.key.to_value()])?;
            if keep.is_truthy() {
                return Ok(Some(pair));
            }
        }
    })))
}

/// Pulls every value out of the sequence and all its nested sequences,
/// depth-first, fully recursive. Lazy, iterative (an explicit cursor stack,
/// so nesting depth never grows the call stack). All keys are discarded.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence argument.
pub fn flatten(list: &Value) -> Result<Value> {
    let root = assert_sequence(list)?.iter();
    let mut stack = vec![root];
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        loop {
            let Some(top) = stack.last_mut() else {
                return Ok(None);
            };
            match top.next_pair()? {
                None => {
                    stack.pop();
                }
                Some(pair) => match pair.value {
                    Value::Seq(inner) => stack.push(inner.iter()),
                    value => {
                        let leaf = Pair {
                            key: Key::Index(next_index),
                            value,
                        };
                        next_index += 1;
                        return Ok(Some(leaf));
                    }
                },
            }
        }
    })))
}

/// The first element, or `Null` for an empty sequence. A named pair comes
/// back as a single-pair sequence so the key stays observable; a
/// positional pair comes back as the bare value.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence argument.
pub fn head(list: &Value) -> Result<Value> {
    let mut source = assert_sequence(list)?.iter();
    Ok(source.next_pair()?.map_or(Value::Null, pair_container))
}

/// Concatenates the elements' string forms with the separator between
/// them. Eager.
///
/// # Errors
///
/// Fails with [`Error::NotAString`](crate::Error::NotAString) for a
/// non-string separator.
pub fn join(separator: &Value, list: &Value) -> Result<Value> {
    let separator = assert_string(separator)?;
    let source = assert_sequence(list)?;
    let mut joined = String::new();
    for pair in source.iter() {
        let piece = pair?.value.to_string();
        if joined.is_empty() {
            joined = piece;
        } else {
            joined.push_str(separator);
            joined.push_str(&piece);
        }
    }
    Ok(Value::Str(joined))
}

/// The last element, or `Null` for an empty sequence. Drains; the same
/// single-pair container rule as [`head`] applies.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn last(list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut found = None;
    for pair in source.iter() {
        found = Some(pair?);
    }
    Ok(found.map_or(Value::Null, pair_container))
}

/// Applies `f(value, key)` to every element. Lazy. Named keys are
/// preserved; positional keys are renumbered from zero.
///
/// # Errors
///
/// Shape violations fail immediately; callback failures surface on pull.
pub fn map(function: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?.clone();
    let mut source = assert_sequence(list)?.iter();
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        let Some(pair) = source.next_pair()? else {
            return Ok(None);
        };
        let mapped = function.invoke(&[pair.value, pair.key.to_value()])?;
        Ok(Some(reindex(
            Pair {
                key: pair.key,
                value: mapped,
            },
            &mut next_index,
        )))
    })))
}

/// Merges two sequences into one materialized sequence: positional pairs
/// are renumbered sequentially across both inputs, and a named key
/// appearing again overwrites the earlier value in place.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn merge(first: &Value, second: &Value) -> Result<Value> {
    let first = assert_sequence(first)?;
    let second = assert_sequence(second)?;
    let mut merged = Vec::new();
    let mut next_index = 0usize;
    merge_into(&mut merged, &mut next_index, first)?;
    merge_into(&mut merged, &mut next_index, second)?;
    Ok(Value::Seq(Seq::from_pairs(merged)))
}

/// [`merge`] over a whole sequence of sequences.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) when the
/// argument or any of its elements is not a sequence.
pub fn merge_all(lists: &Value) -> Result<Value> {
    let source = assert_sequence(lists)?;
    let mut merged = Vec::new();
    let mut next_index = 0usize;
    for item in source.iter() {
        let item = item?;
        merge_into(&mut merged, &mut next_index, assert_sequence(&item.value)?)?;
    }
    Ok(Value::Seq(Seq::from_pairs(merged)))
}

/// The value at the given position (first position is zero), ignoring
/// keys, or `Null` past the end.
///
/// # Errors
///
/// Fails with [`Error::NotPositive`](crate::Error::NotPositive) for a
/// negative position.
pub fn nth(position: &Value, list: &Value) -> Result<Value> {
    let position = assert_index(position)?;
    let source = assert_sequence(list)?;
    for (seen, pair) in source.iter().enumerate() {
        let pair = pair?;
        if seen == position {
            return Ok(pair.value);
        }
    }
    Ok(Value::Null)
}

/// Wraps a value in a one-element sequence.
///
/// # Errors
///
/// Never fails; the `Result` keeps the operator surface uniform.
pub fn of(element: &Value) -> Result<Value> {
    Ok(Value::Seq(Seq::from_values([element.clone()])))
}

/// Splits the sequence into the pair of value lists that do and do not
/// satisfy the predicate, in one pass. Both halves come back materialized.
///
/// # Errors
///
/// Shape violations and predicate failures propagate.
pub fn partition(predicate: &Value, list: &Value) -> Result<Value> {
    let predicate = assert_invokable(predicate)?;
    let source = assert_sequence(list)?;
    let mut matched = Vec::new();
    let mut unmatched = Vec::new();
    for pair in source.iter() {
        let value = pair?.value;
        if predicate.invoke(&[value.clone()])?.is_truthy() {
            matched.push(value);
        } else {
            unmatched.push(value);
        }
    }
    Ok(Value::Seq(Seq::from_values([
        Value::Seq(Seq::from_values(matched)),
        Value::Seq(Seq::from_values(unmatched)),
    ])))
}

/// Plucks the same-named property out of every record in the sequence.
/// Lazy; records missing the key (and non-sequence records) are skipped.
///
/// # Errors
///
/// Shape violations fail immediately; lookup failures surface on pull.
pub fn pluck(key: &Value, records: &Value) -> Result<Value> {
    let key = key.clone();
    let mut source = assert_sequence(records)?.iter();
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        loop {
            let Some(pair) = source.next_pair()? else {
                return Ok(None);
            };
            if let Value::Seq(record) = pair.value {
                if let Some(value) = super::object::lookup(&key, &record)? {
                    let plucked = Pair {
                        key: Key::Index(next_index),
                        value,
                    };
                    next_index += 1;
                    return Ok(Some(plucked));
                }
            }
        }
    })))
}

/// The given element followed by the sequence. Lazy.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence list.
pub fn prepend(element: &Value, list: &Value) -> Result<Value> {
    assert_sequence(list)?;
    let single = of(element)?;
    concat(&single, list)
}

/// [`prepend`] with the arguments reversed.
///
/// # Errors
///
/// Same surface as [`prepend`].
pub fn prepend_to(list: &Value, element: &Value) -> Result<Value> {
    prepend(element, list)
}

/// Folds the sequence into a single value with `f(accumulator, value,
/// key)`. Not lazy: always drains the whole sequence; this is the
/// convergence point [`sum`](super::sum), [`product`](super::product), and
/// [`join`] are built on.
///
/// # Errors
///
/// Shape violations and folding-function failures propagate.
pub fn reduce(function: &Value, initial: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let source = assert_sequence(list)?;
    let mut accumulator = initial.clone();
    for pair in source.iter() {
        let pair = pair?;
        accumulator = function.invoke(&[accumulator, pair.value, pair.key.to_value()])?;
    }
    Ok(accumulator)
}

/// The sequence in reverse order, materialized. Named keys survive;
/// positional keys are renumbered in the new order.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn reverse(list: &Value) -> Result<Value> {
    let pairs = assert_sequence(list)?.to_pairs()?;
    let mut next_index = 0usize;
    let reversed = pairs
        .into_iter()
        .rev()
        .map(|pair| reindex(pair, &mut next_index))
        .collect();
    Ok(Value::Seq(Seq::from_pairs(reversed)))
}

/// The number of elements. Drains a lazy sequence.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn size(list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut count: i64 = 0;
    for pair in source.iter() {
        pair?;
        count += 1;
    }
    Ok(Value::Int(count))
}

/// The elements from `start` (inclusive) to `end` (exclusive),
/// materialized. Negative offsets count from the end; a `Null` end means
/// "to the end". Named keys survive; positional keys are renumbered.
///
/// # Errors
///
/// Fails with [`Error::NotAnInteger`](crate::Error::NotAnInteger) for
/// non-integer offsets.
pub fn slice(start: &Value, end: &Value, list: &Value) -> Result<Value> {
    let pairs = assert_sequence(list)?.to_pairs()?;
    let length = i64::try_from(pairs.len()).unwrap_or(i64::MAX);
    let start = resolve_offset(assert_integer(start)?, length);
    let end = match end {
        Value::Null => resolve_offset(length, length),
        bound => resolve_offset(assert_integer(bound)?, length),
    };
    if end <= start {
        return Ok(Value::Seq(Seq::empty()));
    }
    let mut next_index = 0usize;
    let window = pairs
        .into_iter()
        .skip(start)
        .take(end - start)
        .map(|pair| reindex(pair, &mut next_index))
        .collect();
    Ok(Value::Seq(Seq::from_pairs(window)))
}

/// A sorted copy of the sequence, materialized. The function maps each
/// value to a numeric comparison key; keys are compared into a strict
/// tri-state [`Ordering`] (never a raw delta), and the sort is stable, so
/// equal keys keep their original relative order. A keyed sequence is
/// sorted key-stably, each key keeps its value; an indexed sequence is
/// sorted by value with fresh positions.
///
/// # Errors
///
/// Fails with [`Error::NotANumber`](crate::Error::NotANumber) when the
/// comparison key of any element is not a number.
pub fn sort(function: &Value, list: &Value) -> Result<Value> {
    let function = assert_invokable(function)?;
    let pairs = assert_sequence(list)?.to_pairs()?;
    let keyed = pairs.iter().any(|pair| !pair.key.is_index());

    let mut ranked: Vec<(f64, Pair)> = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let rank = function.invoke(&[pair.value.clone()])?;
        ranked.push((crate::contract::assert_number(&rank)?, pair));
    }
    ranked.sort_by(|left, right| left.0.partial_cmp(&right.0).unwrap_or(Ordering::Equal));

    let sorted = if keyed {
        ranked.into_iter().map(|(_, pair)| pair).collect()
    } else {
        ranked
            .into_iter()
            .enumerate()
            .map(|(position, (_, pair))| Pair {
                key: Key::Index(position),
                value: pair.value,
            })
            .collect()
    };
    Ok(Value::Seq(Seq::from_pairs(sorted)))
}

/// Everything but the first element. Lazy; named keys survive, positional
/// keys are renumbered.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence argument.
pub fn tail(list: &Value) -> Result<Value> {
    let mut source = assert_sequence(list)?.iter();
    let mut skipped = false;
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        if !skipped {
            skipped = true;
            if source.next_pair()?.is_none() {
                return Ok(None);
            }
        }
        Ok(source
            .next_pair()?
            .map(|pair| reindex(pair, &mut next_index)))
    })))
}

/// The first `n` elements. Lazy, and stops pulling as soon as `n` pairs
/// have been yielded, so it bounds an infinite producer. Named keys
/// survive, positional keys are renumbered.
///
/// # Errors
///
/// Fails with [`Error::NotAnInteger`](crate::Error::NotAnInteger) for a
/// non-integer count.
pub fn take(count: &Value, list: &Value) -> Result<Value> {
    let count = assert_integer(count)?;
    let mut source = assert_sequence(list)?.iter();
    let mut taken: i64 = 0;
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        if taken >= count {
            return Ok(None);
        }
        let Some(pair) = source.next_pair()? else {
            return Ok(None);
        };
        taken += 1;
        Ok(Some(reindex(pair, &mut next_index)))
    })))
}

/// The last element; see [`last`].
///
/// # Errors
///
/// Same surface as [`last`].
pub fn take_last(list: &Value) -> Result<Value> {
    last(list)
}

/// Elements from the front for as long as `pred(value, key)` stays truthy.
/// Production stops at the first falsy answer, short-circuiting an
/// infinite producer. Named keys survive, positional keys are renumbered.
///
/// # Errors
///
/// Shape violations fail immediately; predicate failures surface on pull.
pub fn take_while(predicate: &Value, list: &Value) -> Result<Value> {
    let predicate = assert_invokable(predicate)?.clone();
    let mut source = assert_sequence(list)?.iter();
    let mut done = false;
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        if done {
            return Ok(None);
        }
        let Some(pair) = source.next_pair()? else {
            return Ok(None);
        };
        let keep = predicate.invoke(&[pair.value.clone(), pair.key.to_value()])?;
        if keep.is_truthy() {
            Ok(Some(reindex(pair, &mut next_index)))
        } else {
            done = true;
            Ok(None)
        }
    })))
}

/// One copy of each distinct value, by strict equality, first occurrence
/// first. Materialized, positions renumbered.
///
/// # Errors
///
/// Shape violations and production failures propagate.
pub fn uniq(list: &Value) -> Result<Value> {
    let source = assert_sequence(list)?;
    let mut seen: Vec<Value> = Vec::new();
    for pair in source.iter() {
        let value = pair?.value;
        if !seen.contains(&value) {
            seen.push(value);
        }
    }
    Ok(Value::Seq(Seq::from_values(seen)))
}

/// Flattens exactly one level of nesting; `chain` with the identity
/// function.
///
/// # Errors
///
/// Same surface as [`chain`].
pub fn unnest(list: &Value) -> Result<Value> {
    chain(
        &Value::function("identity", 1, |arguments| {
            Ok(arguments.first().cloned().unwrap_or(Value::Null))
        }),
        list,
    )
}

/// The sequence's values with all keys discarded and positions renumbered.
/// Lazy.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) for a
/// non-sequence argument.
pub fn values(list: &Value) -> Result<Value> {
    let mut source = assert_sequence(list)?.iter();
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        let Some(pair) = source.next_pair()? else {
            return Ok(None);
        };
        let renumbered = Pair {
            key: Key::Index(next_index),
            value: pair.value,
        };
        next_index += 1;
        Ok(Some(renumbered))
    })))
}

/// Pairs equally-positioned values of the two sequences into two-element
/// sequences, truncated to the shorter input. Lazy.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`](crate::Error::NotASequence) when
/// either argument is not a sequence.
pub fn zip(first: &Value, second: &Value) -> Result<Value> {
    let mut first = assert_sequence(first)?.iter();
    let mut second = assert_sequence(second)?.iter();
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        let Some(left) = first.next_pair()? else {
            return Ok(None);
        };
        let Some(right) = second.next_pair()? else {
            return Ok(None);
        };
        let paired = Value::Seq(Seq::from_values([left.value, right.value]));
        let out = Pair::indexed(next_index, paired);
        next_index += 1;
        Ok(Some(out))
    })))
}

/// Builds a keyed sequence whose keys come from the first sequence's
/// values and whose values come from the second's, truncated to the
/// shorter input. Empty when the first sequence is empty. Lazy.
///
/// # Errors
///
/// Shape violations fail immediately; a first-sequence value that cannot
/// become a key fails with
/// [`Error::NotAString`](crate::Error::NotAString) on pull.
pub fn zip_assoc(first: &Value, second: &Value) -> Result<Value> {
    let mut first = assert_sequence(first)?.iter();
    let mut second = assert_sequence(second)?.iter();
    Ok(Value::Seq(Seq::generate(move || {
        let Some(left) = first.next_pair()? else {
            return Ok(None);
        };
        let Some(right) = second.next_pair()? else {
            return Ok(None);
        };
        Ok(Some(Pair {
            key: Key::from_value(&left.value)?,
            value: right.value,
        }))
    })))
}

/// Like [`zip`] but combines each positional pair with `f(a, b)` instead
/// of pairing them. Lazy.
///
/// # Errors
///
/// Shape violations fail immediately; combiner failures surface on pull.
pub fn zip_with(function: &Value, first: &Value, second: &Value) -> Result<Value> {
    let function = assert_invokable(function)?.clone();
    let mut first = assert_sequence(first)?.iter();
    let mut second = assert_sequence(second)?.iter();
    let mut next_index = 0usize;
    Ok(Value::Seq(Seq::generate(move || {
        let Some(left) = first.next_pair()? else {
            return Ok(None);
        };
        let Some(right) = second.next_pair()? else {
            return Ok(None);
        };
        let combined = function.invoke(&[left.value, right.value])?;
        let out = Pair::indexed(next_index, combined);
        next_index += 1;
        Ok(Some(out))
    })))
}

/// Renumbers a positional pair to the next fresh position; named pairs
/// pass through untouched.
fn reindex(pair: Pair, next_index: &mut usize) -> Pair {
    match pair.key {
        Key::Name(_) => pair,
        Key::Index(_) => {
            let renumbered = Pair {
                key: Key::Index(*next_index),
                value: pair.value,
            };
            *next_index += 1;
            renumbered
        }
    }
}

/// The single-pair container rule shared by `head`/`last`: positional
/// pairs surface as the bare value, named pairs as a one-pair sequence.
fn pair_container(pair: Pair) -> Value {
    match pair.key {
        Key::Index(_) => pair.value,
        Key::Name(_) => Value::Seq(Seq::from_pairs(vec![pair])),
    }
}

/// `array_merge`-style accumulation: positional pairs get fresh sequential
/// positions, a repeated named key overwrites the earlier value in place.
fn merge_into(merged: &mut Vec<Pair>, next_index: &mut usize, source: &Seq) -> Result<()> {
    for pair in source.iter() {
        let pair = pair?;
        match pair.key {
            Key::Index(_) => {
                merged.push(Pair {
                    key: Key::Index(*next_index),
                    value: pair.value,
                });
                *next_index += 1;
            }
            Key::Name(name) => {
                let existing = merged.iter_mut().find(
                    |candidate| matches!(&candidate.key, Key::Name(seen) if *seen == name),
                );
                match existing {
                    Some(candidate) => candidate.value = pair.value,
                    None => merged.push(Pair {
                        key: Key::Name(name),
                        value: pair.value,
                    }),
                }
            }
        }
    }
    Ok(())
}
