//! The uniform sequence abstraction.
//!
//! A [`Seq`] is an ordered production of key/value [`Pair`]s. Every pair
//! carries its own key tag: [`Key::Index`] for positional pairs,
//! [`Key::Name`] for named ones. Mixed sequences are legal, and whether
//! a given pair keeps its key or is renumbered downstream is decided per
//! pair, never for the whole sequence.
//!
//! Two representations sit behind one handle:
//!
//! - **materialized**: a finite, already-realized `Vec<Pair>`; iteration
//!   is restartable and cheap;
//! - **lazy**: a closure-based pull producer, possibly infinite, that can
//!   be run to completion exactly once. After exhaustion (or after the
//!   first production error) the producer is dead and further pulls yield
//!   nothing; a "restart" means re-invoking whatever built the generator.
//!
//! Production is pull-based and cooperative: a consumer requests the next
//! pair, the producer computes exactly one, and control returns to the
//! consumer. A lazy sequence instance must not be iterated from two call
//! sites at once; the cursors share one producer, so interleaving is the
//! caller's bug.
//!
//! # Examples
//!
//! ```rust
//! use ramdars::seq::Seq;
//! use ramdars::value::Value;
//!
//! // An infinite counter, bounded later by `take`.
//! let mut next = 0i64;
//! let counter = Seq::generate_values(move || {
//!     let value = Value::Int(next);
//!     next += 1;
//!     Ok(Some(value))
//! });
//! assert!(counter.is_lazy());
//!
//! let fruit = ramdars::assoc! { "a" => 1, "b" => 2 };
//! assert_eq!(fruit.kind(), ramdars::seq::SeqKind::Keyed);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::contract::assert_sequence;
use crate::error::{Error, Result};
use crate::value::Value;

/// A per-pair key tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A positional key. Position is the primary semantic; operators are
    /// free to renumber these.
    Index(usize),
    /// A named key whose identity must survive transformation.
    Name(String),
}

impl Key {
    /// Whether this is a positional key.
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }

    /// The key as a value, as handed to `f(value, key)` callbacks.
    #[allow(clippy::cast_possible_wrap)]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Index(position) => Value::Int(*position as i64),
            Self::Name(name) => Value::Str(name.clone()),
        }
    }

    /// Derives a key from a value; used where values become keys
    /// (`zip_assoc`, `set`).
    ///
    /// # Errors
    ///
    /// Only integers and strings can become keys; anything else fails with
    /// [`Error::NotAString`].
    #[allow(clippy::cast_sign_loss)]
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Int(number) if *number >= 0 => Ok(Self::Index(*number as usize)),
            Value::Int(number) => Ok(Self::Name(number.to_string())),
            Value::Str(text) => Ok(Self::Name(text.clone())),
            _ => Err(Error::NotAString),
        }
    }
}

/// One produced element: a key tag and a value.
#[derive(Clone, Debug, PartialEq)]
pub struct Pair {
    /// The key tag.
    pub key: Key,
    /// The value.
    pub value: Value,
}

impl Pair {
    /// A positional pair.
    pub fn indexed(position: usize, value: impl Into<Value>) -> Self {
        Self {
            key: Key::Index(position),
            value: value.into(),
        }
    }

    /// A named pair.
    pub fn named(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: Key::Name(name.into()),
            value: value.into(),
        }
    }
}

/// Whole-sequence classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqKind {
    /// Every key is positional.
    Indexed,
    /// At least one key is named.
    Keyed,
}

/// The pull producer behind a lazy sequence.
type Producer = Box<dyn FnMut() -> Result<Option<Pair>>>;

enum SeqRepr {
    Materialized(Vec<Pair>),
    /// `None` once the producer has been exhausted or has failed.
    Lazy(RefCell<Option<Producer>>),
}

/// A sequence handle. Cloning shares the underlying representation; for a
/// lazy sequence that means clones share one single-use producer.
#[derive(Clone)]
pub struct Seq {
    repr: Rc<SeqRepr>,
}

impl Seq {
    /// The empty (materialized) sequence.
    pub fn empty() -> Self {
        Self::from_pairs(Vec::new())
    }

    /// A materialized sequence of positional pairs, numbered from zero.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::from_pairs(
            values
                .into_iter()
                .enumerate()
                .map(|(position, value)| Pair::indexed(position, value))
                .collect(),
        )
    }

    /// A materialized sequence from explicit pairs.
    pub fn from_pairs(pairs: Vec<Pair>) -> Self {
        Self {
            repr: Rc::new(SeqRepr::Materialized(pairs)),
        }
    }

    /// A lazy sequence backed by a pull producer. The producer is called
    /// once per requested pair and signals exhaustion with `Ok(None)`.
    pub fn generate<F>(producer: F) -> Self
    where
        F: FnMut() -> Result<Option<Pair>> + 'static,
    {
        Self {
            repr: Rc::new(SeqRepr::Lazy(RefCell::new(Some(Box::new(producer))))),
        }
    }

    /// A lazy sequence of bare values, auto-numbered from zero.
    pub fn generate_values<F>(mut producer: F) -> Self
    where
        F: FnMut() -> Result<Option<Value>> + 'static,
    {
        let mut position = 0usize;
        Self::generate(move || {
            let Some(value) = producer()? else {
                return Ok(None);
            };
            let pair = Pair::indexed(position, value);
            position += 1;
            Ok(Some(pair))
        })
    }

    /// Whether the sequence is backed by a single-use producer.
    pub fn is_lazy(&self) -> bool {
        matches!(&*self.repr, SeqRepr::Lazy(_))
    }

    /// The length, when it is known without forcing anything.
    pub fn known_len(&self) -> Option<usize> {
        match &*self.repr {
            SeqRepr::Materialized(pairs) => Some(pairs.len()),
            SeqRepr::Lazy(_) => None,
        }
    }

    /// Classifies the sequence: [`SeqKind::Keyed`] when any materialized
    /// pair carries a named key, [`SeqKind::Indexed`] otherwise.
    ///
    /// For a lazy sequence the label is advisory (`Indexed`): classifying
    /// honestly would consume the producer, and every pair carries its own
    /// tag, which is what the operators actually honor.
    pub fn kind(&self) -> SeqKind {
        match &*self.repr {
            SeqRepr::Materialized(pairs) => {
                if pairs.iter().any(|pair| !pair.key.is_index()) {
                    SeqKind::Keyed
                } else {
                    SeqKind::Indexed
                }
            }
            SeqRepr::Lazy(_) => SeqKind::Indexed,
        }
    }

    /// A pull cursor over the sequence.
    ///
    /// Cursors over a materialized sequence are independent and
    /// restartable; cursors over a lazy sequence all drain the same
    /// producer.
    pub fn iter(&self) -> SeqIter {
        SeqIter {
            seq: self.clone(),
            position: 0,
        }
    }

    fn pull(&self) -> Result<Option<Pair>> {
        let SeqRepr::Lazy(slot) = &*self.repr else {
            return Ok(None);
        };
        let mut slot = slot.borrow_mut();
        let Some(producer) = slot.as_mut() else {
            return Ok(None);
        };
        match producer() {
            Ok(Some(pair)) => Ok(Some(pair)),
            Ok(None) => {
                *slot = None;
                Ok(None)
            }
            Err(error) => {
                *slot = None;
                Err(error)
            }
        }
    }

    /// Forces the sequence into materialized form.
    ///
    /// Idempotent on materialized sequences. A lazy sequence is drained
    /// exactly once; materializing the same drained producer again yields
    /// an empty sequence.
    ///
    /// # Errors
    ///
    /// Propagates the first production failure.
    pub fn materialize(&self) -> Result<Self> {
        match &*self.repr {
            SeqRepr::Materialized(_) => Ok(self.clone()),
            SeqRepr::Lazy(_) => Ok(Self::from_pairs(self.to_pairs()?)),
        }
    }

    /// The sequence as an ordered pair list, draining a lazy producer.
    ///
    /// # Errors
    ///
    /// Propagates the first production failure.
    pub fn to_pairs(&self) -> Result<Vec<Pair>> {
        match &*self.repr {
            SeqRepr::Materialized(pairs) => Ok(pairs.clone()),
            SeqRepr::Lazy(_) => {
                let mut pairs = Vec::new();
                while let Some(pair) = self.pull()? {
                    pairs.push(pair);
                }
                Ok(pairs)
            }
        }
    }

    /// The sequence's values in order, keys discarded.
    ///
    /// # Errors
    ///
    /// Propagates the first production failure.
    pub fn to_values(&self) -> Result<Vec<Value>> {
        Ok(self.to_pairs()?.into_iter().map(|pair| pair.value).collect())
    }
}

impl PartialEq for Seq {
    /// Materialized sequences compare pairwise; anything involving a lazy
    /// sequence compares by handle identity (comparing contents would
    /// consume the producer).
    fn eq(&self, other: &Self) -> bool {
        if Rc::ptr_eq(&self.repr, &other.repr) {
            return true;
        }
        match (&*self.repr, &*other.repr) {
            (SeqRepr::Materialized(left), SeqRepr::Materialized(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.repr {
            SeqRepr::Materialized(pairs) => formatter.debug_list().entries(pairs).finish(),
            SeqRepr::Lazy(slot) => {
                if slot.borrow().is_some() {
                    formatter.write_str("<lazy>")
                } else {
                    formatter.write_str("<lazy, drained>")
                }
            }
        }
    }
}

/// A pull cursor handed out by [`Seq::iter`].
pub struct SeqIter {
    seq: Seq,
    position: usize,
}

impl SeqIter {
    /// Pulls the next pair.
    ///
    /// # Errors
    ///
    /// Surfaces the producer's element-production failure, after which the
    /// sequence is drained.
    pub fn next_pair(&mut self) -> Result<Option<Pair>> {
        match &*self.seq.repr {
            SeqRepr::Materialized(pairs) => {
                let pair = pairs.get(self.position).cloned();
                if pair.is_some() {
                    self.position += 1;
                }
                Ok(pair)
            }
            SeqRepr::Lazy(_) => self.seq.pull(),
        }
    }
}

impl Iterator for SeqIter {
    type Item = Result<Pair>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair().transpose()
    }
}

/// Classifies a value as an indexed or keyed sequence.
///
/// # Errors
///
/// Fails with [`Error::NotASequence`] when the value is neither a
/// materialized collection nor a lazy producer.
pub fn classify(value: &Value) -> Result<SeqKind> {
    Ok(assert_sequence(value)?.kind())
}

/// Forces a sequence value into materialized form; see
/// [`Seq::materialize`].
///
/// # Errors
///
/// Fails with [`Error::NotASequence`] for non-sequences and propagates
/// production failures.
pub fn materialize(value: &Value) -> Result<Value> {
    Ok(Value::Seq(assert_sequence(value)?.materialize()?))
}

/// Builds a materialized indexed sequence from values.
///
/// ```rust
/// use ramdars::seq;
///
/// let numbers = seq![1, 2, 3];
/// assert_eq!(numbers.known_len(), Some(3));
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::seq::Seq::empty()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::seq::Seq::from_values([$($crate::value::Value::from($value)),+])
    };
}

/// Builds a materialized keyed sequence from `name => value` entries.
///
/// ```rust
/// use ramdars::assoc;
/// use ramdars::seq::SeqKind;
///
/// let config = assoc! { "retries" => 3, "verbose" => true };
/// assert_eq!(config.kind(), SeqKind::Keyed);
/// ```
#[macro_export]
macro_rules! assoc {
    ($($name:expr => $value:expr),* $(,)?) => {
        $crate::seq::Seq::from_pairs(vec![
            $($crate::seq::Pair::named($name, $crate::value::Value::from($value))),*
        ])
    };
}
