//! Turning heterogeneous arguments into axes.
//!
//! An argument is *rangeable* if it can be read as an ordered, finite,
//! indexable sequence. The accepted shapes are the variants of
//! [`Rangeable`], tried in this order:
//!
//! 1. An integer `n` means `0, 1, ..., n-1`.
//! 2. A pair `(lo, hi)` of integers means `lo, lo+1, ..., hi-1`.
//! 3. Anything that already is a sequence (a `Vec`, slice, array, string,
//!    set, `Range<i64>` or [`MultiRange`]) is used as it is.
//!
//! Statically typed arguments become a `Rangeable` through `From`, so they
//! cannot fail. A dynamically typed [`Value`] goes through
//! `Rangeable::try_from()`, which reports [`Error::NotRangeable`] for the
//! shapes that are not sequences.
//!
//! ```
//! use multirange::{coerce, Dimension, Value};
//! assert_eq!(coerce(3).unwrap().len(), 3);
//! assert_eq!(coerce((5, 9)).unwrap().at(0), Some(Value::Int(5)));
//! assert!(coerce(Value::Bool(true)).is_err());
//! ```

use std::collections::{BTreeSet, HashSet};
use std::convert::{Infallible};
use std::hash::{BuildHasher};
use std::ops::{Range};

use super::{Dimension, Error, MultiRange, Result, Value};
use super::index::{span_len};

/// The shapes of argument accepted by [`coerce()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rangeable {
    /// `n` means `0..n`.
    Int(i64),
    /// `(lo, hi)` means `lo..hi`.
    Pair(i64, i64),
    /// An explicit sequence, in order.
    Seq(Vec<Value>),
    /// A nested product, whose values are its elements.
    Product(MultiRange),
}

impl Rangeable {
    /// Build the concrete [`Axis`] described by `self`.
    ///
    /// Fails with [`Error::TooLarge`] if a span has more than `usize::MAX`
    /// integers, which can only happen on targets narrower than 64 bits.
    pub fn into_axis(self) -> Result<Axis> {
        Ok(match self {
            Rangeable::Int(n) => Axis::span(0..n.max(0))?,
            Rangeable::Pair(lo, hi) => Axis::span(lo..hi.max(lo))?,
            Rangeable::Seq(items) => Axis::Seq(items.into()),
            Rangeable::Product(product) => Axis::Product(product),
        })
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Rangeable {
            fn from(n: $t) -> Self { Rangeable::Int(i64::from(n)) }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

/// `n` is clamped to `i64::MAX`, so `usize::MAX` on a 64-bit target means
/// `0..i64::MAX`.
impl From<usize> for Rangeable {
    fn from(n: usize) -> Self { Rangeable::Int(i64::try_from(n).unwrap_or(i64::MAX)) }
}

impl From<(i32, i32)> for Rangeable {
    fn from((lo, hi): (i32, i32)) -> Self { Rangeable::Pair(lo.into(), hi.into()) }
}

impl From<(i64, i64)> for Rangeable {
    fn from((lo, hi): (i64, i64)) -> Self { Rangeable::Pair(lo, hi) }
}

impl From<Range<i32>> for Rangeable {
    fn from(r: Range<i32>) -> Self { Rangeable::Pair(r.start.into(), r.end.into()) }
}

impl From<Range<i64>> for Rangeable {
    fn from(r: Range<i64>) -> Self { Rangeable::Pair(r.start, r.end) }
}

impl From<&str> for Rangeable {
    fn from(s: &str) -> Self { Rangeable::Seq(s.chars().map(Value::Char).collect()) }
}

impl From<String> for Rangeable {
    fn from(s: String) -> Self { Rangeable::from(s.as_str()) }
}

impl<T: Into<Value>> From<Vec<T>> for Rangeable {
    fn from(items: Vec<T>) -> Self { Rangeable::Seq(items.into_iter().map(Into::into).collect()) }
}

impl<T: Into<Value> + Clone> From<&[T]> for Rangeable {
    fn from(items: &[T]) -> Self { Rangeable::Seq(items.iter().cloned().map(Into::into).collect()) }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Rangeable {
    fn from(items: [T; N]) -> Self { Rangeable::Seq(items.into_iter().map(Into::into).collect()) }
}

/// A set is snapshotted in its iteration order, i.e. sorted.
impl<T: Into<Value>> From<BTreeSet<T>> for Rangeable {
    fn from(items: BTreeSet<T>) -> Self { Rangeable::Seq(items.into_iter().map(Into::into).collect()) }
}

/// A set is snapshotted in its iteration order at the time of the call.
impl<T: Into<Value>, S: BuildHasher> From<HashSet<T, S>> for Rangeable {
    fn from(items: HashSet<T, S>) -> Self { Rangeable::Seq(items.into_iter().map(Into::into).collect()) }
}

impl From<MultiRange> for Rangeable {
    fn from(product: MultiRange) -> Self { Rangeable::Product(product) }
}

impl TryFrom<Value> for Rangeable {
    type Error = Error;

    /// A tuple of exactly two integers is a pair. Any other tuple, list or
    /// string is an explicit sequence. Units, bools and chars are not
    /// rangeable.
    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Int(n) => Ok(Rangeable::Int(n)),
            Value::Tuple(items) => {
                if let [Value::Int(lo), Value::Int(hi)] = items[..] {
                    return Ok(Rangeable::Pair(lo, hi));
                }
                Ok(Rangeable::Seq(items))
            },
            Value::List(items) => Ok(Rangeable::Seq(items)),
            Value::Str(s) => Ok(Rangeable::from(s)),
            other @ (Value::Unit | Value::Bool(_) | Value::Char(_)) => Err(Error::NotRangeable {
                found: format!("{} {}", other.kind(), other),
            }),
        }
    }
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self { match value {} }
}

// ----------------------------------------------------------------------------

/// One coerced axis of a [`MultiRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Axis {
    /// Consecutive integers, computed on demand.
    Span(Range<i64>),
    Seq(Box<[Value]>),
    Product(MultiRange),
}

impl Axis {
    fn span(r: Range<i64>) -> Result<Self> {
        span_len(&r)?;
        Ok(Axis::Span(r))
    }
}

impl Dimension for Axis {
    fn len(&self) -> usize {
        match self {
            Axis::Span(r) => Dimension::len(r),
            Axis::Seq(items) => Dimension::len(items),
            Axis::Product(product) => product.len(),
        }
    }

    fn at(&self, index: usize) -> Option<Value> {
        match self {
            Axis::Span(r) => r.at(index),
            Axis::Seq(items) => items.at(index),
            Axis::Product(product) => Dimension::at(product, index),
        }
    }
}

/// Convert `arg` into an [`Axis`].
///
/// Statically typed arguments always succeed. A [`Value`] fails with
/// [`Error::NotRangeable`] if it is not a sequence.
pub fn coerce<A>(arg: A) -> Result<Axis> where
    A: TryInto<Rangeable>,
    Error: From<A::Error>,
{
    let rangeable = arg.try_into()?;
    let axis = rangeable.into_axis()?;
    tracing::trace!(len = axis.len(), "coerced argument");
    Ok(axis)
}

/// Convert a dynamically typed `value` into an [`Axis`].
pub fn coerce_value(value: Value) -> Result<Axis> {
    coerce(value)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn values(axis: &Axis) -> Vec<Value> {
        (0..axis.len()).filter_map(|i| axis.at(i)).collect()
    }

    fn ints(ns: impl IntoIterator<Item = i64>) -> Vec<Value> {
        ns.into_iter().map(Value::Int).collect()
    }

    #[test]
    fn integer() {
        assert_eq!(values(&coerce(1).unwrap()), ints(0..1));
        assert_eq!(values(&coerce(41usize).unwrap()), ints(0..41));
        assert_eq!(coerce(0).unwrap().len(), 0);
        assert_eq!(coerce(-4).unwrap().len(), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn usize_is_clamped() {
        assert_eq!(Rangeable::from(usize::MAX), Rangeable::Int(i64::MAX));
        assert_eq!(Rangeable::from(1usize << 40), Rangeable::Int(1 << 40));
        assert_eq!(coerce(usize::MAX).unwrap().len(), usize::try_from(i64::MAX).unwrap());
    }

    #[test]
    fn pair() {
        assert_eq!(values(&coerce((5, 9)).unwrap()), ints(5..9));
        assert_eq!(values(&coerce(-2..1i64).unwrap()), ints(-2..1));
        assert_eq!(coerce((9, 5)).unwrap().len(), 0);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn widest_pair() {
        let axis = coerce((i64::MIN, i64::MAX)).unwrap();
        assert_eq!(axis.len(), usize::MAX);
        assert_eq!(axis.at(1 << 63), Some(Value::Int(0)));
    }

    #[test]
    #[cfg(target_pointer_width = "32")]
    fn pair_too_wide() {
        assert_eq!(coerce((0, i64::MAX)), Err(Error::TooLarge));
        assert_eq!(coerce(i64::MAX), Err(Error::TooLarge));
    }

    #[test]
    fn sequences() {
        let expected = vec![Value::from("1"), Value::from(2), Value::from("1234")];
        assert_eq!(values(&coerce(expected.clone()).unwrap()), expected);
        assert_eq!(values(&coerce(&[3u8, 1, 2][..]).unwrap()), ints([3, 1, 2]));
        assert_eq!(values(&coerce(["+", "-"]).unwrap()), vec![Value::from("+"), Value::from("-")]);
        assert_eq!(
            values(&coerce("iamatest").unwrap()),
            "iamatest".chars().map(Value::Char).collect::<Vec<_>>(),
        );
        assert_eq!(coerce("").unwrap().len(), 0);
    }

    #[test]
    fn set_is_snapshotted() {
        let mut set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
        let axis = coerce(set.clone()).unwrap();
        set.insert(0);
        assert_eq!(values(&axis), ints([1, 2, 3]));

        let hashed: HashSet<i32> = [7, 8, 9].into_iter().collect();
        let order: Vec<Value> = hashed.iter().map(|&n| Value::from(n)).collect();
        assert_eq!(values(&coerce(hashed).unwrap()), order);
    }

    #[test]
    fn dynamic() {
        assert_eq!(values(&coerce_value(Value::Int(2)).unwrap()), ints(0..2));
        assert_eq!(values(&coerce_value(Value::from((5, 9))).unwrap()), ints(5..9));
        // Only two-element tuples are pairs.
        assert_eq!(values(&coerce_value(Value::from((1, 2, 3, 4))).unwrap()), ints(1..5));
        assert_eq!(
            values(&coerce_value(Value::from(("a", "b"))).unwrap()),
            vec![Value::from("a"), Value::from("b")],
        );
        assert_eq!(values(&coerce_value(Value::from(vec![5, 9])).unwrap()), ints([5, 9]));
        assert_eq!(
            values(&coerce_value(Value::from("ab")).unwrap()),
            vec![Value::Char('a'), Value::Char('b')],
        );
    }

    #[test]
    fn not_rangeable() {
        for value in [Value::Unit, Value::Bool(false), Value::Char('x')] {
            assert!(matches!(coerce_value(value), Err(Error::NotRangeable {..})));
        }
        assert_eq!(
            coerce(Value::Unit).unwrap_err().to_string(),
            "not rangeable: unit ()",
        );
    }
}
