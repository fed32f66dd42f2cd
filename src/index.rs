use std::ops::{Range};

use super::{Error, Result, Value};

/// Implemented by types that can be used as one axis of a [`MultiRange`].
///
/// A `Dimension` is an ordered, finite sequence of [`Value`]s that knows its
/// own length and can produce the value at any position without visiting the
/// others. [`MultiRange`] itself implements `Dimension`, which is how products
/// nest: the value at position `i` of a product is its `i`th [`Coordinate`],
/// as a [`Value::Tuple`], or the bare value if the product has one axis.
///
/// [`MultiRange`]: super::MultiRange
/// [`Coordinate`]: super::Coordinate
pub trait Dimension {
    /// Returns the number of values in `self`.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns the value at `index`, or `None` if `index >= self.len()`.
    fn at(&self, index: usize) -> Option<Value>;

    /// Like [`Dimension::at()`] but reports an [`Error::OutOfRange`].
    fn get(&self, index: usize) -> Result<Value> {
        self.at(index).ok_or(Error::OutOfRange {index, len: self.len()})
    }

    /// Equivalent to, but often more efficient than,
    /// ```text
    /// for i in 0..self.len() { f(self.at(i).unwrap()); }
    /// ```
    fn each(&self, mut f: impl FnMut(Value)) where Self: Sized {
        for i in 0..self.len() {
            if let Some(v) = self.at(i) { f(v); }
        }
    }
}

/// Returns the number of integers in `span`, or [`Error::TooLarge`] if that
/// does not fit in a `usize`.
pub fn span_len(span: &Range<i64>) -> Result<usize> {
    if span.end <= span.start { return Ok(0); }
    usize::try_from(span.end.abs_diff(span.start)).map_err(|_| Error::TooLarge)
}

/// A span wider than `usize::MAX` reports `usize::MAX`. [`coerce()`] never
/// builds such a span; it reports [`Error::TooLarge`] instead.
///
/// [`coerce()`]: super::coerce
impl Dimension for Range<i64> {
    fn len(&self) -> usize { span_len(self).unwrap_or(usize::MAX) }

    fn at(&self, index: usize) -> Option<Value> {
        if index >= Dimension::len(self) { return None; }
        let offset = u64::try_from(index).ok()?;
        self.start.checked_add_unsigned(offset).map(Value::Int)
    }

    fn each(&self, mut f: impl FnMut(Value)) {
        for n in self.clone() { f(Value::Int(n)); }
    }
}

impl Dimension for [Value] {
    fn len(&self) -> usize { <[Value]>::len(self) }
    fn at(&self, index: usize) -> Option<Value> { <[Value]>::get(self, index).cloned() }
}

impl Dimension for Box<[Value]> {
    fn len(&self) -> usize { <[Value]>::len(self) }
    fn at(&self, index: usize) -> Option<Value> { <[Value]>::get(self, index).cloned() }

    fn each(&self, mut f: impl FnMut(Value)) {
        for v in self.iter() { f(v.clone()); }
    }
}

impl<D: Dimension + ?Sized> Dimension for &D {
    fn len(&self) -> usize { (**self).len() }
    fn at(&self, index: usize) -> Option<Value> { (**self).at(index) }
}

// ----------------------------------------------------------------------------

/// Returns the product of `lengths`, or [`Error::TooLarge`] on overflow.
///
/// The product of no lengths is `1`, the number of ways of choosing nothing.
/// [`MultiRange`] treats an empty product as having no elements; that rule
/// belongs to it, not to the arithmetic.
///
/// [`MultiRange`]: super::MultiRange
pub fn volume(lengths: &[usize]) -> Result<usize> {
    lengths.iter().try_fold(1usize, |acc, &l| acc.checked_mul(l).ok_or(Error::TooLarge))
}

/// Splits `ordinal` into one digit per entry of `lengths`, most significant
/// first, using each length as the radix of its digit.
///
/// Returns `ordinal / volume(lengths)` and the digits of
/// `ordinal % volume(lengths)`. The quotient is zero exactly when `ordinal`
/// is in range.
///
/// ```
/// use multirange::index::from_ordinal;
/// assert_eq!(from_ordinal(&[12, 21], 21), (0, vec![1, 0]));
/// assert_eq!(from_ordinal(&[12, 21], 251), (0, vec![11, 20]));
/// assert_eq!(from_ordinal(&[2, 3], 7), (1, vec![0, 1]));
/// ```
///
/// # Panics
///
/// Panics if any entry of `lengths` is zero.
pub fn from_ordinal(lengths: &[usize], ordinal: usize) -> (usize, Vec<usize>) {
    let mut digits = vec![0; lengths.len()];
    let mut index = ordinal;
    for (digit, &length) in digits.iter_mut().zip(lengths).rev() {
        *digit = index % length;
        index /= length;
    }
    (index, digits)
}

/// The inverse of [`from_ordinal()`] for in-range digits.
///
/// Returns [`Error::DigitMismatch`] if there are not as many `digits` as
/// `lengths`, and [`Error::OutOfRange`] if a digit is not less than its
/// length.
///
/// ```
/// use multirange::index::to_ordinal;
/// assert_eq!(to_ordinal(&[12, 21], &[1, 0]), Ok(21));
/// assert!(to_ordinal(&[12, 21], &[0, 21]).is_err());
/// ```
pub fn to_ordinal(lengths: &[usize], digits: &[usize]) -> Result<usize> {
    if digits.len() != lengths.len() {
        return Err(Error::DigitMismatch {expected: lengths.len(), found: digits.len()});
    }
    let mut index = 0usize;
    for (&digit, &length) in digits.iter().zip(lengths) {
        if digit >= length { return Err(Error::OutOfRange {index: digit, len: length}); }
        index = index.checked_mul(length).and_then(|i| i.checked_add(digit)).ok_or(Error::TooLarge)?;
    }
    Ok(index)
}

/// Advances `digits` to the next mixed-radix number, last digit fastest.
///
/// Returns `false`, leaving `digits` all zero, when it wraps around.
pub(crate) fn increment(lengths: &[usize], digits: &mut [usize]) -> bool {
    for (digit, &length) in digits.iter_mut().zip(lengths).rev() {
        *digit += 1;
        if *digit < length { return true; }
        *digit = 0;
    }
    false
}

// ----------------------------------------------------------------------------
