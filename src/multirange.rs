use std::iter::{FusedIterator};

use super::{Axis, Coordinate, Dimension, Error, Rangeable, Result, Value};
use super::index::{from_ordinal, increment, to_ordinal, volume};

/// The cartesian product of a list of [`Axis`]es.
///
/// The elements are [`Coordinate`]s, ordered like the digits of a
/// mixed-radix number: the first axis varies slowest and the last axis
/// varies fastest. Element `p` can be computed directly with
/// [`MultiRange::get()`], and agrees with the `p`th element produced by
/// [`MultiRange::iter()`].
///
/// A product of one axis stands for the axis itself: [`MultiRange::element()`]
/// and [`MultiRange::elements()`] give its bare values, and so does a nested
/// product of one axis.
///
/// ```
/// use multirange::{multirange, Coordinate};
/// let r = multirange![["+", "-"], 0..2, "e", 3].unwrap();
/// assert_eq!(r.len(), 12);
/// assert_eq!(r.get(0), Ok(Coordinate::from(("+", 0, 'e', 0))));
/// assert_eq!(r.get(5), Ok(Coordinate::from(("+", 1, 'e', 2))));
/// assert_eq!(r.iter().last(), Some(Coordinate::from(("-", 1, 'e', 2))));
/// ```
///
/// A `MultiRange` with no axes is empty, not a product with a single empty
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiRange {
    axes: Box<[Axis]>,
    shape: Box<[usize]>,
    len: usize,
}

impl MultiRange {
    fn new_inner(axes: Box<[Axis]>) -> Result<Self> {
        let shape: Box<[usize]> = axes.iter().map(Dimension::len).collect();
        let len = if axes.is_empty() { 0 } else { volume(&shape)? };
        tracing::debug!(axes = axes.len(), len, "built multirange");
        Ok(Self {axes, shape, len})
    }

    /// Constructs the product of `args`, in order.
    ///
    /// Fails only with [`Error::TooLarge`], if the product or the width of a
    /// span does not fit in a `usize`. See also the [`multirange!`]
    /// macro, which accepts arguments of different types.
    ///
    /// [`multirange!`]: crate::multirange!
    pub fn new(args: impl IntoIterator<Item=Rangeable>) -> Result<Self> {
        let axes = args.into_iter()
            .map(Rangeable::into_axis)
            .collect::<Result<Box<[Axis]>>>()?;
        Self::new_inner(axes)
    }

    /// Constructs the product of dynamically typed `args`, in order.
    ///
    /// Fails with [`Error::NotRangeable`] if any argument is not rangeable,
    /// in which case nothing is constructed.
    ///
    /// ```
    /// use multirange::{MultiRange, Value, Error};
    /// let r = MultiRange::try_new([Value::from(2), Value::from("ab")]).unwrap();
    /// assert_eq!(r.len(), 4);
    /// let e = MultiRange::try_new([Value::from(2), Value::from(true)]);
    /// assert!(matches!(e, Err(Error::NotRangeable {..})));
    /// ```
    pub fn try_new(args: impl IntoIterator<Item=Value>) -> Result<Self> {
        let axes = args.into_iter()
            .map(super::coerce_value)
            .collect::<Result<Box<[Axis]>>>()?;
        Self::new_inner(axes)
    }

    /// The axes, in order.
    pub fn axes(&self) -> &[Axis] { &self.axes }

    /// The length of each axis, in order.
    pub fn shape(&self) -> &[usize] { &self.shape }

    /// The number of [`Coordinate`]s in `self`.
    pub fn len(&self) -> usize { self.len }

    pub fn is_empty(&self) -> bool { self.len == 0 }

    fn check(&self, ordinal: usize) -> Result<()> {
        if ordinal < self.len { Ok(()) } else { Err(Error::OutOfRange {index: ordinal, len: self.len}) }
    }

    /// Returns the position along each axis of the element at `ordinal`.
    ///
    /// ```
    /// use multirange::multirange;
    /// let r = multirange![12, 21].unwrap();
    /// assert_eq!(r.digits(21), Ok(vec![1, 0]));
    /// ```
    pub fn digits(&self, ordinal: usize) -> Result<Vec<usize>> {
        self.check(ordinal)?;
        let (carry, digits) = from_ordinal(&self.shape, ordinal);
        debug_assert_eq!(carry, 0);
        Ok(digits)
    }

    /// The inverse of [`MultiRange::digits()`].
    pub fn ordinal(&self, digits: &[usize]) -> Result<usize> {
        to_ordinal(&self.shape, digits)
    }

    fn coordinate(&self, digits: &[usize]) -> Result<Coordinate> {
        self.axes.iter().zip(digits).map(|(axis, &d)| axis.get(d)).collect()
    }

    /// Computes the element at `ordinal` without visiting any other.
    ///
    /// Fails with [`Error::OutOfRange`] if `ordinal >= self.len()`.
    ///
    /// ```
    /// use multirange::{multirange, Coordinate, Error};
    /// let r = multirange![12, 21].unwrap();
    /// assert_eq!(r.get(0), Ok(Coordinate::from((0, 0))));
    /// assert_eq!(r.get(21), Ok(Coordinate::from((1, 0))));
    /// assert_eq!(r.get(r.len() - 1), Ok(Coordinate::from((11, 20))));
    /// assert_eq!(r.get(252), Err(Error::OutOfRange {index: 252, len: 252}));
    /// ```
    pub fn get(&self, ordinal: usize) -> Result<Coordinate> {
        let digits = self.digits(ordinal)?;
        self.coordinate(&digits)
    }

    /// Like [`MultiRange::get()`], but a product of one axis gives the bare
    /// value. See [`Coordinate::into_element()`].
    ///
    /// ```
    /// use multirange::{multirange, Value};
    /// assert_eq!(multirange![5].unwrap().element(3), Ok(Value::Int(3)));
    /// assert_eq!(multirange![2, "ab"].unwrap().element(3), Ok(Value::from((1, 'b'))));
    /// ```
    pub fn element(&self, ordinal: usize) -> Result<Value> {
        self.get(ordinal).map(Coordinate::into_element)
    }

    /// Iterates through the coordinates in order.
    ///
    /// Each call starts again from the first element.
    pub fn iter(&self) -> Iter<'_> {
        Iter {range: self, digits: vec![0; self.axes.len()], ordinal: 0}
    }

    /// Like [`MultiRange::iter()`], but yields the same values as
    /// [`MultiRange::element()`].
    ///
    /// ```
    /// use multirange::{multirange, Value};
    /// let r = multirange!["abc"].unwrap();
    /// assert!(r.elements().eq("abc".chars().map(Value::Char)));
    /// ```
    pub fn elements(&self) -> Elements<'_> {
        Elements(self.iter())
    }
}

impl Dimension for MultiRange {
    fn len(&self) -> usize { self.len }

    fn at(&self, index: usize) -> Option<Value> { self.element(index).ok() }

    fn each(&self, mut f: impl FnMut(Value)) {
        for v in self.elements() { f(v); }
    }
}

impl<'a> IntoIterator for &'a MultiRange {
    type Item = Coordinate;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

// ----------------------------------------------------------------------------

/// The return type of [`MultiRange::iter()`].
///
/// Counts through the digits of each ordinal like an odometer, so each step
/// costs one visit per axis that changed plus one per axis to build the
/// [`Coordinate`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    range: &'a MultiRange,
    digits: Vec<usize>,
    ordinal: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.ordinal >= self.range.len { return None; }
        let c = self.range.coordinate(&self.digits)
            .expect("odometer digits stay within the shape");
        self.ordinal += 1;
        increment(&self.range.shape, &mut self.digits);
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.len.saturating_sub(self.ordinal);
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        match self.ordinal.checked_add(n) {
            Some(ordinal) if ordinal < self.range.len => {
                self.digits = from_ordinal(&self.range.shape, ordinal).1;
                self.ordinal = ordinal;
                self.next()
            },
            _ => {
                self.ordinal = self.range.len;
                None
            },
        }
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> FusedIterator for Iter<'a> {}

/// The return type of [`MultiRange::elements()`].
#[derive(Debug, Clone)]
pub struct Elements<'a>(Iter<'a>);

impl<'a> Iterator for Elements<'a> {
    type Item = Value;
    fn next(&mut self) -> Option<Self::Item> { self.0.next().map(Coordinate::into_element) }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
    fn nth(&mut self, n: usize) -> Option<Self::Item> { self.0.nth(n).map(Coordinate::into_element) }
}

impl<'a> ExactSizeIterator for Elements<'a> {}

impl<'a> FusedIterator for Elements<'a> {}

// ----------------------------------------------------------------------------
