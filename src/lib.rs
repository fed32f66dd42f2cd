//! A pure-Rust library for iterating over and indexing into cartesian
//! products of heterogeneous ranges.
//!
//! [`MultiRange`] represents the cartesian product of a list of axes. Each
//! axis is built from a *rangeable* argument: an integer `n` (meaning
//! `0..n`), a pair `(lo, hi)` (meaning `lo..hi`), an explicit sequence, a
//! string, a set, or another `MultiRange`. The conversion is done by
//! [`coerce()`], and the accepted shapes are listed by [`Rangeable`].
//!
//! The elements of a `MultiRange` are [`Coordinate`]s, holding one
//! [`Value`] per axis. They are ordered like the digits of a mixed-radix
//! number, with the last axis varying fastest. A `MultiRange` does not store
//! its elements. [`MultiRange::iter()`] computes them one at a time, and
//! [`MultiRange::get()`] computes any one of them directly from its ordinal
//! position, by splitting the ordinal into one digit per axis.
//!
//! `MultiRange` implements [`Dimension`], the trait of things that can be
//! used as an axis, so products nest. The value at position `i` of a nested
//! product is its `i`th `Coordinate`, as a [`Value::Tuple`]. A product of one
//! axis stands for that axis, so its elements are bare values, both from
//! [`MultiRange::elements()`] and when nested.
//!
//! ```
//! use multirange::{multirange, Coordinate};
//! let inner = multirange!["hello", 2..4].unwrap();
//! let outer = multirange![3, inner, "world"].unwrap();
//! assert_eq!(outer.get(0), Ok(Coordinate::from((0, ('h', 2), 'w'))));
//! assert_eq!(outer.get(4), Ok(Coordinate::from((0, ('h', 2), 'd'))));
//! assert_eq!(outer.get(5), Ok(Coordinate::from((0, ('h', 3), 'w'))));
//! assert_eq!(outer.get(10), Ok(Coordinate::from((0, ('e', 2), 'w'))));
//! ```

mod error;
pub use error::{Error, Result};

mod value;
pub use value::{Value, Coordinate};

pub mod index;
pub use index::{Dimension};

mod range;
pub use range::{Rangeable, Axis, coerce, coerce_value};

mod multirange;
pub use multirange::{MultiRange, Iter, Elements};

/// Constructs a [`MultiRange`] from arguments of different types.
///
/// Each argument is converted with [`Rangeable::from()`]. The result is a
/// [`Result`], which is only an error if the product is too large.
///
/// ```
/// use multirange::{multirange, Value};
/// let r = multirange![5].unwrap();
/// assert!(r.elements().eq((0..5).map(Value::Int)));
/// assert!(multirange![].unwrap().is_empty());
/// ```
#[macro_export]
macro_rules! multirange {
    ($($arg:expr),* $(,)?) => {
        $crate::MultiRange::new([$($crate::Rangeable::from($arg)),*])
    };
}
