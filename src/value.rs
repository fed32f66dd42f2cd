//! The element type shared by every axis of a [`MultiRange`].
//!
//! The axes of one product can hold quite different things: integers from a
//! span, characters from a string, names from a list, or whole coordinates
//! of a nested product. [`Value`] is the closed set of element shapes, and
//! [`Coordinate`] is one element of the product, holding one `Value` per
//! axis.
//!
//! Most Rust scalars and tuples convert into a `Value` with `into()`, which
//! keeps test expectations short:
//!
//! ```
//! use multirange::{Value, Coordinate};
//! let c = Coordinate::from((0, ("+", 'e')));
//! assert_eq!(c[1], Value::Tuple(vec!["+".into(), 'e'.into()]));
//! assert_eq!(c.to_string(), r#"(0, ("+", 'e'))"#);
//! ```
//!
//! [`MultiRange`]: super::MultiRange

use std::fmt;
use std::ops::{Deref};

use itertools::Itertools as _;
use serde::Serialize;

/// One element of an axis.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Char(char),
    Str(String),
    /// A fixed-arity group, including the coordinates of nested products.
    Tuple(Vec<Value>),
    List(Vec<Value>),
}

impl Value {
    /// A short name for the shape of `self`, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "()"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Char(c) => write!(f, "{:?}", c),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Tuple(items) => write_tuple(f, items),
            Value::List(items) => write!(f, "[{}]", items.iter().format(", ")),
        }
    }
}

fn write_tuple(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    match items {
        [only] => write!(f, "({},)", only),
        _ => write!(f, "({})", items.iter().format(", ")),
    }
}

// ----------------------------------------------------------------------------

impl From<()> for Value {
    fn from((): ()) -> Self { Value::Unit }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<char> for Value {
    fn from(c: char) -> Self { Value::Char(c) }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Value {
            fn from(n: $t) -> Self { Value::Int(i64::from(n)) }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Str(s.to_owned()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self { Value::List(items.into_iter().map(Into::into).collect()) }
}

impl From<Coordinate> for Value {
    fn from(c: Coordinate) -> Self { Value::Tuple(c.0) }
}

macro_rules! impl_from_tuple {
    ($($t:ident $n:tt),+) => {
        impl<$($t: Into<Value>),+> From<($($t,)+)> for Value {
            fn from(t: ($($t,)+)) -> Self { Value::Tuple(vec![$(t.$n.into()),+]) }
        }

        impl<$($t: Into<Value>),+> From<($($t,)+)> for Coordinate {
            fn from(t: ($($t,)+)) -> Self { Coordinate(vec![$(t.$n.into()),+]) }
        }
    };
}

impl_from_tuple!(A 0);
impl_from_tuple!(A 0, B 1);
impl_from_tuple!(A 0, B 1, C 2);
impl_from_tuple!(A 0, B 1, C 2, D 3);
impl_from_tuple!(A 0, B 1, C 2, D 3, E 4);

// ----------------------------------------------------------------------------

/// One element of a [`MultiRange`]: a `Value` per axis, in axis order.
///
/// [`MultiRange`]: super::MultiRange
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Coordinate(Vec<Value>);

impl Coordinate {
    pub fn into_inner(self) -> Vec<Value> { self.0 }

    /// Converts `self` into the element it stands for: the only `Value` if
    /// there is exactly one, otherwise a [`Value::Tuple`].
    ///
    /// ```
    /// use multirange::{Coordinate, Value};
    /// assert_eq!(Coordinate::from((7,)).into_element(), Value::Int(7));
    /// assert_eq!(Coordinate::from((7, 'x')).into_element(), Value::from((7, 'x')));
    /// ```
    pub fn into_element(mut self) -> Value {
        match self.0.len() {
            1 => self.0.remove(0),
            _ => Value::Tuple(self.0),
        }
    }
}

impl Deref for Coordinate {
    type Target = [Value];
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl From<Vec<Value>> for Coordinate {
    fn from(values: Vec<Value>) -> Self { Coordinate(values) }
}

impl FromIterator<Value> for Coordinate {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Coordinate(iter.into_iter().collect())
    }
}

impl IntoIterator for Coordinate {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write_tuple(f, &self.0) }
}

// ----------------------------------------------------------------------------
