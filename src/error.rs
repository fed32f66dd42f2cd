/// Errors returned by this crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument matched none of the shapes accepted by [`coerce()`].
    ///
    /// [`coerce()`]: super::coerce
    #[error("not rangeable: {found}")]
    NotRangeable { found: String },

    /// An ordinal or digit was outside `0..len`.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange { index: usize, len: usize },

    /// The number of elements in the product does not fit in a `usize`.
    #[error("product of axis lengths overflows usize")]
    TooLarge,

    /// A digit vector had the wrong number of entries.
    #[error("expected {expected} digits, found {found}")]
    DigitMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
