//! Error type

use core::fmt;

/// Curve arithmetic errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The value has no inverse for the given modulus.
    NotInvertible,

    /// A negative scalar was supplied where a non-negative one is required.
    NegativeScalar,

    /// The lower bound of a range exceeds its upper bound.
    InvalidRange,

    /// The coordinates do not describe a point on the curve.
    NotOnCurve,

    /// Malformed point encoding.
    InvalidEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NotInvertible => f.write_str("value is not invertible modulo the given modulus"),
            Error::NegativeScalar => f.write_str("scalar must be non-negative"),
            Error::InvalidRange => f.write_str("lower bound exceeds upper bound"),
            Error::NotOnCurve => f.write_str("point is not on the curve"),
            Error::InvalidEncoding => f.write_str("invalid point encoding"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type with the `weierstrass` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
