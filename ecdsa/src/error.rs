//! Error type

use core::fmt;

/// ECDSA errors.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Curve or modular arithmetic failed.
    Arithmetic(weierstrass::Error),

    /// The nonce produced `r = 0` or `s = 0`; sign again with a fresh one.
    DegenerateNonce,

    /// No usable nonce was found within the configured number of attempts.
    RetryLimitExceeded {
        /// Number of nonces tried.
        attempts: u32,
    },

    /// Secret scalar outside `[1, n)`.
    InvalidSecretKey,

    /// Public key is the identity.
    InvalidPublicKey,

    /// Digest wider than 256 bits, or not valid hex.
    InvalidDigest,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Arithmetic(err) => write!(f, "arithmetic error: {err}"),
            Error::DegenerateNonce => f.write_str("nonce produced a zero signature component"),
            Error::RetryLimitExceeded { attempts } => {
                write!(f, "no usable nonce found in {attempts} attempts")
            }
            Error::InvalidSecretKey => f.write_str("secret scalar out of range"),
            Error::InvalidPublicKey => f.write_str("public key is the identity"),
            Error::InvalidDigest => f.write_str("invalid message digest"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Arithmetic(err) => Some(err),
            _ => None,
        }
    }
}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Self {
        Error::Arithmetic(err)
    }
}

/// Result type with the `weierstrass-ecdsa` crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
