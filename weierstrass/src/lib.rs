#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]
#![doc = include_str!("../README.md")]

#[macro_use]
mod macros;

pub mod arithmetic;
pub mod mul;

mod affine;
mod domain;
mod error;
mod field;
mod point;

#[cfg(any(test, feature = "dev"))]
pub mod dev;

#[cfg(feature = "secp256k1")]
mod secp256k1;

pub use crate::{
    affine::AffinePoint,
    domain::{CurveDomain, CurveParams},
    error::{Error, Result},
    point::CurvePoint,
};
pub use num_bigint::{self, BigInt, BigUint};

#[cfg(feature = "secp256k1")]
pub use crate::secp256k1::Secp256k1;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;

    use num_bigint::BigUint;
    use num_traits::Num;

    /// Parse a curve parameter literal: decimal, or hexadecimal with a `0x` prefix.
    ///
    /// Curve parameters are fixed at compile time, so a malformed literal is a
    /// bug in the curve definition.
    pub fn parse_uint(literal: &str) -> BigUint {
        let parsed = match literal.strip_prefix("0x") {
            Some(digits) => BigUint::from_str_radix(digits, 16),
            None => BigUint::from_str_radix(literal, 10),
        };

        match parsed {
            Ok(value) => value,
            Err(_) => panic!("invalid curve parameter literal: {literal}"),
        }
    }
}
