//! Scalar multiplication.
//!
//! Two double-and-add variants are provided which always agree on the
//! resulting point but differ in how many group additions they spend:
//!
//! - [`double_and_add`] walks the binary expansion of the scalar.
//! - [`naf_double_and_add`] walks its signed non-adjacent form, trading runs of
//!   set bits for a single subtraction and addition.
//!
//! Both report the number of doublings and additions performed, which makes
//! the difference in cost observable.

mod binary;
mod naf;

pub use self::{
    binary::double_and_add,
    naf::{naf_digits, naf_double_and_add},
};

use crate::CurvePoint;
use num_bigint::BigUint;

/// Result of a scalar multiplication `k·P`, along with its operation counts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScalarProduct<P> {
    /// The product `k·P`.
    pub point: P,

    /// Number of point doublings performed.
    pub doublings: usize,

    /// Number of point additions performed.
    pub additions: usize,
}

impl<P: CurvePoint> ScalarProduct<P> {
    /// The product for `k = 0`, which costs nothing.
    pub(crate) fn identity() -> Self {
        Self {
            point: P::identity(),
            doublings: 0,
            additions: 0,
        }
    }

    /// Discard the operation counts.
    pub fn into_point(self) -> P {
        self.point
    }
}

/// Scalar multiplication strategy.
///
/// Lets protocol code be generic over the multiplication algorithm. All
/// implementations must produce the same point for the same inputs.
pub trait ScalarMul {
    /// Computes `k·point`.
    fn mul<P: CurvePoint>(k: &BigUint, point: &P) -> ScalarProduct<P>;
}

/// Binary double-and-add, see [`double_and_add`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DoubleAndAdd;

impl ScalarMul for DoubleAndAdd {
    fn mul<P: CurvePoint>(k: &BigUint, point: &P) -> ScalarProduct<P> {
        double_and_add(k, point)
    }
}

/// Signed non-adjacent form double-and-add, see [`naf_double_and_add`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Naf;

impl ScalarMul for Naf {
    fn mul<P: CurvePoint>(k: &BigUint, point: &P) -> ScalarProduct<P> {
        naf_double_and_add(k, point)
    }
}
