//! Group operations consumed by scalar multiplication and ECDSA.

use crate::CurveDomain;
use core::fmt::Debug;
use num_bigint::BigUint;

/// Elliptic curve group element.
///
/// Scalar multiplication and the signature protocol only ever see points
/// through this trait, so the coordinate system (affine, projective, ...) and
/// the field arithmetic behind it are up to the implementor. Points have value
/// semantics: every operation returns a new point.
///
/// Equality is group equality, so two representations of the same point must
/// compare equal.
pub trait CurvePoint: Clone + Debug + Eq + Sized + 'static {
    /// Additive identity of the group a.k.a. the point at infinity.
    fn identity() -> Self;

    /// Returns `self + self`.
    fn double(&self) -> Self;

    /// Returns `self + other`.
    fn add(&self, other: &Self) -> Self;

    /// Returns `-self`.
    fn negate(&self) -> Self;

    /// Is this point the point at infinity?
    fn is_identity(&self) -> bool;

    /// Affine x-coordinate as an integer in `[0, p)`, or `None` for the
    /// identity, which has no affine coordinates.
    fn x(&self) -> Option<&BigUint>;

    /// Domain parameters of the curve this point lives on.
    fn domain() -> &'static CurveDomain<Self>;
}
