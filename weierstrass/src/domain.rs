//! Curve domain parameters.

use crate::AffinePoint;
use core::fmt::Debug;
use core::hash::Hash;
use num_bigint::BigUint;

/// Domain parameters `(p, a, b, G, n, h)` of a short Weierstrass curve
/// `y² = x³ + ax + b` over the prime field of order `p`.
///
/// The generator is assumed to lie on the curve and to have order `n`; neither
/// is re-checked here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CurveDomain<P> {
    p: BigUint,
    a: BigUint,
    b: BigUint,
    generator: P,
    order: BigUint,
    cofactor: u32,
}

impl<P> CurveDomain<P> {
    /// Assemble domain parameters.
    pub fn new(p: BigUint, a: BigUint, b: BigUint, generator: P, order: BigUint, cofactor: u32) -> Self {
        Self {
            p,
            a,
            b,
            generator,
            order,
            cofactor,
        }
    }

    /// Order of the base field.
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Base point `G`.
    pub fn generator(&self) -> &P {
        &self.generator
    }

    /// Order `n` of the subgroup generated by `G`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Cofactor `h`.
    pub fn cofactor(&self) -> u32 {
        self.cofactor
    }

    /// Size in bytes of a serialized base field element.
    pub fn field_size(&self) -> usize {
        ((self.p.bits() + 7) / 8) as usize
    }
}

/// Zero-sized marker for a concrete curve, carrying its domain parameters.
///
/// Implement this with [`define_curve!`](crate::define_curve).
pub trait CurveParams:
    Copy + Clone + Debug + Default + Eq + PartialEq + Ord + PartialOrd + Hash + Send + Sync + 'static
{
    /// Domain parameters, built once and shared for the life of the process.
    fn domain() -> &'static CurveDomain<AffinePoint<Self>>;
}
