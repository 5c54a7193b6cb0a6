//! Base field arithmetic over arbitrary-precision integers.
//!
//! Elements are plain [`BigUint`]s kept in canonical form `[0, p)`; nothing
//! here is constant time.

use num_bigint::BigUint;
use num_traits::Zero;

/// The prime field 𝔽ₚ, borrowed from a curve's domain parameters.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BaseField<'a> {
    p: &'a BigUint,
}

impl<'a> BaseField<'a> {
    pub(crate) fn new(p: &'a BigUint) -> Self {
        Self { p }
    }

    /// Returns `a + b mod p`.
    pub(crate) fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % self.p
    }

    /// Returns `a - b mod p`.
    pub(crate) fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + self.p - b % self.p) % self.p
    }

    /// Returns `a * b mod p`.
    pub(crate) fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % self.p
    }

    /// Returns `a² mod p`.
    pub(crate) fn square(&self, a: &BigUint) -> BigUint {
        self.mul(a, a)
    }

    /// Returns `-a mod p`.
    pub(crate) fn neg(&self, a: &BigUint) -> BigUint {
        if a.is_zero() {
            BigUint::zero()
        } else {
            self.p - a
        }
    }

    /// Returns `a⁻¹ mod p` for nonzero `a`.
    ///
    /// Computed as `a^(p - 2)` (Fermat's little theorem), which relies on `p`
    /// being prime. Zero maps to zero.
    pub(crate) fn invert(&self, a: &BigUint) -> BigUint {
        a.modpow(&(self.p - 2u32), self.p)
    }

    /// Evaluate the right-hand side of the curve equation, `x³ + ax + b`.
    pub(crate) fn curve_rhs(&self, a: &BigUint, b: &BigUint, x: &BigUint) -> BigUint {
        let x3 = self.mul(&self.square(x), x);
        self.add(&self.add(&x3, &self.mul(a, x)), b)
    }
}
