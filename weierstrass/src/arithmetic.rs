//! Integer arithmetic modulo the group order.

use crate::{Error, Result};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use rand_core::{CryptoRngCore, RngCore};

/// Computes `x⁻¹ mod modulus`.
///
/// Fails with [`Error::NotInvertible`] when `x` and `modulus` are not coprime,
/// which includes `x ≡ 0`, or when the modulus is zero.
pub fn inverse_mod(x: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(Error::NotInvertible);
    }

    let x = x % modulus;

    if x.is_zero() {
        return Err(Error::NotInvertible);
    }

    x.modinv(modulus).ok_or(Error::NotInvertible)
}

/// Draws an integer uniformly from the inclusive range `[lo, hi]`.
///
/// Uses rejection sampling on the minimal number of random bits, so the
/// result carries no modulo bias. Each draw succeeds with probability above
/// one half.
pub fn random_in_range(rng: &mut impl CryptoRngCore, lo: &BigUint, hi: &BigUint) -> Result<BigUint> {
    if lo > hi {
        return Err(Error::InvalidRange);
    }

    let width = hi - lo + BigUint::one();
    let bits = width.bits();
    let len = ((bits + 7) / 8) as usize;
    let excess = len as u64 * 8 - bits;
    let mut bytes = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_be(&bytes) >> excess;

        if candidate < width {
            return Ok(lo + candidate);
        }
    }
}

/// Converts a signed integer into a scalar for multiplication.
///
/// Scalar multiplication is only defined here for non-negative scalars, so a
/// negative input fails with [`Error::NegativeScalar`] rather than being
/// reduced or silently wrapped.
pub fn scalar_from_signed(k: &BigInt) -> Result<BigUint> {
    match k.sign() {
        Sign::Minus => Err(Error::NegativeScalar),
        Sign::NoSign | Sign::Plus => Ok(k.magnitude().clone()),
    }
}
