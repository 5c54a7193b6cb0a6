//! ECDSA verifier

use crate::{Digest, Error, Result, Signature};
use core::marker::PhantomData;
use weierstrass::{
    arithmetic::inverse_mod,
    mul::{DoubleAndAdd, ScalarMul},
    AffinePoint, CurveParams, CurvePoint,
};

/// ECDSA verification key (i.e. public key): the point `Q = d·G`.
///
/// Generic over the point type `P` and the scalar multiplication strategy `M`
/// used during verification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey<P, M = DoubleAndAdd> {
    point: P,
    multiplier: PhantomData<M>,
}

impl<P, M> VerifyingKey<P, M>
where
    P: CurvePoint,
    M: ScalarMul,
{
    /// Initialize [`VerifyingKey`] from a public point.
    ///
    /// The identity is rejected: it is `d·G` for no valid secret scalar.
    pub fn from_point(point: P) -> Result<Self> {
        if point.is_identity() {
            return Err(Error::InvalidPublicKey);
        }

        Ok(Self {
            point,
            multiplier: PhantomData,
        })
    }

    /// The public point `Q`.
    pub fn as_point(&self) -> &P {
        &self.point
    }

    /// Verify `signature` over the message digest `z`.
    ///
    /// Returns `Ok(false)` for any signature that does not verify, including
    /// malformed ones with a component outside `[1, n)` and those for which
    /// `u₁·G + u₂·Q` is the identity. Errors are reserved for failed arithmetic,
    /// which indicates broken domain parameters rather than a bad signature.
    pub fn verify_prehash(&self, digest: &Digest, signature: &Signature) -> Result<bool> {
        let domain = P::domain();
        let n = domain.order();

        if !signature.is_in_range(n) {
            tracing::trace!("signature component outside [1, n)");
            return Ok(false);
        }

        let w = inverse_mod(signature.s(), n)?;
        let u1 = (digest.reduce(n) * &w) % n;
        let u2 = (signature.r() * &w) % n;

        let x = M::mul(&u1, domain.generator())
            .point
            .add(&M::mul(&u2, &self.point).point);

        match x.x() {
            Some(x) => Ok(&(x % n) == signature.r()),
            None => {
                tracing::trace!("u1·G + u2·Q is the identity");
                Ok(false)
            }
        }
    }
}

impl<C, M> VerifyingKey<AffinePoint<C>, M>
where
    C: CurveParams,
    M: ScalarMul,
{
    /// Initialize [`VerifyingKey`] from a SEC1 uncompressed point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_point(AffinePoint::from_uncompressed_bytes(bytes)?)
    }

    /// Serialize this [`VerifyingKey`] as a SEC1 uncompressed point.
    pub fn to_sec1_bytes(&self) -> Vec<u8> {
        self.point.to_uncompressed_bytes()
    }
}
