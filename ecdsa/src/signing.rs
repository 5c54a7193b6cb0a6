//! ECDSA signer

use crate::{Digest, Error, Result, Signature, VerifyingKey};
use core::{fmt, num::NonZeroU32};
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use weierstrass::{
    arithmetic::{inverse_mod, random_in_range},
    mul::{DoubleAndAdd, ScalarMul},
    BigUint, CurvePoint,
};

/// ECDSA signing key: a secret scalar `d ∈ [1, n)`.
///
/// Generic over the point type `P` and the scalar multiplication strategy `M`
/// used to compute `k·G` while signing (and by the derived
/// [`VerifyingKey`]).
#[derive(Clone)]
pub struct SigningKey<P, M = DoubleAndAdd> {
    /// Secret scalar value
    secret_scalar: BigUint,

    /// Verifying key which corresponds to this signing key.
    verifying_key: VerifyingKey<P, M>,

    /// Optional cap on nonces drawn per signature.
    max_attempts: Option<NonZeroU32>,
}

impl<P, M> SigningKey<P, M>
where
    P: CurvePoint,
    M: ScalarMul,
{
    /// Initialize a signing key from a secret scalar, which must be in
    /// `[1, n)`.
    pub fn new(secret_scalar: BigUint) -> Result<Self> {
        let n = P::domain().order();

        if secret_scalar.is_zero() || &secret_scalar >= n {
            return Err(Error::InvalidSecretKey);
        }

        let public_point = M::mul(&secret_scalar, P::domain().generator()).point;
        let verifying_key = VerifyingKey::from_point(public_point)?;

        Ok(Self {
            secret_scalar,
            verifying_key,
            max_attempts: None,
        })
    }

    /// Generate a random signing key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let n = P::domain().order();
        Self::new(random_in_range(rng, &BigUint::one(), &(n - 1u32))?)
    }

    /// Limit the number of nonces tried per signature.
    ///
    /// Signing retries until a nonce yields nonzero `r` and `s`, which fails
    /// with negligible probability on a real curve. By default there is no
    /// limit; when one is set, exceeding it returns
    /// [`Error::RetryLimitExceeded`].
    pub fn with_max_attempts(mut self, max_attempts: NonZeroU32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey<P, M> {
        &self.verifying_key
    }

    /// The secret scalar `d`.
    pub fn secret_scalar(&self) -> &BigUint {
        &self.secret_scalar
    }

    /// Sign the message digest `z` with a fresh nonce drawn from `rng`.
    ///
    /// Nonces are drawn uniformly from `[1, n)`. One which produces `r = 0` or
    /// `s = 0` is discarded and another is drawn.
    pub fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        digest: &Digest,
    ) -> Result<Signature> {
        let upper = P::domain().order() - 1u32;
        let mut attempts = 0u32;

        loop {
            if let Some(max_attempts) = self.max_attempts {
                if attempts >= max_attempts.get() {
                    return Err(Error::RetryLimitExceeded { attempts });
                }
            }

            attempts = attempts.saturating_add(1);
            let k = random_in_range(rng, &BigUint::one(), &upper)?;

            match self.sign_prehash_with_nonce(&k, digest) {
                Err(Error::DegenerateNonce) => {
                    tracing::debug!(attempts, "nonce produced a zero signature component, retrying");
                }
                result => return result,
            }
        }
    }

    /// Sign the message digest `z` using the given ephemeral scalar `k`.
    ///
    /// This is a low-level primitive: `k` must be secret, uniformly random,
    /// and never reused, or the secret scalar leaks. Prefer
    /// [`SigningKey::sign_prehash_with_rng`].
    ///
    /// Fails with [`Error::DegenerateNonce`] if `k` yields `r = 0` or
    /// `s = 0`, and with an arithmetic error if `k` is not invertible
    /// modulo `n`.
    #[allow(non_snake_case)]
    pub fn sign_prehash_with_nonce(&self, k: &BigUint, digest: &Digest) -> Result<Signature> {
        let domain = P::domain();
        let n = domain.order();

        let k_inverse = inverse_mod(k, n)?;

        // Compute 𝐑 = 𝑘×𝑮
        let R = M::mul(k, domain.generator()).point;

        // Reduce the x-coordinate of 𝐑 (element of base field) into the
        // scalar field
        let r = match R.x() {
            Some(x) => x % n,
            None => return Err(Error::DegenerateNonce),
        };

        if r.is_zero() {
            return Err(Error::DegenerateNonce);
        }

        // Compute `s` as a signature over `r` and `z`.
        let z = digest.reduce(n);
        let s = (k_inverse * ((z + &r * &self.secret_scalar) % n)) % n;

        if s.is_zero() {
            return Err(Error::DegenerateNonce);
        }

        Ok(Signature::new(r, s))
    }
}

impl<P: fmt::Debug, M: fmt::Debug> fmt::Debug for SigningKey<P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .field("max_attempts", &self.max_attempts)
            .finish_non_exhaustive()
    }
}
