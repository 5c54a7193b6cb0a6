//! Message digests.

use crate::{Error, Result};
use weierstrass::BigUint;

#[cfg(feature = "sha256")]
use sha2::{Digest as _, Sha256};

/// Maximum digest size in bytes.
const MAX_DIGEST_SIZE: usize = 32;

/// Message digest `z`: a hash of the signed message, interpreted as a big
/// endian integer of at most 256 bits.
///
/// The digest is reduced modulo the group order when it enters the signature
/// equations; its bits are not truncated to the bit length of the order.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Digest(BigUint);

impl Digest {
    /// Interpret bytes as a big endian integer of at most 256 bits.
    ///
    /// Leading zero bytes do not count towards the width.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
        let bytes = &bytes[leading_zeros..];

        if bytes.len() > MAX_DIGEST_SIZE {
            return Err(Error::InvalidDigest);
        }

        Ok(Self(BigUint::from_bytes_be(bytes)))
    }

    /// Parse a big endian hex string holding a value of at most 256 bits,
    /// with or without a `0x`/`0X` prefix. An odd number of digits and zero
    /// padding beyond 64 digits are accepted.
    pub fn from_hex(encoded: &str) -> Result<Self> {
        let digits = encoded
            .strip_prefix("0x")
            .or_else(|| encoded.strip_prefix("0X"))
            .unwrap_or(encoded);

        let bytes = if digits.len() % 2 == 1 {
            hex::decode(format!("0{digits}"))
        } else {
            hex::decode(digits)
        }
        .map_err(|_| Error::InvalidDigest)?;

        Self::from_bytes(&bytes)
    }

    /// SHA-256 digest of `msg`.
    #[cfg(feature = "sha256")]
    pub fn sha256(msg: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(&Sha256::digest(msg)))
    }

    /// The digest as an integer.
    pub fn as_uint(&self) -> &BigUint {
        &self.0
    }

    /// Serialize as 32 big endian bytes.
    pub fn to_bytes(&self) -> [u8; MAX_DIGEST_SIZE] {
        let bytes = self.0.to_bytes_be();
        let mut out = [0u8; MAX_DIGEST_SIZE];
        out[MAX_DIGEST_SIZE - bytes.len()..].copy_from_slice(&bytes);
        out
    }

    /// The digest reduced modulo the group order `n`.
    pub(crate) fn reduce(&self, n: &BigUint) -> BigUint {
        &self.0 % n
    }
}

impl From<[u8; MAX_DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; MAX_DIGEST_SIZE]) -> Self {
        Self(BigUint::from_bytes_be(&bytes))
    }
}
