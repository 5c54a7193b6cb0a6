//! ECDSA signatures.

use num_traits::Zero;
use weierstrass::BigUint;

/// ECDSA signature `(r, s)`.
///
/// Any pair of integers can be held here so that signatures from untrusted
/// sources can be passed to verification as-is; a signature whose components
/// are outside `[1, n)` simply fails to verify.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a signature from its two scalar components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// The `r` component: the x-coordinate of the nonce point, mod `n`.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split into `(r, s)`.
    pub fn split_scalars(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }

    /// Are both components in `[1, n)`?
    pub fn is_in_range(&self, n: &BigUint) -> bool {
        let in_range = |x: &BigUint| !x.is_zero() && x < n;
        in_range(&self.r) && in_range(&self.s)
    }

    /// Serialize as `r || s`, each big endian and left-padded to `width`
    /// bytes. Returns `None` if a component doesn't fit.
    pub fn to_bytes(&self, width: usize) -> Option<Vec<u8>> {
        let mut bytes = Vec::with_capacity(2 * width);

        for component in [&self.r, &self.s] {
            let encoded = component.to_bytes_be();

            if encoded.len() > width {
                return None;
            }

            bytes.resize(bytes.len() + width - encoded.len(), 0);
            bytes.extend_from_slice(&encoded);
        }

        Some(bytes)
    }
}
