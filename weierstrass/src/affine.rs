//! Affine curve points.

use crate::{field::BaseField, CurveDomain, CurveParams, CurvePoint, Error, Result};
use core::{
    marker::PhantomData,
    ops::{Add, Neg},
};
use num_bigint::BigUint;
use num_traits::Zero;

/// SEC1 tag for an uncompressed point.
const UNCOMPRESSED_TAG: u8 = 0x04;

/// SEC1 encoding of the identity.
const IDENTITY_TAG: u8 = 0x00;

/// Point on a Weierstrass curve in affine coordinates.
///
/// The point at infinity is represented by a flag alongside zeroed
/// coordinates, so every point has exactly one representation and structural
/// equality is group equality.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AffinePoint<C: CurveParams> {
    /// x-coordinate
    x: BigUint,

    /// y-coordinate
    y: BigUint,

    /// Is this point the point at infinity?
    infinity: bool,

    curve: PhantomData<C>,
}

impl<C: CurveParams> AffinePoint<C> {
    /// Base point of the curve.
    pub fn generator() -> Self {
        C::domain().generator().clone()
    }

    /// Create a point from affine coordinates, checking that they are reduced
    /// field elements satisfying the curve equation.
    pub fn from_coordinates(x: BigUint, y: BigUint) -> Result<Self> {
        let point = Self::from_coordinates_unchecked(x, y);

        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::NotOnCurve)
        }
    }

    /// Create a point from affine coordinates without validating them.
    ///
    /// Used for hardcoded curve parameters. Arithmetic on a point which is not
    /// on the curve gives meaningless results.
    pub fn from_coordinates_unchecked(x: BigUint, y: BigUint) -> Self {
        Self {
            x,
            y,
            infinity: false,
            curve: PhantomData,
        }
    }

    /// Affine y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.y)
    }

    /// Does this point satisfy `y² = x³ + ax + b` with both coordinates in
    /// `[0, p)`? The identity is always on the curve.
    pub fn is_on_curve(&self) -> bool {
        if self.infinity {
            return true;
        }

        let domain = C::domain();
        let field = BaseField::new(domain.p());

        self.x < *domain.p()
            && self.y < *domain.p()
            && field.square(&self.y) == field.curve_rhs(domain.a(), domain.b(), &self.x)
    }

    /// Serialize as a SEC1 uncompressed point: `0x04 || x || y`, with each
    /// coordinate big endian and padded to the field size. The identity is
    /// encoded as the single byte `0x00`.
    pub fn to_uncompressed_bytes(&self) -> Vec<u8> {
        if self.infinity {
            return vec![IDENTITY_TAG];
        }

        let size = C::domain().field_size();
        let mut bytes = Vec::with_capacity(1 + 2 * size);
        bytes.push(UNCOMPRESSED_TAG);
        bytes.extend_from_slice(&to_padded_bytes(&self.x, size));
        bytes.extend_from_slice(&to_padded_bytes(&self.y, size));
        bytes
    }

    /// Parse a SEC1 uncompressed point (or the identity encoding), checking
    /// that it lies on the curve.
    pub fn from_uncompressed_bytes(bytes: &[u8]) -> Result<Self> {
        let size = C::domain().field_size();

        match bytes.split_first() {
            Some((&IDENTITY_TAG, rest)) if rest.is_empty() => Ok(Self::identity()),
            Some((&UNCOMPRESSED_TAG, rest)) if rest.len() == 2 * size => {
                let (x, y) = rest.split_at(size);
                Self::from_coordinates(BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))
            }
            _ => Err(Error::InvalidEncoding),
        }
    }

    fn field() -> BaseField<'static> {
        BaseField::new(C::domain().p())
    }
}

impl<C: CurveParams> CurvePoint for AffinePoint<C> {
    fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
            curve: PhantomData,
        }
    }

    fn double(&self) -> Self {
        // Points with y = 0 have order two.
        if self.infinity || self.y.is_zero() {
            return Self::identity();
        }

        let field = Self::field();

        // λ = (3x² + a) / 2y
        let numerator = field.add(&field.mul(&BigUint::from(3u32), &field.square(&self.x)), C::domain().a());
        let denominator = field.add(&self.y, &self.y);
        let lambda = field.mul(&numerator, &field.invert(&denominator));

        // x₃ = λ² - 2x, y₃ = λ(x - x₃) - y
        let x3 = field.sub(&field.square(&lambda), &field.add(&self.x, &self.x));
        let y3 = field.sub(&field.mul(&lambda, &field.sub(&self.x, &x3)), &self.y);

        Self::from_coordinates_unchecked(x3, y3)
    }

    fn add(&self, other: &Self) -> Self {
        if self.infinity {
            return other.clone();
        }

        if other.infinity {
            return self.clone();
        }

        if self.x == other.x {
            // Either the same point, or inverses of each other.
            return if self.y == other.y {
                self.double()
            } else {
                Self::identity()
            };
        }

        let field = Self::field();

        // λ = (y₂ - y₁) / (x₂ - x₁)
        let lambda = field.mul(
            &field.sub(&other.y, &self.y),
            &field.invert(&field.sub(&other.x, &self.x)),
        );

        // x₃ = λ² - x₁ - x₂, y₃ = λ(x₁ - x₃) - y₁
        let x3 = field.sub(&field.sub(&field.square(&lambda), &self.x), &other.x);
        let y3 = field.sub(&field.mul(&lambda, &field.sub(&self.x, &x3)), &self.y);

        Self::from_coordinates_unchecked(x3, y3)
    }

    fn negate(&self) -> Self {
        if self.infinity {
            return self.clone();
        }

        Self::from_coordinates_unchecked(self.x.clone(), Self::field().neg(&self.y))
    }

    fn is_identity(&self) -> bool {
        self.infinity
    }

    fn x(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.x)
    }

    fn domain() -> &'static CurveDomain<Self> {
        C::domain()
    }
}

impl<C: CurveParams> Default for AffinePoint<C> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<C: CurveParams> Add<&AffinePoint<C>> for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> AffinePoint<C> {
        CurvePoint::add(self, other)
    }
}

impl<C: CurveParams> Add<&AffinePoint<C>> for AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn add(self, other: &AffinePoint<C>) -> AffinePoint<C> {
        CurvePoint::add(&self, other)
    }
}

impl<C: CurveParams> Neg for &AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        self.negate()
    }
}

impl<C: CurveParams> Neg for AffinePoint<C> {
    type Output = AffinePoint<C>;

    fn neg(self) -> AffinePoint<C> {
        self.negate()
    }
}

/// Big-endian bytes of `value`, left-padded with zeros to `size`.
fn to_padded_bytes(value: &BigUint, size: usize) -> Vec<u8> {
    let bytes = value.to_bytes_be();
    let mut padded = vec![0u8; size.saturating_sub(bytes.len())];
    padded.extend_from_slice(&bytes);
    padded
}
