//! Binary double-and-add.

use super::ScalarProduct;
use crate::CurvePoint;
use num_bigint::BigUint;
use num_traits::Zero;

/// Computes `k·point` by scanning the bits of `k` from most to least
/// significant.
///
/// The accumulator is seeded with `point` at the top set bit, which costs
/// nothing. Every later bit costs one doubling, and each later set bit one
/// addition, so for `k > 0` this performs `bits(k) - 1` doublings and
/// `popcount(k) - 1` additions.
pub fn double_and_add<P: CurvePoint>(k: &BigUint, point: &P) -> ScalarProduct<P> {
    // There is no top set bit to seed from.
    if k.is_zero() {
        return ScalarProduct::identity();
    }

    let mut acc = point.clone();
    let mut doublings = 0;
    let mut additions = 0;

    // NB, we reverse here, so we are going from MSB to LSB, skipping the seed bit
    for i in (0..k.bits() - 1).rev() {
        acc = acc.double();
        doublings += 1;

        if k.bit(i) {
            acc = acc.add(point);
            additions += 1;
        }
    }

    ScalarProduct {
        point: acc,
        doublings,
        additions,
    }
}

#[cfg(test)]
mod tests {
    use super::double_and_add;
    use crate::{
        dev::{Tiny7, Toy65521},
        AffinePoint, CurvePoint,
    };
    use num_bigint::BigUint;

    #[test]
    fn zero_is_identity() {
        let g = AffinePoint::<Toy65521>::generator();
        let product = double_and_add(&BigUint::from(0u32), &g);

        assert!(product.point.is_identity());
        assert_eq!((product.doublings, product.additions), (0, 0));
    }

    #[test]
    fn one_is_free() {
        let g = AffinePoint::<Toy65521>::generator();
        let product = double_and_add(&BigUint::from(1u32), &g);

        assert_eq!(product.point, g);
        assert_eq!((product.doublings, product.additions), (0, 0));
    }

    #[test]
    fn five_times_generator() {
        let g = AffinePoint::<Tiny7>::generator();
        let expected = g.double().double().add(&g);
        let product = double_and_add(&BigUint::from(5u32), &g);

        assert_eq!(product.point, expected);
        assert_eq!(product.point, AffinePoint::from_coordinates(5u32.into(), 5u32.into()).unwrap());

        // 0b101: two doublings, one addition.
        assert_eq!((product.doublings, product.additions), (2, 1));
    }

    #[test]
    fn operation_counts() {
        let g = AffinePoint::<Toy65521>::generator();

        for k in 1u64..=600 {
            let product = double_and_add(&BigUint::from(k), &g);
            assert_eq!(product.doublings, (64 - k.leading_zeros() - 1) as usize);
            assert_eq!(product.additions, (k.count_ones() - 1) as usize);
        }
    }

    #[test]
    fn identity_point() {
        let identity = AffinePoint::<Toy65521>::identity();
        assert!(double_and_add(&BigUint::from(12345u32), &identity).point.is_identity());
    }
}
