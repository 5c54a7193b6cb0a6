//! Double-and-add over the signed non-adjacent form (NAF) of the scalar.

use super::ScalarProduct;
use crate::CurvePoint;
use num_bigint::BigUint;
use num_traits::Zero;

/// Returns the signed non-adjacent form of `k`, least significant digit first.
///
/// Every digit is in `{-1, 0, 1}`, no two adjacent digits are both nonzero,
/// and `sum(digits[i] * 2^i) == k`. The expansion is at most one digit longer
/// than the binary one, and empty for zero.
pub fn naf_digits(k: &BigUint) -> Vec<i8> {
    let mut k = k.clone();
    let mut digits = Vec::with_capacity(k.bits() as usize + 1);

    while !k.is_zero() {
        let digit = if k.bit(0) {
            // 2 - (k mod 4): 1 when k ≡ 1, -1 when k ≡ 3 (mod 4)
            if k.bit(1) {
                k += 1u32;
                -1
            } else {
                k -= 1u32;
                1
            }
        } else {
            0
        };

        k >>= 1u32;
        digits.push(digit);
    }

    digits
}

/// Computes `k·point` by scanning the NAF digits of `k` from most to least
/// significant.
///
/// Works like [`double_and_add`](super::double_and_add), with `-point`
/// precomputed for the negative digits: the top nonzero digit seeds the
/// accumulator with `point` or `-point` for free, then every later digit costs
/// one doubling and every later nonzero digit one addition.
///
/// Since NAF has on average a third of its digits nonzero instead of half,
/// this needs fewer additions than the binary method for most scalars.
pub fn naf_double_and_add<P: CurvePoint>(k: &BigUint, point: &P) -> ScalarProduct<P> {
    if k.is_zero() {
        return ScalarProduct::identity();
    }

    let neg_point = point.negate();
    let mut acc: Option<P> = None;
    let mut doublings = 0;
    let mut additions = 0;

    for digit in naf_digits(k).into_iter().rev() {
        let addend = match digit {
            1 => Some(point),
            -1 => Some(&neg_point),
            _ => None,
        };

        acc = match (acc, addend) {
            // Leading zeros
            (None, None) => None,
            // Seed
            (None, Some(addend)) => Some(addend.clone()),
            (Some(acc), addend) => {
                let mut acc = acc.double();
                doublings += 1;

                if let Some(addend) = addend {
                    acc = acc.add(addend);
                    additions += 1;
                }

                Some(acc)
            }
        };
    }

    ScalarProduct {
        point: acc.unwrap_or_else(P::identity),
        doublings,
        additions,
    }
}

#[cfg(test)]
mod tests {
    use super::{naf_digits, naf_double_and_add};
    use crate::{
        dev::Toy65521,
        mul::double_and_add,
        AffinePoint, CurvePoint,
    };
    use num_bigint::{BigInt, BigUint};

    fn from_digits(digits: &[i8]) -> BigInt {
        digits
            .iter()
            .rev()
            .fold(BigInt::from(0), |acc, &digit| acc * 2 + digit)
    }

    #[test]
    fn digits_of_small_values() {
        assert!(naf_digits(&BigUint::from(0u32)).is_empty());
        assert_eq!(naf_digits(&BigUint::from(1u32)), [1]);
        assert_eq!(naf_digits(&BigUint::from(3u32)), [-1, 0, 1]);
        assert_eq!(naf_digits(&BigUint::from(7u32)), [-1, 0, 0, 1]);
        assert_eq!(naf_digits(&BigUint::from(5u32)), [1, 0, 1]);
    }

    #[test]
    fn digits_are_non_adjacent() {
        for k in 0u32..5000 {
            let digits = naf_digits(&BigUint::from(k));

            assert_eq!(from_digits(&digits), BigInt::from(k));
            assert!(digits.iter().all(|d| (-1..=1).contains(d)));
            assert!(digits.windows(2).all(|w| w[0] == 0 || w[1] == 0));
            assert!(digits.len() <= (32 - k.leading_zeros()) as usize + 1);
            assert_ne!(digits.last(), Some(&0));
        }
    }

    #[test]
    fn zero_is_identity() {
        let g = AffinePoint::<Toy65521>::generator();
        let product = naf_double_and_add(&BigUint::from(0u32), &g);

        assert!(product.point.is_identity());
        assert_eq!((product.doublings, product.additions), (0, 0));
    }

    #[test]
    fn one_is_free() {
        let g = AffinePoint::<Toy65521>::generator();
        let product = naf_double_and_add(&BigUint::from(1u32), &g);

        assert_eq!(product.point, g);
        assert_eq!((product.doublings, product.additions), (0, 0));
    }

    #[test]
    fn run_of_ones_costs_one_addition() {
        // 0b1111111 = 2^7 - 1: NAF is 1000000(-1)
        let g = AffinePoint::<Toy65521>::generator();
        let k = BigUint::from(127u32);

        let naf = naf_double_and_add(&k, &g);
        let binary = double_and_add(&k, &g);

        assert_eq!(naf.point, binary.point);
        assert_eq!((naf.doublings, naf.additions), (7, 1));
        assert_eq!((binary.doublings, binary.additions), (6, 6));
    }

    #[test]
    fn fewer_additions_than_binary() {
        let g = AffinePoint::<Toy65521>::generator();
        let (mut naf_additions, mut binary_additions) = (0, 0);

        for k in 1u32..2000 {
            let k = BigUint::from(k);
            let naf = naf_double_and_add(&k, &g);
            let binary = double_and_add(&k, &g);

            assert_eq!(naf.point, binary.point);
            assert!(naf.additions <= binary.additions);
            naf_additions += naf.additions;
            binary_additions += binary.additions;
        }

        assert!(naf_additions < binary_additions);
    }
}
