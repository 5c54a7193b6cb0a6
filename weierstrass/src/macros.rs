/// Define a curve marker type implementing [`CurveParams`](crate::CurveParams).
///
/// Parameters are string literals, either decimal or hexadecimal with a `0x`
/// prefix:
///
/// ```
/// weierstrass::define_curve! {
///     /// `y² = x³ + 5` over 𝔽₇, a group of order 7.
///     Example {
///         p: "7",
///         a: "0",
///         b: "5",
///         generator: ("3", "2"),
///         order: "7",
///         cofactor: 1,
///     }
/// }
///
/// use weierstrass::{AffinePoint, BigUint, CurvePoint};
/// assert_eq!(AffinePoint::<Example>::domain().order(), &BigUint::from(7u32));
/// ```
#[macro_export]
macro_rules! define_curve {
    (
        $(#[$attr:meta])*
        $name:ident {
            p: $p:literal,
            a: $a:literal,
            b: $b:literal,
            generator: ($gx:literal, $gy:literal),
            order: $n:literal,
            cofactor: $h:literal $(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord, Hash)]
        pub struct $name;

        impl $crate::CurveParams for $name {
            fn domain() -> &'static $crate::CurveDomain<$crate::AffinePoint<Self>> {
                static DOMAIN: $crate::__private::Lazy<
                    $crate::CurveDomain<$crate::AffinePoint<$name>>,
                > = $crate::__private::Lazy::new(|| {
                    use $crate::__private::parse_uint;

                    $crate::CurveDomain::new(
                        parse_uint($p),
                        parse_uint($a),
                        parse_uint($b),
                        $crate::AffinePoint::from_coordinates_unchecked(
                            parse_uint($gx),
                            parse_uint($gy),
                        ),
                        parse_uint($n),
                        $h,
                    )
                });

                &DOMAIN
            }
        }
    };
}
