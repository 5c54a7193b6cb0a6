//! secp256k1 domain parameters.

define_curve! {
    /// secp256k1 elliptic curve.
    ///
    /// Specified in Certicom's SECG in SEC 2: Recommended Elliptic Curve Domain Parameters:
    ///
    /// <https://www.secg.org/sec2-v2.pdf>
    ///
    /// The curve's equation is `y² = x³ + 7` over a ~256-bit prime field.
    Secp256k1 {
        p: "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        a: "0",
        b: "7",
        generator: (
            "0x79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
            "0x483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8"
        ),
        order: "0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        cofactor: 1,
    }
}
