//! Small curves for tests and benchmarks.
//!
//! These have no cryptographic strength whatsoever.

define_curve! {
    /// `y² = x³ + 5` over 𝔽₇. Every point but the identity generates the whole
    /// group of order 7.
    Tiny7 {
        p: "7",
        a: "0",
        b: "5",
        generator: ("3", "2"),
        order: "7",
        cofactor: 1,
    }
}

define_curve! {
    /// `y² = x³ + 2x + 13` over 𝔽₆₅₅₂₁, a group of prime order 65171.
    Toy65521 {
        p: "65521",
        a: "2",
        b: "13",
        generator: ("1", "4"),
        order: "65171",
        cofactor: 1,
    }
}
