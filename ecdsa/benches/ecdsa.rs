//! ECDSA signing and verification benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hex_literal::hex;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};
use weierstrass::{
    mul::{DoubleAndAdd, Naf, ScalarMul},
    AffinePoint, BigUint, Secp256k1,
};
use weierstrass_ecdsa::{Digest, SigningKey};

type Point = AffinePoint<Secp256k1>;

fn test_scalar_d() -> BigUint {
    BigUint::from_bytes_be(&hex!(
        "bb488aef416a41d7680d1cf01d70f59b60d7f5f77e30e78b8bf9d2d882f156a6"
    ))
}

fn test_digest() -> Digest {
    Digest::from(hex!(
        "e33580eb6ed022aed6af20d92237635e7c20c5f1bcd6aee88182ed7180f6e267"
    ))
}

fn bench_with<M: ScalarMul>(c: &mut Criterion, name: &str) {
    let mut group = c.benchmark_group(format!("ecdsa/{name}"));
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let d = SigningKey::<Point, M>::new(test_scalar_d()).unwrap();
    let z = test_digest();

    group.bench_function("sign_prehash", |b| {
        b.iter(|| black_box(&d).sign_prehash_with_rng(&mut rng, black_box(&z)).unwrap())
    });

    let q = d.verifying_key();
    let s = d.sign_prehash_with_rng(&mut rng, &z).unwrap();

    group.bench_function("verify_prehash", |b| {
        b.iter(|| black_box(q).verify_prehash(black_box(&z), black_box(&s)).unwrap())
    });

    group.finish();
}

fn bench_ecdsa(c: &mut Criterion) {
    bench_with::<DoubleAndAdd>(c, "binary");
    bench_with::<Naf>(c, "naf");
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
