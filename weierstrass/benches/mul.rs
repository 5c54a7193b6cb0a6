//! Scalar multiplication benchmarks

use criterion::{
    black_box, criterion_group, criterion_main, measurement::Measurement, BenchmarkGroup, Criterion,
};
use hex_literal::hex;
use num_bigint::BigUint;
use weierstrass::{
    dev::Toy65521,
    mul::{double_and_add, naf_double_and_add},
    AffinePoint, CurveParams, CurvePoint, Secp256k1,
};

fn bench_point_mul<'a, C: CurveParams, M: Measurement>(
    group: &mut BenchmarkGroup<'a, M>,
    k: &BigUint,
) {
    let p = AffinePoint::<C>::generator();

    group.bench_function("double-and-add", |b| {
        b.iter(|| double_and_add(black_box(k), black_box(&p)))
    });

    group.bench_function("naf double-and-add", |b| {
        b.iter(|| naf_double_and_add(black_box(k), black_box(&p)))
    });
}

fn bench_secp256k1(c: &mut Criterion) {
    let mut group = c.benchmark_group("secp256k1 point operations");
    let k = BigUint::from_bytes_be(&hex!(
        "AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522"
    ));
    bench_point_mul::<Secp256k1, _>(&mut group, &k);

    let g = AffinePoint::<Secp256k1>::generator();
    group.bench_function("point doubling", |b| b.iter(|| black_box(&g).double()));
    group.finish();
}

fn bench_toy(c: &mut Criterion) {
    let mut group = c.benchmark_group("toy curve point operations");
    // 0b1111_1110_1111_1111: long runs of ones
    let k = BigUint::from(0xfeffu32);
    bench_point_mul::<Toy65521, _>(&mut group, &k);
    group.finish();
}

criterion_group!(benches, bench_secp256k1, bench_toy);
criterion_main!(benches);
