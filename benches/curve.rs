// SPDX short identifier: Unlicense

use criterion::{
    black_box,
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use std::time::Duration;
use ring_lsag::common::*;

fn primitives_benchmark<C: Curve>(c: &mut Criterion) {
    let mut group = c.benchmark_group(C::NAME);
    group.sample_size(40);
    group.measurement_time(Duration::from_secs(3));


    group.bench_with_input(BenchmarkId::new("Scalar", "random"), &(),
    |b, ()| b.iter(|| {
        black_box(C::random_scalar());
    }));
    let params = [0xabu8; 64];
    group.bench_with_input(BenchmarkId::new("Scalar", "hash"), &params,
    |b, data| b.iter(|| {
        black_box(C::hash_to_scalar(data));
    }));


    let params = C::basepoint() * C::random_scalar();
    group.bench_with_input(BenchmarkId::new("Point", "encode"), &params,
    |b, p| b.iter(|| {
        black_box(C::encode_point(p));
    }));
    let params = C::encode_point(&(C::basepoint() * C::random_scalar()));
    group.bench_with_input(BenchmarkId::new("Point", "decode"), &params,
    |b, bytes| b.iter(|| {
        black_box(C::decode_point(bytes).unwrap());
    }));
    let params = C::basepoint() * C::random_scalar();
    group.bench_with_input(BenchmarkId::new("Point", "hash-to-curve"), &params,
    |b, p| b.iter(|| {
        black_box(C::hash_to_curve(p));
    }));


    let params = (C::random_scalar(), C::basepoint() * C::random_scalar());
    group.bench_with_input(BenchmarkId::new("Multiply", "point"), &params,
    |b, (s, p)| b.iter(|| {
        black_box(*p * *s);
    }));
    let params = C::random_scalar();
    group.bench_with_input(BenchmarkId::new("Multiply", "basepoint"), &params,
    |b, s| b.iter(|| {
        black_box(C::basepoint() * *s);
    }));
}

fn secp256k1_benchmark(c: &mut Criterion) {
    primitives_benchmark::<Secp256k1>(c);
}

fn ed25519_benchmark(c: &mut Criterion) {
    primitives_benchmark::<Ed25519>(c);
}

criterion_group!(curve_primitives, secp256k1_benchmark, ed25519_benchmark);
criterion_main!(curve_primitives);
