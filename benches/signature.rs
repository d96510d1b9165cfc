// SPDX short identifier: Unlicense

use criterion::{
    criterion_group,
    criterion_main,
    Criterion,
    BenchmarkId
};
use rand::{thread_rng, Rng};

const RING_SIZES: [usize; 8] = [2, 4, 8, 16, 32, 64, 128, 256];

use ring_lsag::{
    common::*,
    hashes::h_bytes
};

fn curve_benchmark<C: Curve>(c: &mut Criterion) {
    let mut group = c.benchmark_group(C::NAME);
    group.sample_size(20);
    let msg = h_bytes(b"abcdef");

    //sign
    for x in RING_SIZES {
        let secret = C::random_scalar();
        let idx = thread_rng().gen::<usize>() % x;
        let ring = Ring::<C>::new_random(x, &secret, idx).unwrap();

        let params = (ring, secret);
        group.bench_with_input(BenchmarkId::new("sign", format!("Ring size: {x}")), &params,
            |b, (ring, secret)| b.iter(|| {
                ring.sign(&msg, secret).unwrap()
            }));
    }

    //verify
    for x in RING_SIZES {
        let secret = C::random_scalar();
        let idx = thread_rng().gen::<usize>() % x;
        let ring = Ring::<C>::new_random(x, &secret, idx).unwrap();
        let sig = ring.sign(&msg, &secret).unwrap();

        group.bench_with_input(BenchmarkId::new("verify", format!("Ring size: {x}")), &sig,
            |b, sig| b.iter(|| {
                assert!(sig.verify(&msg))
            }));
    }

    //serialization
    for x in RING_SIZES {
        let secret = C::random_scalar();
        let ring = Ring::<C>::new_random(x, &secret, 0).unwrap();
        let bytes = ring.sign(&msg, &secret).unwrap().serialize();

        group.bench_with_input(BenchmarkId::new("deserialize", format!("Ring size: {x}")), &bytes,
            |b, bytes| b.iter(|| {
                RingSignature::<C>::deserialize(bytes).unwrap()
            }));
    }
}

fn secp256k1_benchmark(c: &mut Criterion) {
    curve_benchmark::<Secp256k1>(c);
}

fn ed25519_benchmark(c: &mut Criterion) {
    curve_benchmark::<Ed25519>(c);
}

criterion_group!(signature_lsag, secp256k1_benchmark, ed25519_benchmark);
criterion_main!(signature_lsag);
