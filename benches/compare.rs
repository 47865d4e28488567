//! Criterion benchmarks
//! Compares bitfactor round counts and sizes on repetitive vs noisy input

use criterion::{criterion_group, criterion_main, Criterion};

fn bench_compress(c: &mut Criterion) {
    let repetitive = b"the the the and the and the and".repeat(2);
    let random_ish: Vec<u8> = (0u8..=255).cycle().take(64).collect();

    c.bench_function("bitfactor_compress_repetitive", |b| {
        b.iter(|| bitfactor::compress(&repetitive, 4).unwrap())
    });

    c.bench_function("bitfactor_compress_random", |b| {
        b.iter(|| bitfactor::compress(&random_ish, 4).unwrap())
    });
}

criterion_group!(benches, bench_compress);
criterion_main!(benches);
