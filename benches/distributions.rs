//! Benchmarks for the Ziggurat samplers
//!
//! Run with: cargo bench --bench distributions
//!
//! Compares the Ziggurat against a naive inverse-transform exponential and a
//! Box-Muller normal drawn from the same generator.

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use zigrand::{Distribution, Exp, Normal, Rand};

fn bench_exponential(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential");
    group.throughput(Throughput::Elements(1));
    let mut rng = Rand::new(1);

    group.bench_function("ziggurat", |b| b.iter(|| black_box(rng.exp_float64())));
    group.bench_function("inverse_transform", |b| {
        b.iter(|| black_box(-(1.0 - rng.float64()).ln()))
    });
    let dist = Exp::new(2.5).unwrap();
    group.bench_function("exp_distribution", |b| b.iter(|| black_box(dist.sample(&mut rng))));

    group.finish();
}

fn bench_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("normal");
    group.throughput(Throughput::Elements(1));
    let mut rng = Rand::new(2);

    group.bench_function("ziggurat", |b| b.iter(|| black_box(rng.norm_float64())));
    group.bench_function("box_muller", |b| {
        b.iter(|| {
            let u1 = 1.0 - rng.float64();
            let u2 = rng.float64();
            black_box((-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos())
        })
    });
    let dist = Normal::new(10.0, 3.0).unwrap();
    group.bench_function("normal_distribution", |b| {
        b.iter(|| black_box(rng.sample(&dist)))
    });

    group.finish();
}

criterion_group!(benches, bench_exponential, bench_normal);
criterion_main!(benches);
