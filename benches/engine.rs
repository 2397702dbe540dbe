//! Benchmarks for the bit engine, bounded draws and the byte reader
//!
//! Run with: cargo bench --bench engine

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use zigrand::codec::{marshal, unmarshal};
use zigrand::{Rand, Sfc64};

fn bench_next_u64(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.throughput(Throughput::Elements(1));

    let mut engine = Sfc64::new(1);
    group.bench_function("sfc64_next_u64", |b| b.iter(|| black_box(engine.next_u64())));

    let mut rng = Rand::new(1);
    group.bench_function("rand_next_u32", |b| b.iter(|| black_box(rng.next_u32())));
    group.bench_function("rand_float64", |b| b.iter(|| black_box(rng.float64())));

    group.finish();
}

fn bench_bounded(c: &mut Criterion) {
    let mut group = c.benchmark_group("bounded");
    group.throughput(Throughput::Elements(1));
    let mut rng = Rand::new(2);

    // Small bounds take the 32-bit fast path; the last two need the 128-bit product.
    for n in [6u64, 1_000_000, u64::from(u32::MAX), 1 << 40, u64::MAX / 3 * 2] {
        group.bench_with_input(BenchmarkId::new("uint64n", n), &n, |b, &n| {
            b.iter(|| black_box(rng.uint64n(black_box(n))))
        });
    }
    group.bench_function("uint32n_100", |b| b.iter(|| black_box(rng.uint32n(black_box(100)))));

    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read");
    let mut rng = Rand::new(3);

    for size in [7usize, 64, 4096] {
        let mut buf = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| rng.read(black_box(&mut buf)))
        });
    }

    group.finish();
}

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("shuffle");
    let mut rng = Rand::new(4);

    for n in [16usize, 1024] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("perm", n), &n, |b, &n| {
            b.iter(|| rng.perm(black_box(n)))
        });
    }

    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let rng = Rand::new(5);
    let bytes = marshal(&rng).unwrap();
    c.bench_function("codec/marshal", |b| b.iter(|| marshal(black_box(&rng))));
    c.bench_function("codec/unmarshal", |b| b.iter(|| unmarshal(black_box(&bytes))));
}

criterion_group!(
    benches,
    bench_next_u64,
    bench_bounded,
    bench_read,
    bench_shuffle,
    bench_codec
);
criterion_main!(benches);
