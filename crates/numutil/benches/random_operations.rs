//! Benchmarks for the fast random source
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numutil::{fastrand, fastrandn, FastRng};

fn benchmark_thread_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_source");

    group.bench_function("fastrand", |b| b.iter(fastrand::<u32>));

    for &bound in &[10u32, 1_000, u32::MAX] {
        group.bench_with_input(BenchmarkId::new("fastrandn", bound), &bound, |b, &bound| {
            b.iter(|| fastrandn(black_box(bound)))
        });
    }

    group.finish();
}

fn benchmark_owned_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("owned_rng");

    let mut rng = FastRng::new(42);
    group.bench_function("below", |b| b.iter(|| rng.below(black_box(1_000u32))));

    group.finish();
}

criterion_group!(benches, benchmark_thread_source, benchmark_owned_rng);
criterion_main!(benches);
