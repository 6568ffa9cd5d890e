//! Criterion benchmarks for the five sorting algorithms.
//!
//! Inputs are generated from a fixed seed so runs are comparable.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use linex_sort::{
    bubble_sort, insertion_sort, merge_sort, quick_sort_with_seed, selection_sort, SortOutcome,
};
use rand::prelude::*;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

fn random_data(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random_range(-1_000_000..1_000_000)).collect()
}

fn nearly_sorted_data(size: usize, seed: u64) -> Vec<i64> {
    let mut data: Vec<i64> = (0..size as i64).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    for _ in 0..size / 20 {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

type SortFn = fn(&mut [i64]) -> SortOutcome;

fn quick(data: &mut [i64]) -> SortOutcome {
    quick_sort_with_seed(data, 42)
}

const QUADRATIC: [(&str, SortFn); 3] = [
    ("bubble", bubble_sort::<i64>),
    ("insertion", insertion_sort::<i64>),
    ("selection", selection_sort::<i64>),
];

const LINEARITHMIC: [(&str, SortFn); 2] = [("merge", merge_sort::<i64>), ("quick", quick)];

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_group(
    c: &mut Criterion,
    group_name: &str,
    sizes: &[usize],
    algorithms: &[(&str, SortFn)],
) {
    let mut group = c.benchmark_group(group_name);
    for &size in sizes {
        group.throughput(Throughput::Elements(size as u64));
        let input = random_data(size, 7);
        for &(name, sort) in algorithms {
            group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
                b.iter_batched_ref(
                    || input.clone(),
                    |data| black_box(sort(data)),
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

fn bench_quadratic(c: &mut Criterion) {
    bench_group(c, "quadratic_random", &[64, 256, 1024], &QUADRATIC);
}

fn bench_linearithmic(c: &mut Criterion) {
    bench_group(c, "linearithmic_random", &[1_000, 10_000, 100_000], &LINEARITHMIC);
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearly_sorted");
    let size = 2_000;
    let input = nearly_sorted_data(size, 11);
    group.throughput(Throughput::Elements(size as u64));
    for &(name, sort) in QUADRATIC.iter().chain(LINEARITHMIC.iter()) {
        group.bench_with_input(BenchmarkId::new(name, size), &input, |b, input| {
            b.iter_batched_ref(
                || input.clone(),
                |data| black_box(sort(data)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadratic, bench_linearithmic, bench_nearly_sorted);
criterion_main!(benches);
