//! Benchmark for `List` against `Vec`.
//!
//! Covers building, the right fold and conversions back to a `Vec`.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funkit::persistent::List;
use std::hint::black_box;

// =============================================================================
// cons Benchmark (prepend)
// =============================================================================

fn benchmark_cons(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("cons");

    for size in [100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("List", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut list = List::nil();
                for index in 0..size {
                    list = List::cons(black_box(index), list);
                }
                black_box(list)
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut vector = Vec::new();
                for index in 0..size {
                    vector.push(black_box(index));
                }
                black_box(vector)
            });
        });
    }

    group.finish();
}

// =============================================================================
// foldr Benchmark
// =============================================================================

fn benchmark_foldr(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("foldr");

    for size in [100, 10000, 100_000] {
        let list: List<u64> = (0..size).collect();
        let vector: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("List", size), &list, |bencher, list| {
            bencher.iter(|| list.foldr(0u64, |element, accumulator| black_box(element) + accumulator));
        });

        group.bench_with_input(BenchmarkId::new("Vec::rfold", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                vector
                    .iter()
                    .rfold(0u64, |accumulator, element| black_box(*element) + accumulator)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Conversion Benchmark
// =============================================================================

fn benchmark_conversions(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("conversions");

    for size in [100, 10000] {
        let vector: Vec<i32> = (0..size).collect();
        let list: List<i32> = vector.iter().copied().collect();

        group.bench_with_input(
            BenchmarkId::new("from_enumerable", size),
            &vector,
            |bencher, vector| {
                bencher.iter(|| black_box(List::from_enumerable(vector.iter().copied())));
            },
        );

        group.bench_with_input(BenchmarkId::new("to_array", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.to_array()));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(benches, benchmark_cons, benchmark_foldr, benchmark_conversions);

criterion_main!(benches);
