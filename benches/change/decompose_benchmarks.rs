use coinchange::{count_decompositions, decompose_greedy, decompose_optimal};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const COINS: [u64; 6] = [50, 25, 10, 5, 2, 1];
const AMOUNTS: [u64; 4] = [113, 1000, 2000, 5000];

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    for amount in AMOUNTS {
        group.bench_with_input(BenchmarkId::new("greedy", amount), &amount, |b, &amount| {
            b.iter(|| decompose_greedy(black_box(amount), black_box(&COINS)))
        });
        group.bench_with_input(BenchmarkId::new("optimal", amount), &amount, |b, &amount| {
            b.iter(|| decompose_optimal(black_box(amount), black_box(&COINS)))
        });
    }
    group.finish();
}

fn bench_non_canonical(c: &mut Criterion) {
    let coins = [9u64, 6, 1];
    c.bench_function("optimal_non_canonical_5000", |b| {
        b.iter(|| decompose_optimal(black_box(5000), black_box(&coins)))
    });
}

fn bench_count(c: &mut Criterion) {
    c.bench_function("count_decompositions_1000", |b| {
        b.iter(|| count_decompositions(black_box(1000u64), black_box(&COINS)))
    });
}

criterion_group!(benches, bench_decompose, bench_non_canonical, bench_count);
criterion_main!(benches);
