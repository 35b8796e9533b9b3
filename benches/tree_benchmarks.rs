use bst_mountain::{Mountain, OrderedTree, RestStop};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeSet;
use std::hint::black_box;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn random_mountain(n: usize) -> Mountain {
    random_keys(n)
        .into_iter()
        .map(|k| {
            let food = (k % 5) as i32 - 1;
            RestStop::new(format!("{k:010}"), food, (k % 3) as i32 - 1, (k % 2) as i32)
        })
        .collect()
}

// ─── Tree Benchmarks ────────────────────────────────────────────────────────

fn bench_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("insert_random");

    group.bench_function(BenchmarkId::new("OrderedTree", N), |b| {
        b.iter(|| keys.iter().copied().collect::<OrderedTree<i64>>());
    });

    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| keys.iter().copied().collect::<BTreeSet<i64>>());
    });

    group.finish();
}

fn bench_get_by_rank(c: &mut Criterion) {
    let tree: OrderedTree<i64> = random_keys(N).into_iter().collect();
    let len = tree.len();

    let mut group = c.benchmark_group("get_by_rank");

    group.bench_function(BenchmarkId::new("OrderedTree", len), |b| {
        b.iter(|| {
            for i in 0..len {
                black_box(tree.get(i).ok());
            }
        });
    });

    // BTreeSet has no rank index; `nth` walks from the front.
    let set: BTreeSet<i64> = tree.iter().copied().collect();
    group.bench_function(BenchmarkId::new("BTreeSet::iter().nth", len), |b| {
        b.iter(|| {
            for i in (0..len).step_by(100) {
                black_box(set.iter().nth(i));
            }
        });
    });

    group.finish();
}

fn bench_balanced_build(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("balanced_build");

    group.bench_function(BenchmarkId::new("balanced", N), |b| {
        b.iter(|| OrderedTree::balanced(black_box(&keys)));
    });

    group.bench_function(BenchmarkId::new("sorted_insert", N), |b| {
        b.iter(|| {
            let mut sorted = keys.clone();
            sorted.sort_unstable();
            // Sorted insertion degenerates into a chain.
            sorted.into_iter().take(N / 10).collect::<OrderedTree<i64>>()
        });
    });

    group.finish();
}

fn bench_find_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_paths");

    for n in [100, 1_000, N] {
        let mountain = random_mountain(n);
        group.bench_function(BenchmarkId::new("Mountain", n), |b| {
            b.iter(|| mountain.find_paths().map(|paths| paths.rows()));
        });
    }

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(tree_benches, bench_insert_random, bench_get_by_rank, bench_balanced_build,);

criterion_group!(path_benches, bench_find_paths,);

criterion_main!(tree_benches, path_benches,);
