//! Performance benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use segfold::algebra::{Min, Sum};
use segfold::SegmentTree;

fn sample(n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| (i * 7_919) % 10_007).collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for n in [1_000usize, 100_000] {
        let data = sample(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &data, |b, data| {
            b.iter(|| SegmentTree::summing(black_box(data)));
        });
    }
    group.finish();
}

fn benchmark_query(c: &mut Criterion) {
    let n = 100_000;
    let tree = SegmentTree::with_monoid(&sample(n), Min);

    c.bench_function("query_forward_n=100000", |b| {
        let mut left = 0;
        b.iter(|| {
            left = (left + 7_919) % (n / 2);
            black_box(tree.query(left, left + n / 3))
        });
    });

    c.bench_function("query_wraparound_n=100000", |b| {
        let mut left = n / 2;
        b.iter(|| {
            left = n / 2 + (left + 7_919) % (n / 2);
            black_box(tree.query(left, n / 4))
        });
    });
}

fn benchmark_update(c: &mut Criterion) {
    let n = 100_000;
    let mut tree = SegmentTree::from_slice(&sample(n), Sum, 0);

    c.bench_function("update_n=100000", |b| {
        let mut index = 0;
        b.iter(|| {
            index = (index + 7_919) % n;
            tree.update(black_box(index), black_box(index as i64)).unwrap();
        });
    });
}

criterion_group!(benches, benchmark_build, benchmark_query, benchmark_update);
criterion_main!(benches);
