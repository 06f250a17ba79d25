use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lockstep_core::{compare, CompareLimits};

fn bench_identical(c: &mut Criterion) {
    let seq: Vec<u64> = (0..100_000).collect();
    c.bench_function("compare_identical_100k", |b| {
        b.iter(|| {
            compare(
                black_box(seq.iter().copied()),
                black_box(seq.iter().copied()),
                &CompareLimits::default(),
            )
        })
    });
}

fn bench_sparse_mismatches(c: &mut Criterion) {
    let expected: Vec<u64> = (0..100_000).collect();
    let actual: Vec<u64> = expected
        .iter()
        .map(|&n| if n % 5_000 == 0 { n + 1 } else { n })
        .collect();

    c.bench_function("compare_sparse_mismatches_100k", |b| {
        b.iter(|| {
            compare(
                black_box(expected.iter().copied()),
                black_box(actual.iter().copied()),
                &CompareLimits::default(),
            )
        })
    });
}

fn bench_pathological_all_mismatch(c: &mut Criterion) {
    // Every position differs; the cap stops detail collection after 64
    // mismatches and the rest of the traversal only counts lengths.
    let expected = vec![0u64; 100_000];
    let actual = vec![1u64; 100_000];

    c.bench_function("compare_all_mismatch_capped_100k", |b| {
        b.iter(|| {
            compare(
                black_box(expected.iter().copied()),
                black_box(actual.iter().copied()),
                &CompareLimits::default(),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_identical,
    bench_sparse_mismatches,
    bench_pathological_all_mismatch
);
criterion_main!(benches);
