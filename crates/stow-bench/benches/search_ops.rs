//! Criterion micro-benchmarks for linear search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stow_bench::{ascending, words};
use stow_core::{find_index, find_index_by};

const N: usize = 10_000;

fn bench_find_index_u64(c: &mut Criterion) {
    let seq = ascending(N);
    let last = (N - 1) as u64;
    c.bench_function("find_index_u64_last_of_10k", |b| {
        b.iter(|| black_box(find_index(black_box(&last), &seq)));
    });
    c.bench_function("find_index_u64_missing_10k", |b| {
        b.iter(|| black_box(find_index(black_box(&u64::MAX), &seq)));
    });
}

fn bench_find_index_strings(c: &mut Criterion) {
    let seq = words(N);
    let target = seq[N / 2].clone();
    c.bench_function("find_index_string_mid_of_10k", |b| {
        b.iter(|| black_box(find_index(black_box(&target), &seq)));
    });
    c.bench_function("find_index_by_prefix_10k", |b| {
        b.iter(|| black_box(find_index_by(&seq, |w| w.starts_with("terrapin-9"))));
    });
}

criterion_group!(benches, bench_find_index_u64, bench_find_index_strings);
criterion_main!(benches);
