//! Criterion micro-benchmarks for push/pop and clone across stack backings.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stow_bench::{ascending, filled_owner};
use stow_stack::{CowStack, InlineStack, Stack, StackConfig};

const N: usize = 10_000;

fn bench_heap_push_pop(c: &mut Criterion) {
    let input = ascending(N);
    c.bench_function("heap_push_pop_10k", |b| {
        b.iter(|| {
            let mut stack = Stack::with_config(StackConfig::new().with_initial_capacity(N));
            for v in &input {
                stack.push(*v);
            }
            while let Ok(v) = stack.pop() {
                black_box(v);
            }
        });
    });
}

fn bench_inline_shallow(c: &mut Criterion) {
    c.bench_function("inline_push_pop_depth_8", |b| {
        b.iter(|| {
            let mut stack: InlineStack<[u64; 8]> = InlineStack::new();
            for v in 0..8u64 {
                stack.push(v);
            }
            while let Ok(v) = stack.pop() {
                black_box(v);
            }
        });
    });
}

fn bench_cow_clone_then_write(c: &mut Criterion) {
    let base = CowStack::from(ascending(N));
    c.bench_function("cow_clone_only_10k", |b| {
        b.iter(|| black_box(base.clone()));
    });
    c.bench_function("cow_clone_then_push_10k", |b| {
        b.iter(|| {
            let mut copy = base.clone();
            copy.push(0);
            black_box(copy.count())
        });
    });
}

fn bench_owner_copy_and_mutate(c: &mut Criterion) {
    let owner = filled_owner(N);
    c.bench_function("value_owner_copy_property_only", |b| {
        b.iter(|| black_box(owner.copy_and_mutate(|o| o.set_property_a("Y"))));
    });
}

criterion_group!(
    benches,
    bench_heap_push_pop,
    bench_inline_shallow,
    bench_cow_clone_then_write,
    bench_owner_copy_and_mutate
);
criterion_main!(benches);
