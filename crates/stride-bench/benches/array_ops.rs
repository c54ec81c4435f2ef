//! Criterion micro-benchmarks for array growth, positional edits, and search.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use stride_array::{DynArray, RawArray};
use stride_bench::{raw_record_array, sequential_array};
use stride_core::order::Natural;
use stride_test_utils::MapItem;

/// Push 10K elements one at a time from empty.
fn bench_push_back_10k(c: &mut Criterion) {
    c.bench_function("dyn_array_push_back_10k", |b| {
        b.iter(|| {
            let mut arr = DynArray::new();
            for i in 0..10_000u64 {
                arr.push_back(i);
            }
            black_box(arr.len());
        });
    });

    c.bench_function("raw_array_push_back_10k", |b| {
        b.iter(|| {
            let mut arr = RawArray::new(8);
            for i in 0..10_000u64 {
                arr.push_back(&i.to_ne_bytes());
            }
            black_box(arr.len());
        });
    });
}

/// Insert then erase a 16-element block in the middle of 10K elements.
fn bench_insert_erase_middle(c: &mut Criterion) {
    let block = [7u64; 16];
    c.bench_function("dyn_array_insert_erase_middle", |b| {
        b.iter_batched_ref(
            || sequential_array(10_000),
            |arr| {
                arr.insert_many(5_000, black_box(&block));
                arr.erase_many(5_000, block.len());
            },
            BatchSize::SmallInput,
        );
    });
}

/// Unsorted erase near the front, which moves only `count` elements.
fn bench_erase_unsorted(c: &mut Criterion) {
    c.bench_function("raw_array_erase_unsorted_front", |b| {
        b.iter_batched_ref(
            || raw_record_array(10_000),
            |arr| arr.erase_many_unsorted(black_box(10), 16),
            BatchSize::SmallInput,
        );
    });
}

/// Binary search across a 100K-element sorted array.
fn bench_binary_find(c: &mut Criterion) {
    let arr = sequential_array(100_000);
    c.bench_function("dyn_array_binary_find_100k", |b| {
        let mut probe = 0u64;
        b.iter(|| {
            probe = (probe + 7_919) % 100_000;
            black_box(arr.binary_find(&probe, &Natural));
        });
    });

    let raw = raw_record_array(100_000);
    c.bench_function("raw_array_binary_find_100k", |b| {
        let mut key = 0i32;
        b.iter(|| {
            key = (key + 7_919) % 100_000;
            let probe = MapItem::new(key, 0).to_bytes();
            black_box(raw.binary_find_by(&probe, MapItem::key_less));
        });
    });
}

criterion_group!(
    benches,
    bench_push_back_10k,
    bench_insert_erase_middle,
    bench_erase_unsorted,
    bench_binary_find
);
criterion_main!(benches);
