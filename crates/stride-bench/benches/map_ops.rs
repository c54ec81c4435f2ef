//! Criterion micro-benchmarks for sorted map insertion, lookup, and removal.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use stride_bench::{shuffled_map, BENCH_SEED};
use stride_map::RawSortedMap;
use stride_test_utils::{shuffled_keys, MapItem};

/// Build a 1K-entry map from shuffled keys.
fn bench_fill_shuffled_1k(c: &mut Criterion) {
    c.bench_function("sorted_map_fill_shuffled_1k", |b| {
        b.iter(|| black_box(shuffled_map(1_000)));
    });

    let keys = shuffled_keys(1_000, BENCH_SEED);
    c.bench_function("raw_sorted_map_fill_shuffled_1k", |b| {
        b.iter(|| {
            let mut map = RawSortedMap::by_predicate(8, MapItem::key_less);
            for &key in &keys {
                map.set(&MapItem::new(key, key).to_bytes());
            }
            black_box(map.len());
        });
    });
}

/// Hit and miss lookups in a 10K-entry map.
fn bench_lookup_10k(c: &mut Criterion) {
    let map = shuffled_map(10_000);
    c.bench_function("sorted_map_get_hit_10k", |b| {
        let mut key = 0;
        b.iter(|| {
            key = (key + 31) % 10_000;
            black_box(map.get(&MapItem::new(key, 0)));
        });
    });
    c.bench_function("sorted_map_get_miss_10k", |b| {
        b.iter(|| black_box(map.contains(&MapItem::new(black_box(-1), 0))));
    });
}

/// Remove and re-insert a middle key in a 10K-entry map.
fn bench_remove_reinsert_10k(c: &mut Criterion) {
    c.bench_function("sorted_map_remove_reinsert_10k", |b| {
        b.iter_batched_ref(
            || shuffled_map(10_000),
            |map| {
                let item = MapItem::new(5_000, 0);
                map.remove(black_box(&item));
                map.set(item);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_fill_shuffled_1k,
    bench_lookup_10k,
    bench_remove_reinsert_10k
);
criterion_main!(benches);
