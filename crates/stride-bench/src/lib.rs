//! Benchmark workloads for the stride containers.
//!
//! Provides deterministic inputs shared by the criterion benches:
//!
//! - [`sequential_array`]: a typed array of `0..n`
//! - [`raw_record_array`]: an erased array of `n` 8-byte records
//! - [`shuffled_map`]: a sorted map filled in seeded random key order

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stride_array::{DynArray, RawArray};
use stride_core::order::ByKey;
use stride_map::SortedMap;
use stride_test_utils::{shuffled_keys, MapItem};

/// Seed for every shuffled workload.
pub const BENCH_SEED: u64 = 42;

/// Key projection used by benchmark maps.
pub type MapKey = fn(&MapItem) -> i32;

/// A typed array holding `0..n`.
pub fn sequential_array(n: usize) -> DynArray<u64> {
    (0..n as u64).collect()
}

/// An erased array of `n` [`MapItem`] records with ascending keys.
pub fn raw_record_array(n: usize) -> RawArray {
    let mut arr = RawArray::new(8);
    arr.reserve(n);
    for key in 0..n as i32 {
        arr.push_back(&MapItem::new(key, key).to_bytes());
    }
    arr
}

/// A map holding keys `0..n`, inserted in shuffled order.
pub fn shuffled_map(n: usize) -> SortedMap<MapItem, ByKey<MapKey>> {
    let mut map = SortedMap::new(ByKey(map_key as MapKey));
    for key in shuffled_keys(n, BENCH_SEED) {
        map.set(MapItem::new(key, key));
    }
    map
}

fn map_key(item: &MapItem) -> i32 {
    item.key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workloads_have_requested_size() {
        assert_eq!(sequential_array(100).len(), 100);
        assert_eq!(raw_record_array(100).len(), 100);
        let map = shuffled_map(100);
        assert_eq!(map.len(), 100);
        assert!(map.is_strictly_sorted());
    }
}
