//! Integration test: key/value maps driven through full scenarios.
//!
//! Runs the even-key insert/remove/extend scenario against both map
//! flavours, then checks ordering and size invariants over shuffled and
//! randomly generated workloads.

use proptest::prelude::*;
use stride_core::order::LessThan;
use stride_map::{RawSortedMap, SortedMap};
use stride_test_utils::{shuffled_keys, MapItem};

fn key_less(a: &MapItem, b: &MapItem) -> bool {
    a.key < b.key
}

#[test]
fn typed_even_key_scenario() {
    let mut map = SortedMap::new(LessThan(key_less));

    for i in (0..10).step_by(2) {
        let item = MapItem::new(i, i + 1);
        assert!(map.set(item));
        assert!(!map.set(item), "resetting key {i} reported a new entry");
    }
    assert_eq!(map.size(), 5);

    for i in (0..10).step_by(2) {
        assert!(map.contains(&MapItem::new(i, 0)));
    }

    assert!(map.remove(&MapItem::new(8, 0)));
    assert_eq!(map.size(), 4);
    assert!(!map.remove(&MapItem::new(-1, 0)));
    assert_eq!(map.size(), 4);

    for i in (10..20).step_by(2) {
        let item = MapItem::new(i, i + 1);
        assert!(map.set(item));
        assert!(!map.set(item));
        assert!(map.contains(&item));
    }
    assert_eq!(map.size(), 9);
    assert!(map.is_strictly_sorted());

    map.destroy();
    assert!(map.is_empty());
}

#[test]
fn raw_even_key_scenario() {
    let mut map = RawSortedMap::by_predicate(8, MapItem::key_less);

    for i in (0..10).step_by(2) {
        let item = MapItem::new(i, i + 1).to_bytes();
        assert!(map.set(&item));
        assert!(!map.set(&item));
    }
    assert_eq!(map.size(), 5);

    for i in (0..10).step_by(2) {
        assert!(map.contains(&MapItem::new(i, 0).to_bytes()));
    }

    assert!(map.remove(&MapItem::new(8, 0).to_bytes()));
    assert_eq!(map.size(), 4);
    assert!(!map.remove(&MapItem::new(-1, 0).to_bytes()));
    assert_eq!(map.size(), 4);

    for i in (10..20).step_by(2) {
        let item = MapItem::new(i, i + 1).to_bytes();
        assert!(map.set(&item));
        assert!(!map.set(&item));
        assert!(map.contains(&item));
    }
    assert_eq!(map.size(), 9);
    assert!(map.is_strictly_sorted());
}

#[test]
fn shuffled_inserts_come_out_sorted() {
    let mut map = SortedMap::by_key(|item: &MapItem| item.key);
    for key in shuffled_keys(500, 42) {
        assert!(map.set(MapItem::new(key, -key)));
    }
    assert_eq!(map.size(), 500);
    assert!(map.is_strictly_sorted());
    for (expected, item) in map.iter().enumerate() {
        assert_eq!(item.key, expected as i32);
        assert_eq!(item.value, -item.key);
    }
}

#[test]
fn shuffled_removals_drain_map() {
    let mut map = SortedMap::by_key(|item: &MapItem| item.key);
    for key in 0..200 {
        map.set(MapItem::new(key, 0));
    }
    for (removed, key) in shuffled_keys(200, 9).into_iter().enumerate() {
        assert!(map.remove(&MapItem::new(key, 0)));
        assert_eq!(map.size(), 199 - removed);
        assert!(map.is_strictly_sorted());
    }
    assert!(map.is_empty());
}

proptest! {
    #[test]
    fn raw_map_stays_sorted(ops in proptest::collection::vec((any::<bool>(), -20i32..20), 0..200)) {
        let mut map = RawSortedMap::by_predicate(8, MapItem::key_less);
        let mut keys = std::collections::BTreeSet::new();
        for (insert, key) in ops {
            let item = MapItem::new(key, key * 2).to_bytes();
            let before = map.size();
            if insert {
                let fresh = keys.insert(key);
                prop_assert_eq!(map.set(&item), fresh);
                prop_assert_eq!(map.size(), before + usize::from(fresh));
            } else {
                let present = keys.remove(&key);
                prop_assert_eq!(map.remove(&item), present);
                prop_assert_eq!(map.size(), before - usize::from(present));
            }
            prop_assert!(map.is_strictly_sorted());
        }
    }
}
