//! Integration test: the facade prelude covers an end-to-end workflow.

use stride::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Reading {
    sensor: u16,
    celsius: i16,
}

#[test]
fn typed_map_workflow() {
    let mut readings = SortedMap::by_key(|r: &Reading| r.sensor);
    for (sensor, celsius) in [(3, 20), (1, 18), (2, 25), (1, 19)] {
        readings.set(Reading { sensor, celsius });
    }
    assert_eq!(readings.len(), 3);
    assert_eq!(
        readings.get(&Reading {
            sensor: 1,
            celsius: 0
        }),
        Some(Reading {
            sensor: 1,
            celsius: 19
        })
    );
    let sensors: Vec<u16> = readings.iter().map(|r| r.sensor).collect();
    assert_eq!(sensors, vec![1, 2, 3]);
}

#[test]
fn errors_surface_through_try_forms() {
    let mut arr: DynArray<u8> = DynArray::new();
    let err = arr.try_erase_many(0, 1).unwrap_err();
    assert_eq!(err, ArrayError::IndexOutOfBounds { index: 0, len: 0 });
    assert_eq!(err.to_string(), "index 0 out of bounds for length 0");

    let err = RawArray::try_new(0).unwrap_err();
    assert_eq!(err, ConfigError::ZeroStride);
}

#[test]
fn raw_array_with_policy_and_view() {
    let policy = GrowthPolicy::new().with_min_capacity(2);
    let mut arr = RawArray::with_policy(2, policy).unwrap();
    arr.append(&[1, 0, 2, 0, 3, 0]);
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.capacity(), 3);

    let view: ArrView<'_> = arr.to_view();
    assert_eq!(view.find_value(&[2, 0]), 1);
    assert_eq!(view.back(), &[3, 0]);
}

#[test]
fn orders_are_interchangeable() {
    let values: DynArray<i32> = [1, 3, 5, 7].into_iter().collect();
    let by_cmp = ThreeWay(|a: &i32, b: &i32| a.cmp(b));
    let by_less = LessThan(|a: &i32, b: &i32| a < b);
    for probe in 0..8 {
        let natural = values.binary_find(&probe, &Natural);
        assert_eq!(natural, values.binary_find(&probe, &by_cmp));
        assert_eq!(natural, values.binary_find(&probe, &by_less));
        assert_eq!(Natural.less(&probe, &4), by_less.less(&probe, &4));
    }
}
