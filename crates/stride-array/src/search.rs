//! Bisection over sorted element runs.
//!
//! Every search in the workspace reduces to [`partition_point`]: a classic
//! halving loop over `[left, right)` that finds the first index for which
//! a monotone "still before" test fails. The slice helpers below feed it an
//! [`Order`]; the erased array feeds it strided byte chunks.

use std::cmp::Ordering;

use stride_core::order::{LessThan, Order, ThreeWay};

/// First index in `[left, right)` for which `is_before` returns `false`,
/// or `right` if it holds everywhere.
///
/// `is_before` must be `true` for a (possibly empty) prefix of the range
/// and `false` afterwards. O(log(right - left)) calls.
pub fn partition_point(
    mut left: usize,
    right: usize,
    mut is_before: impl FnMut(usize) -> bool,
) -> usize {
    debug_assert!(left <= right);
    let mut count = right - left;
    while count > 0 {
        let step = count >> 1;
        let mid = left + step;
        if is_before(mid) {
            left = mid + 1;
            count -= step + 1;
        } else {
            count = step;
        }
    }
    left
}

/// First index in `items[left..right]` whose element is not less than
/// `value` under `order`.
///
/// # Panics
///
/// Panics unless `left <= right <= items.len()`.
#[track_caller]
pub fn lower_bound<T, O>(items: &[T], left: usize, right: usize, value: &T, order: &O) -> usize
where
    O: Order<T> + ?Sized,
{
    check_bounds(left, right, items.len());
    partition_point(left, right, |mid| order.less(&items[mid], value))
}

/// [`lower_bound`] with a "less than" predicate.
#[track_caller]
pub fn lower_bound_by<T>(
    items: &[T],
    left: usize,
    right: usize,
    value: &T,
    less: impl Fn(&T, &T) -> bool,
) -> usize {
    lower_bound(items, left, right, value, &LessThan(less))
}

/// [`lower_bound`] with a three-way comparator.
#[track_caller]
pub fn lower_bound_by_cmp<T>(
    items: &[T],
    left: usize,
    right: usize,
    value: &T,
    compare: impl Fn(&T, &T) -> Ordering,
) -> usize {
    lower_bound(items, left, right, value, &ThreeWay(compare))
}

/// Index of the element equivalent to `value`, or `items.len()` if there
/// is none.
pub fn binary_find<T, O>(items: &[T], value: &T, order: &O) -> usize
where
    O: Order<T> + ?Sized,
{
    let index = lower_bound(items, 0, items.len(), value, order);
    if index == items.len() || order.less(value, &items[index]) {
        return items.len();
    }
    index
}

#[track_caller]
pub(crate) fn check_bounds(left: usize, right: usize, len: usize) {
    assert!(
        left <= right && right <= len,
        "search range {left}..{right} out of bounds for length {len}"
    );
}
