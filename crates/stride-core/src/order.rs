//! Total orders over container elements.
//!
//! Searching and sorted insertion are driven by a single abstraction,
//! [`Order`]. A strict-weak "less" predicate and a three-way comparator
//! express the same order; adapters turn either calling convention into an
//! `Order`, and `less` is always derived from `compare` (or the reverse for
//! [`LessThan`]) so the two never disagree.

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Two elements are *equivalent* when neither is less than the other. Sorted
/// containers treat equivalent elements as the same key.
pub trait Order<T: ?Sized> {
    /// Three-way comparison of `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Whether `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Whether `a` and `b` are the same key under this order.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

impl<T: ?Sized, O: Order<T> + ?Sized> Order<T> for &O {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }

    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}

/// The element type's own [`Ord`].
///
/// For byte slices this is lexicographic byte order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Order<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders elements by a projected key.
///
/// ```
/// use stride_core::order::{ByKey, Order};
///
/// let by_first = ByKey(|pair: &(i32, char)| pair.0);
/// assert!(by_first.less(&(1, 'z'), &(2, 'a')));
/// assert!(by_first.equivalent(&(1, 'z'), &(1, 'a')));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Order<T> for ByKey<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Adapts a strict-weak "less than" predicate.
///
/// The comparison is derived with at most two predicate calls.
#[derive(Clone, Copy, Debug)]
pub struct LessThan<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Order<T> for LessThan<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        if (self.0)(a, b) {
            Ordering::Less
        } else if (self.0)(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Adapts a three-way comparator.
#[derive(Clone, Copy, Debug)]
pub struct ThreeWay<F>(pub F);

impl<T: ?Sized, F: Fn(&T, &T) -> Ordering> Order<T> for ThreeWay<F> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a, b)
    }
}
