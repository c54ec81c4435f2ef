//! Typed growable array with explicit capacity control.
//!
//! [`DynArray`] keeps its own capacity figure next to a `Vec`: the vector's
//! length is the array length, and growth is driven by the array's
//! [`GrowthPolicy`] rather than by `Vec`'s amortisation. `capacity()`
//! therefore reports exactly what the policy (or an explicit
//! [`DynArray::reserve`]) asked for.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

use stride_core::order::{LessThan, Order, ThreeWay};
use stride_core::{ArrayError, ConfigError, GrowthPolicy};
use tracing::{debug, trace};

use crate::contract::expect_ok;
use crate::search;

/// A growable array of `Copy` elements.
pub struct DynArray<T> {
    /// Live elements; `data.len()` is the array length.
    data: Vec<T>,
    /// Requested capacity. `data.capacity() >= capacity` always holds.
    capacity: usize,
    policy: GrowthPolicy,
}

impl<T> DynArray<T> {
    /// An empty array with the default growth policy. Does not allocate.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            policy: GrowthPolicy::new(),
        }
    }

    /// An empty array with a custom growth policy.
    pub fn with_policy(policy: GrowthPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self {
            data: Vec::new(),
            capacity: 0,
            policy,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of elements. Alias of [`DynArray::len`].
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Element width in bytes.
    pub fn stride(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable element `index`, or `None` past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn element(&self, index: usize) -> &T {
        &self[index]
    }

    /// Mutable element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn element_mut(&mut self, index: usize) -> &mut T {
        &mut self[index]
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn front(&self) -> &T {
        expect_ok(self.data.first().ok_or(ArrayError::Empty))
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn back(&self) -> &T {
        expect_ok(self.data.last().ok_or(ArrayError::Empty))
    }

    /// Grow to at least `capacity` elements, preserving contents. Never
    /// shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        self.data.reserve_exact(capacity - self.data.len());
        trace!(
            stride = self.stride(),
            from = self.capacity,
            to = capacity,
            "array reallocated"
        );
        self.capacity = capacity;
    }

    /// Release the buffer and return to the empty, unallocated state. The
    /// array stays usable.
    pub fn destroy(&mut self) {
        if self.capacity > 0 {
            debug!(
                stride = self.stride(),
                capacity = self.capacity,
                "array released"
            );
        }
        self.data = Vec::new();
        self.capacity = 0;
    }

    /// Set the length to zero. Keeps the buffer.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchange contents with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn grow_if_needed(&mut self, needed: usize) {
        if needed > self.capacity {
            self.reserve(self.policy.next_capacity(self.capacity, needed));
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.data.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    fn check_insert(&self, index: usize, count: usize) -> Result<(), ArrayError> {
        if count == 0 {
            return Err(ArrayError::ZeroCount);
        }
        if index > self.data.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }
}

impl<T: Copy> DynArray<T> {
    /// Copy of element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn get_value(&self, index: usize) -> T {
        expect_ok(self.check_index(index));
        self.data[index]
    }

    /// Overwrite element `index`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: T) {
        expect_ok(self.try_set(index, value));
    }

    /// Checked form of [`DynArray::set`].
    pub fn try_set(&mut self, index: usize, value: T) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.data[index] = value;
        Ok(())
    }

    /// Write `values` starting at `index`, then set the length to
    /// `index + values.len()`. Elements past the written run are cut off.
    #[track_caller]
    pub fn append_from(&mut self, index: usize, values: &[T]) {
        expect_ok(self.try_append_from(index, values));
    }

    /// Checked form of [`DynArray::append_from`]. Requires `index <= len()`.
    pub fn try_append_from(&mut self, index: usize, values: &[T]) -> Result<(), ArrayError> {
        if index > self.data.len() {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        self.grow_if_needed(index + values.len());
        self.data.truncate(index);
        self.data.extend_from_slice(values);
        Ok(())
    }

    /// [`DynArray::append_from`] with another array's elements.
    #[track_caller]
    pub fn append_array_from(&mut self, index: usize, other: &DynArray<T>) {
        self.append_from(index, other.as_slice());
    }

    /// Append `values` at the end.
    pub fn append(&mut self, values: &[T]) {
        self.append_from(self.data.len(), values);
    }

    /// Append one element.
    pub fn append_value(&mut self, value: T) {
        self.append(std::slice::from_ref(&value));
    }

    /// Append one element. Alias of [`DynArray::append_value`].
    pub fn push_back(&mut self, value: T) {
        self.append_value(value);
    }

    /// Append another array's elements.
    pub fn append_array(&mut self, other: &DynArray<T>) {
        self.append(other.as_slice());
    }

    /// Insert `values` (nonempty) before element `index`.
    #[track_caller]
    pub fn insert_many(&mut self, index: usize, values: &[T]) {
        expect_ok(self.try_insert_many(index, values));
    }

    /// Checked form of [`DynArray::insert_many`].
    pub fn try_insert_many(&mut self, index: usize, values: &[T]) -> Result<(), ArrayError> {
        self.check_insert(index, values.len())?;
        let old_len = self.data.len();
        self.grow_if_needed(old_len + values.len());
        self.data.extend_from_slice(values);
        self.data.copy_within(index..old_len, index + values.len());
        self.data[index..index + values.len()].copy_from_slice(values);
        Ok(())
    }

    /// Insert one element before element `index`.
    #[track_caller]
    pub fn insert_one(&mut self, index: usize, value: T) {
        self.insert_many(index, std::slice::from_ref(&value));
    }

    /// Insert another array's elements before element `index`.
    #[track_caller]
    pub fn insert_array(&mut self, index: usize, other: &DynArray<T>) {
        self.insert_many(index, other.as_slice());
    }

    /// Remove `count` elements starting at `index`, shifting the tail down.
    /// Order-preserving.
    ///
    /// # Panics
    ///
    /// Panics unless `index < len()` and `index + count <= len()`.
    #[track_caller]
    pub fn erase_many(&mut self, index: usize, count: usize) {
        expect_ok(self.try_erase_many(index, count));
    }

    /// Checked form of [`DynArray::erase_many`].
    pub fn try_erase_many(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        self.check_index(index)?;
        let len = self.data.len();
        let end = match index.checked_add(count) {
            Some(end) if end <= len => end,
            _ => return Err(ArrayError::RangeOutOfBounds { index, count, len }),
        };
        if count == 0 {
            return Ok(());
        }
        self.data.copy_within(end..len, index);
        self.data.truncate(len - count);
        Ok(())
    }

    /// Remove element `index`.
    #[track_caller]
    pub fn erase_one(&mut self, index: usize) {
        self.erase_many(index, 1);
    }

    /// Remove `count` elements starting at `index` by refilling the gap
    /// from the end of the array. Survivors lose their relative order.
    ///
    /// # Panics
    ///
    /// Panics unless `index + count < len()`.
    #[track_caller]
    pub fn erase_many_unsorted(&mut self, index: usize, count: usize) {
        expect_ok(self.try_erase_many_unsorted(index, count));
    }

    /// Checked form of [`DynArray::erase_many_unsorted`].
    pub fn try_erase_many_unsorted(
        &mut self,
        index: usize,
        count: usize,
    ) -> Result<(), ArrayError> {
        let len = self.data.len();
        let end = match index.checked_add(count) {
            Some(end) if end < len => end,
            Some(end) if end == len => return Err(ArrayError::TailRange { index, count, len }),
            _ => return Err(ArrayError::RangeOutOfBounds { index, count, len }),
        };
        let moved = count.min(len - end);
        self.data.copy_within(len - moved..len, index);
        self.data.truncate(len - count);
        Ok(())
    }

    /// Remove and return the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_back(&mut self) -> T {
        expect_ok(self.try_pop_back())
    }

    /// Checked form of [`DynArray::pop_back`].
    pub fn try_pop_back(&mut self) -> Result<T, ArrayError> {
        self.data.pop().ok_or(ArrayError::Empty)
    }

    /// Remove and return the first element. O(len).
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_front(&mut self) -> T {
        expect_ok(self.try_pop_front())
    }

    /// Checked form of [`DynArray::pop_front`].
    pub fn try_pop_front(&mut self) -> Result<T, ArrayError> {
        let first = *self.data.first().ok_or(ArrayError::Empty)?;
        self.try_erase_many(0, 1)?;
        Ok(first)
    }

    /// Replace the contents with `values`.
    pub fn assign(&mut self, values: &[T]) {
        self.data.clear();
        self.grow_if_needed(values.len());
        self.data.extend_from_slice(values);
    }

    /// Replace the contents with another array's elements.
    pub fn assign_array(&mut self, other: &DynArray<T>) {
        self.assign(other.as_slice());
    }

    /// Replace the contents with `count` copies of `value`.
    pub fn assign_nvalue(&mut self, count: usize, value: T) {
        self.data.clear();
        self.grow_if_needed(count);
        self.data.resize(count, value);
    }

    /// First index in `[left, right)` whose element is not less than
    /// `value`.
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right <= len()`.
    #[track_caller]
    pub fn lower_bound<O>(&self, left: usize, right: usize, value: &T, order: &O) -> usize
    where
        O: Order<T> + ?Sized,
    {
        search::lower_bound(&self.data, left, right, value, order)
    }

    /// [`DynArray::lower_bound`] with a "less than" predicate.
    #[track_caller]
    pub fn lower_bound_by(
        &self,
        left: usize,
        right: usize,
        value: &T,
        less: impl Fn(&T, &T) -> bool,
    ) -> usize {
        self.lower_bound(left, right, value, &LessThan(less))
    }

    /// [`DynArray::lower_bound`] with a three-way comparator.
    #[track_caller]
    pub fn lower_bound_by_cmp(
        &self,
        left: usize,
        right: usize,
        value: &T,
        compare: impl Fn(&T, &T) -> Ordering,
    ) -> usize {
        self.lower_bound(left, right, value, &ThreeWay(compare))
    }

    /// Index of the element equivalent to `value`, or `len()` if none is.
    pub fn binary_find<O>(&self, value: &T, order: &O) -> usize
    where
        O: Order<T> + ?Sized,
    {
        search::binary_find(&self.data, value, order)
    }

    /// [`DynArray::binary_find`] with a "less than" predicate.
    pub fn binary_find_by(&self, value: &T, less: impl Fn(&T, &T) -> bool) -> usize {
        self.binary_find(value, &LessThan(less))
    }

    /// [`DynArray::binary_find`] with a three-way comparator.
    pub fn binary_find_by_cmp(&self, value: &T, compare: impl Fn(&T, &T) -> Ordering) -> usize {
        self.binary_find(value, &ThreeWay(compare))
    }

    /// Insert `value` before the first element not less than it and return
    /// its index.
    pub fn insert_one_sorted<O>(&mut self, value: T, order: &O) -> usize
    where
        O: Order<T> + ?Sized,
    {
        let index = self.lower_bound(0, self.data.len(), &value, order);
        self.insert_one(index, value);
        index
    }

    /// [`DynArray::insert_one_sorted`] with a "less than" predicate.
    pub fn insert_one_sorted_by(&mut self, value: T, less: impl Fn(&T, &T) -> bool) -> usize {
        self.insert_one_sorted(value, &LessThan(less))
    }
}

impl<T: Copy + Default> DynArray<T> {
    /// Open a gap of `count` elements at `index` and return it. The gap is
    /// filled with `T::default()`.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0` or `index > len()`.
    #[track_caller]
    pub fn insert_many_space(&mut self, index: usize, count: usize) -> &mut [T] {
        expect_ok(self.try_insert_many_space(index, count))
    }

    /// Checked form of [`DynArray::insert_many_space`].
    pub fn try_insert_many_space(
        &mut self,
        index: usize,
        count: usize,
    ) -> Result<&mut [T], ArrayError> {
        self.check_insert(index, count)?;
        let old_len = self.data.len();
        self.grow_if_needed(old_len + count);
        self.data.resize(old_len + count, T::default());
        self.data.copy_within(index..old_len, index + count);
        let gap = &mut self.data[index..index + count];
        gap.fill(T::default());
        Ok(gap)
    }

    /// Open a one-element gap at `index`.
    #[track_caller]
    pub fn insert_one_space(&mut self, index: usize) -> &mut T {
        &mut self.insert_many_space(index, 1)[0]
    }

    /// Open a one-element gap at the end.
    pub fn append_one_space(&mut self) -> &mut T {
        self.insert_one_space(self.data.len())
    }

    /// Set the length to `len`, filling new elements with `T::default()`.
    pub fn resize(&mut self, len: usize) {
        self.grow_if_needed(len);
        self.data.resize(len, T::default());
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynArray<T> {
    fn clone(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend_from_slice(&self.data);
        Self {
            data,
            capacity: self.capacity,
            policy: self.policy,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynArray")
            .field("len", &self.data.len())
            .field("capacity", &self.capacity)
            .field("items", &self.data)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for DynArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: Eq> Eq for DynArray<T> {}

impl<T> Index<usize> for DynArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(item) => item,
            None => panic!(
                "{}",
                ArrayError::IndexOutOfBounds {
                    index,
                    len: self.data.len()
                }
            ),
        }
    }
}

impl<T> IndexMut<usize> for DynArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(item) => item,
            None => panic!("{}", ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T: Copy> Extend<T> for DynArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T: Copy> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<T: Copy> From<&[T]> for DynArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self::new();
        array.append(values);
        array
    }
}

impl<T> AsRef<[T]> for DynArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<'a, T> IntoIterator for &'a DynArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
