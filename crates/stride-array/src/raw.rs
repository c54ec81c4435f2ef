//! Type-erased growable array.
//!
//! [`RawArray`] stores elements as raw bytes with a stride fixed at
//! construction. It exists for callers whose element layout is only known
//! at run time; code that knows its element type should use
//! [`DynArray`](crate::DynArray).
//!
//! Every allocation, release, copy, and block move goes through the
//! array's [`RawAlloc`]. Bytes past `len()` but inside the capacity stay
//! allocated and keep whatever was last written there, which is why
//! [`RawArray::insert_many_space`] hands back a gap whose contents are
//! unspecified (but always initialised).

use std::fmt;
use std::mem;
use std::ops::Range;
use std::slice::ChunksExact;

use stride_core::order::{LessThan, Order, ThreeWay};
use stride_core::{ArrView, ArrayError, ConfigError, GrowthPolicy, RawAlloc, SystemAlloc};
use tracing::{debug, trace};

use crate::contract::expect_ok;
use crate::search::{check_bounds, partition_point};

/// A growable byte buffer addressed by element index.
///
/// Invariants: `len <= capacity`; the buffer holds no allocation iff
/// `capacity == 0`; `stride > 0` and never changes.
pub struct RawArray<A: RawAlloc = SystemAlloc> {
    /// Number of live elements.
    len: usize,
    /// Allocated element count.
    capacity: usize,
    /// `capacity * stride` bytes, or empty.
    data: Box<[u8]>,
    stride: usize,
    policy: GrowthPolicy,
    alloc: A,
}

impl RawArray<SystemAlloc> {
    /// Create an empty array of `stride`-byte elements. Does not allocate.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    #[track_caller]
    pub fn new(stride: usize) -> Self {
        match Self::try_new(stride) {
            Ok(array) => array,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked form of [`RawArray::new`].
    pub fn try_new(stride: usize) -> Result<Self, ConfigError> {
        Self::with_config(stride, GrowthPolicy::default(), SystemAlloc)
    }

    /// An empty array with a custom growth policy.
    pub fn with_policy(stride: usize, policy: GrowthPolicy) -> Result<Self, ConfigError> {
        Self::with_config(stride, policy, SystemAlloc)
    }
}

impl<A: RawAlloc> RawArray<A> {
    /// Create an empty array with an explicit growth policy and allocator.
    pub fn with_config(stride: usize, policy: GrowthPolicy, alloc: A) -> Result<Self, ConfigError> {
        if stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        policy.validate()?;
        Ok(Self {
            len: 0,
            capacity: 0,
            data: Box::default(),
            stride,
            policy,
            alloc,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of elements. Alias of [`RawArray::len`].
    pub fn size(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Element width in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The growth policy in effect.
    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// The allocator backing this array.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// The live bytes (`len() * stride()` of them).
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len * self.stride]
    }

    /// Mutable access to the live bytes.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..self.len * self.stride]
    }

    /// Borrow the live elements as a view.
    pub fn to_view(&self) -> ArrView<'_> {
        ArrView::new(self.as_bytes(), self.stride)
    }

    /// Iterate over elements.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(self.stride)
    }

    /// Element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        (index < self.len).then(|| &self.data[self.span(index, 1)])
    }

    /// Element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn element(&self, index: usize) -> &[u8] {
        expect_ok(self.check_index(index));
        &self.data[self.span(index, 1)]
    }

    /// Mutable element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn element_mut(&mut self, index: usize) -> &mut [u8] {
        expect_ok(self.check_index(index));
        let span = self.span(index, 1);
        &mut self.data[span]
    }

    /// Copy element `index` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()` or `out` is not exactly one element wide.
    #[track_caller]
    pub fn get_value(&self, index: usize, out: &mut [u8]) {
        expect_ok(self.check_index(index).and_then(|()| self.check_element(out)));
        self.alloc.copy(out, &self.data[self.span(index, 1)]);
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn front(&self) -> &[u8] {
        self.to_view().front()
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn back(&self) -> &[u8] {
        self.to_view().back()
    }

    /// Overwrite element `index` with `value`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: &[u8]) {
        expect_ok(self.try_set(index, value));
    }

    /// Checked form of [`RawArray::set`].
    pub fn try_set(&mut self, index: usize, value: &[u8]) -> Result<(), ArrayError> {
        self.check_index(index)?;
        self.check_element(value)?;
        let span = self.span(index, 1);
        self.alloc.copy(&mut self.data[span], value);
        Ok(())
    }

    /// Grow to at least `capacity` elements, preserving contents. Never
    /// shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity {
            return;
        }
        let bytes = match capacity.checked_mul(self.stride) {
            Some(bytes) => bytes,
            None => panic!("capacity overflow"),
        };
        let mut block = self.alloc.allocate(bytes);
        let used = self.len * self.stride;
        if used > 0 {
            self.alloc.copy(&mut block[..used], &self.data[..used]);
        }
        let old = mem::replace(&mut self.data, block);
        if self.capacity > 0 {
            self.alloc.free(old);
        }
        trace!(
            stride = self.stride,
            from = self.capacity,
            to = capacity,
            "raw array reallocated"
        );
        self.capacity = capacity;
    }

    /// Release the buffer and return to the empty, unallocated state. The
    /// array stays usable.
    pub fn destroy(&mut self) {
        if self.capacity > 0 {
            debug!(
                stride = self.stride,
                capacity = self.capacity,
                "raw array released"
            );
        }
        self.release();
    }

    /// Exchange contents (and allocators) with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Write `values` starting at element `index`, then set the length to
    /// `index + values.len() / stride`.
    ///
    /// Existing elements at and after `index` are overwritten, and any
    /// beyond the written run are cut off.
    #[track_caller]
    pub fn append_from(&mut self, index: usize, values: &[u8]) {
        expect_ok(self.try_append_from(index, values));
    }

    /// Checked form of [`RawArray::append_from`]. Requires `index <= len()`.
    pub fn try_append_from(&mut self, index: usize, values: &[u8]) -> Result<(), ArrayError> {
        let count = self.element_count(values)?;
        if index > self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.grow_if_needed(index + count);
        let span = self.span(index, count);
        self.alloc.copy(&mut self.data[span], values);
        self.len = index + count;
        Ok(())
    }

    /// [`RawArray::append_from`] with a view's bytes.
    #[track_caller]
    pub fn append_view_from(&mut self, index: usize, view: ArrView<'_>) {
        self.append_from(index, view.as_bytes());
    }

    /// [`RawArray::append_from`] with another array's bytes.
    #[track_caller]
    pub fn append_array_from<B: RawAlloc>(&mut self, index: usize, other: &RawArray<B>) {
        self.append_from(index, other.as_bytes());
    }

    /// Append `values` (a whole number of elements) at the end.
    #[track_caller]
    pub fn append(&mut self, values: &[u8]) {
        self.append_from(self.len, values);
    }

    /// Append one element.
    #[track_caller]
    pub fn append_value(&mut self, value: &[u8]) {
        expect_ok(self.check_element(value));
        self.append(value);
    }

    /// Append one element. Alias of [`RawArray::append_value`].
    #[track_caller]
    pub fn push_back(&mut self, value: &[u8]) {
        self.append_value(value);
    }

    /// Append a view's bytes.
    #[track_caller]
    pub fn append_view(&mut self, view: ArrView<'_>) {
        self.append(view.as_bytes());
    }

    /// Append another array's elements.
    #[track_caller]
    pub fn append_array<B: RawAlloc>(&mut self, other: &RawArray<B>) {
        self.append(other.as_bytes());
    }

    /// Open a gap of `count` elements at `index` by moving the tail forward,
    /// and return it. The gap's bytes are unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `count == 0` or `index > len()`.
    #[track_caller]
    pub fn insert_many_space(&mut self, index: usize, count: usize) -> &mut [u8] {
        expect_ok(self.try_insert_many_space(index, count))
    }

    /// Checked form of [`RawArray::insert_many_space`].
    pub fn try_insert_many_space(
        &mut self,
        index: usize,
        count: usize,
    ) -> Result<&mut [u8], ArrayError> {
        let gap = self.open_gap(index, count)?;
        Ok(&mut self.data[gap])
    }

    /// Open a one-element gap at `index`.
    #[track_caller]
    pub fn insert_one_space(&mut self, index: usize) -> &mut [u8] {
        self.insert_many_space(index, 1)
    }

    /// Open a one-element gap at the end.
    #[track_caller]
    pub fn append_one_space(&mut self) -> &mut [u8] {
        self.insert_many_space(self.len, 1)
    }

    /// Insert `values` (a whole, nonzero number of elements) before
    /// element `index`.
    #[track_caller]
    pub fn insert_many(&mut self, index: usize, values: &[u8]) {
        expect_ok(self.try_insert_many(index, values));
    }

    /// Checked form of [`RawArray::insert_many`].
    pub fn try_insert_many(&mut self, index: usize, values: &[u8]) -> Result<(), ArrayError> {
        let count = self.element_count(values)?;
        let gap = self.open_gap(index, count)?;
        self.alloc.copy(&mut self.data[gap], values);
        Ok(())
    }

    /// Insert one element before element `index`.
    #[track_caller]
    pub fn insert_one(&mut self, index: usize, value: &[u8]) {
        expect_ok(self.check_element(value));
        self.insert_many(index, value);
    }

    /// Insert a view's bytes before element `index`.
    #[track_caller]
    pub fn insert_view(&mut self, index: usize, view: ArrView<'_>) {
        self.insert_many(index, view.as_bytes());
    }

    /// Insert another array's elements before element `index`.
    #[track_caller]
    pub fn insert_array<B: RawAlloc>(&mut self, index: usize, other: &RawArray<B>) {
        self.insert_many(index, other.as_bytes());
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

    /// Checked form of [`RawArray::erase_many`].
    pub fn try_erase_many(&mut self, index: usize, count: usize) -> Result<(), ArrayError> {
        let end = self.check_range(index, count)?;
        if count == 0 {
            return Ok(());
        }
        let tail = self.len - end;
        let src = self.span(end, tail);
        self.alloc
            .move_within(&mut self.data, src, index * self.stride);
        self.len -= count;
        Ok(())
    }

    /// Remove element `index`.
    #[track_caller]
    pub fn erase_one(&mut self, index: usize) {
        self.erase_many(index, 1);
    }

    /// Remove `count` elements starting at `index` by refilling the gap
    /// from the end of the array. O(count), but survivors lose their
    /// relative order.
    ///
    /// # Panics
    ///
    /// Panics unless `index + count < len()`; ranges reaching the end must
    /// use [`RawArray::erase_many`].
    #[track_caller]
    pub fn erase_many_unsorted(&mut self, index: usize, count: usize) {
        expect_ok(self.try_erase_many_unsorted(index, count));
    }

    /// Checked form of [`RawArray::erase_many_unsorted`].
    pub fn try_erase_many_unsorted(
        &mut self,
        index: usize,
        count: usize,
    ) -> Result<(), ArrayError> {
        let end = self.check_unsorted_range(index, count)?;
        // Only tail survivors that would fall past the new length move.
        let moved = count.min(self.len - end);
        let src = self.span(self.len - moved, moved);
        self.alloc
            .move_within(&mut self.data, src, index * self.stride);
        self.len -= count;
        Ok(())
    }

    /// Remove the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_back(&mut self) {
        expect_ok(self.check_not_empty());
        self.erase_one(self.len - 1);
    }

    /// Remove the first element. O(len).
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[track_caller]
    pub fn pop_front(&mut self) {
        expect_ok(self.check_not_empty());
        self.erase_one(0);
    }

    /// Replace the contents with `values`.
    #[track_caller]
    pub fn assign(&mut self, values: &[u8]) {
        let count = expect_ok(self.element_count(values));
        self.clear();
        self.grow_if_needed(count);
        let span = self.span(0, count);
        self.alloc.copy(&mut self.data[span], values);
        self.len = count;
    }

    /// Replace the contents with a view's bytes.
    #[track_caller]
    pub fn assign_view(&mut self, view: ArrView<'_>) {
        self.assign(view.as_bytes());
    }

    /// Replace the contents with another array's elements.
    #[track_caller]
    pub fn assign_array<B: RawAlloc>(&mut self, other: &RawArray<B>) {
        self.assign(other.as_bytes());
    }

    /// Replace the contents with `count` copies of `value`, written one
    /// element at a time.
    #[track_caller]
    pub fn assign_nvalue(&mut self, count: usize, value: &[u8]) {
        expect_ok(self.check_element(value));
        self.clear();
        self.grow_if_needed(count);
        for index in 0..count {
            let span = self.span(index, 1);
            self.alloc.copy(&mut self.data[span], value);
        }
        self.len = count;
    }

    /// Set the length to zero. Keeps the buffer.
    pub fn clear(&mut self) {
        self.resize(0);
    }

    /// Set the length to `len`.
    ///
    /// Growing past the capacity reallocates and zeroes everything from the
    /// old length to the new capacity; growing within the capacity zeroes
    /// the new elements; shrinking only moves the length.
    pub fn resize(&mut self, len: usize) {
        if len == self.len {
            return;
        }
        let zeroed = if len > self.capacity {
            self.grow_if_needed(len);
            self.len..self.capacity
        } else if len > self.len {
            self.len..len
        } else {
            len..len
        };
        if !zeroed.is_empty() {
            let span = self.span(zeroed.start, zeroed.len());
            self.data[span].fill(0);
        }
        self.len = len;
    }

    /// First index in `[left, right)` whose element is not less than
    /// `value`.
    ///
    /// # Panics
    ///
    /// Panics unless `left <= right <= len()`.
    #[track_caller]
    pub fn lower_bound<O>(&self, left: usize, right: usize, value: &[u8], order: &O) -> usize
    where
        O: Order<[u8]> + ?Sized,
    {
        check_bounds(left, right, self.len);
        let stride = self.stride;
        let data = &self.data;
        partition_point(left, right, |mid| {
            order.less(&data[mid * stride..(mid + 1) * stride], value)
        })
    }

    /// [`RawArray::lower_bound`] with a "less than" predicate.
    #[track_caller]
    pub fn lower_bound_by(
        &self,
        left: usize,
        right: usize,
        value: &[u8],
        less: impl Fn(&[u8], &[u8]) -> bool,
    ) -> usize {
        self.lower_bound(left, right, value, &LessThan(less))
    }

    /// [`RawArray::lower_bound`] with a three-way comparator.
    #[track_caller]
    pub fn lower_bound_by_cmp(
        &self,
        left: usize,
        right: usize,
        value: &[u8],
        compare: impl Fn(&[u8], &[u8]) -> std::cmp::Ordering,
    ) -> usize {
        self.lower_bound(left, right, value, &ThreeWay(compare))
    }

    /// Index of the element equivalent to `value`, or `len()` if none is.
    pub fn binary_find<O>(&self, value: &[u8], order: &O) -> usize
    where
        O: Order<[u8]> + ?Sized,
    {
        let index = self.lower_bound(0, self.len, value, order);
        if index == self.len || order.less(value, &self.data[self.span(index, 1)]) {
            return self.len;
        }
        index
    }

    /// [`RawArray::binary_find`] with a "less than" predicate.
    pub fn binary_find_by(&self, value: &[u8], less: impl Fn(&[u8], &[u8]) -> bool) -> usize {
        self.binary_find(value, &LessThan(less))
    }

    /// [`RawArray::binary_find`] with a three-way comparator.
    pub fn binary_find_by_cmp(
        &self,
        value: &[u8],
        compare: impl Fn(&[u8], &[u8]) -> std::cmp::Ordering,
    ) -> usize {
        self.binary_find(value, &ThreeWay(compare))
    }

    /// Insert `value` before the first element not less than it and return
    /// its index. Keeps the array sorted only if every mutation uses the
    /// same order.
    #[track_caller]
    pub fn insert_one_sorted<O>(&mut self, value: &[u8], order: &O) -> usize
    where
        O: Order<[u8]> + ?Sized,
    {
        let index = self.lower_bound(0, self.len, value, order);
        self.insert_one(index, value);
        index
    }

    /// [`RawArray::insert_one_sorted`] with a "less than" predicate.
    #[track_caller]
    pub fn insert_one_sorted_by(
        &mut self,
        value: &[u8],
        less: impl Fn(&[u8], &[u8]) -> bool,
    ) -> usize {
        self.insert_one_sorted(value, &LessThan(less))
    }

    fn span(&self, index: usize, count: usize) -> Range<usize> {
        index * self.stride..(index + count) * self.stride
    }

    fn grow_if_needed(&mut self, needed: usize) {
        if needed > self.capacity {
            self.reserve(self.policy.next_capacity(self.capacity, needed));
        }
    }

    /// Move `[index, len)` forward by `count` elements and return the byte
    /// range of the opened gap.
    fn open_gap(&mut self, index: usize, count: usize) -> Result<Range<usize>, ArrayError> {
        if count == 0 {
            return Err(ArrayError::ZeroCount);
        }
        if index > self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        self.grow_if_needed(self.len + count);
        let tail = self.len - index;
        if tail > 0 {
            let src = self.span(index, tail);
            self.alloc
                .move_within(&mut self.data, src, (index + count) * self.stride);
        }
        self.len += count;
        Ok(self.span(index, count))
    }

    fn release(&mut self) {
        let old = mem::take(&mut self.data);
        if self.capacity > 0 {
            self.alloc.free(old);
        }
        self.len = 0;
        self.capacity = 0;
    }

    fn element_count(&self, bytes: &[u8]) -> Result<usize, ArrayError> {
        if bytes.len() % self.stride != 0 {
            return Err(ArrayError::StrideMismatch {
                stride: self.stride,
                bytes: bytes.len(),
            });
        }
        Ok(bytes.len() / self.stride)
    }

    fn check_element(&self, value: &[u8]) -> Result<(), ArrayError> {
        if value.len() != self.stride {
            return Err(ArrayError::StrideMismatch {
                stride: self.stride,
                bytes: value.len(),
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index >= self.len {
            return Err(ArrayError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_not_empty(&self) -> Result<(), ArrayError> {
        if self.len == 0 {
            return Err(ArrayError::Empty);
        }
        Ok(())
    }

    /// Validate an erase range, returning its end.
    fn check_range(&self, index: usize, count: usize) -> Result<usize, ArrayError> {
        self.check_index(index)?;
        match index.checked_add(count) {
            Some(end) if end <= self.len => Ok(end),
            _ => Err(ArrayError::RangeOutOfBounds {
                index,
                count,
                len: self.len,
            }),
        }
    }

    fn check_unsorted_range(&self, index: usize, count: usize) -> Result<usize, ArrayError> {
        match index.checked_add(count) {
            Some(end) if end < self.len => Ok(end),
            Some(end) if end == self.len => Err(ArrayError::TailRange {
                index,
                count,
                len: self.len,
            }),
            _ => Err(ArrayError::RangeOutOfBounds {
                index,
                count,
                len: self.len,
            }),
        }
    }
}

impl<A: RawAlloc> Drop for RawArray<A> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<A: RawAlloc + Clone> Clone for RawArray<A> {
    fn clone(&self) -> Self {
        let mut copy = Self {
            len: 0,
            capacity: 0,
            data: Box::default(),
            stride: self.stride,
            policy: self.policy,
            alloc: self.alloc.clone(),
        };
        copy.reserve(self.capacity);
        copy.append(self.as_bytes());
        copy
    }
}

impl<A: RawAlloc> fmt::Debug for RawArray<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .field("stride", &self.stride)
            .finish()
    }
}

impl<A: RawAlloc, B: RawAlloc> PartialEq<RawArray<B>> for RawArray<A> {
    fn eq(&self, other: &RawArray<B>) -> bool {
        self.stride == other.stride && self.as_bytes() == other.as_bytes()
    }
}

impl<A: RawAlloc> Eq for RawArray<A> {}
