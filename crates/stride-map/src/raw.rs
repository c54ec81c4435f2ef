//! Type-erased sorted map.
//!
//! [`RawSortedMap`] is the byte-level twin of
//! [`SortedMap`](crate::SortedMap): entries are `stride`-byte records in a
//! [`RawArray`], ordered by an [`Order<[u8]>`](Order) that typically looks
//! only at a key prefix of each record.

use std::fmt;
use std::slice::ChunksExact;

use stride_array::RawArray;
use stride_core::order::{LessThan, Order};
use stride_core::{ArrView, ArrayError, ConfigError, GrowthPolicy, RawAlloc, SystemAlloc};

/// Sorted-array map over fixed-width byte records.
pub struct RawSortedMap<O, A: RawAlloc = SystemAlloc> {
    items: RawArray<A>,
    order: O,
}

impl<O: Order<[u8]>> RawSortedMap<O, SystemAlloc> {
    /// An empty map of `stride`-byte records ordered by `order`.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    #[track_caller]
    pub fn new(stride: usize, order: O) -> Self {
        match Self::try_new(stride, order) {
            Ok(map) => map,
            Err(e) => panic!("{e}"),
        }
    }

    /// Checked form of [`RawSortedMap::new`].
    pub fn try_new(stride: usize, order: O) -> Result<Self, ConfigError> {
        Self::with_config(stride, GrowthPolicy::default(), SystemAlloc, order)
    }
}

impl<F: Fn(&[u8], &[u8]) -> bool> RawSortedMap<LessThan<F>, SystemAlloc> {
    /// An empty map ordered by a "less than" predicate over records.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    #[track_caller]
    pub fn by_predicate(stride: usize, less: F) -> Self {
        Self::new(stride, LessThan(less))
    }
}

impl<O: Order<[u8]>, A: RawAlloc> RawSortedMap<O, A> {
    /// An empty map with an explicit growth policy and allocator.
    pub fn with_config(
        stride: usize,
        policy: GrowthPolicy,
        alloc: A,
        order: O,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            items: RawArray::with_config(stride, policy, alloc)?,
            order,
        })
    }

    /// Copy the stored record equivalent to `item` into `out`. Returns
    /// whether one was found; `out` is untouched otherwise.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not exactly one record wide, whether or not
    /// `item` is found.
    #[track_caller]
    pub fn get(&self, item: &[u8], out: &mut [u8]) -> bool {
        let stride = self.stride();
        if out.len() != stride {
            let e = ArrayError::StrideMismatch {
                stride,
                bytes: out.len(),
            };
            panic!("{e}");
        }
        match self.find(item) {
            Some(index) => {
                self.items.get_value(index, out);
                true
            }
            None => false,
        }
    }

    /// The stored record equivalent to `item`.
    pub fn get_ref(&self, item: &[u8]) -> Option<&[u8]> {
        self.find(item).map(|index| self.items.element(index))
    }

    /// Whether a record equivalent to `item` is stored.
    pub fn contains(&self, item: &[u8]) -> bool {
        self.find(item).is_some()
    }

    /// Store `item`. Returns `true` if its key was new; otherwise the
    /// existing record is overwritten in place and `false` is returned.
    ///
    /// # Panics
    ///
    /// Panics if `item` is not exactly one record wide.
    #[track_caller]
    pub fn set(&mut self, item: &[u8]) -> bool {
        let len = self.items.len();
        let index = self.items.lower_bound(0, len, item, &self.order);
        if index < len && !self.order.less(item, self.items.element(index)) {
            self.items.set(index, item);
            return false;
        }
        self.items.insert_one(index, item);
        true
    }

    /// Remove the record equivalent to `item`. Returns whether one existed.
    pub fn remove(&mut self, item: &[u8]) -> bool {
        match self.find(item) {
            Some(index) => {
                self.items.erase_one(index);
                true
            }
            None => false,
        }
    }

    /// Number of records.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of records. Alias of [`RawSortedMap::size`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record width in bytes.
    pub fn stride(&self) -> usize {
        self.items.stride()
    }

    /// Records in ascending order.
    pub fn iter(&self) -> ChunksExact<'_, u8> {
        self.items.iter()
    }

    /// All records as one byte run.
    pub fn as_bytes(&self) -> &[u8] {
        self.items.as_bytes()
    }

    /// Borrow the records as a view.
    pub fn to_view(&self) -> ArrView<'_> {
        self.items.to_view()
    }

    /// Capacity of the backing array.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Grow the backing array to hold at least `capacity` records.
    pub fn reserve(&mut self, capacity: usize) {
        self.items.reserve(capacity);
    }

    /// Remove every record. Keeps the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove every record and release the buffer.
    pub fn destroy(&mut self) {
        self.items.destroy();
    }

    /// The map's order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Whether every adjacent pair of records is strictly ascending.
    pub fn is_strictly_sorted(&self) -> bool {
        let stride = self.stride();
        self.as_bytes()
            .windows(2 * stride)
            .step_by(stride)
            .all(|pair| self.order.less(&pair[..stride], &pair[stride..]))
    }

    fn find(&self, item: &[u8]) -> Option<usize> {
        let index = self.items.binary_find(item, &self.order);
        (index < self.items.len()).then_some(index)
    }
}

impl<O, A: RawAlloc> fmt::Debug for RawSortedMap<O, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawSortedMap")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
