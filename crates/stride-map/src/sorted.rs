//! Typed sorted map.
//!
//! A [`SortedMap`] is a [`DynArray`] kept in strictly ascending order under
//! an [`Order`]. Items carry their own key; two items with equivalent keys
//! are the same entry. Lookups bisect, and mutations shift the tail.

use std::fmt;

use stride_array::DynArray;
use stride_core::order::{ByKey, Natural, Order};
use stride_core::{ConfigError, GrowthPolicy};

/// Sorted-array map over `Copy` items.
pub struct SortedMap<T, O> {
    items: DynArray<T>,
    order: O,
}

impl<T: Copy, O: Order<T>> SortedMap<T, O> {
    /// An empty map ordered by `order`. Does not allocate.
    pub fn new(order: O) -> Self {
        Self {
            items: DynArray::new(),
            order,
        }
    }

    /// An empty map with a custom growth policy.
    pub fn with_policy(order: O, policy: GrowthPolicy) -> Result<Self, ConfigError> {
        Ok(Self {
            items: DynArray::with_policy(policy)?,
            order,
        })
    }

    /// The stored item equivalent to `item`, copied out.
    pub fn get(&self, item: &T) -> Option<T> {
        self.get_ref(item).copied()
    }

    /// The stored item equivalent to `item`.
    pub fn get_ref(&self, item: &T) -> Option<&T> {
        self.find(item).map(|index| &self.items[index])
    }

    /// Whether an item equivalent to `item` is stored.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }

    /// Store `item`. Returns `true` if its key was new; otherwise the
    /// existing entry is overwritten in place and `false` is returned.
    pub fn set(&mut self, item: T) -> bool {
        let index = self.position(&item);
        if index < self.items.len() && !self.order.less(&item, &self.items[index]) {
            self.items[index] = item;
            return false;
        }
        self.items.insert_one(index, item);
        true
    }

    /// Remove the entry equivalent to `item`. Returns whether one existed.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.find(item) {
            Some(index) => {
                self.items.erase_one(index);
                true
            }
            None => false,
        }
    }

    /// Number of entries.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Number of entries. Alias of [`SortedMap::size`].
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entries in ascending order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Entries in ascending order.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Capacity of the backing array.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Grow the backing array to hold at least `capacity` entries.
    pub fn reserve(&mut self, capacity: usize) {
        self.items.reserve(capacity);
    }

    /// Remove every entry. Keeps the buffer.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Remove every entry and release the buffer.
    pub fn destroy(&mut self) {
        self.items.destroy();
    }

    /// The map's order.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Whether every adjacent pair of entries is strictly ascending.
    pub fn is_strictly_sorted(&self) -> bool {
        self.items
            .as_slice()
            .windows(2)
            .all(|pair| self.order.less(&pair[0], &pair[1]))
    }

    fn position(&self, item: &T) -> usize {
        self.items.lower_bound(0, self.items.len(), item, &self.order)
    }

    fn find(&self, item: &T) -> Option<usize> {
        let index = self.items.binary_find(item, &self.order);
        (index < self.items.len()).then_some(index)
    }
}

impl<T: Copy, K: Ord, F: Fn(&T) -> K> SortedMap<T, ByKey<F>> {
    /// An empty map ordered by the key `key` projects out of each item.
    ///
    /// ```
    /// use stride_map::SortedMap;
    ///
    /// let mut ages = SortedMap::by_key(|entry: &(u32, u8)| entry.0);
    /// assert!(ages.set((7, 30)));
    /// assert!(!ages.set((7, 31)));
    /// assert_eq!(ages.get(&(7, 0)), Some((7, 31)));
    /// ```
    pub fn by_key(key: F) -> Self {
        Self::new(ByKey(key))
    }
}

impl<T: Copy + Ord> Default for SortedMap<T, Natural> {
    fn default() -> Self {
        Self::new(Natural)
    }
}

impl<T: Clone, O: Clone> Clone for SortedMap<T, O> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            order: self.order.clone(),
        }
    }
}

impl<T: fmt::Debug, O> fmt::Debug for SortedMap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl<'a, T, O> IntoIterator for &'a SortedMap<T, O> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
