//! Non-owning views over strided byte ranges.
//!
//! An [`ArrView`] describes `count` elements of `stride` bytes each. It
//! never allocates and borrows the bytes it describes, so a view cannot
//! outlive (or observe a reallocation of) the buffer behind it.

use std::cmp::Ordering;
use std::slice::ChunksExact;

use crate::error::ArrayError;

/// A borrowed run of fixed-width elements.
#[derive(Clone, Copy, Debug)]
pub struct ArrView<'a> {
    count: usize,
    stride: usize,
    data: &'a [u8],
}

impl<'a> ArrView<'a> {
    /// Sentinel returned by [`ArrView::find_value`] when nothing matches.
    pub const NPOS: usize = usize::MAX;

    /// View `data` as elements of `stride` bytes.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero or `data.len()` is not a multiple of it.
    #[track_caller]
    pub fn new(data: &'a [u8], stride: usize) -> Self {
        Self::try_new(data, stride).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Checked form of [`ArrView::new`].
    pub fn try_new(data: &'a [u8], stride: usize) -> Result<Self, ArrayError> {
        if stride == 0 || data.len() % stride != 0 {
            return Err(ArrayError::StrideMismatch {
                stride,
                bytes: data.len(),
            });
        }
        Ok(Self {
            count: data.len() / stride,
            stride,
            data,
        })
    }

    /// A zero-length view.
    ///
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn empty(stride: usize) -> Self {
        assert!(stride > 0, "view stride must be nonzero");
        Self {
            count: 0,
            stride,
            data: &[],
        }
    }

    /// Point the view at nothing, keeping its stride.
    pub fn reset(&mut self) {
        self.count = 0;
        self.data = &[];
    }

    /// Re-point the view at `data`, keeping its stride.
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` is not a multiple of the stride.
    #[track_caller]
    pub fn assign(&mut self, data: &'a [u8]) {
        *self = Self::new(data, self.stride);
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the view holds no elements.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Element width in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The viewed bytes (`len() * stride()` of them).
    pub fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Element `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        if index >= self.count {
            return None;
        }
        let start = index * self.stride;
        Some(&self.data[start..start + self.stride])
    }

    /// Iterate over elements.
    pub fn iter(&self) -> ChunksExact<'a, u8> {
        self.data.chunks_exact(self.stride)
    }

    /// First element.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn front(&self) -> &'a [u8] {
        match self.get(0) {
            Some(first) => first,
            None => panic!("{}", ArrayError::Empty),
        }
    }

    /// Last element.
    ///
    /// # Panics
    ///
    /// Panics if the view is empty.
    #[track_caller]
    pub fn back(&self) -> &'a [u8] {
        match self.count.checked_sub(1).and_then(|last| self.get(last)) {
            Some(last) => last,
            None => panic!("{}", ArrayError::Empty),
        }
    }

    /// Byte-wise comparison against raw element bytes.
    ///
    /// The common prefix is compared first; if it is equal, the shorter
    /// side orders first.
    pub fn compare(&self, other: &[u8]) -> Ordering {
        self.data.cmp(other)
    }

    /// Byte-wise comparison against another view.
    ///
    /// # Panics
    ///
    /// Panics if the strides differ.
    #[track_caller]
    pub fn compare_view(&self, other: &ArrView<'_>) -> Ordering {
        assert_eq!(
            self.stride, other.stride,
            "cannot compare views of different strides"
        );
        self.compare(other.data)
    }

    /// Same element count and same bytes.
    pub fn equals(&self, other: &ArrView<'_>) -> bool {
        self.count == other.count && self.stride == other.stride && self.data == other.data
    }

    /// Whether this view orders before `other`.
    #[track_caller]
    pub fn less_than(&self, other: &ArrView<'_>) -> bool {
        self.compare_view(other) == Ordering::Less
    }

    /// Whether this view orders after `other`.
    #[track_caller]
    pub fn greater_than(&self, other: &ArrView<'_>) -> bool {
        self.compare_view(other) == Ordering::Greater
    }

    /// Index of the first element whose bytes equal `value`, or
    /// [`ArrView::NPOS`].
    pub fn find_value(&self, value: &[u8]) -> usize {
        if value.len() != self.stride {
            return Self::NPOS;
        }
        self.iter()
            .position(|element| element == value)
            .unwrap_or(Self::NPOS)
    }

    /// Swap the two descriptors. The underlying bytes are untouched.
    pub fn swap(&mut self, other: &mut ArrView<'a>) {
        std::mem::swap(self, other);
    }
}

impl PartialEq for ArrView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Eq for ArrView<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i32]) -> Vec<u8> {
        values.iter().flat_map(|v| v.to_ne_bytes()).collect()
    }

    #[test]
    fn counts_elements_by_stride() {
        let bytes = ints(&[1, 2, 3]);
        let v = ArrView::new(&bytes, 4);
        assert_eq!(v.len(), 3);
        assert_eq!(v.stride(), 4);
        assert!(!v.is_empty());
        assert_eq!(v.get(1), Some(&2i32.to_ne_bytes()[..]));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn rejects_partial_elements() {
        let bytes = [0u8; 7];
        assert_eq!(
            ArrView::try_new(&bytes, 4),
            Err(ArrayError::StrideMismatch {
                stride: 4,
                bytes: 7
            })
        );
        assert!(ArrView::try_new(&bytes, 0).is_err());
    }

    #[test]
    fn empty_and_reset() {
        let bytes = ints(&[5]);
        let mut v = ArrView::new(&bytes, 4);
        assert!(!v.is_empty());
        v.reset();
        assert!(v.is_empty());
        assert_eq!(v.stride(), 4);
        assert!(ArrView::empty(8).is_empty());
    }

    #[test]
    fn assign_repoints() {
        let a = ints(&[1]);
        let b = ints(&[2, 3]);
        let mut v = ArrView::new(&a, 4);
        v.assign(&b);
        assert_eq!(v.len(), 2);
        assert_eq!(v.front(), &2i32.to_ne_bytes()[..]);
    }

    #[test]
    fn front_and_back() {
        let bytes = ints(&[7, 8, 9]);
        let v = ArrView::new(&bytes, 4);
        assert_eq!(v.front(), &7i32.to_ne_bytes()[..]);
        assert_eq!(v.back(), &9i32.to_ne_bytes()[..]);
    }

    #[test]
    #[should_panic(expected = "container is empty")]
    fn back_on_empty_panics() {
        ArrView::empty(4).back();
    }

    #[test]
    fn equality_checks_count_first() {
        let a = ints(&[1, 2]);
        let b = ints(&[1, 2, 3]);
        let va = ArrView::new(&a, 4);
        let vb = ArrView::new(&b, 4);
        assert!(!va.equals(&vb));
        let vb2 = ArrView::new(&b[..8], 4);
        assert!(va.equals(&vb2));
        assert_eq!(va, vb2);
    }

    #[test]
    fn ordering_is_bytewise() {
        let a = [1u8, 2];
        let b = [1u8, 3];
        let va = ArrView::new(&a, 1);
        let vb = ArrView::new(&b, 1);
        assert!(va.less_than(&vb));
        assert!(vb.greater_than(&va));
        assert_eq!(va.compare(&a), Ordering::Equal);
        assert!(ArrView::new(&a[..1], 1).less_than(&va));
    }

    #[test]
    #[should_panic(expected = "different strides")]
    fn comparing_mixed_strides_panics() {
        let a = [0u8; 4];
        ArrView::new(&a, 2).compare_view(&ArrView::new(&a, 4));
    }

    #[test]
    fn find_value_returns_index_or_npos() {
        let bytes = ints(&[4, 5, 6, 5]);
        let v = ArrView::new(&bytes, 4);
        assert_eq!(v.find_value(&5i32.to_ne_bytes()), 1);
        assert_eq!(v.find_value(&6i32.to_ne_bytes()), 2);
        assert_eq!(v.find_value(&9i32.to_ne_bytes()), ArrView::NPOS);
        assert_eq!(v.find_value(&[5u8]), ArrView::NPOS);
    }

    #[test]
    fn swap_exchanges_descriptors_only() {
        let a = ints(&[1]);
        let b = ints(&[2, 3]);
        let mut va = ArrView::new(&a, 4);
        let mut vb = ArrView::new(&b, 4);
        va.swap(&mut vb);
        assert_eq!(va.len(), 2);
        assert_eq!(vb.len(), 1);
        assert_eq!(a, ints(&[1]));
    }

    #[test]
    fn iter_yields_stride_chunks() {
        let bytes = ints(&[1, 2, 3]);
        let v = ArrView::new(&bytes, 4);
        let collected: Vec<i32> = v
            .iter()
            .map(|c| i32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(collected, vec![1, 2, 3]);
    }
}
