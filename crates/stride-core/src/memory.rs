//! Allocator seam for byte buffers.
//!
//! The erased containers perform every allocation, release, copy, and
//! block move through a [`RawAlloc`]. Swapping the implementation is the
//! only integration point for custom memory handling; the default,
//! [`SystemAlloc`], binds to the process allocator.
//!
//! All blocks are zero-initialised.

use std::ops::Range;

/// The four memory primitives used by byte-buffer containers.
///
/// Only `allocate` is required. The others default to the obvious slice
/// operations and exist so an implementation can observe or replace them.
pub trait RawAlloc {
    /// Allocate a zeroed block of exactly `bytes` bytes.
    ///
    /// Out-of-memory is fatal; there is no recoverable failure path.
    fn allocate(&self, bytes: usize) -> Box<[u8]>;

    /// Release a block previously returned by [`RawAlloc::allocate`].
    fn free(&self, block: Box<[u8]>) {
        drop(block);
    }

    /// Copy `src` into `dst`. The slices have equal length and never overlap.
    fn copy(&self, dst: &mut [u8], src: &[u8]) {
        dst.copy_from_slice(src);
    }

    /// Move the bytes in `src` to start at `dst` within the same block.
    /// The ranges may overlap.
    fn move_within(&self, block: &mut [u8], src: Range<usize>, dst: usize) {
        block.copy_within(src, dst);
    }
}

impl<A: RawAlloc + ?Sized> RawAlloc for &A {
    fn allocate(&self, bytes: usize) -> Box<[u8]> {
        (**self).allocate(bytes)
    }

    fn free(&self, block: Box<[u8]>) {
        (**self).free(block)
    }

    fn copy(&self, dst: &mut [u8], src: &[u8]) {
        (**self).copy(dst, src)
    }

    fn move_within(&self, block: &mut [u8], src: Range<usize>, dst: usize) {
        (**self).move_within(block, src, dst)
    }
}

/// The process allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemAlloc;

impl RawAlloc for SystemAlloc {
    fn allocate(&self, bytes: usize) -> Box<[u8]> {
        vec![0u8; bytes].into_boxed_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_alloc_zeroes() {
        let block = SystemAlloc.allocate(16);
        assert_eq!(block.len(), 16);
        assert!(block.iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_byte_block_is_empty() {
        let block = SystemAlloc.allocate(0);
        assert!(block.is_empty());
        SystemAlloc.free(block);
    }

    #[test]
    fn move_within_handles_overlap() {
        let mut block = SystemAlloc.allocate(6);
        block.copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        SystemAlloc.move_within(&mut block, 0..4, 2);
        assert_eq!(&block[..], &[1, 2, 1, 2, 3, 4]);
    }

    #[test]
    fn copy_between_blocks() {
        let src = [9u8, 8, 7];
        let mut dst = SystemAlloc.allocate(3);
        SystemAlloc.copy(&mut dst, &src);
        assert_eq!(&dst[..], &src);
    }

    #[test]
    fn reference_forwards() {
        let alloc = SystemAlloc;
        let by_ref = &alloc;
        assert_eq!(by_ref.allocate(2).len(), 2);
    }
}
