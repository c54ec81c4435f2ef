//! Test utilities and fixtures for stride development.
//!
//! Provides a [`CountingAlloc`] that records every call made through the
//! [`RawAlloc`] seam, small `Copy` fixture records, byte helpers for
//! `i32` payloads, and a deterministic key shuffler.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use stride_core::{RawAlloc, SystemAlloc};

pub use fixtures::{i32_bytes, read_i32, read_i32s, shuffled_keys, MapItem, Pair};

/// Call counters shared by every clone of a [`CountingAlloc`].
#[derive(Debug, Default)]
pub struct AllocStats {
    allocations: Cell<usize>,
    frees: Cell<usize>,
    copies: Cell<usize>,
    moves: Cell<usize>,
    bytes_allocated: Cell<usize>,
}

impl AllocStats {
    pub fn allocations(&self) -> usize {
        self.allocations.get()
    }

    pub fn frees(&self) -> usize {
        self.frees.get()
    }

    pub fn copies(&self) -> usize {
        self.copies.get()
    }

    pub fn moves(&self) -> usize {
        self.moves.get()
    }

    /// Total bytes requested over the allocator's lifetime.
    pub fn bytes_allocated(&self) -> usize {
        self.bytes_allocated.get()
    }

    /// Allocations not yet released.
    pub fn live(&self) -> usize {
        self.allocations() - self.frees()
    }
}

fn bump(counter: &Cell<usize>, by: usize) {
    counter.set(counter.get() + by);
}

/// A [`RawAlloc`] that delegates to [`SystemAlloc`] and counts calls.
///
/// Clones share counters, so a test can hand one clone to a container
/// and inspect the other.
#[derive(Clone, Debug, Default)]
pub struct CountingAlloc {
    stats: Rc<AllocStats>,
}

impl CountingAlloc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> &AllocStats {
        &self.stats
    }
}

impl RawAlloc for CountingAlloc {
    fn allocate(&self, bytes: usize) -> Box<[u8]> {
        bump(&self.stats.allocations, 1);
        bump(&self.stats.bytes_allocated, bytes);
        SystemAlloc.allocate(bytes)
    }

    fn free(&self, block: Box<[u8]>) {
        bump(&self.stats.frees, 1);
        SystemAlloc.free(block);
    }

    fn copy(&self, dst: &mut [u8], src: &[u8]) {
        bump(&self.stats.copies, 1);
        SystemAlloc.copy(dst, src);
    }

    fn move_within(&self, block: &mut [u8], src: Range<usize>, dst: usize) {
        bump(&self.stats.moves, 1);
        SystemAlloc.move_within(block, src, dst);
    }
}
