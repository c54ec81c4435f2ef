//! Sorted-array associative maps.
//!
//! An item carries its own key, and a map keeps its items in strictly
//! ascending order under an [`Order`](stride_core::Order). Lookups are
//! O(log n); inserts and removals are an O(log n) search plus an O(n)
//! shift of the backing array.
//!
//! - [`SortedMap`] stores typed `Copy` items in a
//!   [`DynArray`](stride_array::DynArray).
//! - [`RawSortedMap`] stores fixed-width byte records in a
//!   [`RawArray`](stride_array::RawArray).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod raw;
pub mod sorted;

pub use raw::RawSortedMap;
pub use sorted::SortedMap;
