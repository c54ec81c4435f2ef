//! Growable contiguous arrays with a fixed element stride.
//!
//! Two containers share one set of semantics:
//!
//! - [`DynArray<T>`] stores `Copy` elements of a known type.
//! - [`RawArray`] stores type-erased elements whose width (the *stride*)
//!   is fixed at run time, and routes every allocation, copy, and block
//!   move through a [`RawAlloc`](stride_core::RawAlloc).
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> ── Vec<T> + tracked capacity ─┐
//!                                           ├── search::partition_point
//! RawArray<A> ── Box<[u8]> via RawAlloc ────┘
//!       └── GrowthPolicy (max(needed, max(floor, cap * 3/2)))
//! ```
//!
//! # Contract checking
//!
//! Positional operations panic on contract violations (an index past the
//! end, a zero-count insert, a byte run that is not a whole number of
//! elements). Each has a `try_*` twin returning
//! [`ArrayError`](stride_core::ArrayError) instead, so a violation is
//! never silently ignored.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod contract;
pub mod raw;
pub mod search;
pub mod typed;

pub use raw::RawArray;
pub use typed::DynArray;
