//! Stride: growable contiguous arrays and sorted-array maps.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all stride sub-crates. For most users, adding `stride` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stride::prelude::*;
//!
//! // A typed array with the default growth policy.
//! let mut values: DynArray<i32> = DynArray::new();
//! for v in [5, 1, 4] {
//!     values.insert_one_sorted(v, &Natural);
//! }
//! assert_eq!(values.as_slice(), &[1, 4, 5]);
//!
//! // The same elements through the type-erased array.
//! let mut raw = RawArray::new(4);
//! for v in values.iter() {
//!     raw.push_back(&v.to_ne_bytes());
//! }
//! assert_eq!(raw.to_view().len(), 3);
//!
//! // A map keyed by the first tuple field.
//! let mut map = SortedMap::by_key(|entry: &(u16, char)| entry.0);
//! assert!(map.set((2, 'b')));
//! assert!(map.set((1, 'a')));
//! assert!(!map.set((2, 'B')));
//! assert_eq!(map.get(&(2, ' ')), Some((2, 'B')));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stride-core` | Views, orders, growth policy, errors, allocator seam |
//! | [`array`] | `stride-array` | `DynArray`, `RawArray`, binary search helpers |
//! | [`map`] | `stride-map` | `SortedMap`, `RawSortedMap` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Views, orders, configuration, and errors (`stride-core`).
///
/// Most users only need [`types::ArrView`] and the [`types::Order`]
/// adapters from this module; they are also available in the [`prelude`].
pub use stride_core as types;

/// Growable arrays (`stride-array`).
///
/// [`array::DynArray`] for typed elements, [`array::RawArray`] for
/// elements whose width is only known at run time, and the bisection
/// helpers in [`array::search`].
pub use stride_array as array;

/// Sorted-array maps (`stride-map`).
pub use stride_map as map;

/// Common imports for typical stride usage.
///
/// ```rust
/// use stride::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use stride_array::{DynArray, RawArray};
    pub use stride_map::{RawSortedMap, SortedMap};

    // Views and orders
    pub use stride_core::{ArrView, ByKey, LessThan, Natural, Order, ThreeWay};

    // Configuration and allocation
    pub use stride_core::{GrowthPolicy, RawAlloc, SystemAlloc};

    // Errors
    pub use stride_core::{ArrayError, ConfigError};
}
