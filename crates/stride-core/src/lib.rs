//! Core types for the stride containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the array and map crates: the borrowed [`ArrView`],
//! the [`Order`] abstraction, the [`GrowthPolicy`] configuration, the
//! [`RawAlloc`] allocator seam, and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod memory;
pub mod order;
pub mod view;

pub use config::GrowthPolicy;
pub use error::{ArrayError, ConfigError};
pub use memory::{RawAlloc, SystemAlloc};
pub use order::{ByKey, LessThan, Natural, Order, ThreeWay};
pub use view::ArrView;
