//! Error types for stride containers.
//!
//! Split by concern: [`ArrayError`] for contract violations on positional
//! operations, [`ConfigError`] for rejected construction parameters.

use std::error::Error;
use std::fmt;

/// A violated precondition on an array or view operation.
///
/// The checked `try_*` methods return these; the plain methods panic with
/// the same `Display` text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// An element index outside the permitted range.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements in the array at the time of the call.
        len: usize,
    },
    /// A range `[index, index + count)` that does not fit in the array.
    RangeOutOfBounds {
        /// First element of the range.
        index: usize,
        /// Number of elements in the range.
        count: usize,
        /// Number of elements in the array at the time of the call.
        len: usize,
    },
    /// An operation that requires a nonzero element count received zero.
    ZeroCount,
    /// Unsorted removal was asked to remove a range that reaches the end
    /// of the array. Tail ranges must go through `erase_many`.
    TailRange {
        /// First element of the range.
        index: usize,
        /// Number of elements in the range.
        count: usize,
        /// Number of elements in the array at the time of the call.
        len: usize,
    },
    /// A byte slice that is not a whole number of elements, or not exactly
    /// one element where a single element is expected.
    StrideMismatch {
        /// Element stride of the container, in bytes.
        stride: usize,
        /// Length of the rejected byte slice.
        bytes: usize,
    },
    /// An element access or removal on an empty container.
    Empty,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::RangeOutOfBounds { index, count, len } => {
                write!(
                    f,
                    "range of {count} elements at index {index} out of bounds for length {len}"
                )
            }
            Self::ZeroCount => write!(f, "element count must be nonzero"),
            Self::TailRange { index, count, len } => {
                write!(
                    f,
                    "unsorted erase of {count} elements at index {index} reaches the end of length {len}"
                )
            }
            Self::StrideMismatch { stride, bytes } => {
                write!(f, "{bytes} bytes do not match element stride {stride}")
            }
            Self::Empty => write!(f, "container is empty"),
        }
    }
}

impl Error for ArrayError {}

/// A rejected construction parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Element stride was zero.
    ZeroStride,
    /// The growth policy floor was zero.
    ZeroMinCapacity,
    /// The growth ratio does not grow (`numerator <= denominator`) or has a
    /// zero denominator.
    InvalidGrowthRatio {
        /// Ratio numerator.
        numerator: usize,
        /// Ratio denominator.
        denominator: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroStride => write!(f, "element stride must be nonzero"),
            Self::ZeroMinCapacity => write!(f, "minimum capacity must be nonzero"),
            Self::InvalidGrowthRatio {
                numerator,
                denominator,
            } => {
                write!(
                    f,
                    "growth ratio {numerator}/{denominator} must be greater than one"
                )
            }
        }
    }
}

impl Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_offending_values() {
        let e = ArrayError::RangeOutOfBounds {
            index: 3,
            count: 4,
            len: 5,
        };
        let text = e.to_string();
        assert!(text.contains("index 3"));
        assert!(text.contains("length 5"));
    }

    #[test]
    fn stride_mismatch_display() {
        let e = ArrayError::StrideMismatch {
            stride: 4,
            bytes: 7,
        };
        assert_eq!(e.to_string(), "7 bytes do not match element stride 4");
    }

    #[test]
    fn config_errors_are_std_errors() {
        let e: Box<dyn Error> = Box::new(ConfigError::InvalidGrowthRatio {
            numerator: 1,
            denominator: 1,
        });
        assert_eq!(e.to_string(), "growth ratio 1/1 must be greater than one");
    }
}
