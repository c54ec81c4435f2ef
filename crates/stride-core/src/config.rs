//! Growth policy configuration.

use crate::error::ConfigError;

/// Capacity growth rule shared by every stride container.
///
/// When an operation needs `n` elements and `n` exceeds the current
/// capacity, the container reallocates to
/// `max(n, max(min_capacity, capacity * numerator / denominator))`.
/// The defaults give 1.5x amortized growth with a floor of 8 elements,
/// so N appends from empty reallocate O(log N) times.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    /// Capacity of the first allocation, in elements.
    ///
    /// Default: 8. Must be nonzero.
    pub min_capacity: usize,

    /// Numerator of the growth ratio.
    ///
    /// Default: 3 (with a denominator of 2, i.e. 1.5x).
    pub growth_numerator: usize,

    /// Denominator of the growth ratio. Must be nonzero and strictly less
    /// than `growth_numerator`.
    pub growth_denominator: usize,
}

impl GrowthPolicy {
    /// Default allocation floor, in elements.
    pub const DEFAULT_MIN_CAPACITY: usize = 8;

    /// Default growth ratio numerator.
    pub const DEFAULT_GROWTH_NUMERATOR: usize = 3;

    /// Default growth ratio denominator.
    pub const DEFAULT_GROWTH_DENOMINATOR: usize = 2;

    /// The default policy: floor 8, ratio 3/2.
    pub const fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            growth_numerator: Self::DEFAULT_GROWTH_NUMERATOR,
            growth_denominator: Self::DEFAULT_GROWTH_DENOMINATOR,
        }
    }

    /// Replace the allocation floor.
    pub const fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Replace the growth ratio.
    pub const fn with_growth_ratio(mut self, numerator: usize, denominator: usize) -> Self {
        self.growth_numerator = numerator;
        self.growth_denominator = denominator;
        self
    }

    /// Check the policy parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_capacity == 0 {
            return Err(ConfigError::ZeroMinCapacity);
        }
        if self.growth_denominator == 0 || self.growth_numerator <= self.growth_denominator {
            return Err(ConfigError::InvalidGrowthRatio {
                numerator: self.growth_numerator,
                denominator: self.growth_denominator,
            });
        }
        Ok(())
    }

    /// Capacity to reallocate to when `needed` elements do not fit in
    /// `current`.
    ///
    /// The increment is computed as `current * (num - den) / den` so the
    /// default ratio reproduces `current + current / 2` exactly.
    pub fn next_capacity(&self, current: usize, needed: usize) -> usize {
        let extra_num = self.growth_numerator - self.growth_denominator;
        let grown =
            current.saturating_add(current.saturating_mul(extra_num) / self.growth_denominator);
        needed.max(self.min_capacity.max(grown))
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::new()
    }
}
