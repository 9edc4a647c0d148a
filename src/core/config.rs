//! Match configuration types.
//!
//! Rulesets are configured at construction by providing:
//! - `TakeBounds`: per-move take limits
//! - `ClassicConfig`: initial count + bounds for the single-pile variant
//! - `MarienbadConfig`: pile layout for the multi-pile variant
//!
//! Configuration is immutable for the lifetime of one match. There are no
//! module-level mutable constants: two engines with different bounds can run
//! side by side.

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

/// Per-move take bounds.
///
/// A legal Classic take is in `min..=max`. Defaults to `1..=4`, for which
/// `min + max == 5` and the 5-per-round invariant strategy applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TakeBounds {
    /// Smallest legal take.
    pub min: u32,
    /// Largest legal take.
    pub max: u32,
}

impl TakeBounds {
    /// Create take bounds.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        assert!(min >= 1, "Minimum take must be at least 1");
        assert!(min <= max, "Minimum take must not exceed maximum take");
        Self { min, max }
    }

    /// Check whether a take is within bounds.
    #[must_use]
    pub fn contains(self, taken: u32) -> bool {
        taken >= self.min && taken <= self.max
    }

    /// The sum of both players' takes when each round removes one minimum
    /// and one maximum take (`5` for the default bounds).
    #[must_use]
    pub fn round_total(self) -> u32 {
        self.min + self.max
    }
}

impl Default for TakeBounds {
    fn default() -> Self {
        Self { min: 1, max: 4 }
    }
}

/// Configuration for the single-pile ("Classic") variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicConfig {
    /// Objects on the pile at match start.
    pub initial: u32,
    /// Per-move take bounds.
    pub bounds: TakeBounds,
}

impl ClassicConfig {
    /// Create a configuration with the default bounds.
    #[must_use]
    pub fn new(initial: u32) -> Self {
        assert!(initial >= 2, "Initial count must be at least 2");
        Self {
            initial,
            bounds: TakeBounds::default(),
        }
    }

    /// Set the take bounds.
    #[must_use]
    pub fn with_bounds(mut self, bounds: TakeBounds) -> Self {
        self.bounds = bounds;
        self
    }
}

impl Default for ClassicConfig {
    /// The traditional 21-object match with takes of 1 to 4.
    fn default() -> Self {
        Self::new(21)
    }
}

/// Configuration for the multi-pile ("Marienbad") variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarienbadConfig {
    /// Pile sizes at match start. Fixed length for the whole match.
    pub layout: SmallVec<[u32; 4]>,
}

impl MarienbadConfig {
    /// Create a configuration from a pile layout.
    #[must_use]
    pub fn new(layout: &[u32]) -> Self {
        assert!(!layout.is_empty(), "Layout must have at least one pile");
        assert!(
            layout.iter().sum::<u32>() >= 2,
            "Layout must hold at least 2 objects"
        );
        Self {
            layout: SmallVec::from_slice(layout),
        }
    }
}

impl Default for MarienbadConfig {
    /// The traditional 1-3-5-7 layout.
    fn default() -> Self {
        Self {
            layout: smallvec![1, 3, 5, 7],
        }
    }
}
