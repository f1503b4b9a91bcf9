// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Scale Bounds
// =============================================================================

/// Preview scale bounds (25% to 100%, in steps of 25).
pub mod scale_bounds {
    /// Minimum scale percentage.
    pub const MIN_PERCENT: u32 = 25;
    /// Maximum scale percentage.
    pub const MAX_PERCENT: u32 = 100;
    /// Amount one scale button press changes the scale by.
    pub const STEP_PERCENT: u32 = 25;
    /// Scale the preview starts at.
    pub const DEFAULT_PERCENT: u32 = 100;
}

const _: () = {
    assert!(scale_bounds::MIN_PERCENT > 0);
    assert!(scale_bounds::MIN_PERCENT <= scale_bounds::DEFAULT_PERCENT);
    assert!(scale_bounds::DEFAULT_PERCENT <= scale_bounds::MAX_PERCENT);
    assert!((scale_bounds::MAX_PERCENT - scale_bounds::MIN_PERCENT) % scale_bounds::STEP_PERCENT == 0);
};

// =============================================================================
// ScaleDirection
// =============================================================================

/// Which scale button was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleDirection {
    Smaller,
    Bigger,
}

// =============================================================================
// ScalePercent
// =============================================================================

/// Preview scale percentage, guaranteed to be a multiple of the step within
/// the valid range (25%–100%).
///
/// Stepping past a bound leaves the value at that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScalePercent(u32);

impl ScalePercent {
    /// Creates a new scale, clamping to the valid range and rounding down to the step grid.
    #[must_use]
    pub fn new(percent: u32) -> Self {
        let clamped = percent.clamp(scale_bounds::MIN_PERCENT, scale_bounds::MAX_PERCENT);
        let offset = clamped - scale_bounds::MIN_PERCENT;
        Self(scale_bounds::MIN_PERCENT + offset - offset % scale_bounds::STEP_PERCENT)
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the scale as a multiplier (e.g., 75% → 0.75).
    #[must_use]
    pub fn as_factor(self) -> f32 {
        self.0 as f32 / 100.0
    }

    /// Returns the scale one step in `direction`, saturating at the bounds.
    #[must_use]
    pub fn step(self, direction: ScaleDirection) -> Self {
        match direction {
            ScaleDirection::Bigger => {
                Self::new(self.0.saturating_add(scale_bounds::STEP_PERCENT))
            }
            ScaleDirection::Smaller => {
                Self::new(self.0.saturating_sub(scale_bounds::STEP_PERCENT))
            }
        }
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= scale_bounds::MIN_PERCENT
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= scale_bounds::MAX_PERCENT
    }

    /// Text shown in the scale control (e.g., `"75%"`).
    #[must_use]
    pub fn readout(self) -> String {
        format!("{}%", self.0)
    }

    /// Transform applied to the preview (e.g., `"scale(0.75)"`).
    #[must_use]
    pub fn transform(self) -> String {
        format!("scale({})", self.as_factor())
    }
}

impl Default for ScalePercent {
    fn default() -> Self {
        Self(scale_bounds::DEFAULT_PERCENT)
    }
}

// =============================================================================
// Tests
// =============================================================================
