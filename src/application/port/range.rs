// SPDX-License-Identifier: MPL-2.0
//! Range control port definition.
//!
//! A range control produces a bounded, steppable numeric value from user
//! drag or click input. The upload form only exists alongside one while an
//! effect other than `None` is selected.

use crate::domain::effect::{snap_to_grid, EffectDomain};
use std::fmt;

// =============================================================================
// RangeOptions
// =============================================================================

/// Domain and starting position of a range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeOptions {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub start: f64,
}

impl RangeOptions {
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64, start: f64) -> Self {
        Self {
            min,
            max,
            step,
            start,
        }
    }

    /// Clamps `value` into `[min, max]` and snaps it to the step grid.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        snap_to_grid(value, self.min, self.max, self.step)
    }
}

impl From<EffectDomain> for RangeOptions {
    fn from(domain: EffectDomain) -> Self {
        Self::new(domain.min, domain.max, domain.step, domain.default)
    }
}

// =============================================================================
// RangeControl Trait
// =============================================================================

/// Port for the range control widget.
pub trait RangeControl: fmt::Debug {
    /// Replaces the domain and moves the handle to `options.start`.
    fn configure(&mut self, options: RangeOptions);

    /// Current domain of the control.
    fn options(&self) -> RangeOptions;

    /// Current handle value.
    fn value(&self) -> f64;

    /// Moves the handle toward `position`.
    ///
    /// Returns the new value when it changed; this is the control's update
    /// notification. `None` means the handle did not move.
    fn slide(&mut self, position: f64) -> Option<f64>;

    /// Releases the control. It must not be used afterwards.
    fn destroy(&mut self);
}

/// Constructs a range control configured with the given options.
pub type RangeFactory = Box<dyn Fn(RangeOptions) -> Box<dyn RangeControl>>;
