// SPDX-License-Identifier: MPL-2.0
//! Slider model backing the effect level control.
//!
//! Holds the domain and handle position the view renders; values reported by
//! the widget are clamped and snapped before they are accepted.

use crate::application::port::{RangeControl, RangeFactory, RangeOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct SliderRange {
    options: RangeOptions,
    value: f64,
    destroyed: bool,
}

impl SliderRange {
    #[must_use]
    pub fn new(options: RangeOptions) -> Self {
        Self {
            options,
            value: options.snap(options.start),
            destroyed: false,
        }
    }

    /// Boxed constructor usable as a [`RangeFactory`].
    #[must_use]
    pub fn create(options: RangeOptions) -> Box<dyn RangeControl> {
        Box::new(Self::new(options))
    }

    #[must_use]
    pub fn factory() -> RangeFactory {
        Box::new(Self::create)
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl RangeControl for SliderRange {
    fn configure(&mut self, options: RangeOptions) {
        self.options = options;
        self.value = options.snap(options.start);
    }

    fn options(&self) -> RangeOptions {
        self.options
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn slide(&mut self, position: f64) -> Option<f64> {
        if self.destroyed {
            return None;
        }
        let next = self.options.snap(position);
        if (next - self.value).abs() < f64::EPSILON {
            return None;
        }
        self.value = next;
        Some(next)
    }

    fn destroy(&mut self) {
        self.destroyed = true;
    }
}
