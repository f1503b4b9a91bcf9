// SPDX-License-Identifier: MPL-2.0
//! Effect selector.
//!
//! Owns the active effect and the range control that exists only while an
//! effect other than [`Effect::None`] is selected. Every selection releases
//! the range listener armed by the previous one before arming its own.

use super::listeners::{ListenerRegistry, Reaction, Subscriptions, Trigger};
use super::messages::{Message, UiEvent};
use super::preview::Preview;
use crate::application::port::{RangeControl, RangeFactory, RangeOptions};
use crate::domain::effect::{self, Effect};
use std::fmt;

fn on_range_input(event: &UiEvent) -> Reaction {
    match event {
        UiEvent::RangeInput(position) => Reaction::emit(Message::RangeSlid(*position)),
        _ => Reaction::pass(),
    }
}

pub struct EffectSelector {
    factory: RangeFactory,
    effect: Effect,
    range: Option<Box<dyn RangeControl>>,
    range_subscriptions: Option<Subscriptions>,
}

impl fmt::Debug for EffectSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectSelector")
            .field("effect", &self.effect)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

impl EffectSelector {
    #[must_use]
    pub fn new(factory: RangeFactory) -> Self {
        Self {
            factory,
            effect: Effect::None,
            range: None,
            range_subscriptions: None,
        }
    }

    /// Makes `effect` active and moves the range to its default.
    ///
    /// Selecting the effect that is already active resets its level too.
    pub fn select(&mut self, effect: Effect, preview: &mut Preview, listeners: &mut ListenerRegistry) {
        if let Some(bundle) = self.range_subscriptions.take() {
            bundle.release(listeners);
        }
        if effect != self.effect {
            log::debug!("effect {} -> {}", self.effect.name(), effect.name());
        }
        self.effect = effect;

        let Some(domain) = effect::domain_for(effect) else {
            self.destroy_range();
            preview.apply_filter(Effect::None, None);
            return;
        };

        let options = RangeOptions::from(domain);
        let range = match self.range.take() {
            Some(mut range) => {
                range.configure(options);
                range
            }
            None => (self.factory)(options),
        };
        let value = range.value();
        self.range = Some(range);
        self.range_subscriptions = Some(Subscriptions::acquire(
            listeners,
            &[(Trigger::RangeInput, on_range_input)],
        ));
        preview.apply_filter(effect, Some(value));
    }

    /// Feeds a handle position to the range. The filter is recomputed only
    /// when the range reports a new value.
    pub fn slide(&mut self, position: f64, preview: &mut Preview) -> Option<f64> {
        let value = self.range.as_mut()?.slide(position)?;
        preview.apply_filter(self.effect, Some(value));
        Some(value)
    }

    /// Back to [`Effect::None`], tearing down the range and its listener.
    pub fn reset(&mut self, preview: &mut Preview, listeners: &mut ListenerRegistry) {
        self.select(Effect::None, preview, listeners);
    }

    fn destroy_range(&mut self) {
        if let Some(mut range) = self.range.take() {
            range.destroy();
        }
    }

    #[must_use]
    pub fn effect(&self) -> Effect {
        self.effect
    }

    /// Current range value, `None` while no range exists.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.range.as_ref().map(|range| range.value())
    }

    #[must_use]
    pub fn range(&self) -> Option<&dyn RangeControl> {
        self.range.as_deref()
    }

    #[must_use]
    pub fn has_range(&self) -> bool {
        self.range.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SliderRange;

    fn fixture() -> (EffectSelector, Preview, ListenerRegistry) {
        (
            EffectSelector::new(SliderRange::factory()),
            Preview::new(),
            ListenerRegistry::new(),
        )
    }

    #[test]
    fn starts_without_a_range() {
        let (selector, preview, _) = fixture();
        assert_eq!(selector.effect(), Effect::None);
        assert!(!selector.has_range());
        assert_eq!(preview.filter(), "");
    }

    #[test]
    fn selecting_an_effect_creates_the_range_at_its_default() {
        let (mut selector, mut preview, mut listeners) = fixture();
        selector.select(Effect::Heat, &mut preview, &mut listeners);

        let range = selector.range().expect("range exists");
        assert_eq!(range.options(), RangeOptions::new(1.0, 3.0, 0.1, 3.0));
        assert_eq!(selector.value(), Some(3.0));
        assert_eq!(preview.filter(), "brightness(3)");
        assert_eq!(listeners.count(Trigger::RangeInput), 1);
    }

    #[test]
    fn switching_effects_reconfigures_and_keeps_one_listener() {
        let (mut selector, mut preview, mut listeners) = fixture();
        selector.select(Effect::Chrome, &mut preview, &mut listeners);
        selector.slide(0.3, &mut preview);
        selector.select(Effect::Marvin, &mut preview, &mut listeners);

        assert_eq!(selector.value(), Some(100.0));
        assert_eq!(preview.filter(), "invert(100%)");
        assert_eq!(listeners.count(Trigger::RangeInput), 1);
    }

    #[test]
    fn reselecting_the_same_effect_resets_its_level() {
        let (mut selector, mut preview, mut listeners) = fixture();
        for _ in 0..2 {
            selector.select(Effect::Phobos, &mut preview, &mut listeners);
            assert_eq!(selector.value(), Some(3.0));
            assert_eq!(preview.filter(), "blur(3px)");
            selector.slide(1.2, &mut preview);
            assert_eq!(preview.filter(), "blur(1.2px)");
        }
    }

    #[test]
    fn none_tears_down_the_range_and_listener() {
        let (mut selector, mut preview, mut listeners) = fixture();
        selector.select(Effect::Sepia, &mut preview, &mut listeners);
        selector.select(Effect::None, &mut preview, &mut listeners);

        assert!(!selector.has_range());
        assert_eq!(selector.value(), None);
        assert_eq!(preview.filter(), "");
        assert_eq!(preview.level_readout(), "");
        assert!(listeners.is_empty());
    }

    #[test]
    fn slide_without_movement_does_not_touch_the_preview() {
        let (mut selector, mut preview, mut listeners) = fixture();
        selector.select(Effect::Chrome, &mut preview, &mut listeners);
        assert_eq!(selector.slide(1.0, &mut preview), None);
        assert_eq!(selector.slide(0.5, &mut preview), Some(0.5));
        assert_eq!(preview.filter(), "grayscale(0.5)");
    }

    #[test]
    fn slide_is_ignored_without_a_range() {
        let (mut selector, mut preview, _) = fixture();
        assert_eq!(selector.slide(0.5, &mut preview), None);
        assert_eq!(preview.filter(), "");
    }

    #[test]
    fn range_input_listener_translates_positions() {
        let (mut selector, mut preview, mut listeners) = fixture();
        selector.select(Effect::Marvin, &mut preview, &mut listeners);
        let messages = listeners.dispatch(&UiEvent::RangeInput(42.0));
        assert!(matches!(messages.as_slice(), [Message::RangeSlid(v)] if *v == 42.0));
    }
}
