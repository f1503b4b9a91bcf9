// SPDX-License-Identifier: MPL-2.0
//! Preview controller: scale and active filter of the preview image.

use crate::application::port::PreviewImage;
use crate::domain::effect::{self, Effect};
use crate::domain::ui::{ScaleDirection, ScalePercent};
use crate::media::filter;
use iced::widget::image;

/// Visual style of the preview, derived from the controller state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewStyle {
    pub scale: ScalePercent,
    /// Filter value, empty when no effect is applied.
    pub filter: String,
}

impl PreviewStyle {
    /// Transform value, e.g. `scale(0.75)`.
    #[must_use]
    pub fn transform(&self) -> String {
        self.scale.transform()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Preview {
    scale: ScalePercent,
    effect: Effect,
    level: Option<f64>,
    filter: String,
    level_readout: String,
    source: Option<PreviewImage>,
    rendered: Option<PreviewImage>,
    /// Handle of [`Preview::image`], rebuilt whenever the pixels change.
    handle: Option<image::Handle>,
}

impl Preview {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the scale one step. Past either bound this is a no-op.
    pub fn apply_scale(&mut self, direction: ScaleDirection) {
        let next = self.scale.step(direction);
        if next != self.scale {
            log::debug!("preview scale {} -> {}", self.scale.readout(), next.readout());
        }
        self.scale = next;
    }

    /// Applies `effect` at `level`. `Effect::None` or a missing level clears
    /// the filter and the level readout.
    pub fn apply_filter(&mut self, effect: Effect, level: Option<f64>) {
        match level.filter(|_| !effect.is_none()) {
            Some(level) => {
                self.effect = effect;
                self.level = Some(level);
                self.filter = effect::filter_for(effect, level);
                self.level_readout = effect::format_level(level);
            }
            None => {
                self.effect = Effect::None;
                self.level = None;
                self.filter.clear();
                self.level_readout.clear();
            }
        }
        self.render();
    }

    /// Back to 100% with no filter and no image.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_source(&mut self, source: Option<PreviewImage>) {
        self.source = source;
        self.render();
    }

    fn render(&mut self) {
        self.rendered = match (&self.source, self.level) {
            (Some(source), Some(_)) => Some(filter::render(source, self.effect, self.level)),
            _ => None,
        };
        self.handle = self.image().map(|img| {
            image::Handle::from_rgba(img.width, img.height, img.pixels.to_vec())
        });
    }

    #[must_use]
    pub fn style(&self) -> PreviewStyle {
        PreviewStyle {
            scale: self.scale,
            filter: self.filter.clone(),
        }
    }

    #[must_use]
    pub fn scale(&self) -> ScalePercent {
        self.scale
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    #[must_use]
    pub fn level(&self) -> Option<f64> {
        self.level
    }

    /// Effect level as the readout field shows it.
    #[must_use]
    pub fn level_readout(&self) -> &str {
        &self.level_readout
    }

    /// Image to display: the filtered render when an effect is active.
    #[must_use]
    pub fn image(&self) -> Option<&PreviewImage> {
        self.rendered.as_ref().or(self.source.as_ref())
    }

    #[must_use]
    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::scale_bounds;

    #[test]
    fn scale_is_clamped_at_both_ends() {
        let mut preview = Preview::new();
        for _ in 0..3 {
            preview.apply_scale(ScaleDirection::Bigger);
        }
        assert_eq!(preview.scale().value(), scale_bounds::MAX_PERCENT);

        for _ in 0..10 {
            preview.apply_scale(ScaleDirection::Smaller);
        }
        assert_eq!(preview.scale().value(), scale_bounds::MIN_PERCENT);
        assert_eq!(preview.style().transform(), "scale(0.25)");
    }

    #[test]
    fn filter_and_readout_follow_the_level() {
        let mut preview = Preview::new();
        preview.apply_filter(Effect::Sepia, Some(0.5));
        assert_eq!(preview.filter(), "sepia(0.5)");
        assert_eq!(preview.level_readout(), "0.5");

        preview.apply_filter(Effect::Marvin, Some(100.0));
        assert_eq!(preview.style().filter, "invert(100%)");
        assert_eq!(preview.level_readout(), "100");
    }

    #[test]
    fn none_clears_filter_and_readout() {
        let mut preview = Preview::new();
        preview.apply_filter(Effect::Phobos, Some(3.0));
        preview.apply_filter(Effect::None, Some(3.0));
        assert_eq!(preview.filter(), "");
        assert_eq!(preview.level_readout(), "");
        assert_eq!(preview.level(), None);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut preview = Preview::new();
        preview.apply_scale(ScaleDirection::Smaller);
        preview.apply_filter(Effect::Heat, Some(2.0));
        preview.set_source(Some(PreviewImage::from_rgba(1, 1, vec![0; 4])));

        preview.reset();
        assert_eq!(preview.scale(), ScalePercent::default());
        assert_eq!(preview.filter(), "");
        assert!(preview.image().is_none());
        assert!(preview.handle().is_none());
    }

    #[test]
    fn active_filter_renders_the_source() {
        let mut preview = Preview::new();
        let source = PreviewImage::from_rgba(1, 1, vec![0, 0, 0, 255]);
        preview.set_source(Some(source.clone()));
        assert_eq!(preview.image(), Some(&source));

        preview.apply_filter(Effect::Marvin, Some(100.0));
        let rendered = preview.image().expect("rendered image");
        assert_eq!(&rendered.pixels[..3], &[255, 255, 255]);
    }
}
