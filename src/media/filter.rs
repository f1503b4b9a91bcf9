// SPDX-License-Identifier: MPL-2.0
//! Pixel rendering of the preview filter functions.
//!
//! Colour filters use the matrices CSS filter functions are defined with, so
//! the rendered preview matches what `filter_for` describes.

use crate::application::port::PreviewImage;
use crate::domain::effect::{self, Effect, FilterFunction};
use image_rs::{imageops, RgbaImage};

const LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// Renders `source` with `effect` at range position `level`.
///
/// Returns the source unchanged for [`Effect::None`] or when no level is set.
#[must_use]
pub fn render(source: &PreviewImage, effect: Effect, level: Option<f64>) -> PreviewImage {
    let (Some(function), Some(level)) = (effect::function_for(effect), level) else {
        return source.clone();
    };
    let Some(image) = RgbaImage::from_raw(source.width, source.height, source.pixels.to_vec())
    else {
        log::warn!(
            "preview buffer does not match {}x{}",
            source.width,
            source.height
        );
        return source.clone();
    };

    #[allow(clippy::cast_possible_truncation)]
    let amount = level as f32;
    let rendered = match function {
        FilterFunction::Grayscale => map_pixels(image, |rgb| grayscale(rgb, amount)),
        FilterFunction::Sepia => map_pixels(image, |rgb| sepia(rgb, amount)),
        FilterFunction::Invert => map_pixels(image, |rgb| invert(rgb, amount / 100.0)),
        FilterFunction::Brightness => map_pixels(image, |rgb| rgb.map(|c| c * amount)),
        FilterFunction::Blur => blur(image, amount),
    };

    let (width, height) = rendered.dimensions();
    PreviewImage::from_rgba(width, height, rendered.into_raw())
}

fn map_pixels(mut image: RgbaImage, f: impl Fn([f32; 3]) -> [f32; 3]) -> RgbaImage {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let out = f([f32::from(r), f32::from(g), f32::from(b)]);
        pixel.0 = [to_channel(out[0]), to_channel(out[1]), to_channel(out[2]), a];
    }
    image
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn grayscale([r, g, b]: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(0.0, 1.0);
    let luma = LUMA[0] * r + LUMA[1] * g + LUMA[2] * b;
    [r, g, b].map(|c| c + (luma - c) * amount)
}

fn sepia([r, g, b]: [f32; 3], amount: f32) -> [f32; 3] {
    let keep = 1.0 - amount.clamp(0.0, 1.0);
    [
        (0.393 + 0.607 * keep) * r + (0.769 - 0.769 * keep) * g + (0.189 - 0.189 * keep) * b,
        (0.349 - 0.349 * keep) * r + (0.686 + 0.314 * keep) * g + (0.168 - 0.168 * keep) * b,
        (0.272 - 0.272 * keep) * r + (0.534 - 0.534 * keep) * g + (0.131 + 0.869 * keep) * b,
    ]
}

fn invert(rgb: [f32; 3], amount: f32) -> [f32; 3] {
    let amount = amount.clamp(0.0, 1.0);
    rgb.map(|c| c * (1.0 - amount) + (255.0 - c) * amount)
}

fn blur(image: RgbaImage, radius: f32) -> RgbaImage {
    if radius <= 0.0 {
        return image;
    }
    imageops::blur(&image, radius)
}
