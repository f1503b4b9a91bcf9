// SPDX-License-Identifier: MPL-2.0
//! Decodes the chosen file into preview pixels with the `image` crate.

use crate::application::port::{PreviewError, PreviewImage, PreviewSource};
use crate::domain::form::ImageFile;
use image_rs::ImageError;

/// Preview source that decodes the in-memory file and downsizes it so the
/// longest side fits `max_dimension`.
#[derive(Debug, Clone, Copy)]
pub struct FilePreviewSource {
    max_dimension: u32,
}

impl FilePreviewSource {
    #[must_use]
    pub fn new(max_dimension: u32) -> Self {
        Self {
            max_dimension: max_dimension.max(1),
        }
    }
}

impl PreviewSource for FilePreviewSource {
    fn source_for(&self, file: &ImageFile) -> Result<PreviewImage, PreviewError> {
        let decoded = image_rs::load_from_memory(&file.bytes).map_err(|err| match err {
            ImageError::Unsupported(_) => PreviewError::UnsupportedFormat,
            other => PreviewError::Decode(other.to_string()),
        })?;

        let fitted = if decoded.width() > self.max_dimension || decoded.height() > self.max_dimension {
            decoded.thumbnail(self.max_dimension, self.max_dimension)
        } else {
            decoded
        };

        let rgba = fitted.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(PreviewImage::from_rgba(width, height, rgba.into_raw()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_file(width: u32, height: u32) -> ImageFile {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        ImageFile::new("test.png", bytes)
    }

    #[test]
    fn small_images_keep_their_size() {
        let preview = FilePreviewSource::new(600)
            .source_for(&png_file(4, 3))
            .expect("decodes");
        assert_eq!((preview.width, preview.height), (4, 3));
        assert_eq!(preview.pixels.len(), 4 * 3 * 4);
    }

    #[test]
    fn large_images_are_fitted() {
        let preview = FilePreviewSource::new(10)
            .source_for(&png_file(40, 20))
            .expect("decodes");
        assert_eq!((preview.width, preview.height), (10, 5));
    }

    #[test]
    fn garbage_bytes_are_rejected() {
        let file = ImageFile::new("notes.txt", b"definitely not an image".to_vec());
        assert!(FilePreviewSource::new(600).source_for(&file).is_err());
    }
}
