// SPDX-License-Identifier: MPL-2.0
//! Preview source port definition.
//!
//! Supplies the decoded pixels of the chosen file when the form opens.

use crate::domain::form::ImageFile;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// PreviewError
// =============================================================================

/// Errors that can occur while preparing the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    /// The file is not an image format we can decode.
    UnsupportedFormat,
    /// The file data is corrupted or truncated.
    Decode(String),
}

impl fmt::Display for PreviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreviewError::UnsupportedFormat => write!(f, "Unsupported image format"),
            PreviewError::Decode(msg) => write!(f, "Failed to decode image: {msg}"),
        }
    }
}

impl std::error::Error for PreviewError {}

// =============================================================================
// PreviewImage
// =============================================================================

/// RGBA8 pixels of the preview, shared cheaply between renders.
#[derive(Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Arc<Vec<u8>>,
}

impl PreviewImage {
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels: Arc::new(pixels),
        }
    }
}

impl fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// PreviewSource Trait
// =============================================================================

/// Port for turning the chosen file into a preview image.
pub trait PreviewSource {
    fn source_for(&self, file: &ImageFile) -> Result<PreviewImage, PreviewError>;
}
