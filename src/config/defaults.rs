// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Upload**: Submission endpoint and timeout bounds
//! - **Preview**: Size of the rendered preview image

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Endpoint the form is posted to.
pub const DEFAULT_UPLOAD_ENDPOINT: &str = "https://31.javascript.htmlacademy.pro/kekstagram";

/// Minimum accepted submission timeout (in seconds).
pub const MIN_UPLOAD_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted submission timeout (in seconds).
pub const MAX_UPLOAD_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Default longest side of the preview image, in pixels.
pub const DEFAULT_PREVIEW_MAX_DIMENSION: u32 = 600;

/// Smallest allowed preview side.
pub const MIN_PREVIEW_MAX_DIMENSION: u32 = 64;

/// Largest allowed preview side.
pub const MAX_PREVIEW_MAX_DIMENSION: u32 = 4096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_UPLOAD_TIMEOUT_SECS > 0);
    assert!(MAX_UPLOAD_TIMEOUT_SECS >= MIN_UPLOAD_TIMEOUT_SECS);

    assert!(MIN_PREVIEW_MAX_DIMENSION > 0);
    assert!(DEFAULT_PREVIEW_MAX_DIMENSION >= MIN_PREVIEW_MAX_DIMENSION);
    assert!(DEFAULT_PREVIEW_MAX_DIMENSION <= MAX_PREVIEW_MAX_DIMENSION);
};
