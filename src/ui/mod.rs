// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`upload_form`] - Upload photo form: preview, effects, validation and submission
//! - [`styles`] - Centralized styling (containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod styles;
pub mod upload_form;
