// SPDX-License-Identifier: MPL-2.0
//! Widget styles for the upload form and its overlays.

pub mod container;
pub mod overlay;
