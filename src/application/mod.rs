// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator contracts of the upload form.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The upload form controller only talks to ports, never to adapters
//!
//! # Example
//!
//! ```ignore
//! use photo_upload::application::port::{RangeControl, RangeOptions};
//! use photo_upload::infrastructure::slider::SliderRange;
//!
//! let mut range = SliderRange::create(RangeOptions::new(0.0, 1.0, 0.1, 1.0));
//! assert_eq!(range.slide(0.5), Some(0.5));
//! ```

pub mod port;
