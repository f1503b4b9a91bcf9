// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the upload form controller remains
//! independent of concrete widgets and network stacks.
//!
//! # Available Ports
//!
//! - [`preview`]: Decoding the chosen file into a preview image
//! - [`range`]: Range control capability (configurable slider)
//! - [`transport`]: Network submission of the form data
//! - [`validation`]: Validation engine capability (per-field rules)
//!
//! # Design Notes
//!
//! - Range updates are reported through the return value of
//!   [`RangeControl::slide`], not through stored callbacks
//! - [`Transport::submit`] returns a boxed future; callers drive it with
//!   Iced's `Task::perform` or any executor

pub mod preview;
pub mod range;
pub mod transport;
pub mod validation;

pub use preview::{PreviewError, PreviewImage, PreviewSource};
pub use range::{RangeControl, RangeFactory, RangeOptions};
pub use transport::{Transport, TransportError, TransportFuture};
pub use validation::ValidationEngine;
