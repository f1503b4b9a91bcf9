// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`http`]: Multipart submission over HTTP via `reqwest` (implements [`Transport`])
//! - [`preview_file`]: Preview decoding via `image` (implements [`PreviewSource`])
//! - [`slider`]: In-memory slider model (implements [`RangeControl`])
//! - [`validator`]: Rule-list validation engine (implements [`ValidationEngine`])
//!
//! [`Transport`]: crate::application::port::Transport
//! [`PreviewSource`]: crate::application::port::PreviewSource
//! [`RangeControl`]: crate::application::port::RangeControl
//! [`ValidationEngine`]: crate::application::port::ValidationEngine

pub mod http;
pub mod preview_file;
pub mod slider;
pub mod validator;

pub use http::HttpTransport;
pub use preview_file::FilePreviewSource;
pub use slider::SliderRange;
pub use validator::FieldValidator;
