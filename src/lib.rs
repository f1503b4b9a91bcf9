// SPDX-License-Identifier: MPL-2.0
//! `photo_upload` is an upload photo form built with the Iced GUI framework.
//!
//! The chosen photo is shown in a modal form with a scale control and a set
//! of visual effects. Hashtags and a comment are validated before the form
//! is posted to a remote endpoint, and the result is reported in a success
//! or error dialog.

#![doc(html_root_url = "https://docs.rs/photo_upload/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
