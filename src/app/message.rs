// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::Transport;
use crate::config::Config;
use crate::domain::form::ImageFile;
use crate::error::Error;
use crate::ui::upload_form::{self, Key};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level messages consumed by `App::update`. Form messages are forwarded
/// to the upload form untouched.
#[derive(Debug, Clone)]
pub enum Message {
    Form(upload_form::Message),
    /// Open the file dialog to pick a photo.
    ChooseFile,
    /// Result of the file dialog; `None` when cancelled.
    FileChosen(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    ImageLoaded(Result<ImageFile, Error>),
    /// A key press no widget consumed.
    DocumentKey(Key),
    /// A key press consumed by the focused text input.
    FieldKey(Key),
    DismissNotice,
}

/// Runtime flags passed from `main.rs` into the application.
pub struct Flags {
    pub config: Config,
    /// Message key of a warning raised while loading the config.
    pub config_warning: Option<String>,
    pub transport: Arc<dyn Transport>,
    /// Image to open on startup.
    pub file_path: Option<PathBuf>,
}

impl fmt::Debug for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Flags")
            .field("config", &self.config)
            .field("config_warning", &self.config_warning)
            .field("file_path", &self.file_path)
            .finish_non_exhaustive()
    }
}
