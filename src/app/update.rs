// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::domain::form::ImageFile;
use crate::error::Error;
use crate::media;
use crate::ui::upload_form::{self, Event as FormEvent, Key, KeyOrigin, UiEvent, UploadForm};
use iced::Task;
use std::path::PathBuf;

/// Message key shown when the chosen file cannot be read.
pub const IMAGE_LOAD_ERROR_KEY: &str = "notification-image-load-error";

/// Mutable application state handed to the handlers.
pub struct UpdateContext<'a> {
    pub form: &'a mut UploadForm,
    pub notice: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Form(message) => handle_form_message(ctx, message),
        Message::ChooseFile => handle_open_file_dialog(),
        Message::FileChosen(path) => match path {
            Some(path) => load_image(path),
            // Dialog cancelled
            None => Task::none(),
        },
        Message::FileDropped(path) => handle_file_dropped(ctx, path),
        Message::ImageLoaded(result) => handle_image_loaded(ctx, result),
        Message::DocumentKey(key) => handle_key(ctx, key, KeyOrigin::Document),
        Message::FieldKey(key) => {
            let origin = KeyOrigin::Field(ctx.form.focused_field());
            handle_key(ctx, key, origin)
        }
        Message::DismissNotice => {
            *ctx.notice = None;
            Task::none()
        }
    }
}

/// Forwards a message to the form and performs the side effect it asks for.
pub fn handle_form_message(
    ctx: &mut UpdateContext<'_>,
    message: upload_form::Message,
) -> Task<Message> {
    match ctx.form.update(message) {
        FormEvent::SubmissionStarted(pending) => {
            log::debug!("driving submission attempt {}", pending.attempt());
            Task::perform(pending.run(), Message::Form)
        }
        FormEvent::Failed(err) => {
            log::debug!("form reported failed submission: {err}");
            Task::none()
        }
        FormEvent::None | FormEvent::Closed | FormEvent::Succeeded => {
            Task::none()
        }
    }
}

fn handle_key(ctx: &mut UpdateContext<'_>, key: Key, origin: KeyOrigin) -> Task<Message> {
    handle_form_message(
        ctx,
        upload_form::Message::Input(UiEvent::KeyDown { key, origin }),
    )
}

/// Opens the native file dialog filtered to the accepted image types.
pub fn handle_open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", media::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::FileChosen,
    )
}

/// Only image files are accepted, and only while no form is open.
fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.form.is_open() {
        log::debug!("drop ignored while the form is open: {}", path.display());
        return Task::none();
    }
    if !media::is_supported_image(&path) {
        log::info!("dropped file is not an image: {}", path.display());
        *ctx.notice = Some(IMAGE_LOAD_ERROR_KEY.to_string());
        return Task::none();
    }
    load_image(path)
}

/// Reads `path` in the background.
pub fn load_image(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move { media::load_image_file(path).await },
        Message::ImageLoaded,
    )
}

fn handle_image_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ImageFile, Error>,
) -> Task<Message> {
    match result {
        Ok(image) => {
            *ctx.notice = None;
            if !ctx.form.open(image) {
                log::debug!("loaded image dropped: form already open");
            }
        }
        Err(err) => {
            log::warn!("could not load image: {err}");
            *ctx.notice = Some(IMAGE_LOAD_ERROR_KEY.to_string());
        }
    }
    Task::none()
}
