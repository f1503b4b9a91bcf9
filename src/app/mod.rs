// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the upload form.
//!
//! The `App` struct owns the form and the localized strings. It translates
//! form events into side effects: driving the transport future, loading the
//! chosen file and reporting load problems.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::I18n;
use crate::infrastructure::{FieldValidator, FilePreviewSource, SliderRange};
use crate::ui::upload_form::{Collaborators, UploadForm};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    form: UploadForm,
    /// Message key of the notice shown on the page, if any.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form", &self.form)
            .field("notice", &self.notice)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
#[allow(clippy::cast_precision_loss)]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Wires the form to its collaborators and, when a file was passed on
    /// the command line, starts loading it.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            config,
            config_warning,
            transport,
            file_path,
        } = flags;

        let form = UploadForm::new(Collaborators {
            transport,
            preview_source: Box::new(FilePreviewSource::new(config.preview.max_dimension())),
            range_factory: SliderRange::factory(),
            validator: Box::new(FieldValidator::new()),
        });

        let app = App {
            i18n: I18n::new(),
            form,
            notice: config_warning,
        };
        log::debug!("interface locale: {}", app.i18n.current_locale());

        let task = match file_path {
            Some(path) => update::load_image(path),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.form.image() {
            Some(image) => format!("{} - {app_name}", image.name),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            notice: &mut self.notice,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            form: &self.form,
            notice: self.notice.as_deref(),
        })
    }
}
