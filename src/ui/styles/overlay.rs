// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal form and the outcome dialogs.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, ERROR_500, SUCCESS_500},
};
use iced::widget::{container, text};
use iced::{Background, Color, Theme};

/// Dimmed page behind a modal overlay.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Inline validation message.
#[must_use]
pub fn error_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ERROR_500),
    }
}

/// Title of an outcome dialog, green for success and red for errors.
pub fn outcome_title(success: bool) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(if success { SUCCESS_500 } else { ERROR_500 }),
    }
}
