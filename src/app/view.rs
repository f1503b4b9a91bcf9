// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page offers the photo chooser; the upload form is stacked over it
//! while open.

use super::Message;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::upload_form::{self, UploadForm};
use iced::widget::{button, center, container, stack, text, Column, Row};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub form: &'a UploadForm,
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut page = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(text(ctx.i18n.tr("window-title")).size(typography::TITLE_MD))
        .push(
            button(text(ctx.i18n.tr("upload-choose-file")).size(typography::BODY_LG))
                .padding(spacing::SM)
                .on_press_maybe((!ctx.form.is_open()).then_some(Message::ChooseFile)),
        );

    if let Some(key) = ctx.notice {
        page = page.push(view_notice(ctx.i18n, key));
    }

    let page: Element<'_, Message> = center(page).padding(spacing::XL).into();

    let form_ctx = upload_form::ViewContext { i18n: ctx.i18n };
    match ctx.form.view(&form_ctx) {
        Some(form) => stack![page, form.map(Message::Form)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => page,
    }
}

fn view_notice<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(text(i18n.tr(key)).size(typography::BODY))
            .push(
                button(text("×").size(typography::BODY))
                    .padding(spacing::XXS)
                    .on_press(Message::DismissNotice),
            ),
    )
    .padding(spacing::SM)
    .style(styles::container::notice)
    .into()
}
