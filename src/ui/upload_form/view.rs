// SPDX-License-Identifier: MPL-2.0
//! Rendering of the upload form and its outcome overlays.

use super::messages::{Control, Message, UiEvent};
use super::submission::Outcome;
use super::UploadForm;
use crate::domain::effect::Effect;
use crate::domain::form::Field;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, center, container, image, mouse_area, opaque, radio, slider, text, text_input,
    Column, Row,
};
use iced::{Alignment, Element, Length};

/// Contextual data needed to render the form.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

fn input(event: UiEvent) -> Message {
    Message::Input(event)
}

impl UploadForm {
    /// Modal upload overlay, or `None` while the form is closed.
    pub fn view<'a>(&'a self, ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
        if !self.is_open() {
            return None;
        }

        let form = Row::new()
            .spacing(spacing::LG)
            .push(self.preview_column(ctx))
            .push(self.details_column(ctx));

        let panel = container(
            Column::new()
                .spacing(spacing::MD)
                .push(self.header(ctx))
                .push(form),
        )
        .padding(spacing::LG)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(styles::container::panel);

        let overlay: Element<'a, Message> = opaque(
            center(opaque(panel))
                .padding(spacing::XL)
                .style(styles::overlay::backdrop),
        );

        Some(match self.outcome() {
            Some(outcome) => iced::widget::stack![overlay, outcome_view(outcome, ctx)].into(),
            None => overlay,
        })
    }

    fn header<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let title = self
            .image()
            .map_or_else(|| ctx.i18n.tr("upload-title"), |file| file.name.clone());

        Row::new()
            .align_y(Alignment::Center)
            .push(
                text(title)
                    .size(typography::TITLE_MD)
                    .width(Length::Fill),
            )
            .push(
                button(text(ctx.i18n.tr("upload-cancel")).size(typography::BODY))
                    .on_press(input(UiEvent::Click(Control::Cancel)))
                    .padding(spacing::XS),
            )
            .into()
    }

    fn preview_column<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let scale = self.preview().scale();

        let scale_row = Row::new()
            .spacing(spacing::XS)
            .align_y(Alignment::Center)
            .push(text(ctx.i18n.tr("upload-scale-label")).size(typography::BODY))
            .push(
                button(text(ctx.i18n.tr("upload-scale-smaller")).size(typography::BODY))
                    .on_press_maybe(
                        (!scale.is_min()).then(|| input(UiEvent::Click(Control::ScaleSmaller))),
                    )
                    .padding(spacing::XXS),
            )
            .push(text(scale.readout()).size(typography::BODY))
            .push(
                button(text(ctx.i18n.tr("upload-scale-bigger")).size(typography::BODY))
                    .on_press_maybe(
                        (!scale.is_max()).then(|| input(UiEvent::Click(Control::ScaleBigger))),
                    )
                    .padding(spacing::XXS),
            );

        let picture: Element<'a, Message> = match (self.preview().handle(), self.preview().image())
        {
            (Some(handle), Some(pixels)) => {
                let (width, height) = fitted_size(pixels.width, pixels.height, scale.as_factor());
                image(handle.clone())
                    .width(Length::Fixed(width))
                    .height(Length::Fixed(height))
                    .into()
            }
            _ => text(ctx.i18n.tr("upload-no-preview"))
                .size(typography::BODY)
                .color(palette::GRAY_400)
                .into(),
        };

        Column::new()
            .spacing(spacing::SM)
            .align_x(Alignment::Center)
            .width(Length::Fixed(sizing::PREVIEW_BOX))
            .push(scale_row)
            .push(
                container(picture)
                    .center(Length::Fixed(sizing::PREVIEW_BOX)),
            )
            .into()
    }

    fn details_column<'a>(&'a self, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let selected = Some(self.effects().effect());
        let effects = Effect::ALL.into_iter().fold(
            Column::new().spacing(spacing::XXS),
            |column, effect| {
                column.push(
                    radio(ctx.i18n.tr(effect.label_key()), effect, selected, |chosen| {
                        input(UiEvent::EffectChosen(chosen))
                    })
                    .text_size(typography::BODY),
                )
            },
        );

        let mut column = Column::new().spacing(spacing::MD).width(Length::Fill).push(effects);

        if let Some(range) = self.effects().range() {
            let options = range.options();
            column = column.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(text(ctx.i18n.tr("upload-effect-level-label")).size(typography::BODY))
                    .push(
                        slider(options.min..=options.max, range.value(), |position| {
                            input(UiEvent::RangeInput(position))
                        })
                        .step(options.step),
                    )
                    .push(text(self.preview().level_readout()).size(typography::CAPTION)),
            );
        }

        let sending = self.submit_button().is_disabled();
        column = column
            .push(self.field(
                ctx,
                Field::Hashtags,
                "upload-hashtags-placeholder",
                Message::HashtagsChanged,
                sending,
            ))
            .push(self.field(
                ctx,
                Field::Comment,
                "upload-comment-placeholder",
                Message::CommentChanged,
                sending,
            ));

        let submit = button(
            text(ctx.i18n.tr(self.submit_button().label_key())).size(typography::BODY_LG),
        )
        .padding(spacing::SM)
        .width(Length::Fill)
        .on_press_maybe((!sending).then_some(input(UiEvent::SubmitRequested)));

        column.push(submit).into()
    }

    fn field<'a>(
        &'a self,
        ctx: &ViewContext<'a>,
        field: Field,
        placeholder_key: &str,
        on_input: fn(String) -> Message,
        sending: bool,
    ) -> Element<'a, Message> {
        let placeholder = ctx.i18n.tr(placeholder_key);
        let value = self.fields().value(field);
        let text_field = text_input(&placeholder, value)
            .size(typography::BODY)
            .padding(spacing::XS);
        let text_field = if sending {
            text_field
        } else {
            text_field.on_input(on_input)
        };

        let mut column = Column::new().spacing(spacing::XXS).push(text_field);
        if let Some(key) = self.errors().first(field) {
            column = column.push(
                text(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .style(styles::overlay::error_text),
            );
        }
        column.into()
    }
}

fn outcome_view<'a>(outcome: Outcome, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let panel = container(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Alignment::Center)
            .push(
                text(ctx.i18n.tr(outcome.title_key()))
                    .size(typography::TITLE_MD)
                    .style(styles::overlay::outcome_title(outcome == Outcome::Success)),
            )
            .push(
                button(text(ctx.i18n.tr(outcome.button_key())).size(typography::BODY_LG))
                    .on_press(input(UiEvent::Click(Control::OutcomeClose)))
                    .padding(spacing::SM),
            ),
    )
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::OUTCOME_WIDTH))
    .style(styles::container::panel);

    let panel = opaque(mouse_area(panel).on_press(input(UiEvent::Click(Control::OutcomePanel))));

    opaque(
        mouse_area(center(panel).style(styles::overlay::backdrop))
            .on_press(input(UiEvent::Click(Control::OutcomeBackdrop))),
    )
}

/// Size of the preview at `factor`, fitted inside the preview box.
#[allow(clippy::cast_precision_loss)]
fn fitted_size(width: u32, height: u32, factor: f32) -> (f32, f32) {
    let (width, height) = (width.max(1) as f32, height.max(1) as f32);
    let fit = (sizing::PREVIEW_BOX / width)
        .min(sizing::PREVIEW_BOX / height)
        .min(1.0);
    (width * fit * factor, height * fit * factor)
}
