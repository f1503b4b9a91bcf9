// SPDX-License-Identifier: MPL-2.0
//! Upload photo form.
//!
//! This module follows the "state down, messages up" pattern: the view emits
//! [`Message`]s, [`UploadForm::update`] applies them and returns an [`Event`]
//! for the parent when a side effect is needed (driving the transport).
//!
//! Opening the form arms one bundle of listeners and closing it releases the
//! same bundle, so repeated open/close cycles never stack handlers.

mod effects;
mod listeners;
mod messages;
mod preview;
mod submission;
mod view;


pub use effects::EffectSelector;
pub use listeners::{
    Binding, Handler, ListenerId, ListenerRegistry, Propagation, Reaction, Subscriptions, Trigger,
};
pub use messages::{Control, Event, Key, KeyOrigin, Message, UiEvent};
pub use preview::{Preview, PreviewStyle};
pub use submission::{
    Outcome, PendingSubmission, SubmitButton, SubmitOutcome, SUBMIT_IDLE_KEY, SUBMIT_SENDING_KEY,
};
pub use view::ViewContext;

use crate::application::port::{PreviewSource, RangeFactory, Transport, ValidationEngine};
use crate::domain::form::{Field, FieldErrors, FormFields, FormState, ImageFile, SubmissionState};
use crate::domain::ui::ScaleDirection;
use crate::domain::validation::RULES;
use std::fmt;
use std::sync::Arc;
use submission::Submission;

/// Collaborators the form is constructed with.
pub struct Collaborators {
    pub transport: Arc<dyn Transport>,
    pub preview_source: Box<dyn PreviewSource>,
    pub range_factory: RangeFactory,
    /// Engine the form registers its field rules with.
    pub validator: Box<dyn ValidationEngine>,
}

// =============================================================================
// Listener bundle of the open form
// =============================================================================

fn on_document_key(event: &UiEvent) -> Reaction {
    match event {
        UiEvent::KeyDown {
            key: Key::Escape, ..
        } => Reaction::emit(Message::Escape),
        _ => Reaction::pass(),
    }
}

/// Keystrokes inside the text fields never reach the document handler.
fn protect_keystrokes(_: &UiEvent) -> Reaction {
    Reaction::stop()
}

fn on_cancel(_: &UiEvent) -> Reaction {
    Reaction::emit(Message::Cancel)
}

fn on_scale_smaller(_: &UiEvent) -> Reaction {
    Reaction::emit(Message::ScaleSmaller)
}

fn on_scale_bigger(_: &UiEvent) -> Reaction {
    Reaction::emit(Message::ScaleBigger)
}

fn on_effect_change(event: &UiEvent) -> Reaction {
    match event {
        UiEvent::EffectChosen(effect) => Reaction::emit(Message::EffectSelected(*effect)),
        _ => Reaction::pass(),
    }
}

fn on_submit(_: &UiEvent) -> Reaction {
    Reaction::emit(Message::Submit)
}

const FORM_BINDINGS: [Binding; 8] = [
    (Trigger::KeyDown(KeyOrigin::Document), on_document_key),
    (
        Trigger::KeyDown(KeyOrigin::Field(Field::Hashtags)),
        protect_keystrokes,
    ),
    (
        Trigger::KeyDown(KeyOrigin::Field(Field::Comment)),
        protect_keystrokes,
    ),
    (Trigger::Click(Control::Cancel), on_cancel),
    (Trigger::Click(Control::ScaleSmaller), on_scale_smaller),
    (Trigger::Click(Control::ScaleBigger), on_scale_bigger),
    (Trigger::EffectChange, on_effect_change),
    (Trigger::Submit, on_submit),
];

// =============================================================================
// UploadForm
// =============================================================================

pub struct UploadForm {
    transport: Arc<dyn Transport>,
    preview_source: Box<dyn PreviewSource>,
    validator: Box<dyn ValidationEngine>,
    state: FormState,
    /// Page body is in modal mode while the form is open.
    modal_body: bool,
    image: Option<ImageFile>,
    fields: FormFields,
    /// Field that last received text, where captured keystrokes originate.
    focused_field: Option<Field>,
    preview: Preview,
    effects: EffectSelector,
    submission: Submission,
    listeners: ListenerRegistry,
    form_subscriptions: Option<Subscriptions>,
}

impl fmt::Debug for UploadForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadForm")
            .field("state", &self.state)
            .field("image", &self.image)
            .field("fields", &self.fields)
            .field("effects", &self.effects)
            .field("submission", &self.submission)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl UploadForm {
    /// Builds a closed form and registers the field rules with the validator.
    #[must_use]
    pub fn new(collaborators: Collaborators) -> Self {
        let Collaborators {
            transport,
            preview_source,
            range_factory,
            mut validator,
        } = collaborators;

        for rule in RULES {
            validator.register_rule(rule.field, rule.check, rule.message_key);
        }

        Self {
            transport,
            preview_source,
            validator,
            state: FormState::Closed,
            modal_body: false,
            image: None,
            fields: FormFields::default(),
            focused_field: None,
            preview: Preview::new(),
            effects: EffectSelector::new(range_factory),
            submission: Submission::default(),
            listeners: ListenerRegistry::new(),
            form_subscriptions: None,
        }
    }

    /// Opens the form for `image`. Returns `false` if it was already open.
    pub fn open(&mut self, image: ImageFile) -> bool {
        if self.is_open() {
            log::debug!("open ignored: form already open");
            return false;
        }

        self.reset_owned_state();
        self.state = FormState::Open;
        self.modal_body = true;
        self.form_subscriptions = Some(Subscriptions::acquire(
            &mut self.listeners,
            &FORM_BINDINGS,
        ));

        match self.preview_source.source_for(&image) {
            Ok(source) => self.preview.set_source(Some(source)),
            Err(err) => log::warn!("no preview for {}: {err}", image.name),
        }
        log::info!("upload form opened for {}", image.name);
        self.image = Some(image);
        true
    }

    /// Closes the form and resets everything it owns. Returns `false` if it
    /// was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            log::debug!("close ignored: form already closed");
            return false;
        }

        if let Some(bundle) = self.form_subscriptions.take() {
            bundle.release(&mut self.listeners);
        }
        self.reset_owned_state();
        self.image = None;
        self.modal_body = false;
        self.state = FormState::Closed;
        log::info!("upload form closed");
        true
    }

    fn reset_owned_state(&mut self) {
        self.fields = FormFields::default();
        self.focused_field = None;
        self.validator.reset();
        self.effects.reset(&mut self.preview, &mut self.listeners);
        self.preview.reset();
        self.submission.reset(&mut self.listeners);
    }

    /// Delivers raw input to the armed listeners and applies what they emit.
    pub fn handle(&mut self, event: UiEvent) -> Event {
        let messages = self.listeners.dispatch(&event);
        if messages.is_empty() {
            log::trace!("no listener for {event:?}");
        }

        let mut outcome = Event::None;
        for message in messages {
            let event = self.update(message);
            if !event.is_none() {
                outcome = event;
            }
        }
        outcome
    }

    /// Update the state and emit an [`Event`] for the parent when needed.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Input(event) => return self.handle(event),
            Message::SubmissionFinished { attempt, result } => {
                return self.finish_submission(attempt, result)
            }
            _ if !self.is_open() => return Event::None,
            _ => {}
        }

        match message {
            Message::Cancel | Message::Escape => {
                if self.outcome().is_some() {
                    log::debug!("close ignored while the outcome overlay is shown");
                } else if self.close() {
                    return Event::Closed;
                }
            }
            Message::ScaleSmaller => self.preview.apply_scale(ScaleDirection::Smaller),
            Message::ScaleBigger => self.preview.apply_scale(ScaleDirection::Bigger),
            Message::EffectSelected(effect) => {
                self.effects
                    .select(effect, &mut self.preview, &mut self.listeners);
            }
            Message::RangeSlid(position) => {
                self.effects.slide(position, &mut self.preview);
            }
            Message::HashtagsChanged(text) => self.edit_field(Field::Hashtags, text),
            Message::CommentChanged(text) => self.edit_field(Field::Comment, text),
            Message::Submit => {
                if let SubmitOutcome::Sending(pending) = self.submit() {
                    return Event::SubmissionStarted(pending);
                }
            }
            Message::DismissOutcome => return self.dismiss_outcome(),
            Message::Input(_) | Message::SubmissionFinished { .. } => {}
        }
        Event::None
    }

    fn edit_field(&mut self, field: Field, text: String) {
        if self.submit_button().is_disabled() {
            return;
        }
        self.focused_field = Some(field);
        match field {
            Field::Hashtags => self.fields.hashtags = text,
            Field::Comment => self.fields.comment = text,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn state(&self) -> FormState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == FormState::Open
    }

    #[must_use]
    pub fn is_modal_body(&self) -> bool {
        self.modal_body
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageFile> {
        self.image.as_ref()
    }

    /// Field a keystroke captured by a text input came from.
    #[must_use]
    pub fn focused_field(&self) -> Field {
        self.focused_field.unwrap_or(Field::Hashtags)
    }

    #[must_use]
    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Inline errors from the last submit attempt.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        self.validator.errors()
    }

    #[must_use]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    #[must_use]
    pub fn effects(&self) -> &EffectSelector {
        &self.effects
    }

    #[must_use]
    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    #[must_use]
    pub fn submit_button(&self) -> SubmitButton {
        self.submission.button()
    }

    /// Outcome overlay currently shown, if any.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.submission.outcome()
    }

    /// Number of armed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}
