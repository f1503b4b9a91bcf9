// SPDX-License-Identifier: MPL-2.0
//! Upload form message/event types re-exported by the facade.

use super::submission::PendingSubmission;
use crate::application::port::TransportError;
use crate::domain::effect::Effect;
use crate::domain::form::Field;

/// Interactive controls that can receive a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Close button of the upload overlay.
    Cancel,
    ScaleSmaller,
    ScaleBigger,
    /// Close button of the success or error overlay.
    OutcomeClose,
    /// Area of the outcome overlay outside its inner panel.
    OutcomeBackdrop,
    /// Inner panel of the outcome overlay.
    OutcomePanel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Where a keydown originated. Field-origin events bubble to the document
/// unless the field stops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyOrigin {
    Document,
    Field(Field),
}

/// Raw user input reaching the form, before listeners interpret it.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    Click(Control),
    /// An effect radio was chosen.
    EffectChosen(Effect),
    /// The range control handle was dragged to a position.
    RangeInput(f64),
    KeyDown { key: Key, origin: KeyOrigin },
    /// The form's submit control was activated.
    SubmitRequested,
}

/// Messages handled by [`super::UploadForm::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Raw input routed through the armed listeners.
    Input(UiEvent),
    Cancel,
    /// Escape reached the document-level handler.
    Escape,
    ScaleSmaller,
    ScaleBigger,
    EffectSelected(Effect),
    RangeSlid(f64),
    HashtagsChanged(String),
    CommentChanged(String),
    Submit,
    /// The transport settled for submission `attempt`.
    SubmissionFinished {
        attempt: u64,
        result: Result<(), TransportError>,
    },
    /// Success or error overlay dismissed.
    DismissOutcome,
}

impl From<UiEvent> for Message {
    fn from(event: UiEvent) -> Self {
        Message::Input(event)
    }
}

/// Events propagated to the parent application for side effects.
#[derive(Debug)]
pub enum Event {
    None,
    Closed,
    /// The transport future must be driven to completion and its result fed
    /// back as [`Message::SubmissionFinished`].
    SubmissionStarted(PendingSubmission),
    Succeeded,
    Failed(TransportError),
}

impl Event {
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Event::None)
    }
}
