// SPDX-License-Identifier: MPL-2.0
//! Submission controller.
//!
//! `Idle -> Sending -> (Succeeded | Failed) -> Idle`. While `Sending` the
//! submit control is disabled and no further attempt is accepted. The
//! outcome overlay shown after an attempt has its own listener bundle.

use super::listeners::{Binding, ListenerRegistry, Reaction, Subscriptions, Trigger};
use super::messages::{Control, Event, Key, KeyOrigin, Message, UiEvent};
use super::UploadForm;
use crate::application::port::{TransportError, TransportFuture};
use crate::domain::form::{FormData, ImageFile, SubmissionState};
use std::fmt;

pub const SUBMIT_IDLE_KEY: &str = "upload-submit-idle";
pub const SUBMIT_SENDING_KEY: &str = "upload-submit-sending";

// =============================================================================
// Submit control
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubmitButton {
    disabled: bool,
}

impl SubmitButton {
    #[must_use]
    pub fn is_disabled(self) -> bool {
        self.disabled
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        if self.disabled {
            SUBMIT_SENDING_KEY
        } else {
            SUBMIT_IDLE_KEY
        }
    }
}

// =============================================================================
// Outcome overlays
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl Outcome {
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Outcome::Success => "outcome-success-title",
            Outcome::Error => "outcome-error-title",
        }
    }

    #[must_use]
    pub fn button_key(self) -> &'static str {
        match self {
            Outcome::Success => "outcome-success-button",
            Outcome::Error => "outcome-error-button",
        }
    }
}

fn dismiss(_: &UiEvent) -> Reaction {
    Reaction::emit(Message::DismissOutcome)
}

// The form's own Escape handler sits below on the same trigger.
fn dismiss_on_escape(event: &UiEvent) -> Reaction {
    match event {
        UiEvent::KeyDown {
            key: Key::Escape, ..
        } => Reaction::emit(Message::DismissOutcome).stop_immediate(),
        _ => Reaction::pass(),
    }
}

const OUTCOME_BINDINGS: [Binding; 3] = [
    (Trigger::Click(Control::OutcomeClose), dismiss),
    (Trigger::Click(Control::OutcomeBackdrop), dismiss),
    (Trigger::KeyDown(KeyOrigin::Document), dismiss_on_escape),
];

#[derive(Debug)]
struct OutcomeOverlay {
    kind: Outcome,
    subscriptions: Subscriptions,
}

impl OutcomeOverlay {
    fn show(kind: Outcome, listeners: &mut ListenerRegistry) -> Self {
        Self {
            kind,
            subscriptions: Subscriptions::acquire(listeners, &OUTCOME_BINDINGS),
        }
    }

    fn hide(self, listeners: &mut ListenerRegistry) -> Outcome {
        self.subscriptions.release(listeners);
        self.kind
    }
}

// =============================================================================
// Pending submission
// =============================================================================

/// An accepted submission whose transport future has not been driven yet.
pub struct PendingSubmission {
    attempt: u64,
    future: TransportFuture,
}

impl PendingSubmission {
    #[must_use]
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Drives the transport and wraps its result for the form.
    pub async fn run(self) -> Message {
        let attempt = self.attempt;
        let result = self.future.await;
        Message::SubmissionFinished { attempt, result }
    }
}

impl fmt::Debug for PendingSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingSubmission")
            .field("attempt", &self.attempt)
            .finish_non_exhaustive()
    }
}

/// Result of a submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The form is closed or an attempt is already in progress.
    Ignored,
    /// A validation rule failed; field errors are set.
    Invalid,
    Sending(PendingSubmission),
}

// =============================================================================
// Submission state
// =============================================================================

#[derive(Debug, Default)]
pub(super) struct Submission {
    state: SubmissionState,
    button: SubmitButton,
    outcome: Option<OutcomeOverlay>,
    /// Id of the most recent attempt. Results for older ids are stale.
    attempt: u64,
}

impl Submission {
    pub(super) fn state(&self) -> SubmissionState {
        self.state
    }

    pub(super) fn button(&self) -> SubmitButton {
        self.button
    }

    pub(super) fn outcome(&self) -> Option<Outcome> {
        self.outcome.as_ref().map(|overlay| overlay.kind)
    }

    /// Drops any overlay and returns to `Idle`. Results of an attempt still
    /// in flight are ignored afterwards.
    pub(super) fn reset(&mut self, listeners: &mut ListenerRegistry) {
        if let Some(overlay) = self.outcome.take() {
            overlay.hide(listeners);
        }
        if self.state == SubmissionState::Sending {
            log::info!("abandoning submission attempt {}", self.attempt);
            self.attempt += 1;
        }
        self.state = SubmissionState::Idle;
        self.button = SubmitButton::default();
    }
}

impl UploadForm {
    /// Validates the fields and, when they pass, hands the form data to the
    /// transport.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.is_open() || self.submission.state != SubmissionState::Idle {
            log::debug!("submit ignored in {:?}", self.submission.state);
            return SubmitOutcome::Ignored;
        }
        if !self.validator.validate_all(&self.fields) {
            log::info!("submission blocked by invalid fields");
            return SubmitOutcome::Invalid;
        }
        let Some(image) = self.image.clone() else {
            log::warn!("submit without an image");
            return SubmitOutcome::Ignored;
        };

        let data = self.form_data(image);
        let submission = &mut self.submission;
        submission.attempt += 1;
        submission.state = SubmissionState::Sending;
        submission.button.disabled = true;
        log::info!("sending submission attempt {}", submission.attempt);

        SubmitOutcome::Sending(PendingSubmission {
            attempt: submission.attempt,
            future: self.transport.submit(data),
        })
    }

    /// Routes the transport result of `attempt` to the success or error overlay.
    pub fn finish_submission(&mut self, attempt: u64, result: Result<(), TransportError>) -> Event {
        let submission = &mut self.submission;
        if submission.state != SubmissionState::Sending || attempt != submission.attempt {
            log::debug!("ignoring result of stale attempt {attempt}");
            return Event::None;
        }
        submission.button.disabled = false;

        match result {
            Ok(()) => {
                log::info!("submission attempt {attempt} succeeded");
                submission.state = SubmissionState::Succeeded;
                submission.outcome = Some(OutcomeOverlay::show(Outcome::Success, &mut self.listeners));
                Event::Succeeded
            }
            Err(err) => {
                log::warn!("submission attempt {attempt} failed: {err}");
                submission.state = SubmissionState::Failed;
                submission.outcome = Some(OutcomeOverlay::show(Outcome::Error, &mut self.listeners));
                Event::Failed(err)
            }
        }
    }

    /// Hides the outcome overlay. Success also closes the form; after an
    /// error the form stays open for another attempt.
    pub fn dismiss_outcome(&mut self) -> Event {
        let Some(overlay) = self.submission.outcome.take() else {
            return Event::None;
        };
        let kind = overlay.hide(&mut self.listeners);
        self.submission.state = SubmissionState::Idle;
        log::debug!("{kind:?} overlay dismissed");

        match kind {
            Outcome::Success if self.close() => Event::Closed,
            Outcome::Success | Outcome::Error => Event::None,
        }
    }

    fn form_data(&self, image: ImageFile) -> FormData {
        FormData {
            image,
            hashtags: self.fields.hashtags.clone(),
            comment: self.fields.comment.clone(),
            effect: self.effects.effect(),
            effect_level: self.preview.level_readout().to_string(),
            scale: self.preview.scale().readout(),
        }
    }
}
