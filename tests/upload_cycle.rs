// SPDX-License-Identifier: MPL-2.0
use image_rs::{ImageFormat, Rgba, RgbaImage};
use photo_upload::application::port::{Transport, TransportError, TransportFuture};
use photo_upload::domain::effect::Effect;
use photo_upload::domain::form::{Field, FormData, FormState, ImageFile, SubmissionState};
use photo_upload::domain::validation::HASHTAG_DUPLICATE_KEY;
use photo_upload::infrastructure::{FieldValidator, FilePreviewSource, SliderRange};
use photo_upload::ui::upload_form::{
    Collaborators, Control, Event, Key, KeyOrigin, Message, Outcome, UiEvent, UploadForm,
};
use std::io::Cursor;
use std::sync::{Arc, Mutex};

/// Transport answering every submission with a fixed result.
struct FixedTransport {
    result: Result<(), TransportError>,
    sent: Mutex<Vec<FormData>>,
}

impl FixedTransport {
    fn new(result: Result<(), TransportError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            sent: Mutex::new(Vec::new()),
        })
    }

    fn sent(&self) -> Vec<FormData> {
        self.sent.lock().expect("lock").clone()
    }
}

impl Transport for FixedTransport {
    fn submit(&self, data: FormData) -> TransportFuture {
        self.sent.lock().expect("lock").push(data);
        let result = self.result.clone();
        Box::pin(async move { result })
    }
}

fn png_photo() -> ImageFile {
    let img = RgbaImage::from_pixel(8, 6, Rgba([120, 60, 30, 255]));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("encode png");
    ImageFile::new("sunset.png", bytes)
}

fn form_with(transport: Arc<FixedTransport>) -> UploadForm {
    UploadForm::new(Collaborators {
        transport,
        preview_source: Box::new(FilePreviewSource::new(600)),
        range_factory: SliderRange::factory(),
        validator: Box::new(FieldValidator::new()),
    })
}

fn click(form: &mut UploadForm, control: Control) -> Event {
    form.handle(UiEvent::Click(control))
}

/// Submits and drives the transport future back into the form.
async fn submit_and_settle(form: &mut UploadForm) -> Event {
    match form.handle(UiEvent::SubmitRequested) {
        Event::SubmissionStarted(pending) => {
            assert_eq!(form.submission_state(), SubmissionState::Sending);
            let message = pending.run().await;
            form.update(message)
        }
        other => panic!("expected a started submission, got {other:?}"),
    }
}

#[tokio::test]
async fn full_cycle_posts_every_field_and_closes_on_success() {
    let transport = FixedTransport::new(Ok(()));
    let mut form = form_with(transport.clone());

    assert!(form.open(png_photo()));
    assert!(form.is_modal_body());
    assert!(form.preview().handle().is_some());

    form.handle(UiEvent::EffectChosen(Effect::Heat));
    form.handle(UiEvent::RangeInput(2.0));
    assert_eq!(form.preview().filter(), "brightness(2)");
    assert_eq!(form.preview().level_readout(), "2");

    click(&mut form, Control::ScaleSmaller);
    assert_eq!(form.preview().scale().readout(), "75%");

    form.update(Message::HashtagsChanged("#sunset #sea".into()));
    form.update(Message::CommentChanged("Evening walk".into()));

    assert!(matches!(submit_and_settle(&mut form).await, Event::Succeeded));
    assert_eq!(form.outcome(), Some(Outcome::Success));

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let data = &sent[0];
    assert_eq!(data.image.name, "sunset.png");
    assert_eq!(data.hashtags, "#sunset #sea");
    assert_eq!(data.comment, "Evening walk");
    assert_eq!(data.effect, Effect::Heat);
    assert_eq!(data.effect_level, "2");
    assert_eq!(data.scale, "75%");

    assert!(matches!(click(&mut form, Control::OutcomeClose), Event::Closed));
    assert_eq!(form.state(), FormState::Closed);
    assert!(!form.is_modal_body());
    assert_eq!(form.listener_count(), 0);
}

#[tokio::test]
async fn failed_submission_keeps_form_for_a_retry() {
    let transport = FixedTransport::new(Err(TransportError::Status(500)));
    let mut form = form_with(transport.clone());
    form.open(png_photo());
    form.update(Message::CommentChanged("first try".into()));

    assert!(matches!(
        submit_and_settle(&mut form).await,
        Event::Failed(TransportError::Status(500))
    ));
    assert_eq!(form.outcome(), Some(Outcome::Error));
    assert!(!form.submit_button().is_disabled());

    // Escape dismisses only the error dialog
    form.handle(UiEvent::KeyDown {
        key: Key::Escape,
        origin: KeyOrigin::Document,
    });
    assert_eq!(form.outcome(), None);
    assert!(form.is_open());
    assert_eq!(form.fields().comment, "first try");

    assert!(matches!(
        submit_and_settle(&mut form).await,
        Event::Failed(_)
    ));
    assert_eq!(transport.sent().len(), 2);
}

#[test]
fn invalid_hashtags_never_reach_the_transport() {
    let transport = FixedTransport::new(Ok(()));
    let mut form = form_with(transport.clone());
    form.open(png_photo());
    form.update(Message::HashtagsChanged("#cat #cat".into()));

    assert!(form.handle(UiEvent::SubmitRequested).is_none());
    assert_eq!(form.errors().first(Field::Hashtags), Some(HASHTAG_DUPLICATE_KEY));
    assert_eq!(form.submission_state(), SubmissionState::Idle);
    assert!(transport.sent().is_empty());
}

#[test]
fn reopening_starts_from_defaults() {
    let transport = FixedTransport::new(Ok(()));
    let mut form = form_with(transport);

    for _ in 0..3 {
        assert!(form.open(png_photo()));
        form.handle(UiEvent::EffectChosen(Effect::Marvin));
        form.handle(UiEvent::RangeInput(40.0));
        click(&mut form, Control::ScaleSmaller);
        form.update(Message::HashtagsChanged("#tag".into()));
        assert!(matches!(click(&mut form, Control::Cancel), Event::Closed));
    }

    let armed_while_closed = form.listener_count();
    assert_eq!(armed_while_closed, 0);

    form.open(png_photo());
    assert_eq!(form.effects().effect(), Effect::None);
    assert!(!form.effects().has_range());
    assert_eq!(form.preview().filter(), "");
    assert_eq!(form.preview().scale().readout(), "100%");
    assert_eq!(form.fields().hashtags, "");
}
