// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses are routed to the form with their origin: presses a
//! focused text input already consumed come from that field, all others
//! reach the document.

use super::Message;
use crate::ui::upload_form::Key;
use iced::keyboard::{self, key::Named};
use iced::{event, Subscription};

/// Maps a native key to the keys the form distinguishes.
#[must_use]
pub fn form_key(key: &keyboard::Key) -> Key {
    match key {
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        _ => Key::Other,
    }
}

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            let key = form_key(&key);
            Some(match status {
                event::Status::Ignored => Message::DocumentKey(key),
                event::Status::Captured => Message::FieldKey(key),
            })
        }
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}
