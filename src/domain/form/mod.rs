// SPDX-License-Identifier: MPL-2.0
//! Upload form domain types.
//!
//! - [`FormState`] / [`SubmissionState`]: the two state machines of the form
//! - [`Field`] / [`FormFields`]: user-entered metadata
//! - [`FieldErrors`]: result of a validation pass
//! - [`ImageFile`] / [`FormData`]: the serialized field set handed to the transport

use crate::domain::effect::Effect;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// States
// =============================================================================

/// Visibility of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    Open,
}

/// Progress of a submission attempt.
///
/// `Idle -> Sending -> (Succeeded | Failed) -> Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

// =============================================================================
// Fields
// =============================================================================

/// Text fields of the form that carry validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Hashtags,
    Comment,
}

impl Field {
    /// Name of the field in the submitted form.
    #[must_use]
    pub fn form_name(self) -> &'static str {
        match self {
            Field::Hashtags => "hashtags",
            Field::Comment => "description",
        }
    }
}

/// Raw text of the validated fields, as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub hashtags: String,
    pub comment: String,
}

impl FormFields {
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Hashtags => &self.hashtags,
            Field::Comment => &self.comment,
        }
    }
}

/// Per-field validation messages (i18n keys) from the last validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    messages: BTreeMap<Field, Vec<&'static str>>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message_key: &'static str) {
        self.messages.entry(field).or_default().push(message_key);
    }

    /// First failing message for `field`, which is the one displayed inline.
    #[must_use]
    pub fn first(&self, field: Field) -> Option<&'static str> {
        self.messages.get(&field).and_then(|keys| keys.first().copied())
    }

    /// All failing messages for `field`, in rule registration order.
    #[must_use]
    pub fn messages(&self, field: Field) -> &[&'static str] {
        self.messages.get(&field).map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

// =============================================================================
// Submitted data
// =============================================================================

/// The image chosen in the file input.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Arc<[u8]>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Serialized field set of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub image: ImageFile,
    pub hashtags: String,
    pub comment: String,
    pub effect: Effect,
    /// Effect level readout; empty when no effect is applied.
    pub effect_level: String,
    /// Scale readout (e.g., `"75%"`).
    pub scale: String,
}

impl FormData {
    /// Form field name of the image part.
    pub const IMAGE_FIELD: &'static str = "filename";

    /// Text parts of the form, in document order.
    #[must_use]
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("scale", self.scale.clone()),
            ("effect-level", self.effect_level.clone()),
            ("effect", self.effect.name().to_string()),
            (Field::Hashtags.form_name(), self.hashtags.clone()),
            (Field::Comment.form_name(), self.comment.clone()),
        ]
    }
}
