// SPDX-License-Identifier: MPL-2.0
//! Domain layer - types and rules of the upload form, free of any UI toolkit.
//!
//! # Modules
//!
//! - [`effect`]: Effect catalog ([`Effect`](effect::Effect), [`EffectDomain`](effect::EffectDomain))
//! - [`form`]: Form states, fields and submitted data ([`FormState`](form::FormState),
//!   [`SubmissionState`](form::SubmissionState), [`FormData`](form::FormData))
//! - [`ui`]: UI value objects ([`ScalePercent`](ui::ScalePercent))
//! - [`validation`]: Metadata validation rules

pub mod effect;
pub mod form;
pub mod ui;
pub mod validation;
