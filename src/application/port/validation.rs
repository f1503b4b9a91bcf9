// SPDX-License-Identifier: MPL-2.0
//! Validation engine port definition.
//!
//! The engine holds per-field rules registered once, runs them all on a
//! submit attempt and keeps the resulting inline messages until reset.

use crate::domain::form::{Field, FieldErrors, FormFields};
use std::fmt;

/// Port for the validation engine widget.
pub trait ValidationEngine: fmt::Debug {
    /// Adds a rule to `field`. Rules run in registration order.
    fn register_rule(&mut self, field: Field, predicate: fn(&str) -> bool, message_key: &'static str);

    /// Runs every rule against `fields`, replacing the displayed errors.
    ///
    /// Returns `true` when no rule failed.
    fn validate_all(&mut self, fields: &FormFields) -> bool;

    /// Errors from the last validation pass.
    fn errors(&self) -> &FieldErrors;

    /// Clears displayed errors. Registered rules are kept.
    fn reset(&mut self);
}
