// SPDX-License-Identifier: MPL-2.0
//! Rule-list validation engine.

use crate::application::port::ValidationEngine;
use crate::domain::form::{Field, FieldErrors, FormFields};
use std::fmt;

#[derive(Clone, Copy)]
struct RegisteredRule {
    field: Field,
    predicate: fn(&str) -> bool,
    message_key: &'static str,
}

/// Validation engine that runs its rules in registration order and keeps
/// every failing message per field.
#[derive(Default)]
pub struct FieldValidator {
    rules: Vec<RegisteredRule>,
    errors: FieldErrors,
}

impl FieldValidator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl fmt::Debug for FieldValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldValidator")
            .field("rules", &self.rules.len())
            .field("errors", &self.errors)
            .finish()
    }
}

impl ValidationEngine for FieldValidator {
    fn register_rule(&mut self, field: Field, predicate: fn(&str) -> bool, message_key: &'static str) {
        self.rules.push(RegisteredRule {
            field,
            predicate,
            message_key,
        });
    }

    fn validate_all(&mut self, fields: &FormFields) -> bool {
        self.errors.clear();
        for rule in &self.rules {
            if !(rule.predicate)(fields.value(rule.field)) {
                self.errors.insert(rule.field, rule.message_key);
            }
        }
        self.errors.is_empty()
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    fn reset(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::validation::{
        COMMENT_LENGTH_KEY, HASHTAG_COUNT_KEY, HASHTAG_DUPLICATE_KEY, HASHTAG_FORMAT_KEY, RULES,
    };

    fn form_validator() -> FieldValidator {
        let mut validator = FieldValidator::new();
        for rule in RULES {
            validator.register_rule(rule.field, rule.check, rule.message_key);
        }
        validator
    }

    fn fields(hashtags: &str, comment: &str) -> FormFields {
        FormFields {
            hashtags: hashtags.into(),
            comment: comment.into(),
        }
    }

    #[test]
    fn form_rules_are_all_registered() {
        assert_eq!(form_validator().rule_count(), RULES.len());
    }

    #[test]
    fn valid_fields_produce_no_errors() {
        let mut validator = form_validator();
        assert!(validator.validate_all(&fields("#sun #sea", "holidays")));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn every_failing_rule_is_reported() {
        let mut validator = form_validator();
        let hashtags = "#a #a #b #c #d #e bad";
        assert!(!validator.validate_all(&fields(hashtags, &"x".repeat(141))));

        let errors = validator.errors();
        assert_eq!(
            errors.messages(Field::Hashtags),
            &[HASHTAG_FORMAT_KEY, HASHTAG_COUNT_KEY, HASHTAG_DUPLICATE_KEY]
        );
        assert_eq!(errors.first(Field::Comment), Some(COMMENT_LENGTH_KEY));
    }

    #[test]
    fn revalidation_replaces_previous_errors() {
        let mut validator = form_validator();
        assert!(!validator.validate_all(&fields("#a #a", "")));
        assert!(validator.validate_all(&fields("#a", "")));
        assert!(validator.errors().is_empty());
    }

    #[test]
    fn reset_clears_errors_but_keeps_rules() {
        let mut validator = form_validator();
        validator.validate_all(&fields("nope", ""));
        validator.reset();
        assert!(validator.errors().is_empty());
        assert_eq!(validator.rule_count(), RULES.len());
    }
}
