// SPDX-License-Identifier: MPL-2.0
//! Validation rules for the upload form metadata.
//!
//! Every rule is a pure predicate over the raw field text. Hashtags are
//! tokenized on whitespace with empty tokens discarded, so an empty or blank
//! hashtag field passes every hashtag rule.
//!
//! Duplicate detection compares tokens exactly as typed: `#Cat #cat` passes.

use crate::domain::form::Field;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Maximum number of hashtags per photo.
pub const MAX_HASHTAGS: usize = 5;

/// Maximum length of the text after `#` in a single hashtag.
pub const MAX_HASHTAG_BODY: usize = 19;

/// Maximum comment length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 140;

static HASHTAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^#[a-zA-Zа-яА-ЯёЁ0-9]{{1,{MAX_HASHTAG_BODY}}}$"))
        .expect("hashtag pattern is a valid regex")
});

/// Splits the hashtag field into tokens.
#[must_use]
pub fn hashtags(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Every token is `#` followed by 1–19 Latin or Cyrillic letters or digits.
#[must_use]
pub fn hashtag_format(text: &str) -> bool {
    hashtags(text).iter().all(|tag| HASHTAG_PATTERN.is_match(tag))
}

/// At most [`MAX_HASHTAGS`] tokens.
#[must_use]
pub fn hashtag_count(text: &str) -> bool {
    hashtags(text).len() <= MAX_HASHTAGS
}

/// No token appears twice.
#[must_use]
pub fn hashtag_unique(text: &str) -> bool {
    let tags = hashtags(text);
    let unique: HashSet<&str> = tags.iter().copied().collect();
    unique.len() == tags.len()
}

/// The trimmed comment is at most [`MAX_COMMENT_LENGTH`] characters.
#[must_use]
pub fn comment_length(text: &str) -> bool {
    text.trim().chars().count() <= MAX_COMMENT_LENGTH
}

// =============================================================================
// Rule table
// =============================================================================

/// A predicate bound to a field together with the message shown when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub field: Field,
    pub check: fn(&str) -> bool,
    pub message_key: &'static str,
}

pub const HASHTAG_FORMAT_KEY: &str = "validation-hashtag-format";
pub const HASHTAG_COUNT_KEY: &str = "validation-hashtag-count";
pub const HASHTAG_DUPLICATE_KEY: &str = "validation-hashtag-duplicate";
pub const COMMENT_LENGTH_KEY: &str = "validation-comment-length";

/// Rules registered with the validation engine, in display priority order.
pub const RULES: [Rule; 4] = [
    Rule {
        field: Field::Hashtags,
        check: hashtag_format,
        message_key: HASHTAG_FORMAT_KEY,
    },
    Rule {
        field: Field::Hashtags,
        check: hashtag_count,
        message_key: HASHTAG_COUNT_KEY,
    },
    Rule {
        field: Field::Hashtags,
        check: hashtag_unique,
        message_key: HASHTAG_DUPLICATE_KEY,
    },
    Rule {
        field: Field::Comment,
        check: comment_length,
        message_key: COMMENT_LENGTH_KEY,
    },
];
