// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Strings live in embedded Fluent `.ftl` files. The form ships in Russian;
//! a key without a translation renders as `MISSING: <key>`.

pub mod fluent;

pub use fluent::I18n;
