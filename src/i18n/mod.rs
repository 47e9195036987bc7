// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Page chrome strings live in embedded Fluent `.ftl` files under
//! `assets/i18n/`. The locale is taken from the CLI, then the config file,
//! then the operating system, falling back to `en-US`.

pub mod fluent;
