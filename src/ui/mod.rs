// SPDX-License-Identifier: MPL-2.0
//! User interface views and styling.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! takes a `ViewContext` borrowing the state it renders and emits its own
//! `Message` type, mapped by the application.
//!
//! # Sections
//!
//! - [`navbar`] - Top bar, drawer toggle and the slide-in drawer
//! - [`gallery`] - Featured dishes with the marquee strip
//! - [`menu`] - Category tabs, product cards and the cart line
//! - [`sections`] - Page order, fixed heights and text-only sections
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Canvas widgets (marquee strip, toggle icon)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod menu;
pub mod navbar;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
