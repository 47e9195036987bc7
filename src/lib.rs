// SPDX-License-Identifier: MPL-2.0
//! `pizza_mania` is an animated restaurant showcase built with the Iced GUI
//! framework.
//!
//! The page is a vertical stack of sections with a seamless image marquee in
//! the gallery, a slide-in navigation drawer and scroll-triggered entrance
//! animations. Every animated value lives in a single tween
//! [`Engine`](tween::Engine); components describe tweens through the
//! [`Scheduler`](tween::Scheduler) trait and stay testable without a window.

pub mod app;
pub mod config;
pub mod content;
pub mod drawer;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod marquee;
pub mod media;
pub mod reveal;
pub mod scroll;
pub mod tween;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
