// SPDX-License-Identifier: MPL-2.0
//! Slide-in navigation drawer.
//!
//! [`Drawer`] owns the `Closed/Opening/Open/Closing` state machine, the
//! selected entry and the post-navigation close countdown. Its visuals are
//! written to a [`Scheduler`](crate::tween::Scheduler) through the targets of
//! [`transitions`]; the view only reads them back.

mod component;
pub mod transitions;

pub use component::{Drawer, DrawerState};

use crate::config::{DEFAULT_DRAWER_WIDTH, DEFAULT_SETTLE_DELAY_MS};
use std::time::Duration;

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Section identifier the entry scrolls to.
    pub id: &'static str,
    /// Localization key of the entry label.
    pub label: &'static str,
}

impl NavItem {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

/// Keys the drawer reacts to while listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Enter,
}

/// Where a pointer press landed, relative to the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Panel,
    Toggle,
    Outside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawerSettings {
    /// Wait between activating an entry and the close starting.
    pub settle_delay: Duration,
    /// Width of the open panel in logical pixels.
    pub panel_width: f32,
}

impl Default for DrawerSettings {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            panel_width: DEFAULT_DRAWER_WIDTH,
        }
    }
}
