// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for every configurable setting.
//!
//! # Categories
//!
//! - **Marquee**: strip speed, spacing, hover slowdown and measurement retries
//! - **Drawer**: panel width and post-navigation settle delay
//! - **Reveal**: viewport threshold of scroll-triggered entrances

// ==========================================================================
// Marquee Defaults
// ==========================================================================

/// Default strip speed in pixels per second.
pub const DEFAULT_MARQUEE_SPEED: f32 = 60.0;

/// Slowest accepted strip speed. Zero would make the loop duration infinite.
pub const MIN_MARQUEE_SPEED: f32 = 1.0;

/// Fastest accepted strip speed.
pub const MAX_MARQUEE_SPEED: f32 = 2000.0;

/// Space after every strip entry, in pixels.
pub const DEFAULT_MARQUEE_GAP: f32 = 24.0;

/// Largest accepted gap.
pub const MAX_MARQUEE_GAP: f32 = 256.0;

/// Height of the strip; images without a declared width scale to it.
pub const DEFAULT_MARQUEE_HEIGHT: f32 = 320.0;

/// Smallest accepted strip height.
pub const MIN_MARQUEE_HEIGHT: f32 = 40.0;

/// Largest accepted strip height.
pub const MAX_MARQUEE_HEIGHT: f32 = 1200.0;

/// Playback rate while the pointer is over the strip.
pub const DEFAULT_HOVER_TIME_SCALE: f32 = 0.1;

/// Lower bound of the hover playback rate.
pub const MIN_HOVER_TIME_SCALE: f32 = 0.1;

/// Upper bound of the hover playback rate (no slowdown).
pub const MAX_HOVER_TIME_SCALE: f32 = 1.0;

/// Seconds to reach the hover rate.
pub const DEFAULT_HOVER_RAMP_SECS: f32 = 0.5;

/// Longest accepted hover ramp.
pub const MAX_HOVER_RAMP_SECS: f32 = 5.0;

/// Wait between two width measurements when the strip measured zero.
pub const DEFAULT_MEASURE_RETRY_DELAY_MS: u64 = 200;

/// Measurements attempted before the strip is shown without motion.
pub const DEFAULT_MAX_MEASURE_ATTEMPTS: u32 = 25;

/// Upper bound of measurement attempts.
pub const MAX_MEASURE_ATTEMPTS: u32 = 500;

/// Wait before the single re-request of a failed image.
pub const DEFAULT_IMAGE_RETRY_DELAY_MS: u64 = 100;

// ==========================================================================
// Drawer Defaults
// ==========================================================================

/// Delay between activating an entry and the drawer starting to close.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Longest accepted settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 3000;

/// Width of the open panel in logical pixels.
pub const DEFAULT_DRAWER_WIDTH: f32 = 320.0;

/// Narrowest accepted panel.
pub const MIN_DRAWER_WIDTH: f32 = 200.0;

/// Widest accepted panel.
pub const MAX_DRAWER_WIDTH: f32 = 640.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Fraction of the viewport height a section top must cross to reveal it.
pub const DEFAULT_REVEAL_START: f32 = 0.8;

/// Fraction of the viewport height the menu card grid must cross.
pub const DEFAULT_CARD_REVEAL_START: f32 = 0.85;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MARQUEE_SPEED > 0.0);
    assert!(DEFAULT_MARQUEE_SPEED >= MIN_MARQUEE_SPEED);
    assert!(DEFAULT_MARQUEE_SPEED <= MAX_MARQUEE_SPEED);

    assert!(DEFAULT_MARQUEE_GAP >= 0.0);
    assert!(DEFAULT_MARQUEE_GAP <= MAX_MARQUEE_GAP);

    assert!(DEFAULT_MARQUEE_HEIGHT >= MIN_MARQUEE_HEIGHT);
    assert!(DEFAULT_MARQUEE_HEIGHT <= MAX_MARQUEE_HEIGHT);

    assert!(MIN_HOVER_TIME_SCALE > 0.0);
    assert!(DEFAULT_HOVER_TIME_SCALE >= MIN_HOVER_TIME_SCALE);
    assert!(DEFAULT_HOVER_TIME_SCALE <= MAX_HOVER_TIME_SCALE);
    assert!(DEFAULT_HOVER_RAMP_SECS <= MAX_HOVER_RAMP_SECS);

    assert!(DEFAULT_MAX_MEASURE_ATTEMPTS > 0);
    assert!(DEFAULT_MAX_MEASURE_ATTEMPTS <= MAX_MEASURE_ATTEMPTS);
    assert!(DEFAULT_MEASURE_RETRY_DELAY_MS > 0);

    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    assert!(DEFAULT_DRAWER_WIDTH >= MIN_DRAWER_WIDTH);
    assert!(DEFAULT_DRAWER_WIDTH <= MAX_DRAWER_WIDTH);

    assert!(DEFAULT_REVEAL_START > 0.0);
    assert!(DEFAULT_REVEAL_START <= 1.0);
    assert!(DEFAULT_CARD_REVEAL_START > 0.0);
    assert!(DEFAULT_CARD_REVEAL_START <= 1.0);
};
