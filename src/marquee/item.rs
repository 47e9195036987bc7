// SPDX-License-Identifier: MPL-2.0
//! Marquee input data and tuning.

use crate::config::{
    DEFAULT_HOVER_RAMP_SECS, DEFAULT_HOVER_TIME_SCALE, DEFAULT_IMAGE_RETRY_DELAY_MS,
    DEFAULT_MARQUEE_GAP, DEFAULT_MARQUEE_HEIGHT, DEFAULT_MARQUEE_SPEED,
    DEFAULT_MAX_MEASURE_ATTEMPTS, DEFAULT_MEASURE_RETRY_DELAY_MS, MAX_HOVER_TIME_SCALE,
    MIN_HOVER_TIME_SCALE,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One image of the strip. Immutable once handed to the marquee.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeItem {
    /// Image path, relative to the assets directory.
    pub image: String,
    pub alt: String,
    /// Declared width in pixels. Without it the width follows the decoded
    /// image's aspect ratio at the strip height.
    pub display_width: Option<f32>,
}

impl MarqueeItem {
    pub fn new(image: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            alt: alt.into(),
            display_width: None,
        }
    }

    #[must_use]
    pub fn with_width(mut self, width: f32) -> Self {
        self.display_width = Some(width);
        self
    }
}

/// Scroll direction of the strip.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Content travels toward the leading edge.
    #[default]
    Left,
    Right,
}

/// Tuning of a marquee instance.
#[derive(Debug, Clone, PartialEq)]
pub struct MarqueeSettings {
    /// Pixels per second at normal playback rate.
    pub speed: f32,
    pub direction: Direction,
    /// Space after every entry, in pixels.
    pub gap: f32,
    pub strip_height: f32,
    /// Playback rate while hovered, within `[0.1, 1.0]`.
    pub hover_time_scale: f32,
    /// Seconds to reach the hover rate (and to come back from it).
    pub hover_ramp_secs: f32,
    pub measure_retry_delay: Duration,
    /// Measurements attempted before falling back to a static strip.
    pub max_measure_attempts: u32,
    /// Delay before the single cosmetic re-request of a failed image.
    pub image_retry_delay: Duration,
}

impl MarqueeSettings {
    #[must_use]
    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    #[must_use]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub fn with_hover_time_scale(mut self, scale: f32) -> Self {
        self.hover_time_scale = scale.clamp(MIN_HOVER_TIME_SCALE, MAX_HOVER_TIME_SCALE);
        self
    }
}

impl Default for MarqueeSettings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_MARQUEE_SPEED,
            direction: Direction::default(),
            gap: DEFAULT_MARQUEE_GAP,
            strip_height: DEFAULT_MARQUEE_HEIGHT,
            hover_time_scale: DEFAULT_HOVER_TIME_SCALE,
            hover_ramp_secs: DEFAULT_HOVER_RAMP_SECS,
            measure_retry_delay: Duration::from_millis(DEFAULT_MEASURE_RETRY_DELAY_MS),
            max_measure_attempts: DEFAULT_MAX_MEASURE_ATTEMPTS,
            image_retry_delay: Duration::from_millis(DEFAULT_IMAGE_RETRY_DELAY_MS),
        }
    }
}
