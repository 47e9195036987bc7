// SPDX-License-Identifier: MPL-2.0
//! Tween scheduling.
//!
//! Components never animate anything themselves: they describe tweens to a
//! [`Scheduler`] and read back the interpolated values when rendering. The
//! contract is deliberately small (immediate set, animate, cancel, playback
//! rate) so components stay independent of the engine that drives them.
//!
//! [`Engine`] is the frame-driven implementation used by the application,
//! [`Timeline`] composes several tweens with relative offsets into a single
//! transition, and [`Recorder`] wraps any scheduler to keep a log of the
//! calls it received.

mod easing;
mod engine;
mod recorder;
mod target;
mod timeline;

pub use easing::{Easing, DEFAULT_BACK_OVERSHOOT};
pub use engine::Engine;
pub use recorder::{Call, Recorder};
pub use target::{Property, Props, Target};
pub use timeline::{Position, Timeline, TimelineHandle};

/// Identifies a running tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Handle(u64);

impl Handle {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// How many times a tween plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// A single cycle.
    #[default]
    Once,
    /// The first cycle plus `n` repetitions.
    Times(u32),
    /// Loops until cancelled.
    Forever,
}

impl Repeat {
    /// Total number of cycles, `None` for [`Repeat::Forever`].
    #[must_use]
    pub fn cycles(self) -> Option<u32> {
        match self {
            Repeat::Once => Some(1),
            Repeat::Times(n) => Some(n.saturating_add(1)),
            Repeat::Forever => None,
        }
    }
}

/// Timing parameters of a tween. All times are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenOptions {
    pub duration: f32,
    pub easing: Easing,
    pub delay: f32,
    pub repeat: Repeat,
    /// Alternate direction on every other cycle.
    pub yoyo: bool,
    /// Extra delay added per target, in target order.
    pub stagger: f32,
}

impl TweenOptions {
    #[must_use]
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            easing: Easing::Linear,
            delay: 0.0,
            repeat: Repeat::Once,
            yoyo: false,
            stagger: 0.0,
        }
    }

    #[must_use]
    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    #[must_use]
    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    #[must_use]
    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    #[must_use]
    pub fn yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    #[must_use]
    pub fn stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger.max(0.0);
        self
    }

    /// Time from the first target starting to the last target finishing,
    /// excluding `delay`. `None` for tweens that never finish.
    #[must_use]
    pub fn active_span(&self, target_count: usize) -> Option<f32> {
        let cycles = self.repeat.cycles()?;
        #[allow(clippy::cast_precision_loss)]
        let stagger_span = self.stagger * target_count.saturating_sub(1) as f32;
        #[allow(clippy::cast_precision_loss)]
        Some(self.duration * cycles as f32 + stagger_span)
    }
}

/// The animation collaborator used by the marquee, the drawer and the
/// scroll reveals.
pub trait Scheduler {
    /// Writes property values with no animation.
    fn set_immediate(&mut self, target: Target, props: &Props);

    /// Tweens every property of `props` on every target. Start values are
    /// captured when each target's tween actually begins.
    fn animate(&mut self, targets: &[Target], props: &Props, options: TweenOptions) -> Handle;

    /// Stops a tween where it is. Returns `false` if it was not running.
    fn cancel(&mut self, handle: Handle) -> bool;

    /// Changes the playback rate of a running tween without restarting it.
    fn set_time_scale(&mut self, handle: Handle, scale: f32);

    /// Tweens the playback rate itself over `duration` seconds of real time.
    fn ramp_time_scale(&mut self, handle: Handle, to: f32, duration: f32, easing: Easing);

    /// Current playback rate, `None` if the tween is not running.
    fn time_scale(&self, handle: Handle) -> Option<f32>;

    fn is_active(&self, handle: Handle) -> bool;

    /// Current value, or the property default if it was never written.
    fn value(&self, target: Target, property: Property) -> f32;
}
