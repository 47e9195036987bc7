// SPDX-License-Identifier: MPL-2.0
//! Seamless infinite image marquee.
//!
//! The host drives a [`Marquee`] with three kinds of input: image results
//! (for the [`ImageRequest`]s it hands out), frame ticks, and pointer
//! enter/leave. Motion itself is a tween on the marquee's target, so the
//! view reads the current offset from the scheduler.

mod component;
mod item;

pub use component::{
    ImageRequest, ImageRetry, Marquee, MarqueeRunState, Phase, RenderEntry, SlotStatus, StripCopy,
};
pub use item::{Direction, MarqueeItem, MarqueeSettings};
