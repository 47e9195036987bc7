// SPDX-License-Identifier: MPL-2.0
//! Open and close timelines of the drawer, and the targets they animate.
//!
//! The panel's `X` is a fraction of its width: `1.0` is fully off the
//! trailing edge, `0.0` in place. Entry `X` is in pixels.

use crate::tween::{Easing, Position, Props, Target, Timeline, TweenOptions};

pub const OVERLAY: Target = Target::new("drawer.overlay");
pub const PANEL: Target = Target::new("drawer.panel");
pub const CLOSE_CONTROL: Target = Target::new("drawer.close");
pub const BAR_TOP: Target = Target::nth("drawer.bar", 0);
pub const BAR_MIDDLE: Target = Target::nth("drawer.bar", 1);
pub const BAR_BOTTOM: Target = Target::nth("drawer.bar", 2);

const ENTRY: &str = "drawer.entry";

/// Horizontal distance entries travel when cascading in.
pub const ENTRY_SHIFT: f32 = 50.0;
/// Vertical shift of the outer toggle bars in the close glyph.
pub const BAR_SHIFT: f32 = 6.0;

pub fn entry(index: usize) -> Target {
    Target::nth(ENTRY, index)
}

pub fn entries(count: usize) -> Vec<Target> {
    Target::group(ENTRY, count)
}

pub(super) fn hidden_entry() -> Props {
    Props::new().opacity(0.0).x(ENTRY_SHIFT).scale(0.8)
}

fn hidden_close_control() -> Props {
    Props::new().opacity(0.0).scale(0.8)
}

/// Values written on mount: everything hidden, toggle showing three bars.
pub(super) fn initial_props() -> [(Target, Props); 6] {
    [
        (PANEL, Props::new().x(1.0)),
        (OVERLAY, Props::new().opacity(0.0)),
        (CLOSE_CONTROL, hidden_close_control()),
        (BAR_TOP, Props::new().rotation(0.0).y(0.0)),
        (BAR_MIDDLE, Props::new().opacity(1.0)),
        (BAR_BOTTOM, Props::new().rotation(0.0).y(0.0)),
    ]
}

/// Overlay in, panel slides in, toggle morphs to a cross, close control
/// pops in, entries cascade.
pub fn open_timeline(entry_count: usize) -> Timeline {
    let back_out = Easing::back_out();
    Timeline::new()
        .to(
            &[OVERLAY],
            Props::new().opacity(1.0),
            TweenOptions::new(0.3).easing(Easing::Power2Out),
            Position::Sequence,
        )
        .to(
            &[PANEL],
            Props::new().x(0.0),
            TweenOptions::new(0.5).easing(back_out),
            Position::Offset(-0.2),
        )
        .to(
            &[BAR_TOP],
            Props::new().rotation(45.0).y(BAR_SHIFT),
            TweenOptions::new(0.3).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[BAR_MIDDLE],
            Props::new().opacity(0.0),
            TweenOptions::new(0.2).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[BAR_BOTTOM],
            Props::new().rotation(-45.0).y(-BAR_SHIFT),
            TweenOptions::new(0.3).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[CLOSE_CONTROL],
            Props::new().opacity(1.0).scale(1.0),
            TweenOptions::new(0.3).easing(back_out),
            Position::Offset(-0.2),
        )
        .from_to(
            &entries(entry_count),
            hidden_entry(),
            Props::new().opacity(1.0).x(0.0).scale(1.0),
            TweenOptions::new(0.5).stagger(0.1).easing(back_out),
            Position::Offset(-0.3),
        )
}

/// Reverse choreography: entries retract first, the overlay fades last.
pub fn close_timeline(entry_count: usize) -> Timeline {
    Timeline::new()
        .to(
            &entries(entry_count),
            hidden_entry(),
            TweenOptions::new(0.3).stagger(0.05).easing(Easing::Power2In),
            Position::Sequence,
        )
        .to(
            &[CLOSE_CONTROL],
            hidden_close_control(),
            TweenOptions::new(0.2).easing(Easing::Power2In),
            Position::Offset(-0.2),
        )
        .to(
            &[PANEL],
            Props::new().x(1.0),
            TweenOptions::new(0.5).easing(Easing::Power2In),
            Position::Offset(-0.2),
        )
        .to(
            &[BAR_TOP],
            Props::new().rotation(0.0).y(0.0),
            TweenOptions::new(0.3).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[BAR_MIDDLE],
            Props::new().opacity(1.0),
            TweenOptions::new(0.2).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[BAR_BOTTOM],
            Props::new().rotation(0.0).y(0.0),
            TweenOptions::new(0.3).easing(Easing::Power2Out),
            Position::Offset(-0.3),
        )
        .to(
            &[OVERLAY],
            Props::new().opacity(0.0),
            TweenOptions::new(0.3).easing(Easing::Power2In),
            Position::Offset(-0.2),
        )
}
