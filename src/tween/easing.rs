// SPDX-License-Identifier: MPL-2.0
//! Easing curves used by tweens.
//!
//! Each curve maps normalized progress `t ∈ [0, 1]` to an eased progress.
//! `BackOut` overshoots past 1.0 before settling, every other curve stays
//! inside `[0, 1]`.

/// Default overshoot for [`Easing::BackOut`].
pub const DEFAULT_BACK_OVERSHOOT: f32 = 1.7;

/// Interpolation curve applied to a tween's progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant velocity.
    #[default]
    Linear,
    /// Quadratic ease in and out.
    Power1InOut,
    /// Cubic acceleration from rest.
    Power2In,
    /// Cubic deceleration to rest.
    Power2Out,
    /// Quartic deceleration to rest.
    Power3Out,
    /// Overshoots the target then settles back on it.
    BackOut(f32),
}

impl Easing {
    /// `BackOut` with the default overshoot.
    #[must_use]
    pub const fn back_out() -> Self {
        Easing::BackOut(DEFAULT_BACK_OVERSHOOT)
    }

    /// Applies the curve to `t`. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1InOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::Power2In => t.powi(3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power3Out => 1.0 - (1.0 - t).powi(4),
            Easing::BackOut(overshoot) => {
                let u = t - 1.0;
                u * u * ((overshoot + 1.0) * u + overshoot) + 1.0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const ALL: [Easing; 6] = [
        Easing::Linear,
        Easing::Power1InOut,
        Easing::Power2In,
        Easing::Power2Out,
        Easing::Power3Out,
        Easing::BackOut(DEFAULT_BACK_OVERSHOOT),
    ];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for easing in ALL {
            assert_abs_diff_eq!(easing.apply(0.0), 0.0, epsilon = F32_EPSILON);
            assert_abs_diff_eq!(easing.apply(1.0), 1.0, epsilon = F32_EPSILON);
        }
    }

    #[test]
    fn input_outside_unit_range_is_clamped() {
        assert_abs_diff_eq!(Easing::Power2Out.apply(-3.0), 0.0);
        assert_abs_diff_eq!(Easing::Power2Out.apply(7.0), 1.0);
    }

    #[test]
    fn back_out_overshoots_before_settling() {
        let peak = (1..100)
            .map(|i| Easing::back_out().apply(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn out_curves_lead_linear_and_in_curves_trail_it() {
        assert!(Easing::Power2Out.apply(0.3) > 0.3);
        assert!(Easing::Power3Out.apply(0.3) > Easing::Power2Out.apply(0.3));
        assert!(Easing::Power2In.apply(0.3) < 0.3);
    }

    #[test]
    fn power1_in_out_is_symmetric() {
        let a = Easing::Power1InOut.apply(0.25);
        let b = Easing::Power1InOut.apply(0.75);
        assert_abs_diff_eq!(a + b, 1.0, epsilon = F32_EPSILON);
    }
}
