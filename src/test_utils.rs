// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Re-exports the `approx` assertion macros; tween values go through easing
//! curves and accumulate frame steps, so `assert_eq!` is too strict for them.

pub use approx::assert_abs_diff_eq;

/// Tolerance for values that should be exactly equal up to rounding.
pub const F32_EPSILON: f32 = 1e-6;
