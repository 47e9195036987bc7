// SPDX-License-Identifier: MPL-2.0
//! Canvas widgets driven by tween values.

pub mod marquee_strip;
pub mod toggle_icon;
