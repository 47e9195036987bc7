// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Bar above the page holding the title and the drawer toggle.
pub fn top_bar(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dimmed backdrop behind the drawer at the animated `alpha`.
pub fn backdrop(colors: &ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    let color = colors.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        })),
        ..Default::default()
    }
}

/// The drawer panel surface.
pub fn drawer_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        text_color: Some(palette.background.base.text),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Product card.
pub fn card(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Discount badge on a product card.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
