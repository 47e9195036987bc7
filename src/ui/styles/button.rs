// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn pill(background: Color, text_color: Color, border: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: border,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Call-to-action button.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => pill(palette::PRIMARY_400, WHITE, palette::PRIMARY_500),
        button::Status::Disabled => pill(palette::GRAY_200, palette::GRAY_400, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            pill(palette::PRIMARY_500, WHITE, palette::PRIMARY_600)
        }
    }
}

/// Category tab, highlighted when it is the active one.
pub fn tab(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            return primary(theme, button::Status::Active);
        }
        let is_light = matches!(theme, Theme::Light);
        let (background, text) = if is_light {
            (WHITE, palette::GRAY_900)
        } else {
            (palette::GRAY_700, WHITE)
        };
        let border = match status {
            button::Status::Hovered => palette::PRIMARY_500,
            _ => palette::GRAY_200,
        };
        pill(background, text, border)
    }
}

/// Drawer entry. The selected entry is tinted; `alpha` follows the
/// entry's animated opacity.
pub fn nav_entry(selected: bool, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        let (background, text_color) = if selected || status == button::Status::Hovered {
            (
                Some(Background::Color(Color {
                    a: 0.15 * alpha,
                    ..palette::PRIMARY_500
                })),
                palette::PRIMARY_500,
            )
        } else {
            (None, base)
        };
        button::Style {
            background,
            text_color: Color {
                a: text_color.a * alpha,
                ..text_color
            },
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless icon button whose content fades with `alpha`.
pub fn ghost(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let text = theme.extended_palette().background.base.text;
        let background = (status == button::Status::Hovered).then(|| {
            Background::Color(Color {
                a: 0.1 * alpha,
                ..text
            })
        });
        button::Style {
            background,
            text_color: Color {
                a: text.a * alpha,
                ..text
            },
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
