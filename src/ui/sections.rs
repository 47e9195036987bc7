// SPDX-License-Identifier: MPL-2.0
//! Page layout: section order, fixed section heights and the text-only
//! sections.
//!
//! Every section is laid out at a fixed height so scroll offsets can be
//! computed without measuring the rendered page.

use crate::content::NAV_ITEMS;
use crate::i18n::fluent::I18n;
use crate::scroll::PageSections;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};

pub const HOME: &str = "home";
pub const MENU: &str = "menu";
pub const GALLERY: &str = "gallery";

/// Height of the bar above the scrolling page.
pub const TOP_BAR_HEIGHT: f32 = 64.0;

pub const PLAIN_SECTION_HEIGHT: f32 = 360.0;
pub const HOME_SECTION_HEIGHT: f32 = 560.0;
pub const MENU_SECTION_HEIGHT: f32 = 1240.0;
pub const GALLERY_SECTION_HEIGHT: f32 = 820.0;

/// Distance from the menu section's top edge to its card grid: padding,
/// heading, tabs and the cart line.
pub const MENU_GRID_OFFSET: f32 = 240.0;

/// Identifier of the scrollable holding the page.
pub const PAGE_SCROLLABLE_ID: &str = "page";

#[must_use]
pub fn height_of(id: &str) -> f32 {
    match id {
        HOME => HOME_SECTION_HEIGHT,
        MENU => MENU_SECTION_HEIGHT,
        GALLERY => GALLERY_SECTION_HEIGHT,
        _ => PLAIN_SECTION_HEIGHT,
    }
}

/// Sections in navigation order.
#[must_use]
pub fn page_sections() -> PageSections {
    PageSections::new(NAV_ITEMS.iter().map(|item| (item.id, height_of(item.id))))
}

/// Wraps section content at its fixed height.
pub fn frame<'a, Message: 'a>(id: &str, content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height_of(id)))
        .padding(spacing::XL)
        .into()
}

/// A heading and one paragraph, centered.
pub fn plain<'a, Message: 'a>(id: &str, i18n: &I18n, colors: &ColorScheme) -> Element<'a, Message> {
    let title_size = if id == HOME {
        typography::DISPLAY
    } else {
        typography::TITLE_LG
    };
    let column = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .max_width(720.0)
        .push(
            Text::new(i18n.tr(&format!("section-{id}-title")))
                .size(title_size)
                .color(colors.text_primary),
        )
        .push(
            Text::new(i18n.tr(&format!("section-{id}-body")))
                .size(typography::BODY_LG)
                .color(colors.text_secondary)
                .align_x(Horizontal::Center),
        );

    frame(
        id,
        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
}
