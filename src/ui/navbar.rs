// SPDX-License-Identifier: MPL-2.0
//! Top bar and slide-in navigation drawer.
//!
//! The top bar carries the title and the toggle. Below it, the drawer layer
//! draws the dimmed backdrop and the panel sliding in from the trailing
//! edge. Every animated value is read back from the tween engine.

use crate::drawer::{transitions, Drawer, PointerTarget};
use crate::i18n::fluent::I18n;
use crate::scroll::ScrollResolver;
use crate::tween::{Engine, Property, Scheduler};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::TOP_BAR_HEIGHT;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::toggle_icon::ToggleIcon;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, mouse_area, text, Column, Container, Row, Space, Stack, Text};
use iced::{mouse, Color, Element, Length, Point, Size};

/// Contextual data needed to render the top bar and drawer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub drawer: &'a Drawer,
    pub engine: &'a Engine,
}

/// Messages emitted by the top bar and drawer.
#[derive(Debug, Clone)]
pub enum Message {
    Toggle,
    CloseControl,
    Hover(usize),
    Activate(usize),
}

/// Applies a navbar message to the drawer.
pub fn update<S, R>(message: Message, drawer: &mut Drawer, scheduler: &mut S, resolver: &mut R)
where
    S: Scheduler + ?Sized,
    R: ScrollResolver + ?Sized,
{
    match message {
        Message::Toggle => drawer.toggle(scheduler),
        Message::CloseControl => {
            if drawer.listening() {
                drawer.close(scheduler);
            }
        }
        Message::Hover(index) => drawer.hover(index),
        Message::Activate(index) => drawer.activate(index, resolver),
    }
}

/// Classifies a pointer press at `position` (window coordinates).
#[must_use]
pub fn hit_test(position: Point, window: Size, panel_width: f32, panel_x: f32) -> PointerTarget {
    let toggle_left = window.width - spacing::MD - sizing::TOGGLE;
    let toggle_top = (TOP_BAR_HEIGHT - sizing::TOGGLE) / 2.0;
    let on_toggle = position.x >= toggle_left
        && position.x <= toggle_left + sizing::TOGGLE
        && position.y >= toggle_top
        && position.y <= toggle_top + sizing::TOGGLE;
    if on_toggle {
        return PointerTarget::Toggle;
    }

    let panel_left = window.width - visible_width(panel_width, panel_x);
    if position.y >= TOP_BAR_HEIGHT && position.x >= panel_left {
        PointerTarget::Panel
    } else {
        PointerTarget::Outside
    }
}

/// On-screen width of the panel for a slide fraction (`1.0` is hidden).
fn visible_width(panel_width: f32, panel_x: f32) -> f32 {
    panel_width * (1.0 - panel_x).clamp(0.0, 1.0)
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Render the bar above the page.
pub fn top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let toggle = button(
        Container::new(ToggleIcon::from_scheduler(ctx.engine, ctx.colors.text_primary).into_element())
            .center(Length::Fill),
    )
    .width(Length::Fixed(sizing::TOGGLE))
    .height(Length::Fixed(sizing::TOGGLE))
    .padding(0)
    .style(styles::button::ghost(1.0))
    .on_press(Message::Toggle);

    let row = Row::new()
        .height(Length::Fill)
        .padding([0.0, spacing::MD])
        .align_y(Vertical::Center)
        .push(
            Text::new(format!("🍕 {}", ctx.i18n.tr("app-title")))
                .size(typography::TITLE_MD)
                .color(ctx.colors.brand_primary),
        )
        .push(Space::new().width(Length::Fill))
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(TOP_BAR_HEIGHT))
        .style(styles::container::top_bar)
        .into()
}

/// Render the backdrop and panel, or nothing while the drawer is closed.
pub fn drawer_layer<'a>(ctx: &ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.drawer.is_visible() {
        return None;
    }
    let (overlay_alpha, panel_x, close_alpha) = ctx.drawer.chrome(ctx.engine);
    let panel_width = ctx.drawer.settings().panel_width;

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(ctx.colors, overlay_alpha)),
    )
    .interaction(mouse::Interaction::Idle);

    let panel = Container::new(panel_content(ctx, close_alpha))
        .width(Length::Fixed(visible_width(panel_width, panel_x)))
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::drawer_panel);

    let panel_row = Row::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(panel);

    Some(Stack::new().push(backdrop).push(panel_row).into())
}

fn panel_content<'a>(ctx: &ViewContext<'a>, close_alpha: f32) -> Element<'a, Message> {
    let close = button(Text::new("✕").size(typography::TITLE_MD))
        .padding(spacing::XS)
        .style(styles::button::ghost(close_alpha))
        .on_press(Message::CloseControl);

    let header = Row::new()
        .align_y(Vertical::Top)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(
                    Text::new(ctx.i18n.tr("app-title"))
                        .size(typography::TITLE_LG)
                        .color(ctx.colors.brand_primary)
                        .wrapping(text::Wrapping::None),
                )
                .push(
                    Text::new(ctx.i18n.tr("app-tagline"))
                        .size(typography::CAPTION)
                        .color(ctx.colors.text_secondary),
                ),
        )
        .push(Space::new().width(Length::Fill))
        .push(close);

    let selected = ctx.drawer.selected_index();
    let entries = ctx.drawer.items().iter().enumerate().fold(
        Column::new().spacing(spacing::XXS),
        |column, (index, item)| {
            let target = transitions::entry(index);
            let alpha = ctx.engine.value(target, Property::Opacity).clamp(0.0, 1.0);
            let shift = ctx.engine.value(target, Property::X).max(0.0);
            let scale = ctx.engine.value(target, Property::Scale).max(0.0);

            let entry = button(
                Text::new(ctx.i18n.tr(item.label))
                    .size(typography::TITLE_MD * scale)
                    .wrapping(text::Wrapping::None),
            )
            .width(Length::Fill)
            .padding([spacing::SM, spacing::MD])
            .style(styles::button::nav_entry(index == selected, alpha))
            .on_press(Message::Activate(index));

            column.push(
                Row::new()
                    .push(Space::new().width(Length::Fixed(shift)))
                    .push(mouse_area(entry).on_enter(Message::Hover(index))),
            )
        },
    );

    let hint = Text::new(ctx.i18n.tr("drawer-keyboard-hint"))
        .size(typography::CAPTION)
        .color(ctx.colors.text_secondary);

    let contact = ["drawer-contact-phone", "drawer-contact-hours", "drawer-contact-address"]
        .into_iter()
        .fold(Column::new().spacing(spacing::XXS), |column, key| {
            column.push(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(faded(ctx.colors.text_secondary, 0.9)),
            )
        });

    Column::new()
        .width(Length::Fixed(ctx.drawer.settings().panel_width))
        .height(Length::Fill)
        .padding(spacing::LG)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .push(header)
        .push(entries)
        .push(Space::new().height(Length::Fill))
        .push(hint)
        .push(contact)
        .into()
}
