// SPDX-License-Identifier: MPL-2.0
//! Gallery section: heading, the marquee strip and a link to the menu.

use crate::i18n::fluent::I18n;
use crate::marquee::Marquee;
use crate::media::ImageStore;
use crate::reveal::{GALLERY_SECTION, GALLERY_STRIP, GALLERY_SUBTITLE, GALLERY_TITLE};
use crate::tween::{Engine, Property, Scheduler, Target};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::sections::{self, GALLERY};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::marquee_strip::MarqueeStrip;
use iced::alignment::Horizontal;
use iced::widget::{button, mouse_area, Column, Container, Space, Text};
use iced::{Color, Element, Length};

/// Headroom above the section content so the float can move it up.
const FLOAT_HEADROOM: f32 = 12.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub marquee: &'a Marquee,
    pub engine: &'a Engine,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered,
    PointerLeft,
    ViewMenu,
}

/// Opacity and vertical shift of a revealed element.
fn reveal_state(engine: &Engine, target: Target) -> (f32, f32) {
    (
        engine.value(target, Property::Opacity).clamp(0.0, 1.0),
        engine.value(target, Property::Y).max(0.0),
    )
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

fn shifted<'a>(content: impl Into<Element<'a, Message>>, y: f32) -> Element<'a, Message> {
    Column::new()
        .push(Space::new().height(Length::Fixed(y)))
        .push(content)
        .align_x(Horizontal::Center)
        .into()
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (title_alpha, title_y) = reveal_state(ctx.engine, GALLERY_TITLE);
    let (subtitle_alpha, subtitle_y) = reveal_state(ctx.engine, GALLERY_SUBTITLE);
    let (strip_alpha, strip_y) = reveal_state(ctx.engine, GALLERY_STRIP);
    let float_y = ctx.engine.value(GALLERY_SECTION, Property::Y);

    let title = Text::new(ctx.i18n.tr("gallery-title"))
        .size(typography::TITLE_LG)
        .color(faded(ctx.colors.text_primary, title_alpha));
    let subtitle = Text::new(ctx.i18n.tr("gallery-subtitle"))
        .size(typography::BODY_LG)
        .align_x(Horizontal::Center)
        .color(faded(ctx.colors.text_secondary, subtitle_alpha));

    let strip = MarqueeStrip::new(
        ctx.marquee,
        ctx.engine,
        ctx.images,
        faded(ctx.colors.placeholder, strip_alpha),
        faded(ctx.colors.text_secondary, strip_alpha),
    );
    let strip = mouse_area(strip.into_element())
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerLeft);

    let cta = button(Text::new(ctx.i18n.tr("gallery-cta")).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary)
        .on_press(Message::ViewMenu);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(Space::new().height(Length::Fixed((FLOAT_HEADROOM + float_y).max(0.0))))
        .push(shifted(title, title_y))
        .push(shifted(subtitle, subtitle_y))
        .push(shifted(strip, strip_y))
        .push(cta);

    sections::frame(GALLERY, Container::new(content).width(Length::Fill))
}
