// SPDX-License-Identifier: MPL-2.0
//! Page composition: top bar, scrolling sections and the drawer layer.

use super::Message;
use crate::content::{Cart, MenuCategory};
use crate::drawer::Drawer;
use crate::i18n::fluent::I18n;
use crate::marquee::Marquee;
use crate::media::ImageStore;
use crate::tween::Engine;
use crate::ui::sections::{self, GALLERY, MENU, PAGE_SCROLLABLE_ID};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::{gallery, menu, navbar};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub engine: &'a Engine,
    pub drawer: &'a Drawer,
    pub marquee: &'a Marquee,
    pub images: &'a ImageStore,
    pub category: MenuCategory,
    pub cart: &'a Cart,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let nav_ctx = navbar::ViewContext {
        i18n: ctx.i18n,
        colors: ctx.colors,
        drawer: ctx.drawer,
        engine: ctx.engine,
    };

    let page = crate::content::NAV_ITEMS
        .iter()
        .fold(Column::new().width(Length::Fill), |column, item| {
            column.push(section(&ctx, item.id))
        });

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        });

    let mut body = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable);
    if let Some(layer) = navbar::drawer_layer(&nav_ctx) {
        body = body.push(layer.map(Message::Navbar));
    }

    let root = Column::new()
        .push(navbar::top_bar(&nav_ctx).map(Message::Navbar))
        .push(body);

    Container::new(root)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(ctx.colors))
        .into()
}

fn section<'a>(ctx: &ViewContext<'a>, id: &'static str) -> Element<'a, Message> {
    match id {
        GALLERY => gallery::view(gallery::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            marquee: ctx.marquee,
            engine: ctx.engine,
            images: ctx.images,
        })
        .map(Message::Gallery),
        MENU => menu::view(menu::ViewContext {
            i18n: ctx.i18n,
            colors: ctx.colors,
            category: ctx.category,
            cart: ctx.cart,
            engine: ctx.engine,
            images: ctx.images,
        })
        .map(Message::Menu),
        _ => sections::plain(id, ctx.i18n, ctx.colors),
    }
}
