// SPDX-License-Identifier: MPL-2.0
//! Menu section: category tabs, product cards and the cart summary.

use crate::content::{format_price, Cart, MenuCategory, Product};
use crate::i18n::fluent::I18n;
use crate::media::ImageStore;
use crate::reveal::{menu_card, MENU_TABS, MENU_TITLE};
use crate::tween::{Engine, Property, Scheduler, Target};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::sections::{self, MENU};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, image, Column, Container, Row, Space, Text};
use iced::{Color, ContentFit, Element, Length};

const CARDS_PER_ROW: usize = 2;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub category: MenuCategory,
    pub cart: &'a Cart,
    pub engine: &'a Engine,
    pub images: &'a ImageStore,
}

#[derive(Debug, Clone)]
pub enum Message {
    SelectCategory(MenuCategory),
    AddToCart(u32),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// The visible cards changed and their entrance should replay.
    CategoryChanged(usize),
}

/// Applies a menu message to the section state.
pub fn update(message: Message, category: &mut MenuCategory, cart: &mut Cart) -> Event {
    match message {
        Message::SelectCategory(selected) => {
            if *category == selected {
                return Event::None;
            }
            *category = selected;
            tracing::debug!(category = selected.id(), "menu category selected");
            Event::CategoryChanged(selected.products().len())
        }
        Message::AddToCart(id) => {
            match category.products().iter().find(|product| product.id == id) {
                Some(product) => cart.add(product),
                None => tracing::warn!(id, "unknown product"),
            }
            Event::None
        }
    }
}

/// Image names of every product, without duplicates.
#[must_use]
pub fn product_images() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = MenuCategory::ALL
        .iter()
        .flat_map(|category| category.products().iter().map(|product| product.image))
        .collect();
    names.sort_unstable();
    names.dedup();
    names
}

fn alpha_of(engine: &Engine, target: Target) -> f32 {
    engine.value(target, Property::Opacity).clamp(0.0, 1.0)
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let title_alpha = alpha_of(ctx.engine, MENU_TITLE);
    let tabs_alpha = alpha_of(ctx.engine, MENU_TABS);

    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("menu-title"))
                .size(typography::TITLE_LG)
                .color(faded(ctx.colors.text_primary, title_alpha)),
        )
        .push(
            Text::new(ctx.i18n.tr("menu-subtitle"))
                .size(typography::BODY_LG)
                .color(faded(ctx.colors.text_secondary, title_alpha)),
        );

    let tabs = MenuCategory::ALL.iter().fold(
        Row::new().spacing(spacing::SM),
        |row, &category| {
            let label = format!("{} {}", category.icon(), ctx.i18n.tr(category.label()));
            row.push(
                button(Text::new(label).color(faded(ctx.colors.text_primary, tabs_alpha)))
                    .padding([spacing::XS, spacing::LG])
                    .style(styles::button::tab(category == ctx.category))
                    .on_press(Message::SelectCategory(category)),
            )
        },
    );

    let cart_line = if ctx.cart.is_empty() {
        ctx.i18n.tr("cart-empty")
    } else {
        ctx.i18n.tr_with_args(
            "cart-summary",
            &[
                ("count", ctx.cart.count().into()),
                ("total", format_price(ctx.cart.total()).into()),
            ],
        )
    };

    let mut grid = Column::new().spacing(spacing::LG).align_x(Horizontal::Center);
    for (row_index, chunk) in ctx.category.products().chunks(CARDS_PER_ROW).enumerate() {
        let row = chunk.iter().enumerate().fold(
            Row::new().spacing(spacing::LG),
            |row, (column, product)| {
                row.push(card(&ctx, product, row_index * CARDS_PER_ROW + column))
            },
        );
        grid = grid.push(row);
    }

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(header)
        .push(tabs)
        .push(
            Text::new(cart_line)
                .size(typography::CAPTION)
                .color(ctx.colors.text_secondary),
        )
        .push(grid);

    sections::frame(MENU, content)
}

fn card<'a>(ctx: &ViewContext<'a>, product: &'a Product, slot: usize) -> Element<'a, Message> {
    let target = menu_card(slot);
    let alpha = alpha_of(ctx.engine, target);
    let shift = ctx.engine.value(target, Property::Y).max(0.0);

    let picture: Element<'a, Message> = match ctx.images.get(product.image) {
        Some(data) => image(data.handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .opacity(alpha)
            .into(),
        None => Container::new(Text::new(product.name).color(ctx.colors.text_secondary))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::CARD_IMAGE_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
    };

    let mut price_row = Row::new().spacing(spacing::XS).align_y(Vertical::Center).push(
        Text::new(format_price(product.effective_price()))
            .size(typography::TITLE_SM)
            .color(faded(ctx.colors.brand_primary, alpha)),
    );
    if product.discounted_price.is_some() {
        price_row = price_row.push(
            Text::new(format_price(product.price))
                .size(typography::CAPTION)
                .color(faded(ctx.colors.text_secondary, alpha * 0.6)),
        );
    }
    if let Some(percent) = product.discount_percent {
        price_row = price_row.push(Space::new().width(Length::Fill)).push(
            Container::new(
                Text::new(
                    ctx.i18n
                        .tr_with_args("menu-discount-badge", &[("percent", percent.into())]),
                )
                .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::XS])
            .style(styles::container::badge),
        );
    }

    let body = Column::new()
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .push(
            Text::new(product.name)
                .size(typography::TITLE_SM)
                .color(faded(ctx.colors.text_primary, alpha)),
        )
        .push(
            Text::new(product.description)
                .size(typography::BODY)
                .color(faded(ctx.colors.text_secondary, alpha)),
        )
        .push(price_row)
        .push(
            button(Text::new(ctx.i18n.tr("menu-add-to-cart")).size(typography::BODY))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary)
                .on_press(Message::AddToCart(product.id)),
        );

    let card = Container::new(Column::new().push(picture).push(body))
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .clip(true)
        .style(styles::container::card(ctx.colors));

    Column::new()
        .push(Space::new().height(Length::Fixed(shift)))
        .push(card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn switching_category_requests_card_replay() {
        let mut category = MenuCategory::Pizza;
        let mut cart = Cart::default();

        let event = update(
            Message::SelectCategory(MenuCategory::Drinks),
            &mut category,
            &mut cart,
        );
        assert!(matches!(event, Event::CategoryChanged(4)));
        assert_eq!(category, MenuCategory::Drinks);

        let again = update(
            Message::SelectCategory(MenuCategory::Drinks),
            &mut category,
            &mut cart,
        );
        assert!(matches!(again, Event::None));
    }

    #[test]
    fn add_to_cart_uses_the_visible_category() {
        let mut category = MenuCategory::Combos;
        let mut cart = Cart::default();

        update(Message::AddToCart(10), &mut category, &mut cart);
        update(Message::AddToCart(1), &mut category, &mut cart);

        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total(), 4499);
    }

    #[test]
    fn product_images_are_unique() {
        let names = product_images();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
        assert!(names.contains(&"img1.jpg"));
    }
}
