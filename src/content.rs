// SPDX-License-Identifier: MPL-2.0
//! Static page content: navigation, gallery strip and menu catalogue.
//!
//! Image paths are relative to the assets directory. Display strings that
//! belong to the page chrome are localization keys; product copy is data and
//! stays as written.

use crate::drawer::NavItem;
use crate::marquee::MarqueeItem;

/// Declared width of every gallery image.
pub const GALLERY_IMAGE_WIDTH: f32 = 320.0;

pub const NAV_ITEMS: [NavItem; 8] = [
    NavItem::new("home", "nav-home"),
    NavItem::new("about", "nav-about"),
    NavItem::new("food", "nav-food"),
    NavItem::new("menu", "nav-menu"),
    NavItem::new("gallery", "nav-gallery"),
    NavItem::new("chef", "nav-chef"),
    NavItem::new("testimonials", "nav-testimonials"),
    NavItem::new("reserve", "nav-reserve"),
];

const GALLERY: [(&str, &str); 12] = [
    ("img1.jpg", "Delicious Pizza"),
    ("drink1.jpg", "Refreshing Drink"),
    ("img2.jpg", "Gourmet Pizza"),
    ("drink2.jpg", "Fresh Beverage"),
    ("img3.jpg", "Special Pizza"),
    ("drink3.jpg", "Cold Drink"),
    ("img4.jpg", "Artisan Pizza"),
    ("img5.jpg", "Premium Pizza"),
    ("img6.jpg", "Classic Pizza"),
    ("pexels-muffin-1653877.jpg", "Muffin Delight"),
    ("pexels-grizzlybear-1166120.jpg", "Gourmet Food"),
    ("pexels-brettjordan-825661.jpg", "Food Photography"),
];

pub fn nav_items() -> Vec<NavItem> {
    NAV_ITEMS.to_vec()
}

/// The twelve dishes and drinks of the gallery strip.
pub fn gallery_items() -> Vec<MarqueeItem> {
    GALLERY
        .iter()
        .map(|(image, alt)| MarqueeItem::new(*image, *alt).with_width(GALLERY_IMAGE_WIDTH))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuCategory {
    #[default]
    Pizza,
    Drinks,
    Combos,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [MenuCategory::Pizza, MenuCategory::Drinks, MenuCategory::Combos];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MenuCategory::Pizza => "pizza",
            MenuCategory::Drinks => "drinks",
            MenuCategory::Combos => "combos",
        }
    }

    /// Localization key of the tab label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MenuCategory::Pizza => "menu-category-pizza",
            MenuCategory::Drinks => "menu-category-drinks",
            MenuCategory::Combos => "menu-category-combos",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            MenuCategory::Pizza => "🍕",
            MenuCategory::Drinks => "🧃",
            MenuCategory::Combos => "🍽",
        }
    }

    #[must_use]
    pub fn products(self) -> &'static [Product] {
        match self {
            MenuCategory::Pizza => &PIZZAS,
            MenuCategory::Drinks => &DRINKS,
            MenuCategory::Combos => &COMBOS,
        }
    }
}

/// A menu entry. Prices are in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price: u32,
    pub discounted_price: Option<u32>,
    pub discount_percent: Option<u8>,
    pub image: &'static str,
}

impl Product {
    const fn regular(
        id: u32,
        name: &'static str,
        description: &'static str,
        price: u32,
        image: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            discounted_price: None,
            discount_percent: None,
            image,
        }
    }

    const fn discounted(self, price: u32, percent: u8) -> Self {
        Self {
            discounted_price: Some(price),
            discount_percent: Some(percent),
            ..self
        }
    }

    /// What the customer pays.
    #[must_use]
    pub fn effective_price(&self) -> u32 {
        self.discounted_price.unwrap_or(self.price)
    }
}

const PIZZAS: [Product; 4] = [
    Product::regular(
        1,
        "Margherita Classic",
        "Fresh mozzarella, tomato sauce, and basil on our signature crust",
        1899,
        "img1.jpg",
    )
    .discounted(1599, 15),
    Product::regular(
        2,
        "Pepperoni Supreme",
        "Spicy pepperoni with melted cheese and our special sauce",
        2299,
        "img2.jpg",
    )
    .discounted(1999, 13),
    Product::regular(
        3,
        "Veggie Delight",
        "Fresh vegetables, mushrooms, and olives on whole wheat crust",
        2099,
        "img3.jpg",
    ),
    Product::regular(
        4,
        "BBQ Chicken",
        "Grilled chicken with BBQ sauce, red onions, and cilantro",
        2499,
        "img4.jpg",
    ),
];

const DRINKS: [Product; 4] = [
    Product::regular(
        5,
        "Fresh Orange Juice",
        "Hand-squeezed oranges with a hint of freshness",
        499,
        "drink1.jpg",
    ),
    Product::regular(6, "Berry Smoothie", "Mixed berries with yogurt and honey", 699, "drink2.jpg")
        .discounted(599, 14),
    Product::regular(7, "Iced Coffee", "Cold brew with cream and vanilla", 599, "drink3.jpg"),
    Product::regular(
        8,
        "Fresh Lemonade",
        "Hand-squeezed lemons with a hint of mint",
        399,
        "drink1.jpg",
    ),
];

const COMBOS: [Product; 4] = [
    Product::regular(
        9,
        "Pizza + Drink Combo",
        "Any medium pizza with your choice of beverage",
        2499,
        "pexels-grizzlybear-1166120.jpg",
    )
    .discounted(2199, 12),
    Product::regular(
        10,
        "Family Pack",
        "2 large pizzas, 2 sides, and 4 drinks",
        4999,
        "pexels-brettjordan-825661.jpg",
    )
    .discounted(4499, 10),
    Product::regular(11, "Lunch Special", "Personal pizza with salad and drink", 1499, "img5.jpg"),
    Product::regular(
        12,
        "Dessert Combo",
        "Chocolate muffin with coffee or smoothie",
        1299,
        "pexels-muffin-1653877.jpg",
    )
    .discounted(1099, 15),
];

/// Formats cents as a dollar amount.
#[must_use]
pub fn format_price(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CartLine {
    product: u32,
    quantity: u32,
    unit_price: u32,
}

/// Products added during this session. There is no checkout.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn add(&mut self, product: &Product) {
        let unit_price = product.effective_price();
        match self.lines.iter_mut().find(|line| line.product == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                product: product.id,
                quantity: 1,
                unit_price,
            }),
        }
        tracing::info!(
            product = product.name,
            items = self.count(),
            total = %format_price(self.total()),
            "added to cart"
        );
    }

    /// Number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Total in cents.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.lines
            .iter()
            .map(|line| line.quantity * line.unit_price)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
