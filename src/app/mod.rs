// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the page components.
//!
//! The `App` struct owns the tween engine and every component animated by
//! it: the marquee, the drawer, the scroll reveals and the page scroll. One
//! display frame advances the engine first and the components' own
//! countdowns second, so every component sees the values of the frame it is
//! in.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::{self, Cart, MenuCategory};
use crate::drawer::Drawer;
use crate::i18n::fluent::I18n;
use crate::marquee::Marquee;
use crate::media::ImageStore;
use crate::reveal::{CardReveal, ScrollReveal};
use crate::scroll::PageSections;
use crate::tween::{Engine, Handle, Target};
use crate::ui::sections::{self, TOP_BAR_HEIGHT};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Tween target of the page scroll position (`Y`, pixels).
pub const PAGE_SCROLL: Target = Target::new("page.scroll");
/// Tween target of the gallery strip offset (`X`, pixels).
pub const GALLERY_STRIP_OFFSET: Target = Target::new("gallery.marquee");

pub const WINDOW_DEFAULT_WIDTH: f32 = 1200.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 800.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Smooth scroll in progress.
#[derive(Debug, Clone, Copy)]
struct ScrollTween {
    handle: Handle,
    target_y: f32,
}

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    engine: Engine,
    marquee: Marquee,
    drawer: Drawer,
    reveals: [ScrollReveal; 2],
    float: Option<Handle>,
    cards: CardReveal,
    sections: PageSections,
    images: ImageStore,
    category: MenuCategory,
    cart: Cart,
    scroll_y: f32,
    scroll_tween: Option<ScrollTween>,
    last_frame: Option<Instant>,
    window_size: Size,
    cursor: Point,
    mounted: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("marquee", &self.marquee.phase())
            .field("drawer", &self.drawer.state())
            .field("scroll_y", &self.scroll_y)
            .field("mounted", &self.mounted)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires the boot function to be Fn; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads the configuration and mounts the page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone(), flags.assets_dir.clone());
        let (config, warning) = config::load();
        let mut app = Self::with_config(&config, flags.lang);
        if let Some(key) = warning {
            tracing::warn!("{}", app.i18n.tr(&key));
        }
        let task = app.mount();
        (app, task)
    }

    /// Builds the unmounted application from an already loaded config.
    pub fn with_config(config: &Config, lang: Option<String>) -> Self {
        let theme_mode = config.general.theme_mode;
        let assets_dir = paths::resolve_assets_dir(config.content.assets_dir.clone());
        tracing::info!(assets = %assets_dir.display(), "starting");

        let mut sections = sections::page_sections();
        sections.set_viewport_height(WINDOW_DEFAULT_HEIGHT - TOP_BAR_HEIGHT);

        Self {
            i18n: I18n::new(lang, config),
            theme_mode,
            colors: ColorScheme::for_mode(theme_mode),
            engine: Engine::new(),
            marquee: Marquee::new(
                GALLERY_STRIP_OFFSET,
                content::gallery_items(),
                config.marquee_settings(),
            ),
            drawer: Drawer::new(content::nav_items(), config.drawer_settings()),
            reveals: [ScrollReveal::gallery(), ScrollReveal::menu()],
            float: None,
            cards: CardReveal::default(),
            sections,
            images: ImageStore::new(assets_dir.join("images")),
            category: MenuCategory::default(),
            cart: Cart::default(),
            scroll_y: 0.0,
            scroll_tween: None,
            last_frame: None,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            cursor: Point::ORIGIN,
            mounted: false,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_drawer_subscription(self.drawer.listening()),
            subscription::create_frame_subscription(self.needs_frames()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            engine: &self.engine,
            drawer: &self.drawer,
            marquee: &self.marquee,
            images: &self.images,
            category: self.category,
            cart: &self.cart,
        })
    }

    /// Whether any tween or component countdown still needs frames.
    #[must_use]
    pub fn needs_frames(&self) -> bool {
        self.mounted
            && (self.engine.has_active()
                || self.marquee.has_pending_timers()
                || self.drawer.is_animating())
    }

    #[must_use]
    pub fn drawer(&self) -> &Drawer {
        &self.drawer
    }

    #[must_use]
    pub fn marquee(&self) -> &Marquee {
        &self.marquee
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}
