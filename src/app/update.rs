// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message, ScrollTween, PAGE_SCROLL};
use crate::error::Error;
use crate::marquee::ImageRequest;
use crate::media::{self, ImageData};
use crate::reveal;
use crate::scroll::ScrollResolver;
use crate::tween::{Easing, Property, Props, Scheduler, TweenOptions};
use crate::ui::sections::{MENU, MENU_GRID_OFFSET, PAGE_SCROLLABLE_ID, TOP_BAR_HEIGHT};
use crate::ui::{gallery, menu, navbar};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::time::{Duration, Instant};

/// Longest step fed to the engine; frames after a stall do not skip ahead.
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);
/// Duration of a programmatic page scroll, in seconds.
const SCROLL_DURATION: f32 = 0.8;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Frame(now) => handle_frame(app, now),
        Message::Navbar(message) => {
            navbar::update(
                message,
                &mut app.drawer,
                &mut app.engine,
                &mut app.sections,
            );
            app.start_pending_scroll()
        }
        Message::DrawerKey(key) => {
            app.drawer.key(key, &mut app.engine, &mut app.sections);
            app.start_pending_scroll()
        }
        Message::PointerMoved(position) => {
            app.cursor = position;
            Task::none()
        }
        Message::PointerPressed => {
            let (_, panel_x, _) = app.drawer.chrome(&app.engine);
            let target = navbar::hit_test(
                app.cursor,
                app.window_size,
                app.drawer.settings().panel_width,
                panel_x,
            );
            app.drawer.pointer_down(target, &mut app.engine);
            Task::none()
        }
        Message::Gallery(message) => match message {
            gallery::Message::PointerEntered => {
                app.marquee.pointer_entered(&mut app.engine);
                Task::none()
            }
            gallery::Message::PointerLeft => {
                app.marquee.pointer_left(&mut app.engine);
                Task::none()
            }
            gallery::Message::ViewMenu => {
                app.sections.scroll_to(MENU);
                app.start_pending_scroll()
            }
        },
        Message::Menu(message) => {
            if let menu::Event::CategoryChanged(count) =
                menu::update(message, &mut app.category, &mut app.cart)
            {
                app.cards.set_count(count, &mut app.engine);
            }
            Task::none()
        }
        Message::Scrolled {
            offset_y,
            viewport_height,
        } => {
            app.scroll_y = offset_y;
            app.sections.set_viewport_height(viewport_height);
            app.refresh_reveals();
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            app.sections
                .set_viewport_height((size.height - TOP_BAR_HEIGHT).max(0.0));
            app.refresh_reveals();
            Task::none()
        }
        Message::MarqueeImageLoaded { request, result } => {
            handle_marquee_image(app, request, result)
        }
        Message::MenuImageLoaded { name, result } => {
            match result {
                Ok(data) => app.images.insert(name, data),
                Err(error) => tracing::warn!(%name, %error, "product image unavailable"),
            }
            Task::none()
        }
        Message::WindowCloseRequested(_id) => {
            app.teardown();
            iced::exit()
        }
    }
}

fn handle_frame(app: &mut App, now: Instant) -> Task<Message> {
    let dt = app
        .last_frame
        .map_or(Duration::ZERO, |last| now.saturating_duration_since(last))
        .min(MAX_FRAME_STEP);
    app.last_frame = Some(now);

    let finished = app.engine.advance(dt);
    let requests = app.marquee.tick(dt, &mut app.engine);
    app.drawer.tick(dt, &mut app.engine);

    let scroll_task = app.follow_scroll_tween(&finished);

    if !app.needs_frames() {
        app.last_frame = None;
    }

    let image_tasks = app.image_tasks(requests);
    Task::batch([scroll_task, image_tasks])
}

fn handle_marquee_image(
    app: &mut App,
    request: ImageRequest,
    result: Result<ImageData, Error>,
) -> Task<Message> {
    match result {
        Ok(data) => {
            let (width, height) = (data.width, data.height);
            app.images.insert(request.image.clone(), data);
            app.marquee.image_loaded(
                request.generation,
                request.index,
                width,
                height,
                &mut app.engine,
            );
        }
        Err(error) => {
            tracing::warn!(image = %request.image, %error, "gallery image failed");
            app.marquee
                .image_failed(request.generation, request.index, &mut app.engine);
        }
    }
    Task::none()
}

impl App {
    /// Puts every component into the page and starts the ambient tweens.
    pub(super) fn mount(&mut self) -> Task<Message> {
        self.drawer.mount(&mut self.engine);
        for section in &mut self.reveals {
            section.mount(&mut self.engine);
        }
        self.float = Some(reveal::start_float(&mut self.engine));
        self.cards
            .mount(self.category.products().len(), &mut self.engine);
        let requests = self.marquee.mount();
        self.mounted = true;
        self.refresh_reveals();

        let dir = self.images.assets_dir().to_path_buf();
        let mut tasks: Vec<Task<Message>> = menu::product_images()
            .into_iter()
            .map(|name| {
                let name = name.to_string();
                Task::perform(media::load(dir.clone(), name.clone()), move |result| {
                    Message::MenuImageLoaded { name, result }
                })
            })
            .collect();
        tasks.push(self.image_tasks(requests));
        Task::batch(tasks)
    }

    /// Stops every tween and countdown the page started.
    pub(super) fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.marquee.unmount(&mut self.engine);
        self.drawer.unmount(&mut self.engine);
        for section in &mut self.reveals {
            section.unmount(&mut self.engine);
        }
        if let Some(float) = self.float.take() {
            self.engine.cancel(float);
        }
        self.cards.unmount(&mut self.engine);
        if let Some(scroll) = self.scroll_tween.take() {
            self.engine.cancel(scroll.handle);
        }
        self.mounted = false;
        tracing::info!("page unmounted");
    }

    /// Turns marquee image requests into decode tasks, answering from the
    /// store when the image is already decoded.
    fn image_tasks(&mut self, requests: Vec<ImageRequest>) -> Task<Message> {
        let tasks = requests.into_iter().map(|request| {
            if request.reload {
                self.images.evict(&request.image);
            } else if let Some(data) = self.images.get(&request.image) {
                return Task::done(Message::MarqueeImageLoaded {
                    result: Ok(data.clone()),
                    request,
                });
            }
            let dir = self.images.assets_dir().to_path_buf();
            let load = media::load(dir, request.image.clone());
            Task::perform(load, move |result| Message::MarqueeImageLoaded { request, result })
        });
        Task::batch(tasks.collect::<Vec<_>>())
    }

    /// Starts a smooth scroll towards the offset a resolver queued, if any.
    fn start_pending_scroll(&mut self) -> Task<Message> {
        let Some(target_y) = self.sections.take_pending() else {
            return Task::none();
        };
        let target_y = target_y.clamp(0.0, self.sections.max_scroll());

        if let Some(previous) = self.scroll_tween.take() {
            self.engine.cancel(previous.handle);
        }
        self.engine
            .set_immediate(PAGE_SCROLL, &Props::new().y(self.scroll_y));
        let handle = self.engine.animate(
            &[PAGE_SCROLL],
            &Props::new().y(target_y),
            TweenOptions::new(SCROLL_DURATION).easing(Easing::Power1InOut),
        );
        tracing::debug!(from = self.scroll_y, to = target_y, "page scroll");
        self.scroll_tween = Some(ScrollTween { handle, target_y });
        Task::none()
    }

    /// Moves the page scrollable along with the scroll tween.
    fn follow_scroll_tween(&mut self, finished: &[crate::tween::Handle]) -> Task<Message> {
        let Some(scroll) = self.scroll_tween else {
            return Task::none();
        };
        let y = if finished.contains(&scroll.handle) {
            self.scroll_tween = None;
            scroll.target_y
        } else {
            self.engine.value(PAGE_SCROLL, Property::Y)
        };
        self.scroll_y = y;
        self.refresh_reveals();

        let max = self.sections.max_scroll();
        let relative = if max > 0.0 { (y / max).clamp(0.0, 1.0) } else { 0.0 };
        operation::snap_to(
            Id::new(PAGE_SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: relative },
        )
    }

    /// Re-evaluates every scroll reveal against the current scroll offset.
    fn refresh_reveals(&mut self) {
        if !self.mounted {
            return;
        }
        let viewport_height = self.sections.viewport_height();
        for section in &mut self.reveals {
            if let Some(top) = self.sections.viewport_top(section.section(), self.scroll_y) {
                section.update(top, viewport_height, &mut self.engine);
            }
        }
        if let Some(top) = self.sections.viewport_top(MENU, self.scroll_y) {
            self.cards
                .update(top + MENU_GRID_OFFSET, viewport_height, &mut self.engine);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::drawer::DrawerState;
    use crate::marquee::Phase;
    use crate::reveal::menu_card;
    use crate::app::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
    use crate::ui::design_tokens::{sizing, spacing};
    use iced::Point;

    fn app() -> App {
        let mut app = App::with_config(&Config::default(), Some("en-US".into()));
        let _ = app.mount();
        app
    }

    fn frames(app: &mut App, count: u32, step: Duration) {
        let mut now = Instant::now();
        for _ in 0..=count {
            let _ = update(app, Message::Frame(now));
            now += step;
        }
    }

    #[test]
    fn mount_starts_float_and_keeps_cards_hidden() {
        let app = app();
        assert!(app.is_mounted());
        assert!(app.needs_frames());
        assert!(app.engine().active_count() >= 1);
        assert!(!app.cards.is_revealed());
        assert!(app.engine().value(menu_card(0), Property::Opacity) < 0.01);
        assert_eq!(app.marquee().phase(), Phase::Loading);
    }

    #[test]
    fn failed_images_still_start_the_loop() {
        let mut app = app();
        let generation = app.marquee().generation();
        let count = app.marquee().items().len();
        for index in 0..count {
            let request = ImageRequest {
                generation,
                index,
                image: format!("missing-{index}.jpg"),
                reload: false,
            };
            let _ = update(
                &mut app,
                Message::MarqueeImageLoaded {
                    request,
                    result: Err(Error::Io("not found".into())),
                },
            );
        }
        assert!(matches!(
            app.marquee().phase(),
            Phase::Running | Phase::Measuring { .. }
        ));
    }

    #[test]
    fn toggle_message_opens_the_drawer_and_frames_settle_it() {
        let mut app = app();
        let _ = update(&mut app, Message::Navbar(navbar::Message::Toggle));
        assert_eq!(app.drawer().state(), DrawerState::Opening);

        frames(&mut app, 60, Duration::from_millis(50));
        assert_eq!(app.drawer().state(), DrawerState::Open);
    }

    fn toggle_center() -> Point {
        Point::new(
            WINDOW_DEFAULT_WIDTH - spacing::MD - sizing::TOGGLE / 2.0,
            TOP_BAR_HEIGHT / 2.0,
        )
    }

    fn open_drawer(app: &mut App) {
        let _ = update(app, Message::Navbar(navbar::Message::Toggle));
        frames(app, 60, Duration::from_millis(50));
        assert_eq!(app.drawer().state(), DrawerState::Open);
    }

    #[test]
    fn pressing_the_toggle_again_closes_the_drawer() {
        let mut app = app();
        // The cursor reached the toggle before the drawer started listening.
        let _ = update(&mut app, Message::PointerMoved(toggle_center()));
        open_drawer(&mut app);

        let _ = update(&mut app, Message::PointerPressed);
        assert_eq!(app.drawer().state(), DrawerState::Open);
        let _ = update(&mut app, Message::Navbar(navbar::Message::Toggle));
        assert_eq!(app.drawer().state(), DrawerState::Closing);

        frames(&mut app, 80, Duration::from_millis(50));
        assert_eq!(app.drawer().state(), DrawerState::Closed);
    }

    #[test]
    fn pointer_presses_are_hit_tested_against_the_panel() {
        let mut app = app();
        open_drawer(&mut app);

        let inside = Point::new(WINDOW_DEFAULT_WIDTH - 40.0, WINDOW_DEFAULT_HEIGHT / 2.0);
        let _ = update(&mut app, Message::PointerMoved(inside));
        let _ = update(&mut app, Message::PointerPressed);
        assert_eq!(app.drawer().state(), DrawerState::Open);

        let outside = Point::new(40.0, WINDOW_DEFAULT_HEIGHT / 2.0);
        let _ = update(&mut app, Message::PointerMoved(outside));
        let _ = update(&mut app, Message::PointerPressed);
        assert_eq!(app.drawer().state(), DrawerState::Closing);
    }

    #[test]
    fn view_menu_scrolls_to_the_menu_section() {
        let mut app = app();
        let target = app.sections.offset_of(MENU).unwrap_or_default();
        let _ = update(&mut app, Message::Gallery(gallery::Message::ViewMenu));
        assert!(app.scroll_tween.is_some());

        frames(&mut app, 30, Duration::from_millis(50));
        assert!(app.scroll_tween.is_none());
        let expected = target.min(app.sections.max_scroll());
        assert!((app.scroll_y() - expected).abs() < 0.5);
    }

    fn scroll_to(app: &mut App, offset_y: f32) {
        let viewport_height = app.sections.viewport_height();
        let _ = update(
            app,
            Message::Scrolled {
                offset_y,
                viewport_height,
            },
        );
    }

    #[test]
    fn cards_follow_the_grid_in_and_out_of_view() {
        let mut app = app();
        let menu_top = app.sections.offset_of(MENU).unwrap_or_default();

        scroll_to(&mut app, menu_top);
        assert!(app.cards.is_revealed());
        frames(&mut app, 20, Duration::from_millis(50));
        assert!(app.engine().value(menu_card(0), Property::Opacity) > 0.99);

        scroll_to(&mut app, 0.0);
        assert!(!app.cards.is_revealed());
        frames(&mut app, 20, Duration::from_millis(50));
        assert!(app.engine().value(menu_card(0), Property::Opacity) < 0.01);
    }

    #[test]
    fn category_change_replays_cards_and_fills_the_cart() {
        let mut app = app();
        let menu_top = app.sections.offset_of(MENU).unwrap_or_default();
        scroll_to(&mut app, menu_top);
        frames(&mut app, 20, Duration::from_millis(50));
        let before = app.cards.handles().to_vec();

        let _ = update(
            &mut app,
            Message::Menu(menu::Message::SelectCategory(
                crate::content::MenuCategory::Drinks,
            )),
        );
        assert_ne!(app.cards.handles(), before.as_slice());
        assert!(app.cards.is_animating(app.engine()));

        let drink = crate::content::MenuCategory::Drinks.products()[0].id;
        let _ = update(&mut app, Message::Menu(menu::Message::AddToCart(drink)));
        assert_eq!(app.cart().count(), 1);
    }

    #[test]
    fn teardown_stops_everything() {
        let mut app = app();
        let _ = update(&mut app, Message::Navbar(navbar::Message::Toggle));
        app.teardown();
        assert!(!app.is_mounted());
        assert!(!app.needs_frames());
        assert!(!app.engine().has_active());
        assert_eq!(app.marquee().phase(), Phase::Unmounted);
    }
}
