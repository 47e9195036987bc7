// SPDX-License-Identifier: MPL-2.0
//! Drawer state machine.
//!
//! ```text
//! Closed --open--> Opening --timeline done--> Open
//!   ^                                          |
//!   +--timeline done-- Closing <--close--------+
//! ```
//!
//! Each transition is a single timeline; the state only advances when the
//! whole timeline has completed. Requests that arrive mid-transition follow
//! fixed rules: toggling while opening is ignored, an open request while
//! closing is queued until the close completes, and every close request
//! while opening is ignored.

use super::transitions::{self, CLOSE_CONTROL, OVERLAY, PANEL};
use super::{DrawerKey, DrawerSettings, NavItem, PointerTarget};
use crate::scroll::ScrollResolver;
use crate::tween::{Scheduler, TimelineHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// Slide-in navigation panel.
#[derive(Debug)]
pub struct Drawer {
    items: Vec<NavItem>,
    settings: DrawerSettings,
    state: DrawerState,
    selected: usize,
    transition: Option<TimelineHandle>,
    queued_open: bool,
    /// Countdown to the close that follows a navigation.
    settle: Option<Duration>,
    mounted: bool,
}

impl Drawer {
    pub fn new(items: Vec<NavItem>, settings: DrawerSettings) -> Self {
        Self {
            items,
            settings,
            state: DrawerState::Closed,
            selected: 0,
            transition: None,
            queued_open: false,
            settle: None,
            mounted: false,
        }
    }

    /// Writes the hidden initial look: panel off-screen, overlay and close
    /// control invisible.
    pub fn mount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        for (target, props) in transitions::initial_props() {
            scheduler.set_immediate(target, &props);
        }
        let hidden = transitions::hidden_entry();
        for target in transitions::entries(self.items.len()) {
            scheduler.set_immediate(target, &hidden);
        }
        self.state = DrawerState::Closed;
        self.mounted = true;
        tracing::debug!(items = self.items.len(), "drawer mounted");
    }

    /// The toggle control: opens when closed, closes when open.
    pub fn toggle<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        match self.state {
            DrawerState::Closed | DrawerState::Closing => self.open(scheduler),
            DrawerState::Open => self.close(scheduler),
            DrawerState::Opening => {
                tracing::trace!("toggle ignored while opening");
            }
        }
    }

    pub fn open<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if !self.mounted {
            return;
        }
        match self.state {
            DrawerState::Closed => self.begin(DrawerState::Opening, scheduler),
            DrawerState::Closing => {
                tracing::debug!("open queued until the drawer has closed");
                self.queued_open = true;
            }
            DrawerState::Opening | DrawerState::Open => {}
        }
    }

    /// Closes the drawer. Only effective once it is fully open.
    pub fn close<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.mounted && self.state == DrawerState::Open {
            self.begin(DrawerState::Closing, scheduler);
        }
    }

    /// Keyboard input. Ignored unless the drawer is listening.
    pub fn key<S, R>(&mut self, key: DrawerKey, scheduler: &mut S, resolver: &mut R)
    where
        S: Scheduler + ?Sized,
        R: ScrollResolver + ?Sized,
    {
        if !self.listening() {
            return;
        }
        match key {
            DrawerKey::Escape => self.close(scheduler),
            DrawerKey::ArrowLeft => self.select_previous(),
            DrawerKey::ArrowRight => self.select_next(),
            DrawerKey::Enter => self.activate(self.selected, resolver),
        }
    }

    /// Pointer press anywhere in the window.
    pub fn pointer_down<S: Scheduler + ?Sized>(&mut self, target: PointerTarget, scheduler: &mut S) {
        if !self.listening() {
            return;
        }
        if target == PointerTarget::Outside {
            self.close(scheduler);
        }
    }

    /// Pointer over an entry: selects it without navigating.
    pub fn hover(&mut self, index: usize) {
        if self.state != DrawerState::Closed && index < self.items.len() {
            self.selected = index;
        }
    }

    /// Navigates to the entry at `index` and schedules the close. The close
    /// happens whether or not the section exists.
    pub fn activate<R: ScrollResolver + ?Sized>(&mut self, index: usize, resolver: &mut R) {
        if !self.listening() {
            return;
        }
        let Some(item) = self.items.get(index) else {
            return;
        };
        self.selected = index;
        if !resolver.scroll_to(item.id) {
            tracing::debug!(id = item.id, "navigation target missing, closing anyway");
        }
        self.settle = Some(self.settings.settle_delay);
    }

    /// Completes finished transitions and runs the settle countdown. Call
    /// after the scheduler has advanced to the current frame.
    pub fn tick<S: Scheduler + ?Sized>(&mut self, dt: Duration, scheduler: &mut S) {
        if !self.mounted {
            return;
        }

        if let Some(transition) = &self.transition {
            if transition.is_finished(&*scheduler) {
                self.transition = None;
                self.complete(scheduler);
            }
        }

        if let Some(remaining) = self.settle {
            let remaining = remaining.saturating_sub(dt);
            match self.state {
                DrawerState::Open if remaining.is_zero() => {
                    self.settle = None;
                    self.close(scheduler);
                }
                DrawerState::Open | DrawerState::Opening => self.settle = Some(remaining),
                DrawerState::Closing | DrawerState::Closed => self.settle = None,
            }
        }
    }

    /// Cancels any transition and drops every pending countdown and request.
    pub fn unmount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(transition) = self.transition.take() {
            transition.cancel(scheduler);
        }
        self.settle = None;
        self.queued_open = false;
        self.state = DrawerState::Closed;
        self.mounted = false;
        tracing::debug!("drawer unmounted");
    }

    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Whether global keyboard and pointer input should reach the drawer.
    #[must_use]
    pub fn listening(&self) -> bool {
        self.mounted && matches!(self.state, DrawerState::Opening | DrawerState::Open)
    }

    /// Whether any part of the panel or overlay may be on screen.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.state != DrawerState::Closed
    }

    /// Whether the drawer still needs frames.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some() || self.settle.is_some()
    }

    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    #[must_use]
    pub fn settings(&self) -> &DrawerSettings {
        &self.settings
    }

    /// Current overlay opacity, panel offset fraction and close control
    /// opacity.
    pub fn chrome<S: Scheduler + ?Sized>(&self, scheduler: &S) -> (f32, f32, f32) {
        use crate::tween::Property;
        (
            scheduler.value(OVERLAY, Property::Opacity),
            scheduler.value(PANEL, Property::X),
            scheduler.value(CLOSE_CONTROL, Property::Opacity),
        )
    }

    fn begin<S: Scheduler + ?Sized>(&mut self, state: DrawerState, scheduler: &mut S) {
        let count = self.items.len();
        let timeline = match state {
            DrawerState::Opening => transitions::open_timeline(count),
            _ => transitions::close_timeline(count),
        };
        tracing::debug!(?state, duration = timeline.duration(), "drawer transition");
        self.transition = Some(timeline.play(scheduler));
        self.state = state;
    }

    fn complete<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        match self.state {
            DrawerState::Opening => self.state = DrawerState::Open,
            DrawerState::Closing => {
                self.state = DrawerState::Closed;
                if std::mem::take(&mut self.queued_open) {
                    self.open(scheduler);
                }
            }
            DrawerState::Open | DrawerState::Closed => {}
        }
        tracing::debug!(state = ?self.state, "drawer transition complete");
    }

    fn select_previous(&mut self) {
        let count = self.items.len();
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
        }
    }

    fn select_next(&mut self) {
        let count = self.items.len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tween::{Call, Engine, Property, Recorder};

    const FRAME: Duration = Duration::from_millis(16);

    #[derive(Default)]
    struct Resolver {
        known: Vec<&'static str>,
        requests: Vec<String>,
    }

    impl ScrollResolver for Resolver {
        fn scroll_to(&mut self, id: &str) -> bool {
            self.requests.push(id.to_string());
            self.known.contains(&id)
        }
    }

    fn items() -> Vec<NavItem> {
        ["home", "about", "food", "menu", "gallery", "chef", "testimonials", "reserve"]
            .into_iter()
            .map(|id| NavItem::new(id, id))
            .collect()
    }

    fn mounted() -> (Drawer, Recorder<Engine>) {
        let mut scheduler = Recorder::new(Engine::new());
        let mut drawer = Drawer::new(items(), DrawerSettings::default());
        drawer.mount(&mut scheduler);
        scheduler.clear();
        (drawer, scheduler)
    }

    /// Advances frames until the drawer settles or `limit` elapses.
    fn run_for(drawer: &mut Drawer, scheduler: &mut Recorder<Engine>, limit: Duration) {
        let mut elapsed = Duration::ZERO;
        while elapsed < limit {
            scheduler.advance(FRAME);
            drawer.tick(FRAME, scheduler);
            elapsed += FRAME;
        }
    }

    fn open_fully(drawer: &mut Drawer, scheduler: &mut Recorder<Engine>) {
        drawer.open(scheduler);
        run_for(drawer, scheduler, Duration::from_secs(2));
        assert_eq!(drawer.state(), DrawerState::Open);
    }

    #[test]
    fn mount_hides_panel_and_overlay() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut drawer = Drawer::new(items(), DrawerSettings::default());
        drawer.mount(&mut scheduler);

        assert_eq!(drawer.chrome(&scheduler), (0.0, 1.0, 0.0));
        assert_eq!(scheduler.value(CLOSE_CONTROL, Property::Scale), 0.8);
        assert!(!drawer.listening());
    }

    #[test]
    fn open_becomes_open_only_after_timeline() {
        let (mut drawer, mut scheduler) = mounted();
        drawer.open(&mut scheduler);
        assert_eq!(drawer.state(), DrawerState::Opening);
        assert!(drawer.listening());

        run_for(&mut drawer, &mut scheduler, Duration::from_millis(1000));
        assert_eq!(drawer.state(), DrawerState::Opening);

        run_for(&mut drawer, &mut scheduler, Duration::from_millis(700));
        assert_eq!(drawer.state(), DrawerState::Open);
        let (overlay, panel, close) = drawer.chrome(&scheduler);
        assert!((overlay - 1.0).abs() < 1e-4);
        assert!(panel.abs() < 1e-4);
        assert!((close - 1.0).abs() < 1e-4);
    }

    #[test]
    fn closed_accepts_only_open() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();

        drawer.close(&mut scheduler);
        drawer.key(DrawerKey::Escape, &mut scheduler, &mut resolver);
        drawer.pointer_down(PointerTarget::Outside, &mut scheduler);
        drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
        drawer.hover(3);

        assert_eq!(drawer.state(), DrawerState::Closed);
        assert_eq!(drawer.selected_index(), 0);
        assert!(scheduler.calls().is_empty());
        assert!(resolver.requests.is_empty());
    }

    #[test]
    fn escape_outside_and_close_control_close_from_open() {
        for trigger in 0..3 {
            let (mut drawer, mut scheduler) = mounted();
            let mut resolver = Resolver::default();
            open_fully(&mut drawer, &mut scheduler);

            match trigger {
                0 => drawer.key(DrawerKey::Escape, &mut scheduler, &mut resolver),
                1 => drawer.pointer_down(PointerTarget::Outside, &mut scheduler),
                _ => drawer.close(&mut scheduler),
            }
            assert_eq!(drawer.state(), DrawerState::Closing);
            assert!(!drawer.listening());

            run_for(&mut drawer, &mut scheduler, Duration::from_millis(1200));
            assert_eq!(drawer.state(), DrawerState::Closed);
            assert_eq!(drawer.chrome(&scheduler), (0.0, 1.0, 0.0));
        }
    }

    #[test]
    fn pointer_inside_panel_or_toggle_keeps_drawer_open() {
        let (mut drawer, mut scheduler) = mounted();
        open_fully(&mut drawer, &mut scheduler);

        drawer.pointer_down(PointerTarget::Panel, &mut scheduler);
        drawer.pointer_down(PointerTarget::Toggle, &mut scheduler);
        assert_eq!(drawer.state(), DrawerState::Open);
    }

    #[test]
    fn close_requests_while_opening_are_ignored() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();
        drawer.open(&mut scheduler);
        run_for(&mut drawer, &mut scheduler, Duration::from_millis(200));

        drawer.key(DrawerKey::Escape, &mut scheduler, &mut resolver);
        drawer.pointer_down(PointerTarget::Outside, &mut scheduler);
        drawer.close(&mut scheduler);
        assert_eq!(drawer.state(), DrawerState::Opening);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();
        open_fully(&mut drawer, &mut scheduler);

        drawer.key(DrawerKey::ArrowLeft, &mut scheduler, &mut resolver);
        assert_eq!(drawer.selected_index(), 7);
        drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
        assert_eq!(drawer.selected_index(), 0);
    }

    #[test]
    fn hover_selects_without_navigating() {
        let (mut drawer, mut scheduler) = mounted();
        open_fully(&mut drawer, &mut scheduler);

        drawer.hover(5);
        drawer.hover(42);
        assert_eq!(drawer.selected_index(), 5);
        assert!(!drawer.is_animating());
    }

    #[test]
    fn double_toggle_while_opening_runs_one_transition() {
        let (mut drawer, mut scheduler) = mounted();
        drawer.toggle(&mut scheduler);
        scheduler.advance(FRAME);
        drawer.tick(FRAME, &mut scheduler);
        drawer.toggle(&mut scheduler);

        run_for(&mut drawer, &mut scheduler, Duration::from_secs(2));
        assert_eq!(drawer.state(), DrawerState::Open);
        let panel_tweens = scheduler
            .animations()
            .filter(|(targets, _, _)| targets.contains(&PANEL))
            .count();
        assert_eq!(panel_tweens, 1);
    }

    #[test]
    fn open_while_closing_is_queued() {
        let (mut drawer, mut scheduler) = mounted();
        open_fully(&mut drawer, &mut scheduler);
        drawer.toggle(&mut scheduler);
        assert_eq!(drawer.state(), DrawerState::Closing);

        drawer.toggle(&mut scheduler);
        assert_eq!(drawer.state(), DrawerState::Closing);

        run_for(&mut drawer, &mut scheduler, Duration::from_millis(1200));
        assert_eq!(drawer.state(), DrawerState::Opening);
        run_for(&mut drawer, &mut scheduler, Duration::from_secs(2));
        assert_eq!(drawer.state(), DrawerState::Open);
    }

    #[test]
    fn enter_navigates_then_closes_after_settle_delay() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver {
            known: vec!["food"],
            ..Resolver::default()
        };
        open_fully(&mut drawer, &mut scheduler);

        drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
        drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
        assert_eq!(drawer.selected_index(), 2);

        drawer.key(DrawerKey::Enter, &mut scheduler, &mut resolver);
        assert_eq!(resolver.requests, vec!["food".to_string()]);

        run_for(&mut drawer, &mut scheduler, Duration::from_millis(250));
        assert_eq!(drawer.state(), DrawerState::Open);
        run_for(&mut drawer, &mut scheduler, Duration::from_millis(100));
        assert_eq!(drawer.state(), DrawerState::Closing);
        assert_eq!(resolver.requests.len(), 1);
    }

    #[test]
    fn missing_target_still_closes() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();
        open_fully(&mut drawer, &mut scheduler);

        drawer.activate(6, &mut resolver);
        run_for(&mut drawer, &mut scheduler, Duration::from_millis(400));
        assert_eq!(drawer.selected_index(), 6);
        assert_eq!(drawer.state(), DrawerState::Closing);
    }

    #[test]
    fn settle_during_opening_waits_for_open() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();
        drawer.open(&mut scheduler);

        drawer.activate(1, &mut resolver);
        run_for(&mut drawer, &mut scheduler, Duration::from_millis(500));
        assert_eq!(drawer.state(), DrawerState::Opening);

        run_for(&mut drawer, &mut scheduler, Duration::from_millis(1200));
        assert_eq!(drawer.state(), DrawerState::Closing);
    }

    #[test]
    fn remount_restores_the_three_bar_glyph() {
        use super::transitions::{BAR_BOTTOM, BAR_MIDDLE, BAR_TOP};

        let (mut drawer, mut scheduler) = mounted();
        open_fully(&mut drawer, &mut scheduler);
        assert_eq!(scheduler.value(BAR_TOP, Property::Rotation), 45.0);
        assert_eq!(scheduler.value(BAR_MIDDLE, Property::Opacity), 0.0);

        drawer.unmount(&mut scheduler);
        drawer.mount(&mut scheduler);

        assert_eq!(scheduler.value(BAR_TOP, Property::Rotation), 0.0);
        assert_eq!(scheduler.value(BAR_TOP, Property::Y), 0.0);
        assert_eq!(scheduler.value(BAR_MIDDLE, Property::Opacity), 1.0);
        assert_eq!(scheduler.value(BAR_BOTTOM, Property::Rotation), 0.0);
        assert_eq!(scheduler.value(BAR_BOTTOM, Property::Y), 0.0);
    }

    #[test]
    fn unmount_cancels_transition_and_pending_close() {
        let (mut drawer, mut scheduler) = mounted();
        let mut resolver = Resolver::default();
        drawer.open(&mut scheduler);
        drawer.activate(0, &mut resolver);

        drawer.unmount(&mut scheduler);
        assert!(!drawer.listening());
        assert!(!drawer.is_animating());
        assert!(!scheduler.inner().has_active());

        scheduler.clear();
        run_for(&mut drawer, &mut scheduler, Duration::from_secs(2));
        drawer.toggle(&mut scheduler);
        assert!(scheduler
            .calls()
            .iter()
            .all(|call| !matches!(call, Call::Animate { .. })));
    }
}
