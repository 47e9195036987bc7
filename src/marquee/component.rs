// SPDX-License-Identifier: MPL-2.0
//! Infinite marquee state machine.
//!
//! The strip renders its items twice, back to back. Once every image has
//! reported, the total width `W` is measured and a single linear tween moves
//! the strip by `W / 2` forever: when a cycle wraps, the second copy sits
//! exactly where the first one started, so the reset is invisible.

use super::item::{Direction, MarqueeItem, MarqueeSettings};
use crate::tween::{Easing, Handle, Property, Props, Repeat, Scheduler, Target, TweenOptions};
use std::time::Duration;

/// Lifecycle of a marquee instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not in the page. Nothing renders and results are ignored.
    Unmounted,
    /// Mounted with no items: nothing to render, no loop.
    Idle,
    /// Waiting for every image to report.
    Loading,
    /// The strip measured zero wide; `attempt` measurements failed so far.
    Measuring { attempt: u32 },
    Running,
    /// Measurement gave up. Items render without motion.
    Static,
}

/// Re-request policy of a failed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageRetry {
    Waiting(Duration),
    InFlight,
    Spent,
}

/// Load status of one item's image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Pending,
    Loaded { width: u32, height: u32 },
    Failed(ImageRetry),
}

/// Asks the host to decode an image and report back with
/// [`Marquee::image_loaded`] or [`Marquee::image_failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub generation: u64,
    pub index: usize,
    pub image: String,
    /// Bypass any cached decode.
    pub reload: bool,
}

/// Which of the two rendered copies an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripCopy {
    Front,
    Back,
}

/// One entry of the rendered strip.
#[derive(Debug, Clone, Copy)]
pub struct RenderEntry<'a> {
    pub copy: StripCopy,
    pub index: usize,
    pub item: &'a MarqueeItem,
    pub status: SlotStatus,
    /// Rendered width, zero while unknown.
    pub width: f32,
}

/// Loop parameters derived when the loop starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeRunState {
    pub measured_track_width: f32,
    pub loop_offset: f32,
    pub loop_duration_secs: f32,
    pub current_time_scale: f32,
}

#[derive(Debug, Clone, Copy)]
struct Run {
    handle: Handle,
    width: f32,
    loop_offset: f32,
    loop_duration_secs: f32,
}

/// Horizontally looping image strip.
#[derive(Debug)]
pub struct Marquee {
    target: Target,
    items: Vec<MarqueeItem>,
    slots: Vec<SlotStatus>,
    settings: MarqueeSettings,
    phase: Phase,
    run: Option<Run>,
    /// Countdown to the next measurement while in `Measuring`.
    measure_wait: Option<Duration>,
    reported: usize,
    hovered: bool,
    generation: u64,
}

impl Marquee {
    /// Creates an unmounted marquee whose strip offset is written to
    /// `target`'s `X` property.
    pub fn new(target: Target, items: Vec<MarqueeItem>, settings: MarqueeSettings) -> Self {
        let slots = vec![SlotStatus::Pending; items.len()];
        Self {
            target,
            items,
            slots,
            settings,
            phase: Phase::Unmounted,
            run: None,
            measure_wait: None,
            reported: 0,
            hovered: false,
            generation: 0,
        }
    }

    /// Inserts the strip into the page and requests every image.
    pub fn mount(&mut self) -> Vec<ImageRequest> {
        self.generation += 1;
        self.slots = vec![SlotStatus::Pending; self.items.len()];
        self.reported = 0;
        self.measure_wait = None;

        if self.items.is_empty() {
            self.phase = Phase::Idle;
            tracing::debug!(target = self.target.name(), "marquee mounted without items");
            return Vec::new();
        }

        self.phase = Phase::Loading;
        tracing::debug!(
            target = self.target.name(),
            items = self.items.len(),
            generation = self.generation,
            "marquee mounted"
        );
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| ImageRequest {
                generation: self.generation,
                index,
                image: item.image.clone(),
                reload: false,
            })
            .collect()
    }

    /// Records a decoded image.
    pub fn image_loaded<S: Scheduler + ?Sized>(
        &mut self,
        generation: u64,
        index: usize,
        width: u32,
        height: u32,
        scheduler: &mut S,
    ) {
        if !self.accepts(generation) {
            return;
        }
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match *slot {
            SlotStatus::Pending => {
                *slot = SlotStatus::Loaded { width, height };
                self.count_report(scheduler);
            }
            SlotStatus::Failed(ImageRetry::InFlight) => {
                *slot = SlotStatus::Loaded { width, height };
                tracing::debug!(index, "marquee image recovered on retry");
                self.remeasure(scheduler);
            }
            SlotStatus::Loaded { .. } | SlotStatus::Failed(_) => {}
        }
    }

    /// Records a decode failure. The first failure of a slot counts as its
    /// report and schedules a single re-request.
    pub fn image_failed<S: Scheduler + ?Sized>(
        &mut self,
        generation: u64,
        index: usize,
        scheduler: &mut S,
    ) {
        if !self.accepts(generation) {
            return;
        }
        let retry_delay = self.settings.image_retry_delay;
        let Some(slot) = self.slots.get_mut(index) else {
            return;
        };

        match *slot {
            SlotStatus::Pending => {
                tracing::warn!(index, image = %self.items[index].image, "marquee image failed to load");
                *slot = SlotStatus::Failed(ImageRetry::Waiting(retry_delay));
                self.count_report(scheduler);
            }
            SlotStatus::Failed(ImageRetry::InFlight) => {
                tracing::debug!(index, "marquee image retry failed");
                *slot = SlotStatus::Failed(ImageRetry::Spent);
            }
            SlotStatus::Loaded { .. } | SlotStatus::Failed(_) => {}
        }
    }

    /// Advances the marquee's own countdowns. Returns the image re-requests
    /// that became due.
    pub fn tick<S: Scheduler + ?Sized>(
        &mut self,
        dt: Duration,
        scheduler: &mut S,
    ) -> Vec<ImageRequest> {
        if self.phase == Phase::Unmounted {
            return Vec::new();
        }

        let mut requests = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let SlotStatus::Failed(ImageRetry::Waiting(remaining)) = slot {
                *remaining = remaining.saturating_sub(dt);
                if remaining.is_zero() {
                    *slot = SlotStatus::Failed(ImageRetry::InFlight);
                    requests.push(ImageRequest {
                        generation: self.generation,
                        index,
                        image: self.items[index].image.clone(),
                        reload: true,
                    });
                }
            }
        }

        if let (Phase::Measuring { attempt }, Some(wait)) = (self.phase, self.measure_wait) {
            let wait = wait.saturating_sub(dt);
            if wait.is_zero() {
                self.measure_wait = None;
                self.try_start(attempt, scheduler);
            } else {
                self.measure_wait = Some(wait);
            }
        }

        requests
    }

    /// Slows the loop toward the hover rate.
    pub fn pointer_entered<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.hovered || self.phase == Phase::Unmounted {
            return;
        }
        self.hovered = true;
        self.ramp_to(self.settings.hover_time_scale, scheduler);
    }

    /// Brings the loop back to its normal rate.
    pub fn pointer_left<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if !self.hovered {
            return;
        }
        self.hovered = false;
        self.ramp_to(1.0, scheduler);
    }

    /// Replaces the item set. Results for the previous set are ignored from
    /// now on.
    pub fn set_items<S: Scheduler + ?Sized>(
        &mut self,
        items: Vec<MarqueeItem>,
        scheduler: &mut S,
    ) -> Vec<ImageRequest> {
        self.stop_loop(scheduler);
        self.items = items;
        if self.phase == Phase::Unmounted {
            self.generation += 1;
            self.slots = vec![SlotStatus::Pending; self.items.len()];
            return Vec::new();
        }
        self.mount()
    }

    pub fn set_speed<S: Scheduler + ?Sized>(&mut self, speed: f32, scheduler: &mut S) {
        if self.settings.speed == speed {
            return;
        }
        self.settings.speed = speed;
        self.rederive(scheduler);
    }

    pub fn set_direction<S: Scheduler + ?Sized>(&mut self, direction: Direction, scheduler: &mut S) {
        if self.settings.direction == direction {
            return;
        }
        self.settings.direction = direction;
        self.rederive(scheduler);
    }

    /// Removes the strip from the page. Cancels the loop and drops every
    /// pending countdown.
    pub fn unmount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.stop_loop(scheduler);
        self.phase = Phase::Unmounted;
        self.measure_wait = None;
        self.hovered = false;
        self.generation += 1;
        for slot in &mut self.slots {
            if matches!(slot, SlotStatus::Failed(_)) {
                *slot = SlotStatus::Failed(ImageRetry::Spent);
            }
        }
        tracing::debug!(target = self.target.name(), "marquee unmounted");
    }

    /// Entries in render order: every item of the front copy, then every item
    /// of the back copy.
    pub fn render_sequence(&self) -> impl Iterator<Item = RenderEntry<'_>> + '_ {
        let count = if self.is_visible() { self.items.len() } else { 0 };
        [StripCopy::Front, StripCopy::Back].into_iter().flat_map(move |copy| {
            (0..count).map(move |index| RenderEntry {
                copy,
                index,
                item: &self.items[index],
                status: self.slots[index],
                width: self.item_width(index),
            })
        })
    }

    /// Total width of both copies. Entries of zero width take no space.
    #[must_use]
    pub fn measured_width(&self) -> f32 {
        self.render_sequence()
            .filter(|entry| entry.width > 0.0)
            .map(|entry| entry.width + self.settings.gap)
            .sum()
    }

    /// Current horizontal offset of the strip.
    pub fn offset<S: Scheduler + ?Sized>(&self, scheduler: &S) -> f32 {
        scheduler.value(self.target, Property::X)
    }

    /// Loop parameters, while the loop runs.
    pub fn run_state<S: Scheduler + ?Sized>(&self, scheduler: &S) -> Option<MarqueeRunState> {
        let run = self.run?;
        Some(MarqueeRunState {
            measured_track_width: run.width,
            loop_offset: run.loop_offset,
            loop_duration_secs: run.loop_duration_secs,
            current_time_scale: scheduler.time_scale(run.handle).unwrap_or(1.0),
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn items(&self) -> &[MarqueeItem] {
        &self.items
    }

    #[must_use]
    pub fn settings(&self) -> &MarqueeSettings {
        &self.settings
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Whether the marquee has a countdown of its own that needs frames.
    #[must_use]
    pub fn has_pending_timers(&self) -> bool {
        self.measure_wait.is_some()
            || self
                .slots
                .iter()
                .any(|slot| matches!(slot, SlotStatus::Failed(ImageRetry::Waiting(_))))
    }

    fn is_visible(&self) -> bool {
        !matches!(self.phase, Phase::Unmounted | Phase::Idle)
    }

    fn accepts(&self, generation: u64) -> bool {
        if generation != self.generation || self.phase == Phase::Unmounted {
            tracing::trace!(generation, current = self.generation, "stale marquee image result");
            return false;
        }
        true
    }

    fn item_width(&self, index: usize) -> f32 {
        if let Some(width) = self.items[index].display_width {
            return width.max(0.0);
        }
        match self.slots[index] {
            SlotStatus::Loaded { width, height } if height > 0 => {
                #[allow(clippy::cast_precision_loss)]
                let aspect = width as f32 / height as f32;
                aspect * self.settings.strip_height
            }
            _ => 0.0,
        }
    }

    fn count_report<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.reported += 1;
        if self.reported == self.slots.len() && self.phase == Phase::Loading {
            tracing::debug!(target = self.target.name(), "all marquee images reported");
            self.try_start(0, scheduler);
        }
    }

    /// Measures the strip and starts the loop. `failed_attempts` counts the
    /// measurements that already came back empty.
    fn try_start<S: Scheduler + ?Sized>(&mut self, failed_attempts: u32, scheduler: &mut S) {
        let width = self.measured_width();
        if width > 0.0 && self.settings.speed > 0.0 {
            self.start_loop(width, scheduler);
            return;
        }

        let attempt = failed_attempts + 1;
        if attempt >= self.settings.max_measure_attempts || self.settings.speed <= 0.0 {
            tracing::warn!(
                target = self.target.name(),
                width,
                speed = self.settings.speed,
                attempts = attempt,
                "marquee cannot loop, showing a static strip"
            );
            self.phase = Phase::Static;
            self.measure_wait = None;
            return;
        }

        tracing::debug!(attempt, "marquee measured zero width, retrying");
        self.phase = Phase::Measuring { attempt };
        self.measure_wait = Some(self.settings.measure_retry_delay);
    }

    fn start_loop<S: Scheduler + ?Sized>(&mut self, width: f32, scheduler: &mut S) {
        let loop_offset = width / 2.0;
        let loop_duration_secs = loop_offset / self.settings.speed;
        let (from, to) = match self.settings.direction {
            Direction::Left => (0.0, -loop_offset),
            Direction::Right => (-loop_offset, 0.0),
        };

        scheduler.set_immediate(self.target, &Props::new().x(from));
        let handle = scheduler.animate(
            &[self.target],
            &Props::new().x(to),
            TweenOptions::new(loop_duration_secs).repeat(Repeat::Forever),
        );
        if self.hovered {
            scheduler.set_time_scale(handle, self.settings.hover_time_scale);
        }

        self.run = Some(Run {
            handle,
            width,
            loop_offset,
            loop_duration_secs,
        });
        self.phase = Phase::Running;
        self.measure_wait = None;
        tracing::info!(
            target = self.target.name(),
            width,
            duration = loop_duration_secs,
            "marquee loop started"
        );
    }

    fn stop_loop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(run) = self.run.take() {
            scheduler.cancel(run.handle);
        }
    }

    fn ramp_to<S: Scheduler + ?Sized>(&self, scale: f32, scheduler: &mut S) {
        if let Some(run) = self.run {
            scheduler.ramp_time_scale(
                run.handle,
                scale,
                self.settings.hover_ramp_secs,
                Easing::Power2Out,
            );
        }
    }

    /// Re-derives the loop after a late image changed the measured width.
    /// A strip that gave up, or is still waiting to measure, starts as soon
    /// as it has a width.
    fn remeasure<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        let width = self.measured_width();
        match (self.phase, self.run) {
            (Phase::Running, Some(run)) => {
                if (width - run.width).abs() > f32::EPSILON {
                    self.stop_loop(scheduler);
                    self.try_start(0, scheduler);
                }
            }
            (Phase::Static | Phase::Measuring { .. }, None) if width > 0.0 => {
                tracing::debug!(width, "late image gave the strip a width");
                self.measure_wait = None;
                self.try_start(0, scheduler);
            }
            _ => {}
        }
    }

    /// Drops the loop and derives it again from the current images.
    fn rederive<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop_loop(scheduler);
        match self.phase {
            Phase::Running | Phase::Static | Phase::Measuring { .. } => {
                self.measure_wait = None;
                self.try_start(0, scheduler);
            }
            Phase::Unmounted | Phase::Idle | Phase::Loading => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::tween::{Call, Engine, Recorder};

    const STRIP: Target = Target::new("strip");

    fn items(widths: &[f32]) -> Vec<MarqueeItem> {
        widths
            .iter()
            .enumerate()
            .map(|(i, w)| MarqueeItem::new(format!("img{i}.jpg"), format!("Dish {i}")).with_width(*w))
            .collect()
    }

    fn load_all(marquee: &mut Marquee, scheduler: &mut Recorder<Engine>) {
        let requests = marquee.mount();
        for request in requests {
            marquee.image_loaded(request.generation, request.index, 400, 300, scheduler);
        }
    }

    fn cancels(scheduler: &Recorder<Engine>) -> usize {
        scheduler.cancelled().len()
    }

    #[test]
    fn empty_sequence_renders_nothing_and_never_loops() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, Vec::new(), MarqueeSettings::default());

        assert!(marquee.mount().is_empty());
        assert_eq!(marquee.phase(), Phase::Idle);
        assert_eq!(marquee.render_sequence().count(), 0);
        assert!(scheduler.calls().is_empty());
        assert!(marquee.run_state(&scheduler).is_none());
    }

    #[test]
    fn strip_renders_two_copies_in_order() {
        let mut marquee = Marquee::new(STRIP, items(&[100.0, 200.0, 300.0]), MarqueeSettings::default());
        marquee.mount();

        let order: Vec<_> = marquee.render_sequence().map(|e| (e.copy, e.index)).collect();
        assert_eq!(
            order,
            vec![
                (StripCopy::Front, 0),
                (StripCopy::Front, 1),
                (StripCopy::Front, 2),
                (StripCopy::Back, 0),
                (StripCopy::Back, 1),
                (StripCopy::Back, 2),
            ]
        );
    }

    #[test]
    fn loop_waits_for_every_image_to_report() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0, 100.0]), MarqueeSettings::default());
        let requests = marquee.mount();

        marquee.image_loaded(requests[0].generation, 0, 10, 10, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Loading);
        assert_eq!(scheduler.animations().count(), 0);

        marquee.image_failed(requests[1].generation, 1, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Running);
    }

    #[test]
    fn loop_targets_half_width_at_configured_speed() {
        let mut scheduler = Recorder::new(Engine::new());
        let settings = MarqueeSettings::default().with_speed(60.0);
        let mut marquee = Marquee::new(STRIP, items(&[300.0, 300.0, 300.0]), settings);
        load_all(&mut marquee, &mut scheduler);

        let gap = marquee.settings().gap;
        let width = 2.0 * 3.0 * (300.0 + gap);
        assert_abs_diff_eq!(marquee.measured_width(), width, epsilon = 1e-3);

        let (targets, props, options) = scheduler.animations().next().expect("loop tween");
        assert_eq!(targets, &[STRIP]);
        assert_abs_diff_eq!(props.get(Property::X).expect("x"), -width / 2.0, epsilon = 1e-3);
        assert_abs_diff_eq!(options.duration, width / 2.0 / 60.0, epsilon = 1e-4);
        assert_eq!(options.easing, Easing::Linear);
        assert_eq!(options.repeat, Repeat::Forever);
    }

    #[test]
    fn single_item_offset_is_item_width_plus_gap() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[250.0]), MarqueeSettings::default());
        load_all(&mut marquee, &mut scheduler);

        let state = marquee.run_state(&scheduler).expect("running");
        assert_abs_diff_eq!(state.loop_offset, 250.0 + marquee.settings().gap, epsilon = 1e-3);
    }

    #[test]
    fn intrinsic_width_follows_aspect_ratio() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut settings = MarqueeSettings::default();
        settings.strip_height = 300.0;
        settings.gap = 0.0;
        let mut marquee = Marquee::new(STRIP, vec![MarqueeItem::new("a.jpg", "A")], settings);
        load_all(&mut marquee, &mut scheduler);

        assert_abs_diff_eq!(marquee.measured_width(), 800.0, epsilon = 1e-3);
    }

    #[test]
    fn right_direction_mirrors_the_loop() {
        let mut scheduler = Recorder::new(Engine::new());
        let settings = MarqueeSettings::default().with_direction(Direction::Right);
        let mut marquee = Marquee::new(STRIP, items(&[100.0]), settings);
        load_all(&mut marquee, &mut scheduler);

        let offset = marquee.run_state(&scheduler).expect("running").loop_offset;
        assert_abs_diff_eq!(marquee.offset(&scheduler), -offset);
        let (_, props, _) = scheduler.animations().next().expect("loop tween");
        assert_eq!(props.get(Property::X), Some(0.0));
    }

    #[test]
    fn hover_ramps_rate_without_restarting() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[500.0]), MarqueeSettings::default());
        load_all(&mut marquee, &mut scheduler);

        scheduler.advance(Duration::from_secs(1));
        let before = marquee.offset(&scheduler);
        marquee.pointer_entered(&mut scheduler);
        scheduler.advance(Duration::from_millis(16));
        let after = marquee.offset(&scheduler);
        assert!((after - before).abs() < 1.0, "position stays continuous");

        scheduler.advance(Duration::from_secs(1));
        let state = marquee.run_state(&scheduler).expect("running");
        assert_abs_diff_eq!(state.current_time_scale, 0.1, epsilon = 1e-4);

        marquee.pointer_left(&mut scheduler);
        scheduler.advance(Duration::from_secs(1));
        let state = marquee.run_state(&scheduler).expect("running");
        assert_abs_diff_eq!(state.current_time_scale, 1.0, epsilon = 1e-4);
        assert_eq!(scheduler.animations().count(), 1);
        assert_eq!(cancels(&scheduler), 0);
    }

    #[test]
    fn zero_width_retries_then_falls_back_to_static() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut settings = MarqueeSettings::default();
        settings.max_measure_attempts = 3;
        let mut marquee = Marquee::new(STRIP, vec![MarqueeItem::new("a.jpg", "A")], settings);
        let requests = marquee.mount();
        marquee.image_loaded(requests[0].generation, 0, 0, 0, &mut scheduler);

        assert_eq!(marquee.phase(), Phase::Measuring { attempt: 1 });
        marquee.tick(Duration::from_millis(100), &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Measuring { attempt: 1 });
        marquee.tick(Duration::from_millis(100), &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Measuring { attempt: 2 });
        marquee.tick(Duration::from_millis(200), &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Static);
        assert!(!marquee.has_pending_timers());
        assert_eq!(scheduler.animations().count(), 0);
        assert_eq!(marquee.render_sequence().count(), 2);
    }

    #[test]
    fn failed_image_is_retried_once() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0, 100.0]), MarqueeSettings::default());
        let requests = marquee.mount();
        let generation = requests[0].generation;
        marquee.image_loaded(generation, 0, 10, 10, &mut scheduler);
        marquee.image_failed(generation, 1, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Running);

        assert!(marquee.tick(Duration::from_millis(50), &mut scheduler).is_empty());
        let retries = marquee.tick(Duration::from_millis(50), &mut scheduler);
        assert_eq!(retries.len(), 1);
        assert!(retries[0].reload);
        assert_eq!(retries[0].index, 1);

        marquee.image_failed(generation, 1, &mut scheduler);
        assert!(marquee.tick(Duration::from_secs(1), &mut scheduler).is_empty());
        assert_eq!(marquee.phase(), Phase::Running);
    }

    #[test]
    fn late_success_that_changes_width_rederives_the_loop() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(
            STRIP,
            vec![
                MarqueeItem::new("a.jpg", "A").with_width(100.0),
                MarqueeItem::new("b.jpg", "B"),
            ],
            MarqueeSettings::default(),
        );
        let requests = marquee.mount();
        let generation = requests[0].generation;
        marquee.image_loaded(generation, 0, 10, 10, &mut scheduler);
        marquee.image_failed(generation, 1, &mut scheduler);
        let first = marquee.run_state(&scheduler).expect("running");

        marquee.tick(Duration::from_millis(100), &mut scheduler);
        marquee.image_loaded(generation, 1, 300, 300, &mut scheduler);

        let second = marquee.run_state(&scheduler).expect("running");
        assert!(second.measured_track_width > first.measured_track_width);
        assert_eq!(cancels(&scheduler), 1);
        assert_eq!(scheduler.animations().count(), 2);
    }

    #[test]
    fn static_strip_starts_once_a_retry_gives_it_width() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut settings = MarqueeSettings::default();
        settings.max_measure_attempts = 1;
        let mut marquee = Marquee::new(STRIP, vec![MarqueeItem::new("late.jpg", "Late")], settings);
        let generation = marquee.mount()[0].generation;

        marquee.image_failed(generation, 0, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Static);
        assert_eq!(scheduler.animations().count(), 0);

        let retries = marquee.tick(Duration::from_millis(100), &mut scheduler);
        assert_eq!(retries.len(), 1);
        marquee.image_loaded(generation, 0, 400, 300, &mut scheduler);

        assert_eq!(marquee.phase(), Phase::Running);
        let item_width = 400.0 / 300.0 * 320.0;
        assert_abs_diff_eq!(marquee.measured_width(), 2.0 * (item_width + 24.0), epsilon = 1e-3);
        assert_eq!(scheduler.animations().count(), 1);
        assert!(!marquee.has_pending_timers());
    }

    #[test]
    fn measuring_strip_starts_without_waiting_for_the_next_attempt() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(
            STRIP,
            vec![MarqueeItem::new("a.jpg", "A"), MarqueeItem::new("b.jpg", "B")],
            MarqueeSettings::default(),
        );
        let generation = marquee.mount()[0].generation;
        marquee.image_loaded(generation, 0, 0, 0, &mut scheduler);
        marquee.image_failed(generation, 1, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Measuring { attempt: 1 });

        let retries = marquee.tick(Duration::from_millis(100), &mut scheduler);
        assert_eq!(retries.len(), 1);
        marquee.image_loaded(generation, 1, 300, 300, &mut scheduler);

        assert_eq!(marquee.phase(), Phase::Running);
        assert!(marquee.measured_width() > 0.0);
        assert_eq!(scheduler.animations().count(), 1);
    }

    #[test]
    fn duplicate_and_stale_reports_are_ignored() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0, 100.0]), MarqueeSettings::default());
        let stale = marquee.mount()[0].generation;
        let fresh = marquee.set_items(items(&[100.0, 100.0]), &mut scheduler)[0].generation;
        assert_ne!(stale, fresh);

        marquee.image_loaded(stale, 0, 10, 10, &mut scheduler);
        marquee.image_loaded(stale, 1, 10, 10, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Loading);

        marquee.image_loaded(fresh, 0, 10, 10, &mut scheduler);
        marquee.image_loaded(fresh, 0, 10, 10, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Loading);

        marquee.image_loaded(fresh, 1, 10, 10, &mut scheduler);
        assert_eq!(marquee.phase(), Phase::Running);
    }

    #[test]
    fn speed_change_cancels_and_restarts_once() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0]), MarqueeSettings::default());
        load_all(&mut marquee, &mut scheduler);
        let before = marquee.run_state(&scheduler).expect("running");

        marquee.set_speed(before.loop_offset, &mut scheduler);

        let after = marquee.run_state(&scheduler).expect("running");
        assert_abs_diff_eq!(after.loop_duration_secs, 1.0, epsilon = 1e-5);
        assert_eq!(cancels(&scheduler), 1);
        assert_eq!(scheduler.animations().count(), 2);
    }

    #[test]
    fn direction_change_restarts_mirrored() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0]), MarqueeSettings::default());
        load_all(&mut marquee, &mut scheduler);

        marquee.set_direction(Direction::Right, &mut scheduler);
        let (_, props, _) = scheduler.animations().last().expect("restarted loop");
        assert_eq!(props.get(Property::X), Some(0.0));
        assert_eq!(cancels(&scheduler), 1);
    }

    #[test]
    fn unmount_cancels_exactly_once_and_silences_results() {
        let mut scheduler = Recorder::new(Engine::new());
        let mut marquee = Marquee::new(STRIP, items(&[100.0, 100.0]), MarqueeSettings::default());
        let requests = marquee.mount();
        let generation = requests[0].generation;
        marquee.image_loaded(generation, 0, 10, 10, &mut scheduler);
        marquee.image_failed(generation, 1, &mut scheduler);

        marquee.unmount(&mut scheduler);
        marquee.unmount(&mut scheduler);
        assert_eq!(
            scheduler
                .calls()
                .iter()
                .filter(|call| matches!(call, Call::Cancel { .. }))
                .count(),
            1
        );

        scheduler.clear();
        assert!(marquee.tick(Duration::from_secs(1), &mut scheduler).is_empty());
        marquee.image_loaded(generation, 1, 10, 10, &mut scheduler);
        marquee.pointer_entered(&mut scheduler);
        assert!(scheduler.calls().is_empty());
        assert!(!scheduler.inner().has_active());
        assert!(!marquee.has_pending_timers());
        assert_eq!(marquee.render_sequence().count(), 0);
    }
}
