// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered entrance animations.
//!
//! A [`ScrollReveal`] watches one section. When the section's top edge
//! scrolls above `start` (a fraction of the viewport height) the entrance
//! plays; when it goes back below, the entrance is played in reverse.
//! Scrolling past the section downward or re-entering it from below has no
//! effect. [`CardReveal`] does the same for the menu's product cards, which
//! also replay whenever the category changes.

use crate::config::{DEFAULT_CARD_REVEAL_START, DEFAULT_REVEAL_START};
use crate::tween::{
    Easing, Handle, Position, Props, Repeat, Scheduler, Target, Timeline, TimelineHandle,
    TweenOptions,
};

pub const GALLERY_SECTION: Target = Target::new("gallery.section");
pub const GALLERY_TITLE: Target = Target::new("gallery.title");
pub const GALLERY_SUBTITLE: Target = Target::new("gallery.subtitle");
pub const GALLERY_STRIP: Target = Target::new("gallery.strip");
pub const MENU_TITLE: Target = Target::new("menu.title");
pub const MENU_TABS: Target = Target::new("menu.tabs");

const MENU_CARD: &str = "menu.card";

pub fn menu_card(index: usize) -> Target {
    Target::nth(MENU_CARD, index)
}

/// One element of an entrance: where it rests hidden, where it ends up.
#[derive(Debug, Clone)]
struct RevealStep {
    target: Target,
    hidden: Props,
    shown: Props,
    at: f32,
    duration: f32,
    easing: Easing,
}

impl RevealStep {
    fn end(&self) -> f32 {
        self.at + self.duration
    }
}

/// What an update did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealChange {
    Played,
    Reversed,
}

/// Entrance animation of one section, bound to its scroll position.
#[derive(Debug)]
pub struct ScrollReveal {
    section: &'static str,
    start: f32,
    steps: Vec<RevealStep>,
    revealed: bool,
    running: Option<TimelineHandle>,
}

impl ScrollReveal {
    fn new(section: &'static str, steps: Vec<RevealStep>) -> Self {
        Self {
            section,
            start: DEFAULT_REVEAL_START,
            steps,
            revealed: false,
            running: None,
        }
    }

    /// Gallery heading, subtitle and strip container, each on its own delay.
    pub fn gallery() -> Self {
        Self::new(
            "gallery",
            vec![
                RevealStep {
                    target: GALLERY_TITLE,
                    hidden: Props::new().opacity(0.0).y(50.0),
                    shown: Props::new().opacity(1.0).y(0.0),
                    at: 0.2,
                    duration: 1.0,
                    easing: Easing::Power3Out,
                },
                RevealStep {
                    target: GALLERY_SUBTITLE,
                    hidden: Props::new().opacity(0.0).y(50.0),
                    shown: Props::new().opacity(1.0).y(0.0),
                    at: 0.5,
                    duration: 0.8,
                    easing: Easing::Power2Out,
                },
                RevealStep {
                    target: GALLERY_STRIP,
                    hidden: Props::new().opacity(0.0).y(50.0).scale(0.9),
                    shown: Props::new().opacity(1.0).y(0.0).scale(1.0),
                    at: 0.8,
                    duration: 1.2,
                    easing: Easing::Power3Out,
                },
            ],
        )
    }

    /// Menu heading, then the category tabs overlapping it by 0.4 s.
    pub fn menu() -> Self {
        Self::new(
            "menu",
            vec![
                RevealStep {
                    target: MENU_TITLE,
                    hidden: Props::new().opacity(0.0).y(50.0),
                    shown: Props::new().opacity(1.0).y(0.0),
                    at: 0.0,
                    duration: 0.8,
                    easing: Easing::Power3Out,
                },
                RevealStep {
                    target: MENU_TABS,
                    hidden: Props::new().opacity(0.0).y(30.0),
                    shown: Props::new().opacity(1.0).y(0.0),
                    at: 0.4,
                    duration: 0.8,
                    easing: Easing::Power3Out,
                },
            ],
        )
    }

    /// Puts every element in its hidden state.
    pub fn mount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        for step in &self.steps {
            scheduler.set_immediate(step.target, &step.hidden);
        }
        self.revealed = false;
    }

    /// Re-evaluates the trigger for a section whose top edge is at
    /// `section_top`, relative to the viewport.
    pub fn update<S: Scheduler + ?Sized>(
        &mut self,
        section_top: f32,
        viewport_height: f32,
        scheduler: &mut S,
    ) -> Option<RevealChange> {
        let crossed = section_top <= viewport_height * self.start;
        if crossed == self.revealed {
            return None;
        }
        self.revealed = crossed;
        self.stop(scheduler);

        let (timeline, change) = if crossed {
            (self.entrance(), RevealChange::Played)
        } else {
            (self.exit(), RevealChange::Reversed)
        };
        tracing::debug!(section = self.section, ?change, "scroll reveal");
        self.running = Some(timeline.play(scheduler));
        Some(change)
    }

    pub fn unmount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.revealed = false;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn section(&self) -> &'static str {
        self.section
    }

    /// Whether the entrance (or its reverse) is still running.
    pub fn is_animating<S: Scheduler + ?Sized>(&self, scheduler: &S) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.is_finished(scheduler))
    }

    fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(running) = self.running.take() {
            running.cancel(scheduler);
        }
    }

    fn entrance(&self) -> Timeline {
        self.steps.iter().fold(Timeline::new(), |timeline, step| {
            timeline.to(
                &[step.target],
                step.shown.clone(),
                TweenOptions::new(step.duration).easing(step.easing),
                Position::At(step.at),
            )
        })
    }

    /// The entrance mirrored in time: the last element to arrive leaves first.
    fn exit(&self) -> Timeline {
        let total = self.steps.iter().map(RevealStep::end).fold(0.0, f32::max);
        self.steps.iter().fold(Timeline::new(), |timeline, step| {
            timeline.to(
                &[step.target],
                step.hidden.clone(),
                TweenOptions::new(step.duration).easing(step.easing),
                Position::At(total - step.end()),
            )
        })
    }
}

/// Endless vertical bob of the gallery section.
pub fn start_float<S: Scheduler + ?Sized>(scheduler: &mut S) -> Handle {
    scheduler.animate(
        &[GALLERY_SECTION],
        &Props::new().y(-10.0),
        TweenOptions::new(3.0)
            .repeat(Repeat::Forever)
            .yoyo(true)
            .easing(Easing::Power1InOut),
    )
}

const CARD_DURATION: f32 = 0.6;

fn card_hidden() -> Props {
    Props::new().y(50.0).opacity(0.0).scale(0.9)
}

fn card_shown() -> Props {
    Props::new().y(0.0).opacity(1.0).scale(1.0)
}

/// Scroll trigger of the product card grid.
#[derive(Debug)]
pub struct CardReveal {
    start: f32,
    count: usize,
    revealed: bool,
    running: Option<TimelineHandle>,
}

impl Default for CardReveal {
    fn default() -> Self {
        Self {
            start: DEFAULT_CARD_REVEAL_START,
            count: 0,
            revealed: false,
            running: None,
        }
    }
}

impl CardReveal {
    /// Hides `count` cards until the grid scrolls into view.
    pub fn mount<S: Scheduler + ?Sized>(&mut self, count: usize, scheduler: &mut S) {
        self.stop(scheduler);
        self.count = count;
        self.revealed = false;
        self.hide(scheduler);
    }

    /// Re-evaluates the trigger for a grid whose top edge is at `grid_top`,
    /// relative to the viewport.
    pub fn update<S: Scheduler + ?Sized>(
        &mut self,
        grid_top: f32,
        viewport_height: f32,
        scheduler: &mut S,
    ) -> Option<RevealChange> {
        let crossed = grid_top <= viewport_height * self.start;
        if crossed == self.revealed {
            return None;
        }
        self.revealed = crossed;
        self.stop(scheduler);

        let change = if crossed {
            self.running = Some(self.cascade().play(scheduler));
            RevealChange::Played
        } else {
            let cards = Target::group(MENU_CARD, self.count);
            let exit = Timeline::new().to(
                &cards,
                card_hidden(),
                TweenOptions::new(CARD_DURATION).easing(Easing::Power2In),
                Position::Sequence,
            );
            self.running = Some(exit.play(scheduler));
            RevealChange::Reversed
        };
        tracing::debug!(cards = self.count, ?change, "card reveal");
        Some(change)
    }

    /// Swaps in a new card set. Cards already in view rise again, cards
    /// below the trigger stay hidden.
    pub fn set_count<S: Scheduler + ?Sized>(&mut self, count: usize, scheduler: &mut S) {
        self.stop(scheduler);
        self.count = count;
        if self.revealed {
            self.running = Some(self.cascade().play(scheduler));
        } else {
            self.hide(scheduler);
        }
    }

    pub fn unmount<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stop(scheduler);
        self.revealed = false;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_animating<S: Scheduler + ?Sized>(&self, scheduler: &S) -> bool {
        self.running
            .as_ref()
            .is_some_and(|running| !running.is_finished(scheduler))
    }

    /// Handles of the timeline currently driving the cards.
    #[must_use]
    pub fn handles(&self) -> &[Handle] {
        match &self.running {
            Some(running) => running.handles(),
            None => &[],
        }
    }

    fn cascade(&self) -> Timeline {
        Timeline::new().from_to(
            &Target::group(MENU_CARD, self.count),
            card_hidden(),
            card_shown(),
            TweenOptions::new(CARD_DURATION).easing(Easing::back_out()),
            Position::Sequence,
        )
    }

    fn hide<S: Scheduler + ?Sized>(&self, scheduler: &mut S) {
        let hidden = card_hidden();
        for index in 0..self.count {
            scheduler.set_immediate(menu_card(index), &hidden);
        }
    }

    fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(running) = self.running.take() {
            running.cancel(scheduler);
        }
    }
}
