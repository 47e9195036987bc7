// SPDX-License-Identifier: MPL-2.0
//! Composition of tweens with relative start offsets.
//!
//! A timeline is built up front, then handed to a scheduler in one go: every
//! step becomes a regular tween whose delay encodes its position. Ordering is
//! therefore fixed by arithmetic and never depends on frame timing.

use super::{Handle, Props, Scheduler, Target, TweenOptions};

/// Where a step starts, relative to the steps already added.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// When everything added so far has finished.
    Sequence,
    /// Relative to the current end. `Offset(-0.2)` overlaps the previous
    /// steps by 200 ms.
    Offset(f32),
    /// Absolute time from the start of the timeline.
    At(f32),
}

#[derive(Debug, Clone)]
struct Step {
    targets: Vec<Target>,
    from: Option<Props>,
    to: Props,
    options: TweenOptions,
    start: f32,
}

/// An ordered set of tweens played as one transition.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    end: f32,
}

impl Timeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tweens `targets` from their current values to `to`.
    #[must_use]
    pub fn to(self, targets: &[Target], to: Props, options: TweenOptions, at: Position) -> Self {
        self.push(targets, None, to, options, at)
    }

    /// Tweens `targets` from `from` to `to`. The from-values are written as
    /// soon as the timeline is played, before the step starts.
    #[must_use]
    pub fn from_to(
        self,
        targets: &[Target],
        from: Props,
        to: Props,
        options: TweenOptions,
        at: Position,
    ) -> Self {
        self.push(targets, Some(from), to, options, at)
    }

    fn push(
        mut self,
        targets: &[Target],
        from: Option<Props>,
        to: Props,
        options: TweenOptions,
        at: Position,
    ) -> Self {
        let start = match at {
            Position::Sequence => self.end,
            Position::Offset(offset) => (self.end + offset).max(0.0),
            Position::At(time) => time.max(0.0),
        };
        let span = options.active_span(targets.len()).unwrap_or(0.0);
        self.end = self.end.max(start + options.delay + span);
        self.steps.push(Step {
            targets: targets.to_vec(),
            from,
            to,
            options,
            start,
        });
        self
    }

    /// Total length in seconds. Endless steps do not extend it.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Start time of the `index`-th step.
    #[must_use]
    pub fn start_of(&self, index: usize) -> Option<f32> {
        self.steps.get(index).map(|step| step.start)
    }

    /// Schedules every step.
    pub fn play<S: Scheduler + ?Sized>(self, scheduler: &mut S) -> TimelineHandle {
        let mut handles = Vec::with_capacity(self.steps.len());
        for step in self.steps {
            if let Some(from) = &step.from {
                for target in &step.targets {
                    scheduler.set_immediate(*target, from);
                }
            }
            let options = step.options.delay(step.start + step.options.delay);
            handles.push(scheduler.animate(&step.targets, &step.to, options));
        }
        TimelineHandle {
            handles,
            duration: self.end,
        }
    }
}

/// A played timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineHandle {
    handles: Vec<Handle>,
    duration: f32,
}

impl TimelineHandle {
    /// True once no step is running any more.
    pub fn is_finished<S: Scheduler + ?Sized>(&self, scheduler: &S) -> bool {
        self.handles.iter().all(|handle| !scheduler.is_active(*handle))
    }

    /// Stops every step. Returns how many were still running.
    pub fn cancel<S: Scheduler + ?Sized>(&self, scheduler: &mut S) -> usize {
        self.handles
            .iter()
            .filter(|handle| scheduler.cancel(**handle))
            .count()
    }

    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    #[must_use]
    pub fn handles(&self) -> &[Handle] {
        &self.handles
    }
}
