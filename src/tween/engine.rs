// SPDX-License-Identifier: MPL-2.0
//! Frame-driven tween engine.

use super::{Easing, Handle, Property, Props, Repeat, Scheduler, Target, TweenOptions};
use std::collections::HashMap;
use std::time::Duration;

/// Owns every animated value and advances running tweens on each frame.
#[derive(Debug, Default)]
pub struct Engine {
    values: HashMap<(Target, Property), f32>,
    animations: Vec<Animation>,
    next_id: u64,
}

#[derive(Debug)]
struct Track {
    target: Target,
    property: Property,
    to: f32,
    /// Captured the first time the track runs.
    from: Option<f32>,
    /// Delay plus this target's stagger share.
    offset: f32,
}

#[derive(Debug, Clone, Copy)]
struct Ramp {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

#[derive(Debug)]
struct Animation {
    handle: Handle,
    tracks: Vec<Track>,
    duration: f32,
    easing: Easing,
    repeat: Repeat,
    yoyo: bool,
    /// Local time, already multiplied by the playback rate.
    elapsed: f32,
    time_scale: f32,
    ramp: Option<Ramp>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances every running tween by `dt` of real time and returns the
    /// handles that completed during this step.
    pub fn advance(&mut self, dt: Duration) -> Vec<Handle> {
        let dt = dt.as_secs_f32();
        let mut finished = Vec::new();

        for animation in &mut self.animations {
            animation.advance_rate(dt);
            animation.elapsed += dt * animation.time_scale;
            if animation.apply(&mut self.values) {
                finished.push(animation.handle);
            }
        }

        if !finished.is_empty() {
            self.animations.retain(|a| !finished.contains(&a.handle));
        }
        finished
    }

    /// Whether anything still needs frames.
    #[must_use]
    pub fn has_active(&self) -> bool {
        !self.animations.is_empty()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.animations.len()
    }

    fn animation(&self, handle: Handle) -> Option<&Animation> {
        self.animations.iter().find(|a| a.handle == handle)
    }

    fn animation_mut(&mut self, handle: Handle) -> Option<&mut Animation> {
        self.animations.iter_mut().find(|a| a.handle == handle)
    }
}

impl Scheduler for Engine {
    fn set_immediate(&mut self, target: Target, props: &Props) {
        for (property, value) in props.iter() {
            self.values.insert((target, property), value);
        }
    }

    fn animate(&mut self, targets: &[Target], props: &Props, options: TweenOptions) -> Handle {
        self.next_id += 1;
        let handle = Handle::from_raw(self.next_id);

        let mut tracks = Vec::with_capacity(targets.len() * props.iter().count());
        for (i, target) in targets.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let offset = options.delay + options.stagger * i as f32;
            for (property, to) in props.iter() {
                tracks.push(Track {
                    target: *target,
                    property,
                    to,
                    from: None,
                    offset,
                });
            }
        }

        self.animations.push(Animation {
            handle,
            tracks,
            duration: options.duration,
            easing: options.easing,
            repeat: options.repeat,
            yoyo: options.yoyo,
            elapsed: 0.0,
            time_scale: 1.0,
            ramp: None,
        });
        handle
    }

    fn cancel(&mut self, handle: Handle) -> bool {
        let before = self.animations.len();
        self.animations.retain(|a| a.handle != handle);
        self.animations.len() != before
    }

    fn set_time_scale(&mut self, handle: Handle, scale: f32) {
        if let Some(animation) = self.animation_mut(handle) {
            animation.ramp = None;
            animation.time_scale = scale.max(0.0);
        }
    }

    fn ramp_time_scale(&mut self, handle: Handle, to: f32, duration: f32, easing: Easing) {
        if let Some(animation) = self.animation_mut(handle) {
            animation.ramp = Some(Ramp {
                from: animation.time_scale,
                to: to.max(0.0),
                duration: duration.max(0.0),
                elapsed: 0.0,
                easing,
            });
        }
    }

    fn time_scale(&self, handle: Handle) -> Option<f32> {
        self.animation(handle).map(|a| a.time_scale)
    }

    fn is_active(&self, handle: Handle) -> bool {
        self.animation(handle).is_some()
    }

    fn value(&self, target: Target, property: Property) -> f32 {
        self.values
            .get(&(target, property))
            .copied()
            .unwrap_or_else(|| property.default_value())
    }
}

impl Animation {
    fn advance_rate(&mut self, dt: f32) {
        let Some(ramp) = self.ramp.as_mut() else {
            return;
        };
        ramp.elapsed += dt;
        let t = if ramp.duration <= 0.0 {
            1.0
        } else {
            (ramp.elapsed / ramp.duration).min(1.0)
        };
        self.time_scale = ramp.from + (ramp.to - ramp.from) * ramp.easing.apply(t);
        if t >= 1.0 {
            self.ramp = None;
        }
    }

    /// Writes the current value of every started track. Returns `true` once
    /// every track has run to completion.
    fn apply(&mut self, values: &mut HashMap<(Target, Property), f32>) -> bool {
        self.wrap_elapsed();

        let mut done = true;
        for track in &mut self.tracks {
            let local = self.elapsed - track.offset;
            if local < 0.0 {
                done = false;
                continue;
            }

            let key = (track.target, track.property);
            let from = *track.from.get_or_insert_with(|| {
                values
                    .get(&key)
                    .copied()
                    .unwrap_or_else(|| track.property.default_value())
            });

            let (progress, track_done) = progress(self.duration, self.repeat, self.yoyo, local);
            values.insert(key, from + (track.to - from) * self.easing.apply(progress));
            done &= track_done;
        }
        done
    }

    /// Keeps the local time of endless loops small so `f32` precision does
    /// not degrade after hours of playback.
    fn wrap_elapsed(&mut self) {
        if self.repeat != Repeat::Forever || self.duration <= 0.0 {
            return;
        }
        let period = if self.yoyo {
            self.duration * 2.0
        } else {
            self.duration
        };
        let max_offset = self.tracks.iter().map(|t| t.offset).fold(0.0, f32::max);
        let excess = self.elapsed - max_offset;
        if excess > period * 2.0 {
            self.elapsed -= (excess / period).floor() * period;
        }
    }
}

/// Progress within the current cycle for a track that has been running for
/// `local` seconds, and whether it has completed.
fn progress(duration: f32, repeat: Repeat, yoyo: bool, local: f32) -> (f32, bool) {
    if duration <= 0.0 {
        return (1.0, true);
    }

    if let Some(cycles) = repeat.cycles() {
        #[allow(clippy::cast_precision_loss)]
        let total = duration * cycles as f32;
        if local >= total {
            let ends_reversed = yoyo && cycles % 2 == 0;
            return (if ends_reversed { 0.0 } else { 1.0 }, true);
        }
    }

    let cycle = (local / duration).floor();
    let within = (local - cycle * duration) / duration;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let reversed = yoyo && (cycle as u64) % 2 == 1;
    (if reversed { 1.0 - within } else { within }, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    const BOX: Target = Target::new("box");

    fn step(engine: &mut Engine, secs: f32) -> Vec<Handle> {
        engine.advance(Duration::from_secs_f32(secs))
    }

    #[test]
    fn linear_tween_interpolates_and_finishes() {
        let mut engine = Engine::new();
        let handle = engine.animate(&[BOX], &Props::new().x(100.0), TweenOptions::new(1.0));

        step(&mut engine, 0.25);
        assert_abs_diff_eq!(engine.value(BOX, Property::X), 25.0, epsilon = 1e-3);

        let finished = step(&mut engine, 1.0);
        assert_eq!(finished, vec![handle]);
        assert!(!engine.is_active(handle));
        assert_abs_diff_eq!(engine.value(BOX, Property::X), 100.0);
    }

    #[test]
    fn start_value_is_captured_when_delay_elapses() {
        let mut engine = Engine::new();
        engine.animate(
            &[BOX],
            &Props::new().x(10.0),
            TweenOptions::new(1.0).delay(0.5),
        );
        engine.set_immediate(BOX, &Props::new().x(-10.0));

        step(&mut engine, 0.25);
        assert_abs_diff_eq!(engine.value(BOX, Property::X), -10.0);

        step(&mut engine, 0.75);
        assert_abs_diff_eq!(engine.value(BOX, Property::X), 0.0, epsilon = 1e-3);
    }

    #[test]
    fn stagger_offsets_each_target() {
        let mut engine = Engine::new();
        let targets = Target::group("row", 3);
        let handle = engine.animate(
            &targets,
            &Props::new().opacity(0.0),
            TweenOptions::new(0.1).stagger(0.5),
        );

        step(&mut engine, 0.2);
        assert_abs_diff_eq!(engine.value(targets[0], Property::Opacity), 0.0);
        assert_abs_diff_eq!(engine.value(targets[1], Property::Opacity), 1.0);
        assert_abs_diff_eq!(engine.value(targets[2], Property::Opacity), 1.0);
        assert!(engine.is_active(handle));

        step(&mut engine, 1.0);
        assert_abs_diff_eq!(engine.value(targets[2], Property::Opacity), 0.0);
        assert!(!engine.is_active(handle));
    }

    #[test]
    fn forever_tween_wraps_to_start() {
        let mut engine = Engine::new();
        let handle = engine.animate(
            &[BOX],
            &Props::new().x(-100.0),
            TweenOptions::new(2.0).repeat(Repeat::Forever),
        );

        step(&mut engine, 2.5);
        assert!(engine.is_active(handle));
        assert_abs_diff_eq!(engine.value(BOX, Property::X), -25.0, epsilon = 1e-3);
    }

    #[test]
    fn yoyo_reverses_on_odd_cycles() {
        let mut engine = Engine::new();
        engine.animate(
            &[BOX],
            &Props::new().y(-10.0),
            TweenOptions::new(1.0).repeat(Repeat::Forever).yoyo(true),
        );

        step(&mut engine, 1.25);
        assert_abs_diff_eq!(engine.value(BOX, Property::Y), -7.5, epsilon = 1e-3);
    }

    #[test]
    fn time_scale_slows_without_restarting() {
        let mut engine = Engine::new();
        let handle = engine.animate(
            &[BOX],
            &Props::new().x(100.0),
            TweenOptions::new(10.0).repeat(Repeat::Forever),
        );
        step(&mut engine, 1.0);
        let before = engine.value(BOX, Property::X);

        engine.set_time_scale(handle, 0.5);
        step(&mut engine, 1.0);

        assert_abs_diff_eq!(engine.value(BOX, Property::X), before + 5.0, epsilon = 1e-3);
        assert_eq!(engine.time_scale(handle), Some(0.5));
    }

    #[test]
    fn ramp_reaches_target_rate_after_its_duration() {
        let mut engine = Engine::new();
        let handle = engine.animate(
            &[BOX],
            &Props::new().x(1.0),
            TweenOptions::new(100.0).repeat(Repeat::Forever),
        );
        engine.ramp_time_scale(handle, 0.1, 0.5, Easing::Power2Out);

        step(&mut engine, 0.25);
        let mid = engine.time_scale(handle).expect("running");
        assert!(mid < 1.0 && mid > 0.1);

        step(&mut engine, 0.5);
        assert_abs_diff_eq!(engine.time_scale(handle).expect("running"), 0.1, epsilon = F32_EPSILON);
    }

    #[test]
    fn cancel_freezes_value_and_reports_once() {
        let mut engine = Engine::new();
        let handle = engine.animate(&[BOX], &Props::new().x(100.0), TweenOptions::new(1.0));
        step(&mut engine, 0.5);

        assert!(engine.cancel(handle));
        assert!(!engine.cancel(handle));
        step(&mut engine, 1.0);
        assert_abs_diff_eq!(engine.value(BOX, Property::X), 50.0, epsilon = 1e-3);
        assert!(!engine.has_active());
    }

    #[test]
    fn zero_duration_completes_on_next_frame() {
        let mut engine = Engine::new();
        let handle = engine.animate(&[BOX], &Props::new().opacity(0.0), TweenOptions::new(0.0));
        let finished = step(&mut engine, 0.0);
        assert_eq!(finished, vec![handle]);
        assert_abs_diff_eq!(engine.value(BOX, Property::Opacity), 0.0);
    }

    #[test]
    fn long_running_loops_keep_their_phase() {
        let mut engine = Engine::new();
        engine.animate(
            &[BOX],
            &Props::new().x(-100.0),
            TweenOptions::new(4.0).repeat(Repeat::Forever),
        );
        for _ in 0..10_000 {
            step(&mut engine, 1.0);
        }
        // 10_000 s is a whole number of 4 s cycles.
        assert_abs_diff_eq!(engine.value(BOX, Property::X), 0.0, epsilon = 0.5);
    }
}
