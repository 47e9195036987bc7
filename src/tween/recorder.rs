// SPDX-License-Identifier: MPL-2.0
//! Scheduler decorator that keeps a log of every call.

use super::{Easing, Handle, Property, Props, Scheduler, Target, TweenOptions};
use std::time::Duration;

/// One call received by a [`Recorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetImmediate {
        target: Target,
        props: Props,
    },
    Animate {
        handle: Handle,
        targets: Vec<Target>,
        props: Props,
        options: TweenOptions,
    },
    Cancel {
        handle: Handle,
        was_active: bool,
    },
    SetTimeScale {
        handle: Handle,
        scale: f32,
    },
    RampTimeScale {
        handle: Handle,
        to: f32,
        duration: f32,
    },
}

/// Forwards every call to the wrapped scheduler and records it.
#[derive(Debug, Default)]
pub struct Recorder<S> {
    inner: S,
    calls: Vec<Call>,
}

impl<S: Scheduler> Recorder<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Vec::new(),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Every `animate` call, in order.
    pub fn animations(&self) -> impl Iterator<Item = (&[Target], &Props, &TweenOptions)> {
        self.calls.iter().filter_map(|call| match call {
            Call::Animate {
                targets,
                props,
                options,
                ..
            } => Some((targets.as_slice(), props, options)),
            _ => None,
        })
    }

    /// Handles passed to `cancel`, including ones that were not running.
    pub fn cancelled(&self) -> Vec<Handle> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Cancel { handle, .. } => Some(*handle),
                _ => None,
            })
            .collect()
    }
}

impl Recorder<super::Engine> {
    /// Advances the wrapped engine.
    pub fn advance(&mut self, dt: Duration) -> Vec<Handle> {
        self.inner.advance(dt)
    }
}

impl<S: Scheduler> Scheduler for Recorder<S> {
    fn set_immediate(&mut self, target: Target, props: &Props) {
        self.calls.push(Call::SetImmediate {
            target,
            props: props.clone(),
        });
        self.inner.set_immediate(target, props);
    }

    fn animate(&mut self, targets: &[Target], props: &Props, options: TweenOptions) -> Handle {
        let handle = self.inner.animate(targets, props, options);
        tracing::trace!(?handle, count = targets.len(), "animate");
        self.calls.push(Call::Animate {
            handle,
            targets: targets.to_vec(),
            props: props.clone(),
            options,
        });
        handle
    }

    fn cancel(&mut self, handle: Handle) -> bool {
        let was_active = self.inner.cancel(handle);
        self.calls.push(Call::Cancel { handle, was_active });
        was_active
    }

    fn set_time_scale(&mut self, handle: Handle, scale: f32) {
        self.calls.push(Call::SetTimeScale { handle, scale });
        self.inner.set_time_scale(handle, scale);
    }

    fn ramp_time_scale(&mut self, handle: Handle, to: f32, duration: f32, easing: Easing) {
        self.calls.push(Call::RampTimeScale {
            handle,
            to,
            duration,
        });
        self.inner.ramp_time_scale(handle, to, duration, easing);
    }

    fn time_scale(&self, handle: Handle) -> Option<f32> {
        self.inner.time_scale(handle)
    }

    fn is_active(&self, handle: Handle) -> bool {
        self.inner.is_active(handle)
    }

    fn value(&self, target: Target, property: Property) -> f32 {
        self.inner.value(target, property)
    }
}
