// SPDX-License-Identifier: MPL-2.0
//! Three-bar drawer toggle that morphs into a cross.
//!
//! Bar transforms come straight from the drawer transition targets: the
//! outer bars shift vertically and rotate (degrees), the middle bar fades.

use crate::drawer::transitions::{BAR_BOTTOM, BAR_MIDDLE, BAR_TOP, BAR_SHIFT};
use crate::tween::{Property, Scheduler};
use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme, Vector};

/// Animated state of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub y: f32,
    pub rotation: f32,
    pub opacity: f32,
}

impl Bar {
    fn read<S: Scheduler + ?Sized>(scheduler: &S, target: crate::tween::Target) -> Self {
        Self {
            y: scheduler.value(target, Property::Y),
            rotation: scheduler.value(target, Property::Rotation),
            opacity: scheduler.value(target, Property::Opacity),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToggleIcon {
    bars: [Bar; 3],
    color: Color,
}

impl ToggleIcon {
    pub fn from_scheduler<S: Scheduler + ?Sized>(scheduler: &S, color: Color) -> Self {
        Self {
            bars: [
                Bar::read(scheduler, BAR_TOP),
                Bar::read(scheduler, BAR_MIDDLE),
                Bar::read(scheduler, BAR_BOTTOM),
            ],
            color,
        }
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fixed(sizing::TOGGLE_BAR))
            .height(Length::Fixed(sizing::TOGGLE_BAR))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ToggleIcon {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let half = sizing::TOGGLE_BAR / 2.0;

        for (slot, bar) in self.bars.iter().enumerate() {
            if bar.opacity <= 0.0 {
                continue;
            }
            // Rest positions: one shift above center, center, one below.
            let rest = (slot as f32 - 1.0) * BAR_SHIFT;
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y + rest + bar.y));
                frame.rotate(bar.rotation.to_radians());
                frame.stroke(
                    &Path::line(Point::new(-half, 0.0), Point::new(half, 0.0)),
                    Stroke::default()
                        .with_width(2.5)
                        .with_color(Color {
                            a: self.color.a * bar.opacity.clamp(0.0, 1.0),
                            ..self.color
                        })
                        .with_line_cap(canvas::LineCap::Round),
                );
            });
        }

        vec![frame.into_geometry()]
    }
}
