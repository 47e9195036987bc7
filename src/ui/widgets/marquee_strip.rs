// SPDX-License-Identifier: MPL-2.0
//! Canvas rendering of the marquee strip.
//!
//! Tiles are laid out left to right from the current loop offset, in the
//! order the marquee yields them (front copy, then back copy). Only tiles
//! intersecting the visible bounds are drawn.

use crate::marquee::{Marquee, SlotStatus};
use crate::media::ImageStore;
use crate::tween::Scheduler;
use crate::ui::design_tokens::{radius, spacing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::widget::image;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme};

#[derive(Debug, Clone)]
enum TileFill {
    Image(image::Handle),
    /// Not decoded yet.
    Blank,
    /// Failed to load: a neutral tile with the alt text.
    Placeholder(String),
}

#[derive(Debug, Clone)]
struct Tile {
    x: f32,
    width: f32,
    fill: TileFill,
}

/// Snapshot of the strip for one frame.
#[derive(Debug, Clone)]
pub struct MarqueeStrip {
    tiles: Vec<Tile>,
    height: f32,
    placeholder: Color,
    text: Color,
}

impl MarqueeStrip {
    pub fn new<S: Scheduler + ?Sized>(
        marquee: &Marquee,
        scheduler: &S,
        images: &ImageStore,
        placeholder: Color,
        text: Color,
    ) -> Self {
        let gap = marquee.settings().gap;
        let mut x = marquee.offset(scheduler);
        let mut tiles = Vec::new();

        for entry in marquee.render_sequence() {
            if entry.width <= 0.0 {
                continue;
            }
            let fill = match entry.status {
                SlotStatus::Failed(_) => TileFill::Placeholder(entry.item.alt.clone()),
                _ => images
                    .get(&entry.item.image)
                    .map_or(TileFill::Blank, |data| TileFill::Image(data.handle.clone())),
            };
            tiles.push(Tile {
                x,
                width: entry.width,
                fill,
            });
            x += entry.width + gap;
        }

        Self {
            tiles,
            height: marquee.settings().strip_height,
            placeholder,
            text,
        }
    }

    /// Number of tiles laid out, visible or not.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let height = self.height;
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for MarqueeStrip {
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
        let height = self.height.min(bounds.height);

        for tile in &self.tiles {
            if tile.x + tile.width < 0.0 || tile.x > bounds.width {
                continue;
            }
            let rect = Rectangle::new(Point::new(tile.x, 0.0), Size::new(tile.width, height));
            match &tile.fill {
                TileFill::Image(handle) => {
                    frame.draw_image(rect, canvas::Image::new(handle.clone()));
                }
                TileFill::Blank => {
                    frame.fill(
                        &Path::rounded_rectangle(rect.position(), rect.size(), radius::LG.into()),
                        Color {
                            a: 0.4,
                            ..self.placeholder
                        },
                    );
                }
                TileFill::Placeholder(alt) => {
                    frame.fill(
                        &Path::rounded_rectangle(rect.position(), rect.size(), radius::LG.into()),
                        self.placeholder,
                    );
                    frame.fill_text(canvas::Text {
                        content: alt.clone(),
                        position: Point::new(tile.x + spacing::MD, height / 2.0),
                        color: self.text,
                        size: typography::BODY.into(),
                        ..canvas::Text::default()
                    });
                }
            }
        }

        vec![frame.into_geometry()]
    }
}
