// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::drawer::DrawerKey;
use crate::error::Error;
use crate::marquee::ImageRequest;
use crate::media::ImageData;
use crate::ui::{gallery, menu, navbar};
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level view messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A display frame is about to be drawn.
    Frame(Instant),
    Navbar(navbar::Message),
    Gallery(gallery::Message),
    Menu(menu::Message),
    /// The page scrollable moved or was resized.
    Scrolled { offset_y: f32, viewport_height: f32 },
    /// A key the drawer handles, while it listens.
    DrawerKey(DrawerKey),
    /// Cursor position in window coordinates.
    PointerMoved(Point),
    /// Left button pressed anywhere, while the drawer listens.
    PointerPressed,
    WindowResized(Size),
    /// Result of decoding an image for the gallery strip.
    MarqueeImageLoaded {
        request: ImageRequest,
        result: Result<ImageData, Error>,
    },
    /// Result of decoding a product picture.
    MenuImageLoaded {
        name: String,
        result: Result<ImageData, Error>,
    },
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PIZZA_MANIA_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional assets directory override (images).
    /// Takes precedence over `PIZZA_MANIA_ASSETS_DIR` environment variable.
    pub assets_dir: Option<String>,
}
