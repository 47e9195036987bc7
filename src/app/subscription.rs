// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window events and cursor moves are always routed, so hit tests never see
//! a stale position. Keyboard input and presses are only subscribed while
//! the drawer listens, and display frames only while something animates or
//! counts down.

use super::Message;
use crate::drawer::DrawerKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, window, Event, Subscription};

/// Resize, close requests and cursor moves, for the whole lifetime of the
/// window.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(window_event)
}

/// Escape, arrows, Enter and pointer presses for the open drawer.
pub fn create_drawer_subscription(listening: bool) -> Subscription<Message> {
    if !listening {
        return Subscription::none();
    }
    event::listen_with(drawer_event)
}

fn window_event(event: Event, _status: event::Status, window_id: window::Id) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::PointerMoved(position))
        }
        _ => None,
    }
}

fn drawer_event(event: Event, _status: event::Status, _window_id: window::Id) -> Option<Message> {
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            drawer_key(&key).map(Message::DrawerKey)
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            Some(Message::PointerPressed)
        }
        _ => None,
    }
}

/// Display frames while `animating`.
pub fn create_frame_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        window::frames().map(Message::Frame)
    } else {
        Subscription::none()
    }
}

fn drawer_key(key: &Key) -> Option<DrawerKey> {
    match key {
        Key::Named(Named::Escape) => Some(DrawerKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(DrawerKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(DrawerKey::ArrowRight),
        Key::Named(Named::Enter) => Some(DrawerKey::Enter),
        _ => None,
    }
}
