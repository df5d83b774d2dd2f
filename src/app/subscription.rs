// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Tick interval for toast expiry and spinner animation.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Routes window resizes and the Escape key.
///
/// Escape is forwarded even when a widget captured it, so it closes the
/// preview while the search field has focus.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Ticks only while something animates or expires.
pub fn create_tick_subscription(is_spinning: bool, has_notifications: bool) -> Subscription<Message> {
    if is_spinning || has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
