// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::app::config::ANIMATION_TICK;
use iced::{event, time, window, Subscription};

/// Forwards window resizes so the layout can switch breakpoints.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Creates the frame tick used by reveal animations, smooth scrolling,
/// toast auto-dismiss and the contact result timeout.
///
/// The tick only runs while one of them needs it.
pub fn create_tick_subscription(
    is_animating: bool,
    has_notifications: bool,
    form_needs_tick: bool,
) -> Subscription<Message> {
    if is_animating || has_notifications || form_needs_tick {
        time::every(ANIMATION_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
