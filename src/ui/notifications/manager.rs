// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal of notifications.
//! It limits the number of visible toasts and manages auto-dismiss timers.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Waiting for a free slot.
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise it waits in the queue. Every toast is also
    /// written to the log.
    pub fn push(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Warning => tracing::warn!(message = notification.message(), "toast"),
            Severity::Error => tracing::error!(message = notification.message(), "toast"),
        }

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(Instant::now());
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Drops every visible notification that expired at `now`.
    ///
    /// Promoted notifications start their timer when they become visible.
    pub fn tick(&mut self, now: Instant) {
        let before = self.visible.len();
        self.visible.retain(|n| !n.is_expired(now));
        if self.visible.len() < before {
            self.promote_from_queue(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self
                    .visible
                    .push_front(notification.created_at_instant(now)),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let mut manager = Manager::new();

        for i in 0..MAX_VISIBLE {
            manager.push(Notification::warning(format!("warning {i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::warning("queued"));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn newest_notification_is_first() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("first"));
        manager.push(Notification::warning("second"));

        let messages: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(messages, vec!["second", "first"]);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        let first = Notification::error("visible 0");
        let first_id = first.id();
        manager.push(first);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::error(format!("visible {i}")));
        }
        manager.push(Notification::error("queued"));

        assert!(manager.dismiss(first_id));

        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
    }

    #[test]
    fn promoted_notification_shows_first() {
        let mut manager = Manager::new();
        let oldest = Notification::error("visible 0");
        let oldest_id = oldest.id();
        manager.push(oldest);
        for i in 1..MAX_VISIBLE {
            manager.push(Notification::error(format!("visible {i}")));
        }
        manager.push(Notification::error("queued"));

        manager.dismiss(oldest_id);

        let first = manager.visible().next().map(Notification::message);
        assert_eq!(first, Some("queued"));
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::warning("never pushed").id();
        assert!(!manager.dismiss(stray));
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let notification = Notification::warning("done");
        let id = notification.id();
        manager.push(notification);

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }

    #[test]
    fn tick_dismisses_expired_and_keeps_errors() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::warning("saved").created_at_instant(start));
        manager.push(Notification::error("failed").created_at_instant(start));

        manager.tick(start + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 2);

        manager.tick(start + Duration::from_secs(60));
        let remaining: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(remaining, vec!["failed"]);
    }

    #[test]
    fn promoted_notification_restarts_its_timer() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::warning(format!("warning {i}")).created_at_instant(start));
        }
        manager.push(Notification::warning("late").created_at_instant(start));

        let later = start + Severity::Warning.auto_dismiss_duration().expect("warning duration");
        manager.tick(later);

        let remaining: Vec<&str> = manager.visible().map(Notification::message).collect();
        assert_eq!(remaining, vec!["late"]);
        manager.tick(later + Duration::from_secs(1));
        assert_eq!(manager.visible_count(), 1);
    }
}
