// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.

use crate::ui::design_tokens::palette;
use crate::ui::icons::Glyph;
use iced::Color;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Something went wrong but the page keeps working.
    Warning,
    /// Stays until dismissed.
    Error,
}

impl Severity {
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        match self {
            Severity::Warning | Severity::Error => Glyph::Warning,
        }
    }

    /// Returns `None` for errors (manual dismiss required).
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Warning => Some(Duration::from_secs(6)),
            Severity::Error => None,
        }
    }
}

/// A toast shown to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    created_at: Instant,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Overrides the creation instant.
    #[must_use]
    pub fn created_at_instant(mut self, created_at: Instant) -> Self {
        self.created_at = created_at;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Whether the notification has outlived its display duration at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.severity
            .auto_dismiss_duration()
            .is_some_and(|duration| now.saturating_duration_since(self.created_at) >= duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::warning("not saved");
        let n2 = Notification::warning("not saved");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        assert_ne!(Severity::Warning.color(), Severity::Error.color());
    }

    #[test]
    fn errors_never_expire() {
        let start = Instant::now();
        let notification = Notification::error("Could not open link").created_at_instant(start);
        assert!(!notification.is_expired(start + Duration::from_secs(3600)));
    }

    #[test]
    fn warnings_expire_after_their_duration() {
        let start = Instant::now();
        let notification = Notification::warning("Theme not saved").created_at_instant(start);
        let duration = Severity::Warning.auto_dismiss_duration().expect("warning duration");

        assert!(!notification.is_expired(start + duration - Duration::from_millis(1)));
        assert!(notification.is_expired(start + duration));
    }

    #[test]
    fn constructors_set_severity_and_text() {
        assert_eq!(Notification::error("").severity(), Severity::Error);
        let warning = Notification::warning("careful");
        assert_eq!(warning.severity(), Severity::Warning);
        assert_eq!(warning.message(), "careful");
    }
}
