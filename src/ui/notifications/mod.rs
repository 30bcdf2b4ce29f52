// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Notifications tell the user about things that went wrong in the
//! background (a theme preference that was not saved, a link the OS
//! refused to open) without blocking the page.
//!
//! # Components
//!
//! - [`Notification`] - message with a severity level
//! - [`Manager`] - queue with auto-dismiss timing
//! - [`Toast`] - widget rendering the visible notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification, Toast};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::warning("Theme preference was not saved"));
//!
//! let overlay = Toast::view_overlay(&manager).map(Message::Notification);
//! ```
//!
//! # Behavior
//!
//! - Warnings close after 6s, errors stay until dismissed
//! - At most 3 toasts are visible, the rest wait in a queue
//! - Toasts stack in the bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
