// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::SectionId;
use crate::error::LinkError;
use crate::links::Link;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections::{self, contact};
use crate::ui::theming::ThemeMode;
use iced::widget::scrollable::Viewport;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Section(sections::Message),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved or was resized.
    Scrolled(Viewport),
    /// A section reported its laid-out size.
    SectionMeasured(SectionId, Size),
    /// The footer reported its laid-out size.
    FooterMeasured(Size),
    WindowResized(Size),
    /// An external link or asset finished opening.
    LinkOpened {
        link: Link,
        result: Result<(), LinkError>,
    },
    Tick(Instant), // Periodic tick for animations, toasts and the form result
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Initial theme for this session only; the stored preference is left
    /// untouched until the user toggles.
    pub theme: Option<ThemeMode>,
}
