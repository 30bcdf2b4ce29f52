// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are single Unicode glyphs rendered as text, so they follow the
//! surrounding text color and need no embedded assets.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `Sun` not `light_mode_button`).

use iced::widget::{text, Text};

/// Every icon the UI can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Sun,
    Moon,
    Menu,
    Close,
    ArrowUp,
    ArrowDown,
    Download,
    Mail,
    Phone,
    Code,
    Person,
    Book,
    Calendar,
    Pin,
    Award,
    External,
    Send,
    Check,
    Warning,
    Heart,
}

impl Glyph {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Glyph::Sun => '☀',
            Glyph::Moon => '☾',
            Glyph::Menu => '☰',
            Glyph::Close => '✕',
            Glyph::ArrowUp => '↑',
            Glyph::ArrowDown => '↓',
            Glyph::Download => '⤓',
            Glyph::Mail => '✉',
            Glyph::Phone => '☎',
            Glyph::Code => '⌨',
            Glyph::Person => '☺',
            Glyph::Book => '✎',
            Glyph::Calendar => '◷',
            Glyph::Pin => '⌖',
            Glyph::Award => '★',
            Glyph::External => '↗',
            Glyph::Send => '➤',
            Glyph::Check => '✓',
            Glyph::Warning => '⚠',
            Glyph::Heart => '♥',
        }
    }
}

/// Text widget showing `glyph` at the default size.
pub fn icon<'a>(glyph: Glyph) -> Text<'a> {
    text(glyph.as_char().to_string())
}

/// Text widget showing `glyph` at `size` pixels.
pub fn sized<'a>(glyph: Glyph, size: f32) -> Text<'a> {
    icon(glyph).size(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_toggle_glyphs_differ() {
        assert_ne!(Glyph::Sun.as_char(), Glyph::Moon.as_char());
    }

    #[test]
    fn sized_icon_builds() {
        let _ = sized(Glyph::Menu, 24.0);
    }
}
