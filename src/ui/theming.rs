// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming and the theme store.
//!
//! [`ThemeStore`] owns the active [`ThemeMode`]. It is only changed through
//! [`ThemeStore::toggle_theme`], which persists the new value through a
//! [`ThemeStorage`] and broadcasts it to every [`ThemeStore::subscribe`]r.

use crate::error::Result;
use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,
    pub surface_tertiary: Color,
    pub border: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_subtle: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    /// Raised navbar once the page has scrolled.
    pub navbar_raised: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,
            surface_tertiary: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::PRIMARY_700,
            brand_subtle: palette::PRIMARY_100,
            accent: palette::ACCENT_600,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            navbar_raised: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_900,
            surface_secondary: palette::GRAY_950,
            surface_tertiary: palette::GRAY_800,
            border: palette::GRAY_700,

            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_300,
            text_tertiary: palette::GRAY_400,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_500,
            brand_subtle: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_800
            },
            accent: palette::ACCENT_600,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            navbar_raised: Color {
                a: opacity::SURFACE,
                ..palette::GRAY_900
            },
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Picks the scheme matching an iced theme built by [`ThemeMode::iced_theme`].
    #[must_use]
    pub fn for_theme(theme: &iced::Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// OS appearance; dark when detection fails or reports no preference.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Parses `light` or `dark`, ignoring case.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

// =============================================================================
// Theme Store
// =============================================================================

/// Where the theme preference lives between sessions.
pub trait ThemeStorage {
    /// The stored preference, if any.
    fn load(&self) -> Option<ThemeMode>;

    fn save(&mut self, mode: ThemeMode) -> Result<()>;
}

/// In-memory storage. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    slot: Arc<Mutex<Option<ThemeMode>>>,
}

impl MemoryThemeStorage {
    #[must_use]
    pub fn with_value(mode: ThemeMode) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(mode))),
        }
    }

    #[must_use]
    pub fn stored(&self) -> Option<ThemeMode> {
        self.slot.lock().ok().and_then(|slot| *slot)
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Option<ThemeMode> {
        self.stored()
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(mode);
        }
        Ok(())
    }
}

/// Outcome of [`ThemeStore::toggle_theme`].
///
/// The theme is switched even when persisting it failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Toggled {
    pub theme: ThemeMode,
    pub persist_error: Option<crate::error::Error>,
}

/// Holds the active theme for the whole application.
pub struct ThemeStore {
    storage: Box<dyn ThemeStorage>,
    notifier: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    /// Starts from the stored preference, else `fallback`.
    pub fn new(storage: Box<dyn ThemeStorage>, fallback: ThemeMode) -> Self {
        let initial = storage.load().unwrap_or(fallback);
        Self::with_initial(storage, initial)
    }

    /// Starts from the stored preference, else the OS appearance.
    pub fn load(storage: Box<dyn ThemeStorage>) -> Self {
        let initial = storage.load().unwrap_or_else(ThemeMode::from_system);
        Self::with_initial(storage, initial)
    }

    /// Starts from `mode` regardless of the stored preference. Nothing is
    /// written until the next toggle.
    pub fn with_initial(storage: Box<dyn ThemeStorage>, mode: ThemeMode) -> Self {
        let (notifier, _) = watch::channel(mode);
        Self { storage, notifier }
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        *self.notifier.borrow()
    }

    /// Flips the theme, persists it and notifies subscribers.
    pub fn toggle_theme(&mut self) -> Toggled {
        let theme = self.theme().toggled();
        self.notifier.send_replace(theme);

        let persist_error = match self.storage.save(theme) {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(%theme, error = %err, "theme preference not saved");
                Some(err)
            }
        };
        tracing::debug!(%theme, "theme toggled");

        Toggled {
            theme,
            persist_error,
        }
    }

    /// Receiver that observes every theme change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.notifier.subscribe()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("theme", &self.theme())
            .finish_non_exhaustive()
    }
}
