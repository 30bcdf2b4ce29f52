// SPDX-License-Identifier: MPL-2.0
//! Theme preference persistence backed by `settings.toml`.

use crate::app::config;
use crate::error::{Error, Result};
use crate::ui::theming::{ThemeMode, ThemeStorage};
use std::path::PathBuf;

/// Reads and writes the `[general] theme` key of the settings file.
///
/// Other sections of the file are preserved on save. A file that cannot be
/// parsed is never overwritten.
#[derive(Debug, Clone, Default)]
pub struct ConfigThemeStorage {
    base_dir: Option<PathBuf>,
}

impl ConfigThemeStorage {
    /// Storage using the default config directory resolution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage rooted at `base_dir` instead of the resolved config directory.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }
}

impl ThemeStorage for ConfigThemeStorage {
    fn load(&self) -> Option<ThemeMode> {
        let (config, _warning) = config::load_with_override(self.base_dir.clone());
        config.general.theme
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        let (mut config, warning) = config::load_with_override(self.base_dir.clone());
        if let Some(warning) = warning {
            return Err(Error::Config(warning));
        }
        config.general.theme = Some(mode);
        config::save_with_override(&config, self.base_dir.clone())
    }
}
