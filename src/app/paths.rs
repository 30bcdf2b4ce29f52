// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`FOLIO_CONFIG_DIR`, `FOLIO_ASSETS_DIR`)
//! 4. **Platform default** - via `dirs` crate, or the bundled `assets/` folder
//!
//! # Usage
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "Folio";

/// Folder holding images and documents, relative to the executable or
/// the working directory.
const ASSETS_DIR_NAME: &str = "assets";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "FOLIO_CONFIG_DIR";

/// Environment variable to override the assets directory.
pub const ENV_ASSETS_DIR: &str = "FOLIO_ASSETS_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the `--config-dir` override.
///
/// Later calls are ignored: the first value wins for the whole process.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path.
///
/// This directory is used for storing user preferences (settings.toml).
///
/// # Resolution Order
///
/// 1. CLI argument `--config-dir` (if set via [`init_cli_overrides`])
/// 2. `FOLIO_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory:
///    - Linux: `~/.config/Folio/`
///    - macOS: `~/Library/Application Support/Folio/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\Folio\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// `override_path` takes priority over every other source.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_path(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the directory images and documents are read from.
///
/// Uses `FOLIO_ASSETS_DIR` when set, then an `assets/` folder next to the
/// executable, then `assets/` in the working directory.
pub fn get_assets_dir() -> PathBuf {
    if let Some(path) = env_path(ENV_ASSETS_DIR) {
        return path;
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR_NAME)));
    match beside_exe {
        Some(dir) if dir.is_dir() => dir,
        _ => PathBuf::from(ASSETS_DIR_NAME),
    }
}

/// Resolves a path relative to the assets directory.
///
/// Leading slashes are ignored so `/img/a.jpg` and `img/a.jpg` resolve to
/// the same file.
pub fn asset_path(relative: &str) -> PathBuf {
    resolve_asset(&get_assets_dir(), relative)
}

/// Joins `relative` onto `base`, ignoring leading slashes.
pub fn resolve_asset(base: &Path, relative: &str) -> PathBuf {
    base.join(relative.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn assets_env_var_is_respected() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_ASSETS_DIR, "/srv/folio");

        assert_eq!(
            asset_path("img/img1.jpg"),
            PathBuf::from("/srv/folio/img/img1.jpg")
        );

        std::env::remove_var(ENV_ASSETS_DIR);
    }

    #[test]
    fn resolve_asset_ignores_leading_slash() {
        let base = Path::new("/base");
        assert_eq!(
            resolve_asset(base, "/docs/cv.docx"),
            resolve_asset(base, "docs/cv.docx")
        );
    }
}
