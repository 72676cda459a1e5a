//! Settings and on-disk paths for CareSeek.
//!
//! The settings file lives at `~/.config/careseek/settings.toml` and is
//! optional; every key has a default. The backend base URL can also be
//! supplied via the `CARESEEK_BACKEND_URL` environment variable or the
//! `--backend-url` CLI flag, which take precedence over the file.

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default suggestion backend when no configuration is present.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

/// Default debounce quiet period for suggestion filtering, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

/// Runtime settings resolved from file, environment, and CLI flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the provider backend serving the suggestion endpoints.
    pub backend_url: String,
    /// Debounce quiet period applied to both typeahead fields.
    pub debounce_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

/// On-disk settings shape; every field optional so partial files parse.
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    /// Optional backend base URL override.
    backend_url: Option<String>,
    /// Optional debounce override in milliseconds.
    debounce_ms: Option<u64>,
}

/// What: Resolve `$HOME/.config/careseek`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("careseek");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// XDG config directory for CareSeek (ensured to exist).
#[must_use]
pub fn config_dir() -> PathBuf {
    // Prefer HOME ~/.config/careseek first
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    // Fallback: use XDG_CONFIG_HOME (or default to ~/.config) and ensure
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(
            || {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".config")
            },
            PathBuf::from,
        );
    let dir = base.join("careseek");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/careseek/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path to the optional settings file.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.toml")
}

/// What: Parse settings from TOML text, falling back to defaults per key.
///
/// Inputs:
/// - `text`: Raw TOML content.
///
/// Output:
/// - `Settings` with file values where present, defaults elsewhere.
///
/// Details:
/// - Unparseable content is logged and treated as an empty file; the
///   widget must stay usable with defaults, never fail startup.
#[must_use]
pub fn settings_from_str(text: &str) -> Settings {
    let file: SettingsFile = toml::from_str(text).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid settings file; using defaults");
        SettingsFile::default()
    });
    let defaults = Settings::default();
    Settings {
        backend_url: file.backend_url.unwrap_or(defaults.backend_url),
        debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
    }
}

/// What: Load settings from disk and apply the environment override.
///
/// Inputs: none
///
/// Output:
/// - Resolved `Settings`; missing file yields defaults.
#[must_use]
pub fn load_settings() -> Settings {
    let mut settings = std::fs::read_to_string(settings_path())
        .map(|text| settings_from_str(&text))
        .unwrap_or_default();
    if let Ok(url) = env::var("CARESEEK_BACKEND_URL")
        && !url.trim().is_empty()
    {
        settings.backend_url = url.trim().to_string();
    }
    settings
}
