//! Startup settings.
//!
//! An optional TOML file (`~/.config/stadium-view/settings.toml`) supplies
//! defaults for the window and renderer; command-line flags override it. The
//! result is resolved once into a [`ResolvedConfig`] and never changes while
//! the program runs. The file is only ever read.
//!
//! ```toml
//! [window]
//! windowed = true
//!
//! [render]
//! rounded_rects = false
//! antialiasing = "msaa8"
//!
//! [panel]
//! show_on_start = true
//! ```

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use vello::AaConfig;

use crate::stadium::RenderCaps;

const APP_NAME: &str = "stadium-view";
const FILE_NAME: &str = "settings.toml";

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub render: RenderSettings,
    pub panel: PanelSettings,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub windowed: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub rounded_rects: bool,
    pub antialiasing: Antialiasing,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            rounded_rects: true,
            antialiasing: Antialiasing::Msaa16,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub show_on_start: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Antialiasing {
    Area,
    Msaa8,
    #[default]
    Msaa16,
}

impl Antialiasing {
    pub fn aa_config(self) -> AaConfig {
        match self {
            Antialiasing::Area => AaConfig::Area,
            Antialiasing::Msaa8 => AaConfig::Msaa8,
            Antialiasing::Msaa16 => AaConfig::Msaa16,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse {}: {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),
}

impl Settings {
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read settings from `path`. A missing file is not an error and yields `None`.
    pub fn load(path: &Path) -> Result<Option<Self>, SettingsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SettingsError::Read(path.to_path_buf(), e)),
        };
        Self::from_toml(&content)
            .map(Some)
            .map_err(|e| SettingsError::Parse(path.to_path_buf(), e))
    }

    /// Load from `path`, falling back to defaults. Problems are logged, never fatal.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(Some(settings)) => {
                debug!(target: "settings", path = %path.display(), "loaded settings");
                settings
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(target: "settings", "{e}; using defaults");
                Self::default()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Paths
// ---------------------------------------------------------------------------

/// Default settings file location, or `None` when no home directory is known.
pub fn default_path() -> Option<PathBuf> {
    let xdg = std::env::var("XDG_CONFIG_HOME").ok();
    let home = std::env::var("HOME").ok();
    settings_path_from(xdg.as_deref(), home.as_deref())
}

fn settings_path_from(xdg_config: Option<&str>, home: Option<&str>) -> Option<PathBuf> {
    let dir = match (xdg_config, home) {
        (Some(xdg), _) if !xdg.is_empty() => PathBuf::from(xdg),
        (_, Some(home)) => PathBuf::from(home).join(".config"),
        _ => return None,
    };
    Some(dir.join(APP_NAME).join(FILE_NAME))
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Command-line flags that force a setting on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub windowed: bool,
    pub plain_seats: bool,
    pub show_source: bool,
}

/// Everything the app needs from settings, fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedConfig {
    pub windowed: bool,
    pub caps: RenderCaps,
    pub antialiasing: Antialiasing,
    pub show_source: bool,
}

impl ResolvedConfig {
    pub fn resolve(settings: &Settings, overrides: Overrides) -> Self {
        Self {
            windowed: settings.window.windowed || overrides.windowed,
            caps: RenderCaps {
                rounded_rects: settings.render.rounded_rects && !overrides.plain_seats,
            },
            antialiasing: settings.render.antialiasing,
            show_source: settings.panel.show_on_start || overrides.show_source,
        }
    }
}
