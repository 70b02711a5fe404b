//! Persisted display preferences and session lists.
//!
//! Settings are plain data: the engine never reads them implicitly. The
//! host passes the format character and digit count to the formatter and
//! feeds history/variable lines back in as it sees fit. Stored at
//! `~/.config/dimr/settings.json` (or platform equivalent); any load
//! failure falls back to defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Interpretation of angles fed to the trigonometric functions by the
/// evaluation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleMode {
    Radians,
    Degrees,
}

/// User preferences plus the persisted history and variable lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Default format character for display.
    pub format: char,
    /// Default display precision; negative means "auto".
    pub decimal_digits: i32,
    pub angle_mode: AngleMode,
    pub save_history: bool,
    pub save_variables: bool,
    /// Ordered input lines from previous sessions.
    pub history: Vec<String>,
    /// Ordered `name=expression` bindings from previous sessions.
    pub variables: Vec<String>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            format: 'f',
            decimal_digits: -1,
            angle_mode: AngleMode::Radians,
            save_history: true,
            save_variables: true,
            history: Vec::new(),
            variables: Vec::new(),
        }
    }
}

impl Settings {
    fn settings_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dimr").map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load from disk, with defaults on any failure.
    pub fn load() -> Settings {
        Self::settings_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to disk; a failure leaves the previous file untouched.
    pub fn save(&self) {
        let Some(path) = Self::settings_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(content) = serde_json::to_string_pretty(self) {
            let _ = fs::write(&path, content);
        }
    }
}
