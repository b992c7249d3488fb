//! Start-up preferences read from the OS config directory.
//!
//! The file is only ever read. Changes made in the app (dark mode, zoom) last
//! for the session.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::SettingsError;
use crate::timeline::{Granularity, MIN_UNIT_WIDTH};

const SETTINGS_FILE: &str = "settings.json";

/// User preferences. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub granularity: Granularity,
    pub day_unit_width: f32,
    pub week_unit_width: f32,
    pub current_user: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            granularity: Granularity::Week,
            day_unit_width: Granularity::Day.default_unit_width(),
            week_unit_width: Granularity::Week.default_unit_width(),
            current_user: "User".into(),
        }
    }
}

impl AppSettings {
    /// Column width for a zoom level. Widths narrower than `MIN_UNIT_WIDTH`
    /// fall back to the default.
    pub fn unit_width(&self, granularity: Granularity) -> f32 {
        let width = match granularity {
            Granularity::Day => self.day_unit_width,
            Granularity::Week => self.week_unit_width,
        };
        if width.is_finite() && width >= MIN_UNIT_WIDTH {
            width
        } else {
            granularity.default_unit_width()
        }
    }

    /// Load from the config directory, falling back to defaults when the file
    /// is absent or unusable.
    pub fn load() -> Self {
        let path = Self::settings_path();
        if !path.exists() {
            debug!(?path, "no settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{e}; using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn settings_path() -> PathBuf {
        match directories::ProjectDirs::from("", "", "RustBoardApp") {
            Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
            None => PathBuf::from(".").join(SETTINGS_FILE),
        }
    }
}
