//! Error types for date parsing and settings loading.

use std::path::PathBuf;

/// Failure to resolve a "Mon DD" display string into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("date string is empty")]
    Empty,

    #[error("unrecognised date '{input}': expected e.g. \"Oct 30\"")]
    Malformed { input: String },
}

/// Failure to read the settings file.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
