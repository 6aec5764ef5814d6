// SPDX-License-Identifier: MPL-2.0
//! Application state persistence using CBOR format.
//!
//! Holds state that should survive restarts but is not user-configurable
//! (unlike preferences in `settings.toml`): the last capability snapshot and
//! the last selected home tab.
//!
//! # Path Resolution
//!
//! 1. Use `load_from()`/`save_to()` with explicit path override
//! 2. Set `SNAPDECK_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::capabilities::CapabilityReport;
use crate::feed::HomeTab;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppState {
    /// Capability statuses as of the last refresh.
    ///
    /// Only a snapshot: the platform may change a status at any time, so
    /// consumers refresh before relying on it.
    #[serde(default)]
    pub capabilities: Option<CapabilityReport>,

    #[serde(default)]
    pub last_tab: HomeTab,
}

impl AppState {
    /// Loads application state from the default location.
    ///
    /// Returns a tuple of (state, optional_warning). If loading fails, returns
    /// default state with a warning key explaining what went wrong.
    #[must_use]
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads application state from a custom directory.
    #[must_use]
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(&path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(err) => {
                    log::warn!("Discarding unreadable state {}: {err}", path.display());
                    (
                        Self::default(),
                        Some("state-parse-error".to_string()),
                    )
                }
            },
            Err(_) => (
                Self::default(),
                Some("state-read-error".to_string()),
            ),
        }
    }

    /// Saves application state to the default location.
    ///
    /// Returns an optional warning key if the save failed.
    #[must_use]
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves application state into a custom directory, creating it if needed.
    #[must_use]
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::state_file_path_with_override(base_dir) else {
            return Some("state-path-error".to_string());
        };

        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("state-dir-error".to_string());
            }
        }

        match fs::File::create(&path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("state-write-error".to_string());
                }
                None
            }
            Err(_) => Some("state-create-error".to_string()),
        }
    }

    fn state_file_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        })
    }
}
