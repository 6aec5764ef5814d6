// SPDX-License-Identifier: MPL-2.0
//! Process-level setup: directory resolution, settings and persisted state.
//!
//! [`startup`] is called once by a driver (the CLI or a UI shell) before any
//! session is created. Loading problems never abort startup; they come back
//! as warning keys for the driver to surface.

pub mod paths;
pub mod persisted_state;

use crate::config::{self, Config};
use persisted_state::AppState;

/// Command-line overrides accepted by every driver.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional data directory override (for state and secret files).
    /// Takes precedence over `SNAPDECK_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SNAPDECK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}

/// Everything loaded from disk at startup.
#[derive(Debug, Clone)]
pub struct Startup {
    pub config: Config,
    pub state: AppState,
    /// Warning keys for settings or state files that could not be read.
    pub warnings: Vec<String>,
}

/// Applies `flags` and loads settings and persisted state.
pub fn startup(flags: Flags) -> Startup {
    paths::init_cli_overrides(flags.data_dir, flags.config_dir);

    let (config, config_warning) = config::load();
    let (state, state_warning) = AppState::load();
    let warnings: Vec<String> = config_warning.into_iter().chain(state_warning).collect();
    for key in &warnings {
        log::warn!("Startup: {key}");
    }

    Startup {
        config,
        state,
        warnings,
    }
}
