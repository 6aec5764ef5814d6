// SPDX-License-Identifier: MPL-2.0
//! Explicit session context.
//!
//! A [`Session`] is created once at startup from the loaded settings and the
//! secret store, handed by reference to whatever needs the signed-in user,
//! and torn down on sign-out or shutdown. There is no global session.

use crate::application::port::SecretStore;
use crate::config::{self, Config, AUTH_TOKEN_KEY};
use crate::domain::payload::{Association, User, ViewMode};
use crate::error::Result;
use std::path::PathBuf;

// ==========================================================================
// View navigation
// ==========================================================================

/// Current, previous and next view of the association dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewNavigation {
    pub current: ViewMode,
    pub previous: ViewMode,
    pub next: ViewMode,
}

impl Default for ViewNavigation {
    fn default() -> Self {
        Self {
            current: ViewMode::Dashboard,
            previous: ViewMode::Profile,
            next: ViewMode::Store,
        }
    }
}

impl ViewNavigation {
    /// Shows `mode`, remembering the current view as previous.
    pub fn go_to(&mut self, mode: ViewMode) {
        if mode != self.current {
            self.previous = self.current;
            self.current = mode;
        }
    }

    /// Returns to the previous view; the view left becomes next.
    pub fn go_back(&mut self) {
        let left = self.current;
        self.current = self.previous;
        self.previous = left;
        self.next = left;
    }

    /// Moves to the next view; the view left becomes previous.
    pub fn go_forward(&mut self) {
        let left = self.current;
        self.current = self.next;
        self.previous = left;
    }
}

// ==========================================================================
// Session
// ==========================================================================

#[derive(Debug, Clone)]
pub struct Session {
    config: Config,
    user: User,
    token: Option<String>,
    views: ViewNavigation,
}

impl Session {
    /// Builds the session from loaded settings, restoring the stored token.
    pub fn initialize(config: Config, secrets: &dyn SecretStore) -> Self {
        let token = secrets
            .load_string(AUTH_TOKEN_KEY)
            .filter(|token| !token.is_empty());
        log::debug!(
            "Session initialized ({})",
            if token.is_some() { "signed in" } else { "signed out" }
        );
        Self {
            config,
            user: User::default(),
            token,
            views: ViewNavigation::default(),
        }
    }

    /// Whether a token is present. Gates login screen vs. home screen.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Replaces the in-memory token. Storage is the caller's business.
    pub fn set_token(&mut self, token: String) {
        self.token = (!token.is_empty()).then_some(token);
    }

    #[must_use]
    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn set_user(&mut self, user: User) {
        self.user = user;
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Feature flag lookup; unknown flags are off.
    #[must_use]
    pub fn feature_enabled(&self, key: &str) -> bool {
        self.config.feature_enabled(key)
    }

    #[must_use]
    pub fn views(&self) -> ViewNavigation {
        self.views
    }

    pub fn views_mut(&mut self) -> &mut ViewNavigation {
        &mut self.views
    }

    /// Navigates to the view of `association`, if it has one.
    pub fn open(&mut self, association: &Association) -> Option<ViewMode> {
        let mode = association.route()?;
        self.views.go_to(mode);
        Some(mode)
    }

    /// Forgets the user and deletes the stored token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be removed from the store; the
    /// in-memory session is signed out regardless.
    pub fn sign_out(&mut self, secrets: &dyn SecretStore) -> Result<()> {
        self.token = None;
        self.user = User::default();
        self.views = ViewNavigation::default();
        log::info!("Signed out");
        secrets.delete(AUTH_TOKEN_KEY)
    }

    /// Ends the session, writing the settings back to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be written.
    pub fn teardown(self, config_dir: Option<PathBuf>) -> Result<()> {
        config::save_with_override(&self.config, config_dir)
    }
}
