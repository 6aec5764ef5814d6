// SPDX-License-Identifier: MPL-2.0
//! Secret store adapters.
//!
//! [`FileSecretStore`] keeps one file per key in a private directory. File
//! names are the BLAKE3 hash of the key, so keys never reach the filesystem
//! and cannot escape the directory. [`MemorySecretStore`] is the in-process
//! variant used by tests and ephemeral sessions.

use crate::app::paths;
use crate::application::port::SecretStore;
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Subdirectory of the app data directory holding the secret files.
const SECRETS_DIR: &str = "secrets";

#[cfg(unix)]
const FILE_MODE: u32 = 0o600;
#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

// ==========================================================================
// File-backed store
// ==========================================================================

#[derive(Debug, Clone)]
pub struct FileSecretStore {
    base_path: PathBuf,
}

impl FileSecretStore {
    /// Store rooted at `<app data dir>/secrets`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Secret`] if no data directory can be resolved, or if
    /// the directory cannot be created.
    pub fn open_default() -> Result<Self> {
        let data_dir = paths::get_app_data_dir()
            .ok_or_else(|| Error::Secret("No data directory available".to_string()))?;
        Self::open(data_dir.join(SECRETS_DIR))
    }

    /// Store rooted at `base_path`, created with owner-only permissions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Secret`] if the directory cannot be prepared.
    pub fn open(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)
            .map_err(|e| Error::Secret(format!("Failed to create secret directory: {e}")))?;
        #[cfg(unix)]
        set_mode(&base_path, DIR_MODE)?;

        log::debug!("Secret store at {}", base_path.display());
        Ok(Self { base_path })
    }

    #[must_use]
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let hash = blake3::hash(key.as_bytes());
        self.base_path.join(format!("{}.secret", hash.to_hex()))
    }
}

impl SecretStore for FileSecretStore {
    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.key_to_path(key);
        // Replace semantics: the old entry goes first
        self.delete(key)?;

        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, value)
            .map_err(|e| Error::Secret(format!("Failed to write secret: {e}")))?;
        #[cfg(unix)]
        set_mode(&temp_path, FILE_MODE)?;
        fs::rename(&temp_path, &path)
            .map_err(|e| Error::Secret(format!("Failed to store secret: {e}")))?;
        Ok(())
    }

    fn load(&self, key: &str) -> Option<Vec<u8>> {
        match fs::read(self.key_to_path(key)) {
            Ok(bytes) => Some(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                log::warn!("Failed to read secret '{key}': {e}");
                None
            }
        }
    }

    fn delete(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_to_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::Secret(format!("Failed to delete secret: {e}"))),
        }
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
        .map_err(|e| Error::Secret(format!("Failed to set permissions: {e}")))
}

// ==========================================================================
// In-memory store
// ==========================================================================

#[derive(Debug, Default)]
pub struct MemorySecretStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemorySecretStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>> {
        self.entries
            .lock()
            .map_err(|_| Error::Secret("Secret store lock poisoned".to_string()))
    }
}

impl SecretStore for MemorySecretStore {
    fn save(&self, key: &str, value: &[u8]) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn load(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().ok()?.get(key).cloned()
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
