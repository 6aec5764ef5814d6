// SPDX-License-Identifier: MPL-2.0
//! Secret storage port.
//!
//! Keys are plain strings (e.g. `auth_token`), values are opaque bytes.

use crate::error::Result;

/// Port for a small key/value store of credentials.
pub trait SecretStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the value under `key`, or `None` if absent or unreadable.
    fn load(&self, key: &str) -> Option<Vec<u8>>;

    /// Removes `key`. Deleting a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the removal.
    fn delete(&self, key: &str) -> Result<()>;

    /// Convenience: loads `key` as UTF-8 text.
    fn load_string(&self, key: &str) -> Option<String> {
        self.load(key).and_then(|bytes| String::from_utf8(bytes).ok())
    }
}
