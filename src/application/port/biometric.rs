// SPDX-License-Identifier: MPL-2.0
//! Biometric authentication port.

/// Port for the platform's biometric prompt (fingerprint, face...).
pub trait BiometricAuthenticator: Send + Sync {
    /// Whether the device can evaluate a biometric policy right now.
    fn is_available(&self) -> bool;

    /// Shows the prompt with `reason`.
    ///
    /// # Errors
    ///
    /// Returns the platform's failure description when the user is not
    /// authenticated (cancelled, mismatch, lockout...).
    fn authenticate(&self, reason: &str) -> Result<(), String>;
}
