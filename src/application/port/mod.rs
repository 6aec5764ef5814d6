// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`biometric`]: Biometric prompt
//! - [`capability`]: Device capability status (permissions)
//! - [`media`]: Media probing and composition export
//! - [`secret`]: Credential storage
//!
//! # Design Notes
//!
//! - All traits use domain types only (no `FFmpeg` or HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared across tasks
//! - No `async fn` - async services run blocking ports via `spawn_blocking`

pub mod biometric;
pub mod capability;
pub mod media;
pub mod secret;

// Re-export main types for convenience
pub use biometric::BiometricAuthenticator;
pub use capability::{CapabilityProvider, FixedCapability};
pub use media::{MediaExporter, MediaProbe};
pub use secret::SecretStore;
