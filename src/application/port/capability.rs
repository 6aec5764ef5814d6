// SPDX-License-Identifier: MPL-2.0
//! Device capability port.
//!
//! Each native permission API (contacts, camera, location...) is wrapped by
//! one [`CapabilityProvider`]. Providers are queried from blocking threads.

use crate::domain::capability::{Capability, CapabilityStatus};

/// Port for querying and requesting one device capability.
pub trait CapabilityProvider: Send + Sync {
    /// The capability this provider answers for.
    fn capability(&self) -> Capability;

    /// Current authorization status. Must not prompt the user.
    fn query(&self) -> CapabilityStatus;

    /// Prompts for access and returns the resulting status.
    ///
    /// Platforms without a prompt fall back to [`query`](Self::query).
    fn request(&self) -> CapabilityStatus {
        self.query()
    }
}

/// A provider that always answers with the same status.
///
/// Used where the platform has no native API for a capability, and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCapability {
    pub capability: Capability,
    pub status: CapabilityStatus,
}

impl FixedCapability {
    #[must_use]
    pub fn new(capability: Capability, status: CapabilityStatus) -> Self {
        Self { capability, status }
    }
}

impl CapabilityProvider for FixedCapability {
    fn capability(&self) -> Capability {
        self.capability
    }

    fn query(&self) -> CapabilityStatus {
        self.status
    }
}
